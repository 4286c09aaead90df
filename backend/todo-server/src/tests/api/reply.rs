use crate::ApiError;
use crate::api::todos::reply::into_http;

use todo_core::{ServiceResponse, TodoView};

use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

fn view() -> TodoView {
    TodoView {
        id: Uuid::new_v4(),
        title: "Buy milk".into(),
        completed: false,
    }
}

#[tokio::test]
async fn given_created_envelope_when_mapped_then_201_with_body_and_message() {
    let todo = view();
    let reply = ServiceResponse::created(todo.clone(), "created!");

    let response = into_http(reply, |todo, message| {
        serde_json::json!({ "todo": todo, "message": message })
    })
    .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["todo"]["id"], todo.id.to_string());
    assert_eq!(json["message"], "created!");
}

#[tokio::test]
async fn given_no_content_envelope_when_mapped_then_204_with_empty_body() {
    let reply = ServiceResponse::no_content(view());

    let response = into_http(reply, |todo, _| todo).unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[test]
fn given_bad_request_envelope_when_mapped_then_validation_error() {
    let reply: ServiceResponse<TodoView> = ServiceResponse::bad_request("Invalid request.");

    let result = into_http(reply, |todo, _| todo);

    match result {
        Err(ApiError::Validation { message, field, .. }) => {
            assert_eq!(message, "Invalid request.");
            assert_eq!(field, None);
        }
        other => panic!("Expected Validation error, got {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn given_field_bad_request_envelope_when_mapped_then_validation_error_names_field() {
    let reply: ServiceResponse<TodoView> = ServiceResponse::bad_request_on(
        "title",
        "Invalid title: must be between 1 and 200 characters",
    );

    let result = into_http(reply, |todo, _| todo);

    match result {
        Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("title")),
        other => panic!("Expected Validation error, got {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn given_not_found_envelope_when_mapped_then_not_found_error() {
    let reply: ServiceResponse<TodoView> = ServiceResponse::not_found("missing");

    let result = into_http(reply, |todo, _| todo);

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}
