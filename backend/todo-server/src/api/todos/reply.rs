//! Translation of service envelopes into HTTP responses.

use crate::{ApiError, ApiResult};

use todo_core::validation::INVALID_REQUEST_MESSAGE;
use todo_core::{ServiceResponse, ServiceStatus};

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;

/// Map an envelope onto its status code, building the success body with `to_body`.
///
/// Client errors come back as `Err` so they render through [`ApiError`].
/// A no-content outcome never carries a body.
#[track_caller]
pub fn into_http<T, B, F>(response: ServiceResponse<T>, to_body: F) -> ApiResult<Response>
where
    B: Serialize,
    F: FnOnce(T, Option<String>) -> B,
{
    let field = response.field().map(str::to_string);
    let (status, message, payload) = response.into_parts();

    match status {
        ServiceStatus::BadRequest => Err(ApiError::Validation {
            message: message.unwrap_or_else(|| INVALID_REQUEST_MESSAGE.to_string()),
            field,
            location: ErrorLocation::from(Location::caller()),
        }),
        ServiceStatus::NotFound => Err(ApiError::NotFound {
            message: message.unwrap_or_else(|| "Not found.".to_string()),
            location: ErrorLocation::from(Location::caller()),
        }),
        ServiceStatus::NoContent => Ok(StatusCode::NO_CONTENT.into_response()),
        ServiceStatus::Created | ServiceStatus::Ok => {
            let payload = payload
                .ok_or_else(|| ApiError::internal(format!("{} response without payload", status)))?;
            let code = StatusCode::from_u16(status.code())
                .map_err(|e| ApiError::internal(format!("Unmappable status {}: {}", status, e)))?;
            Ok((code, Json(to_body(payload, message))).into_response())
        }
    }
}
