use crate::ServiceStatus;

/// Uniform result of every service operation.
///
/// Built once per request and read-only afterwards. `message` is only set for
/// client errors and creation confirmations; `field` names the offending input
/// of a bad request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse<T> {
    status: ServiceStatus,
    message: Option<String>,
    field: Option<String>,
    payload: Option<T>,
}

impl<T> ServiceResponse<T> {
    pub fn created(payload: T, message: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::Created,
            message: Some(message.into()),
            field: None,
            payload: Some(payload),
        }
    }

    pub fn ok(payload: T) -> Self {
        Self {
            status: ServiceStatus::Ok,
            message: None,
            field: None,
            payload: Some(payload),
        }
    }

    /// Success without a body on the wire; the payload echoes what was removed.
    pub fn no_content(payload: T) -> Self {
        Self {
            status: ServiceStatus::NoContent,
            message: None,
            field: None,
            payload: Some(payload),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::BadRequest,
            message: Some(message.into()),
            field: None,
            payload: None,
        }
    }

    /// Bad request attributed to a single input field.
    pub fn bad_request_on(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Self::bad_request(message)
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::NotFound,
            message: Some(message.into()),
            field: None,
            payload: None,
        }
    }

    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn into_parts(self) -> (ServiceStatus, Option<String>, Option<T>) {
        (self.status, self.message, self.payload)
    }
}
