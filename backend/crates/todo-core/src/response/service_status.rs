use std::fmt;

/// Outcome category of a service call.
///
/// The boundary layer maps each category onto exactly one transport status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceStatus {
    Created,
    Ok,
    NoContent,
    BadRequest,
    NotFound,
}

impl ServiceStatus {
    /// HTTP status code equivalent
    pub fn code(&self) -> u16 {
        match self {
            Self::Created => 201,
            Self::Ok => 200,
            Self::NoContent => 204,
            Self::BadRequest => 400,
            Self::NotFound => 404,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Ok => "ok",
            Self::NoContent => "no_content",
            Self::BadRequest => "bad_request",
            Self::NotFound => "not_found",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
