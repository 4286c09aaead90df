//! Request validation.
//!
//! Every mutating operation runs one validation pass before touching the
//! store. Violations are collected instead of returned on the first hit,
//! and surfaced to the caller as one aggregated message.

use crate::{CreateTodoRequest, UpdateTodoRequest};

use std::fmt;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request.";

/// Length bounds applied to titles, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleRules {
    pub max_length: usize,
}

impl Default for TitleRules {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_TITLE_LENGTH,
        }
    }
}

impl TitleRules {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Validate a title, returning it unchanged when it is acceptable.
    ///
    /// Absent, empty and whitespace-only titles are all the same violation
    /// as an out-of-range length.
    pub fn validate<'a>(&self, title: Option<&'a str>) -> Result<&'a str, ValidationErrors> {
        match title {
            Some(t) if !t.trim().is_empty() && self.is_within_bounds(t) => Ok(t),
            _ => Err(ValidationErrors::from(FieldViolation::new(
                "title",
                format!(
                    "Invalid title: must be between {} and {} characters",
                    MIN_TITLE_LENGTH, self.max_length
                ),
            ))),
        }
    }

    fn is_within_bounds(&self, title: &str) -> bool {
        let length = title.chars().count();
        (MIN_TITLE_LENGTH..=self.max_length).contains(&length)
    }
}

/// Validate a create request and return the accepted title.
pub fn validate_create<'a>(
    request: Option<&'a CreateTodoRequest>,
    rules: &TitleRules,
) -> Result<&'a str, ValidationErrors> {
    let request = request.ok_or_else(|| ValidationErrors::from(FieldViolation::invalid_request()))?;
    rules.validate(request.title.as_deref())
}

/// Validate an update request and return the accepted title.
pub fn validate_update<'a>(
    request: Option<&'a UpdateTodoRequest>,
    rules: &TitleRules,
) -> Result<&'a str, ValidationErrors> {
    let request = request.ok_or_else(|| ValidationErrors::from(FieldViolation::invalid_request()))?;
    rules.validate(request.title.as_deref())
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn invalid_request() -> Self {
        Self::new("request", INVALID_REQUEST_MESSAGE)
    }
}

/// All violations found in one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Name of the first offending field, if any
    pub fn first_field(&self) -> Option<&str> {
        self.violations.first().map(|v| v.field.as_str())
    }

    /// All violation messages joined into one line
    pub fn message(&self) -> String {
        self.violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl From<FieldViolation> for ValidationErrors {
    fn from(violation: FieldViolation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
