use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    Conflict,
    DatabaseError,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::DatabaseError => write!(f, "DatabaseError"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error used across server and client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Conflict,
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::DatabaseError,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
        }
    }

    /// Parse an AppError from a ServerFnError message string (client-side).
    ///
    /// `ServerFnError::to_string()` wraps the payload like:
    ///   `error running server function: {"kind":"NotFound",...} (details: None)`
    /// This method extracts the embedded JSON and parses it.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        // Try direct parse first (in case the string is raw JSON)
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        // Extract the JSON object embedded between the first `{` and last `}`
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// Extract a user-friendly error message from a `ServerFnError.to_string()`.
    ///
    /// Parses the embedded `AppError` JSON and returns its `message` field.
    /// Falls back to a generic message if parsing fails.
    pub fn friendly_message(error_string: &str) -> String {
        if let Some(app_error) = Self::from_server_error(error_string) {
            app_error.message
        } else {
            "Something went wrong. Please try again.".to_string()
        }
    }

    #[cfg_attr(not(feature = "server"), allow(dead_code))]
    fn status_code_u16(&self) -> u16 {
        match self.kind {
            AppErrorKind::NotFound => 404,
            AppErrorKind::BadRequest => 400,
            AppErrorKind::Conflict => 409,
            AppErrorKind::DatabaseError => 500,
            AppErrorKind::InternalError => 500,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code_u16())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_server_error_parses_raw_json() {
        let json = r#"{"kind":"Conflict","message":"Already a member"}"#;
        let err = AppError::from_server_error(json).unwrap();
        assert_eq!(err.kind, AppErrorKind::Conflict);
        assert_eq!(err.message, "Already a member");
    }

    #[test]
    fn from_server_error_parses_wrapped_json() {
        let wrapped = r#"error running server function: {"kind":"NotFound","message":"Team not found"} (details: None)"#;
        let err = AppError::from_server_error(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Team not found");
    }

    #[test]
    fn from_server_error_returns_none_for_garbage() {
        assert!(AppError::from_server_error("not json at all").is_none());
        assert!(AppError::from_server_error("").is_none());
    }

    #[test]
    fn friendly_message_extracts_message_field() {
        let json = r#"{"kind":"DatabaseError","message":"Could not load users"}"#;
        assert_eq!(AppError::friendly_message(json), "Could not load users");
    }

    #[test]
    fn friendly_message_fallback_for_unparseable() {
        assert_eq!(
            AppError::friendly_message("garbage input"),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn not_found_error_has_correct_kind() {
        let err = AppError::not_found("missing team");
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "missing team");
    }

    #[test]
    fn status_code_mapping() {
        assert_eq!(AppError::not_found("").status_code_u16(), 404);
        assert_eq!(AppError::bad_request("").status_code_u16(), 400);
        assert_eq!(AppError::conflict("").status_code_u16(), 409);
        assert_eq!(AppError::database("").status_code_u16(), 500);
        assert_eq!(AppError::internal("").status_code_u16(), 500);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::conflict("duplicate membership");
        assert_eq!(format!("{}", err), "Conflict: duplicate membership");
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = AppError::database("pool exhausted");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
