use serde::Deserialize;

/// Error taxonomy for the admin console data layer.
///
/// Every fallible operation in the crate resolves to one of these variants.
/// The split mirrors how the console reacts: authorization failures force a
/// return to the login screen, conflicts get a dedicated dialog, and
/// everything else is surfaced as a transient notification while the view
/// falls back to an empty or zeroed display.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("session expired or missing")]
    SessionExpired,

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid base URL: {0}")]
    BaseUrl(String),

    #[error("unexpected status {status}: {message}")]
    Unexpected { status: u16, message: String },
}

/// Shape probed out of backend error bodies. Most endpoints report failures
/// as `{ "message": "..." }`, sometimes under a `{ success, message }` pair.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiError {
    /// Maps a non-success HTTP status and its (possibly JSON) body to an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .unwrap_or_else(|| body.trim().to_string());
        match status {
            401 => ApiError::SessionExpired,
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            409 => ApiError::Conflict(message),
            400 | 422 => ApiError::Validation(message),
            _ => ApiError::Unexpected { status, message },
        }
    }

    /// True when the caller should drop the session and return to login.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::SessionExpired | ApiError::Forbidden(_))
    }

    /// True for failures worth a generic transient notification rather than
    /// a dedicated dialog.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Unexpected { .. } | ApiError::Decode(_)
        )
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}
