//! Portal client errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("not authorized; set a session cookie with `est config set-session`")]
    Unauthorized,

    #[error("rate limited")]
    RateLimited,

    #[error("request failed with status {0}")]
    Status(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid portal URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("session cookie contains invalid characters")]
    InvalidSession,
}
