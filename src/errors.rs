use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetwaveError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error("Authentication Failed for {url} (HTTP 401)")]
    AuthenticationFailed { url: String },

    #[error("Request Failed for {url} with HTTP status {status}")]
    RequestFailed { url: String, status: u16 },

    // Covers both timeouts and lost connectivity; the device gives no way to tell them apart.
    #[error("Request to {url} timed out or the camera is unreachable: {details}")]
    Timeout { url: String, details: String },

    #[error("Resource Not Found: {0}")]
    NotFound(String),

    #[error("Invalid Response from {url}: {details}")]
    InvalidResponse { url: String, details: String },

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl NetwaveError {
    /// The request URL involved in the failure, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            NetwaveError::AuthenticationFailed { url }
            | NetwaveError::RequestFailed { url, .. }
            | NetwaveError::Timeout { url, .. }
            | NetwaveError::InvalidResponse { url, .. } => Some(url),
            _ => None,
        }
    }

    /// The HTTP status the camera answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            NetwaveError::AuthenticationFailed { .. } => Some(401),
            NetwaveError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type NetwaveResult<T> = Result<T, NetwaveError>;
