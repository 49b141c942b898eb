use crate::response::GraphErrorBody;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for publishing operations
#[derive(Debug, Error)]
pub enum PostError {
    /// Error object returned by the Graph API
    #[error("Graph API error: {message}")]
    Api {
        message: String,
        code: Option<i64>,
        subcode: Option<i64>,
        error_type: Option<String>,
        fbtrace_id: Option<String>,
        status: u16,
    },

    /// Non-success HTTP status without a Graph error body
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// Upload data could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Success status but the body was not a JSON object
    #[error("unexpected response body: {0}")]
    UnexpectedResponse(String),

    /// Missing or invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error (connect, DNS, timeout)
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl PostError {
    /// Build an API error from a decoded Graph error body
    pub fn from_graph_error(status: u16, body: GraphErrorBody) -> Self {
        let detail = body.error;
        PostError::Api {
            message: detail
                .message
                .unwrap_or_else(|| "unknown error".to_string()),
            code: detail.code,
            subcode: detail.error_subcode,
            error_type: detail.error_type,
            fbtrace_id: detail.fbtrace_id,
            status,
        }
    }

    /// Wrap an I/O failure with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PostError::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the HTTP status code, if a response was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PostError::Api { status, .. } | PostError::Http { status, .. } => Some(*status),
            PostError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the access token was rejected
    pub fn is_auth_error(&self) -> bool {
        match self {
            PostError::Api { code: Some(190), .. } => true,
            _ => self.status_code() == Some(401),
        }
    }

    /// Check if the API reported throttling
    pub fn is_rate_limited(&self) -> bool {
        match self {
            PostError::Api {
                code: Some(4 | 17 | 32 | 613),
                ..
            } => true,
            _ => self.status_code() == Some(429),
        }
    }
}

/// Result type for publishing operations
pub type Result<T> = std::result::Result<T, PostError>;
