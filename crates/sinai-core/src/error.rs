//! Error types for the Sinai Showcase library.
//!
//! Most user-facing paths in this crate degrade to an empty or informative
//! state instead of failing, so these errors surface mainly at the data
//! fetching seam and at the RPC boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the Sinai Showcase library.
#[derive(Debug, Error)]
pub enum SiteError {
    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        /// Optional cause description
        cause: Option<String>,
    },

    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    #[error("HTTP error for {url}: status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Request validation errors
    #[error("Invalid params: {message}")]
    InvalidParams { message: String },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Sinai Showcase operations.
pub type Result<T> = std::result::Result<T, SiteError>;

impl From<std::io::Error> for SiteError {
    fn from(err: std::io::Error) -> Self {
        SiteError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for SiteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SiteError::Timeout(crate::config::NetworkConfig::REQUEST_TIMEOUT)
        } else if err.is_decode() {
            SiteError::Json {
                message: err.to_string(),
                source: None,
            }
        } else {
            SiteError::Network {
                message: err.to_string(),
                cause: err.url().map(|u| u.to_string()),
            }
        }
    }
}

impl From<url::ParseError> for SiteError {
    fn from(err: url::ParseError) -> Self {
        SiteError::InvalidUrl {
            url: String::new(),
            message: err.to_string(),
        }
    }
}

impl SiteError {
    /// Convert to a JSON-RPC error code.
    ///
    /// Custom error codes (application-defined, -32000 to -32099):
    /// - -32000: Network/connectivity error
    /// - -32001: Malformed document
    /// - -32602: Invalid params
    /// - -32603: Internal error
    pub fn to_rpc_error_code(&self) -> i32 {
        match self {
            SiteError::Network { .. }
            | SiteError::Timeout(_)
            | SiteError::HttpStatus { .. }
            | SiteError::InvalidUrl { .. } => -32000,

            SiteError::Json { .. } => -32001,

            SiteError::InvalidParams { .. } => -32602,

            _ => -32603,
        }
    }

    /// Whether this error came from talking to a remote host.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            SiteError::Network { .. } | SiteError::Timeout(_) | SiteError::HttpStatus { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::HttpStatus {
            url: "/data/projects.json".into(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "HTTP error for /data/projects.json: status 404"
        );
    }

    #[test]
    fn test_rpc_error_codes() {
        assert_eq!(
            SiteError::HttpStatus {
                url: "x".into(),
                status: 500
            }
            .to_rpc_error_code(),
            -32000
        );
        assert_eq!(
            SiteError::InvalidParams {
                message: "missing query".into()
            }
            .to_rpc_error_code(),
            -32602
        );
        assert_eq!(SiteError::Other("boom".into()).to_rpc_error_code(), -32603);
    }

    #[test]
    fn test_json_error_conversion() {
        let err: SiteError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, SiteError::Json { .. }));
        assert!(!err.is_network());
    }
}
