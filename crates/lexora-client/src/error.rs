use std::time::Duration;

use thiserror::Error;

/// Failure of a Lexora API call. Every variant renders as a message fit for display.
#[derive(Debug, Error)]
pub enum ApiError {
    /// DNS failure, refused connection, or similar: the server was never reached.
    #[error("Service temporarily unavailable. Please try again in a moment.")]
    Unavailable,

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    /// A binary export was requested while the server is unreachable.
    #[error("{0} requires backend server. Please start the Lexora backend.")]
    BackendRequired(&'static str),

    #[error("invalid download filename: {0:?}")]
    InvalidFilename(String),

    #[cfg(feature = "http")]
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[cfg(feature = "http")]
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// True for failures caused by the server being out of reach rather than by its answer.
    pub fn is_unreachable(&self) -> bool {
        matches!(
            self,
            Self::Unavailable | Self::Timeout(_) | Self::BackendRequired(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_carries_status_and_body() {
        let err = ApiError::Server {
            status: 500,
            body: "Error generating NDA: model offline".into(),
        };
        assert_eq!(
            err.to_string(),
            "server returned 500: Error generating NDA: model offline"
        );
        assert!(!err.is_unreachable());
    }

    #[test]
    fn unavailable_is_distinct_from_application_error() {
        let err = ApiError::Unavailable;
        assert!(err.is_unreachable());
        assert!(err.to_string().contains("temporarily unavailable"));
    }

    #[test]
    fn timeout_names_the_bound() {
        assert_eq!(
            ApiError::Timeout(Duration::from_secs(10)).to_string(),
            "request timed out after 10s"
        );
    }

    #[test]
    fn backend_required_names_the_feature() {
        assert_eq!(
            ApiError::BackendRequired("PDF download").to_string(),
            "PDF download requires backend server. Please start the Lexora backend."
        );
    }
}
