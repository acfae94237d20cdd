/// All errors that can occur while talking to the chess.com API.
#[derive(thiserror::Error, Debug)]
pub enum ChessApiError {
    /// No HTTP response was obtained (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("HTTP {}: {}", .status.as_u16(), .status.canonical_reason().unwrap_or("Unknown Status"))]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Every attempt was used up without a response or a terminal error.
    #[error("Max retries exceeded")]
    MaxRetriesExceeded { url: String },

    /// Failed to read the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not JSON of the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// A transport or decode failure, prefixed with the operation that hit it.
    #[error("{operation}: {source}")]
    Operation {
        operation: String,
        #[source]
        source: Box<ChessApiError>,
    },
}

impl ChessApiError {
    /// The HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ChessApiError::Status { status, .. } => Some(status.as_u16()),
            ChessApiError::Operation { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Whether the upstream answered 404 (unknown player, unknown title).
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Prefix foreign failures with `operation`. Status and exhausted-retry
    /// errors already describe themselves and are returned unchanged.
    pub(crate) fn within(self, operation: impl Into<String>) -> Self {
        match self {
            err @ (ChessApiError::Transport { .. }
            | ChessApiError::ResponseBody { .. }
            | ChessApiError::Decode { .. }) => {
                ChessApiError::Operation {
                    operation: operation.into(),
                    source: Box::new(err),
                }
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChessApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ChessApiError {
        ChessApiError::Status {
            url: "https://api.chess.com/pub/player/nobody".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        }
    }

    fn decode() -> ChessApiError {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        ChessApiError::Decode {
            url: "https://api.chess.com/pub/titled/GM".to_string(),
            source,
        }
    }

    #[test]
    fn test_status_message() {
        let err = not_found();
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_within_passes_domain_errors_through() {
        let err = not_found().within("Failed to fetch player nobody");
        assert!(matches!(err, ChessApiError::Status { .. }));

        let err = ChessApiError::MaxRetriesExceeded {
            url: String::new(),
        }
        .within("Failed to fetch grandmasters");
        assert_eq!(err.to_string(), "Max retries exceeded");
    }

    #[test]
    fn test_within_wraps_foreign_errors_once() {
        let err = decode()
            .within("Failed to fetch grandmasters")
            .within("Failed to fetch grandmasters");
        let ChessApiError::Operation { operation, source } = &err else {
            panic!("expected an operation error, got {err:?}");
        };
        assert_eq!(operation, "Failed to fetch grandmasters");
        assert!(matches!(**source, ChessApiError::Decode { .. }));
        assert!(err
            .to_string()
            .starts_with("Failed to fetch grandmasters: failed to decode"));
        assert_eq!(err.status(), None);
    }
}
