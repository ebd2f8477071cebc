use serde::{Deserialize, Serialize};

/// Result of a request against the application manager API that did not succeed.
///
/// The variants separate the three ways a request can go wrong: it never got an
/// answer ([`Network`](Self::Network), [`Timeout`](Self::Timeout)), the server
/// answered with a non-success status ([`Status`](Self::Status)), or the answer
/// could not be understood ([`Parse`](Self::Parse)).
///
/// # Retryable Errors
///
/// - [`Network`](Self::Network) — connection refused, reset, DNS failure
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`Status`](Self::Status) with 502, 503 or 504
///
/// Only reads are retried by the built-in client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// The client could not be constructed (bad base URL, TLS backend failure).
    InvalidConfig {
        /// What was wrong.
        detail: String,
    },

    /// The request did not reach the server or the connection broke.
    Network {
        /// Transport error details.
        detail: String,
    },

    /// The request timed out.
    Timeout {
        /// Transport error details.
        detail: String,
    },

    /// The server answered with a non-success HTTP status.
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, trimmed. The backend puts plain-text reasons here.
        message: String,
    },

    /// The response body was not the expected JSON.
    Parse {
        /// Details about the parse failure.
        detail: String,
    },
}

impl ApiError {
    /// Whether a failed read should be attempted again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } | Self::Timeout { .. } => true,
            Self::Status { status, .. } => matches!(status, 502..=504),
            Self::InvalidConfig { .. } | Self::Parse { .. } => false,
        }
    }

    /// 是否为预期行为（用户输入错误、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Status { status, .. } if (400..500).contains(status))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig { detail } => write!(f, "Invalid client configuration: {detail}"),
            Self::Network { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Status { status, message } => {
                if message.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "HTTP {status}: {message}")
                }
            }
            Self::Parse { detail } => write!(f, "Parse error: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_status_with_message() {
        let e = ApiError::Status {
            status: 400,
            message: "application name is missing".to_string(),
        };
        assert_eq!(e.to_string(), "HTTP 400: application name is missing");
    }

    #[test]
    fn display_status_without_message() {
        let e = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(e.to_string(), "HTTP 500");
    }

    #[test]
    fn display_network_error() {
        let e = ApiError::Network {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn gateway_statuses_are_retryable() {
        for status in [502, 503, 504] {
            let e = ApiError::Status {
                status,
                message: String::new(),
            };
            assert!(e.is_retryable(), "HTTP {status} should be retryable");
        }
    }

    #[test]
    fn client_and_server_errors_are_not_retryable() {
        for status in [400, 404, 500] {
            let e = ApiError::Status {
                status,
                message: String::new(),
            };
            assert!(!e.is_retryable(), "HTTP {status} should not be retryable");
        }
    }

    #[test]
    fn parse_error_not_retryable() {
        let e = ApiError::Parse {
            detail: "expected array".to_string(),
        };
        assert!(!e.is_retryable());
    }

    #[test]
    fn only_4xx_is_expected() {
        let bad_request = ApiError::Status {
            status: 400,
            message: "path is missing".to_string(),
        };
        let internal = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert!(bad_request.is_expected());
        assert!(!internal.is_expected());
        assert!(
            !ApiError::Timeout {
                detail: "x".to_string()
            }
            .is_expected()
        );
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ApiError::Status {
            status: 404,
            message: "not found".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "Status");
        assert_eq!(json["status"], 404);
    }
}
