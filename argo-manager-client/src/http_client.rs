//! Generic HTTP request execution
//!
//! Every call against the backend goes through [`HttpUtils`]: it sends the
//! request, logs it, classifies transport failures, turns non-success statuses
//! into [`ApiError::Status`] and optionally retries transient failures.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ApiError;

/// Response bodies longer than this are cut before they reach the log.
const LOG_BODY_LIMIT: usize = 256;

/// Upper bound for a single backoff sleep.
const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response body.
    ///
    /// # Returns
    /// * `Ok(body)` - 2xx response with its body text (possibly empty)
    /// * `Err(ApiError::Status)` - any other status, body trimmed into `message`
    /// * `Err(ApiError::Network | ApiError::Timeout)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<String, ApiError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("{method_name} {url} -> {status}");

        let body = response.text().await.map_err(|e| ApiError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                message: body.trim().to_string(),
            })
        }
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ApiError::Parse {
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request, retrying transient failures.
    ///
    /// # Retry strategy
    /// - Only [`ApiError::is_retryable`] errors are retried
    /// - Exponential backoff: 100ms, 200ms, 400ms, ... (maximum 10 seconds)
    /// - `max_retries == 0` sends exactly once
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<String, ApiError> {
        let mut attempt = 0;

        loop {
            // RequestBuilder 只能发送一次，重试前先克隆
            let Some(req) = request_builder.try_clone() else {
                log::warn!("Cannot clone request for {url}, disabling retry");
                return Self::execute_request(request_builder, method_name, url).await;
            };

            match Self::execute_request(req, method_name, url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = backoff_delay(attempt);
                    log::warn!(
                        "{method_name} {url} failed (attempt {}/{}), retrying in {:.1}s: {e}",
                        attempt + 1,
                        max_retries + 1,
                        delay.as_secs_f32(),
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Backoff strategy: 100ms, 200ms, 400ms, 800ms, 1.6s, ... capped at [`MAX_BACKOFF`].
fn backoff_delay(attempt: u32) -> Duration {
    let shift = attempt.min(20);
    Duration::from_millis(100_u64.saturating_mul(1_u64 << shift)).min(MAX_BACKOFF)
}

/// Cut a response body down to [`LOG_BODY_LIMIT`] bytes on a char boundary.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let mut end = LOG_BODY_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [{} bytes total]", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- backoff_delay ----

    #[test]
    fn backoff_starts_at_100ms() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
    }

    #[test]
    fn backoff_doubles() {
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        assert_eq!(backoff_delay(7), MAX_BACKOFF);
        assert_eq!(backoff_delay(u32::MAX), MAX_BACKOFF);
    }

    // ---- truncate_for_log ----

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log("[]"), "[]");
    }

    #[test]
    fn long_body_truncated_with_total() {
        let body = "x".repeat(LOG_BODY_LIMIT + 10);
        let out = truncate_for_log(&body);
        assert!(out.starts_with(&"x".repeat(LOG_BODY_LIMIT)));
        assert!(out.ends_with(&format!("[{} bytes total]", LOG_BODY_LIMIT + 10)));
    }

    #[test]
    fn truncation_respects_char_boundary() {
        // 每个字符 3 字节，256 不是边界
        let body = "应".repeat(200);
        let out = truncate_for_log(&body);
        assert!(out.contains("bytes total"));
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_invalid() {
        let result: Result<Vec<String>, ApiError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(ApiError::Parse { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_empty_array() {
        let result: Result<Vec<String>, ApiError> = HttpUtils::parse_json("[]");
        assert!(matches!(&result, Ok(v) if v.is_empty()));
    }
}
