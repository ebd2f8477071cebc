//! HTTP implementation of [`ApplicationApi`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::ApplicationApi;
use crate::types::{Application, CreateApplicationRequest};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of retries for reads
pub const DEFAULT_MAX_RETRIES: u32 = 2;

const LIST_PATH: &str = "/argo/list";
const CREATE_PATH: &str = "/argo/create";
const DELETE_PATH: &str = "/argo/delete";

/// Builder for [`ArgoApiClient`].
#[derive(Debug, Clone)]
pub struct ArgoApiClientBuilder {
    base_url: String,
    timeout: Duration,
    max_retries: u32,
}

impl ArgoApiClientBuilder {
    /// Per-request timeout (connect + response).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retries for `list_applications`. Writes are never retried.
    #[must_use]
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn build(self) -> Result<ArgoApiClient> {
        let parsed = Url::parse(&self.base_url).map_err(|e| ApiError::InvalidConfig {
            detail: format!("invalid base URL '{}': {e}", self.base_url),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidConfig {
                detail: format!("unsupported URL scheme '{}'", parsed.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ApiError::InvalidConfig {
                detail: e.to_string(),
            })?;

        Ok(ArgoApiClient {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            max_retries: self.max_retries,
        })
    }
}

/// Client for the `/argo` endpoints of the application manager backend.
#[derive(Debug, Clone)]
pub struct ArgoApiClient {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl ArgoApiClient {
    pub fn builder(base_url: impl Into<String>) -> ArgoApiClientBuilder {
        ArgoApiClientBuilder {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn delete_url(&self, name: &str) -> String {
        format!(
            "{}{DELETE_PATH}/{}",
            self.base_url,
            urlencoding::encode(name)
        )
    }
}

#[async_trait]
impl ApplicationApi for ArgoApiClient {
    async fn list_applications(&self) -> Result<Vec<Application>> {
        let url = self.url(LIST_PATH);
        let body = HttpUtils::execute_request_with_retry(
            self.client.get(&url),
            "GET",
            &url,
            self.max_retries,
        )
        .await?;
        let applications: Vec<Application> = HttpUtils::parse_json(&body)?;
        log::debug!("Listed {} applications", applications.len());
        Ok(applications)
    }

    async fn create_application(&self, req: &CreateApplicationRequest) -> Result<()> {
        let url = self.url(CREATE_PATH);
        HttpUtils::execute_request(self.client.post(&url).json(req), "POST", &url).await?;
        log::info!("Created application '{}'", req.application_name);
        Ok(())
    }

    async fn delete_application(&self, name: &str) -> Result<()> {
        let url = self.delete_url(name);
        HttpUtils::execute_request(self.client.delete(&url), "DELETE", &url).await?;
        log::info!("Deleted application '{name}'");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ArgoApiClient {
        ArgoApiClient::builder(base)
            .build()
            .unwrap_or_else(|e| panic!("build failed: {e}"))
    }

    #[test]
    fn trailing_slash_trimmed() {
        let c = client("http://localhost:8080/");
        assert_eq!(c.base_url(), "http://localhost:8080");
        assert_eq!(c.url(LIST_PATH), "http://localhost:8080/argo/list");
    }

    #[test]
    fn base_path_prefix_kept() {
        let c = client("https://gitops.example.com/api");
        assert_eq!(
            c.url(CREATE_PATH),
            "https://gitops.example.com/api/argo/create"
        );
    }

    #[test]
    fn delete_name_is_one_path_segment() {
        let c = client("http://localhost:8080");
        assert_eq!(
            c.delete_url("demo"),
            "http://localhost:8080/argo/delete/demo"
        );
        assert_eq!(
            c.delete_url("a/b c"),
            "http://localhost:8080/argo/delete/a%2Fb%20c"
        );
    }

    #[test]
    fn rejects_relative_url() {
        let result = ArgoApiClient::builder("/argo").build();
        assert!(matches!(result, Err(ApiError::InvalidConfig { .. })));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let result = ArgoApiClient::builder("ftp://example.com").build();
        assert!(matches!(result, Err(ApiError::InvalidConfig { .. })));
    }
}
