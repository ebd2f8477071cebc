use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Application, CreateApplicationRequest};

/// Operations the application manager backend exposes.
///
/// Implemented by [`ArgoApiClient`](crate::ArgoApiClient) over HTTP; UI layers
/// depend on the trait so they can be driven by an in-memory fake in tests.
#[async_trait]
pub trait ApplicationApi: Send + Sync {
    /// List all applications. The whole collection is returned; there is no paging.
    async fn list_applications(&self) -> Result<Vec<Application>>;

    /// Create an application. Fields are sent as given, empty strings included.
    async fn create_application(&self, req: &CreateApplicationRequest) -> Result<()>;

    /// Delete the application with the given name.
    async fn delete_application(&self, name: &str) -> Result<()>;
}
