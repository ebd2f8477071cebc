//! # argo-manager-client
//!
//! Typed HTTP client for the Argo application manager backend.
//!
//! The backend exposes three endpoints:
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | List | `GET` | `/argo/list` |
//! | Create | `POST` | `/argo/create` |
//! | Delete | `DELETE` | `/argo/delete/{name}` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use argo_manager_client::{ApplicationApi, ArgoApiClient, CreateApplicationRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ArgoApiClient::builder("http://localhost:8080").build()?;
//!
//!     client
//!         .create_application(&CreateApplicationRequest::new(
//!             "demo",
//!             "https://example.com/repo.git",
//!             "https://cluster.example.com",
//!             "manifests/demo",
//!         ))
//!         .await?;
//!
//!     for app in client.list_applications().await? {
//!         println!("{} {}", app.name, app.status);
//!     }
//!
//!     client.delete_application("demo").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`ApiError`], which separates transport failures
//! (`Network`, `Timeout`), non-success statuses (`Status`) and unreadable
//! responses (`Parse`).

mod client;
mod error;
mod http_client;
mod traits;
mod types;

pub use client::{ArgoApiClient, ArgoApiClientBuilder, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT};
pub use error::{ApiError, Result};
pub use traits::ApplicationApi;
pub use types::{Application, CreateApplicationRequest, HEALTHY_STATUS};
