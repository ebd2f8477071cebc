//! Wire types for the application manager API

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

/// Status label the backend reports for an application that is fully synced and running.
pub const HEALTHY_STATUS: &str = "Healthy";

/// An application record as returned by `GET /argo/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique application name (also the deletion key)
    pub name: String,
    /// Health status label; empty when the backend omits it or sends `null`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    /// Creation timestamp as sent by the backend
    #[serde(default)]
    pub created_at: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Application {
    /// Exact, case-sensitive comparison against [`HEALTHY_STATUS`].
    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY_STATUS
    }

    /// Creation time for display.
    ///
    /// RFC 3339 timestamps are shown in local time; anything else is returned verbatim.
    pub fn created_at_display(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        Some(match DateTime::parse_from_rfc3339(raw) {
            Ok(ts) => ts
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            Err(_) => raw.to_string(),
        })
    }
}

/// Body of `POST /argo/create`.
///
/// Field names on the wire are fixed by the backend
/// (`applicationName`, `repositoryURL`, `clusterURL`, `path`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
    #[serde(rename = "applicationName")]
    pub application_name: String,
    #[serde(rename = "repositoryURL")]
    pub repository_url: String,
    #[serde(rename = "clusterURL")]
    pub cluster_url: String,
    pub path: String,
}

impl CreateApplicationRequest {
    pub fn new(
        application_name: impl Into<String>,
        repository_url: impl Into<String>,
        cluster_url: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            repository_url: repository_url.into(),
            cluster_url: cluster_url.into(),
            path: path.into(),
        }
    }

    /// Wire names of the fields the backend will reject as missing.
    ///
    /// Mirrors the server-side rule that all four fields are non-empty. The client
    /// does not enforce it; callers may use it for hints.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("applicationName", &self.application_name),
            ("repositoryURL", &self.repository_url),
            ("clusterURL", &self.cluster_url),
            ("path", &self.path),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}
