//! Container domain — list, resolve, and inspect.

use super::client::{DockerClient, DockerError};

use bollard::models::{ContainerInspectResponse, ContainerSummary};
use bollard::query_parameters::ListContainersOptions;

impl DockerClient {
    /// List all containers, running or stopped.
    pub async fn list_containers(&self) -> Result<Vec<ContainerSummary>, DockerError> {
        let options = Some(ListContainersOptions {
            all: true,
            ..Default::default()
        });
        self.client
            .list_containers(options)
            .await
            .map_err(DockerError::from)
    }

    /// Returns the full `ContainerInspectResponse` from Docker for a container.
    pub async fn inspect_container(
        &self,
        id: &str,
    ) -> Result<ContainerInspectResponse, DockerError> {
        self.client
            .inspect_container(id, None)
            .await
            .map_err(|e| match e {
                bollard::errors::Error::DockerResponseServerError { status_code: 404, .. } => {
                    DockerError::ContainerNotFound(id.to_string())
                }
                other => DockerError::BollardError(other),
            })
    }
}

/// Display name of a listed container: the first runtime-assigned name
/// with its leading `/` stripped.
pub fn display_name(summary: &ContainerSummary) -> Option<String> {
    summary
        .names
        .as_deref()
        .and_then(|names| names.first())
        .map(|name| name.trim_start_matches('/').to_string())
}

/// Resolve a caller-supplied token to a container ID, matching the
/// stripped display name first and falling back to the raw ID.
pub fn resolve_id<'a>(
    summaries: &'a [ContainerSummary],
    token: &str,
) -> Result<&'a str, DockerError> {
    summaries
        .iter()
        .find(|s| {
            display_name(s).as_deref() == Some(token) || s.id.as_deref() == Some(token)
        })
        .and_then(|s| s.id.as_deref())
        .ok_or_else(|| DockerError::ContainerNotFound(token.to_string()))
}
