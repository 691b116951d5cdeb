//! Network domain — list and inspect.

use super::client::{DockerClient, DockerError};

impl DockerClient {
    /// List all networks on the host.
    pub async fn list_networks(&self) -> Result<Vec<bollard::models::Network>, DockerError> {
        self.client
            .list_networks(None::<bollard::query_parameters::ListNetworksOptions>)
            .await
            .map_err(DockerError::from)
    }

    /// Inspect a specific network by name or ID.
    pub async fn inspect_network(
        &self,
        network_id: &str,
    ) -> Result<bollard::models::NetworkInspect, DockerError> {
        self.client
            .inspect_network(
                network_id,
                None::<bollard::query_parameters::InspectNetworkOptions>,
            )
            .await
            .map_err(|e| match e {
                bollard::errors::Error::DockerResponseServerError { status_code: 404, .. } => {
                    DockerError::NetworkNotFound(network_id.to_string())
                }
                other => DockerError::BollardError(other),
            })
    }
}
