//! Live — implements `DockerOps` for the real Bollard-backed `DockerClient`.

use std::pin::Pin;

use bollard::models::{ContainerInspectResponse, ContainerSummary, Network, NetworkInspect};

use crate::client::docker::DockerOps;
use crate::docker::client::{DockerClient, DockerError};

impl DockerOps for DockerClient {
    fn list_containers(
        &self,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<Vec<ContainerSummary>, DockerError>>
                + Send
                + '_,
        >,
    > {
        Box::pin(self.list_containers())
    }

    fn inspect_container<'a>(
        &'a self,
        id: &'a str,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<ContainerInspectResponse, DockerError>>
                + Send
                + 'a,
        >,
    > {
        Box::pin(self.inspect_container(id))
    }

    fn list_networks(
        &self,
    ) -> Pin<
        Box<dyn std::future::Future<Output = Result<Vec<Network>, DockerError>> + Send + '_>,
    > {
        Box::pin(self.list_networks())
    }

    fn inspect_network<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<
        Box<dyn std::future::Future<Output = Result<NetworkInspect, DockerError>> + Send + 'a>,
    > {
        Box::pin(self.inspect_network(name))
    }
}
