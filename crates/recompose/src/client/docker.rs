//! Docker trait — abstract interface over the read-only daemon queries.
//!
//! The generation pipeline accesses Docker through this trait.
//! `live.rs` provides the real Bollard-backed implementation.
//! `fake.rs` provides a test double.

use std::pin::Pin;

use bollard::models::{ContainerInspectResponse, ContainerSummary, Network, NetworkInspect};

use crate::docker::client::DockerError;

/// Unified async interface over the Docker daemon.
///
/// Object-safe thanks to `Pin<Box<…>>` returns, so the pipeline can take
/// `&dyn DockerOps`. Implementations must be `Send + Sync`.
pub trait DockerOps: Send + Sync {
    // ── Container queries ───────────────────────────────────────

    fn list_containers(
        &self,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<Vec<ContainerSummary>, DockerError>>
                + Send
                + '_,
        >,
    >;

    fn inspect_container<'a>(
        &'a self,
        id: &'a str,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<ContainerInspectResponse, DockerError>>
                + Send
                + 'a,
        >,
    >;

    // ── Network queries ─────────────────────────────────────────

    fn list_networks(
        &self,
    ) -> Pin<
        Box<dyn std::future::Future<Output = Result<Vec<Network>, DockerError>> + Send + '_>,
    >;

    fn inspect_network<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<
        Box<dyn std::future::Future<Output = Result<NetworkInspect, DockerError>> + Send + 'a>,
    >;
}
