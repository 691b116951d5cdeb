//! Fake — test double for Docker operations.
//!
//! Provides a deterministic [`FakeDocker`] that implements [`DockerOps`]
//! using in-memory state, so the generation pipeline is testable without
//! a running Docker daemon.

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Mutex;

use bollard::models::{ContainerInspectResponse, ContainerSummary, Network, NetworkInspect};

use crate::client::docker::DockerOps;
use crate::docker::client::DockerError;

/// Mutable inner state protected by a mutex.
#[derive(Default)]
struct Inner {
    summaries: Vec<ContainerSummary>,
    inspects: HashMap<String, ContainerInspectResponse>,
    networks: Vec<NetworkInspect>,
    phantom_networks: Vec<String>,
    network_inspect_calls: usize,
}

/// A fake Docker client for deterministic testing.
///
/// All methods operate on in-memory state. The seed methods pre-populate
/// containers and networks before running test code. A container seeded
/// without an inspect record, or a network referenced without a seeded
/// record, fails the corresponding lookup with a NotFound error.
pub struct FakeDocker {
    inner: Mutex<Inner>,
}

impl FakeDocker {
    /// Create an empty fake Docker client.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Seed a container into the fake store.
    pub fn add_container(&self, summary: ContainerSummary, inspect: ContainerInspectResponse) {
        let mut state = self.inner.lock().unwrap();
        if let Some(id) = summary.id.clone() {
            state.inspects.insert(id, inspect);
        }
        state.summaries.push(summary);
    }

    /// Seed a container that shows up in listings but is gone by the
    /// time it is inspected.
    pub fn add_vanished_container(&self, summary: ContainerSummary) {
        self.inner.lock().unwrap().summaries.push(summary);
    }

    /// Seed a network.
    pub fn add_network(&self, network: NetworkInspect) {
        self.inner.lock().unwrap().networks.push(network);
    }

    /// Seed a network that shows up in listings but is gone by the
    /// time it is inspected.
    pub fn add_phantom_network(&self, name: &str) {
        self.inner
            .lock()
            .unwrap()
            .phantom_networks
            .push(name.to_string());
    }

    /// Number of network inspections served or refused so far.
    pub fn network_inspect_calls(&self) -> usize {
        self.inner.lock().unwrap().network_inspect_calls
    }
}

impl Default for FakeDocker {
    fn default() -> Self {
        Self::new()
    }
}

// ── DockerOps implementation ────────────────────────────────────

impl DockerOps for FakeDocker {
    fn list_containers(
        &self,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<Vec<ContainerSummary>, DockerError>>
                + Send
                + '_,
        >,
    > {
        Box::pin(async {
            let state = self.inner.lock().unwrap();
            Ok(state.summaries.clone())
        })
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
        Box::pin(async move {
            let state = self.inner.lock().unwrap();
            state
                .inspects
                .get(id)
                .cloned()
                .ok_or_else(|| DockerError::ContainerNotFound(id.to_string()))
        })
    }

    fn list_networks(
        &self,
    ) -> Pin<
        Box<dyn std::future::Future<Output = Result<Vec<Network>, DockerError>> + Send + '_>,
    > {
        Box::pin(async {
            let state = self.inner.lock().unwrap();
            let mut networks: Vec<Network> = state
                .networks
                .iter()
                .map(|n| Network {
                    name: n.name.clone(),
                    id: n.id.clone(),
                    scope: n.scope.clone(),
                    driver: n.driver.clone(),
                    enable_ipv6: n.enable_ipv6,
                    internal: n.internal,
                    ipam: n.ipam.clone(),
                    ..Default::default()
                })
                .collect();
            networks.extend(state.phantom_networks.iter().map(|name| Network {
                name: Some(name.clone()),
                ..Default::default()
            }));
            Ok(networks)
        })
    }

    fn inspect_network<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<
        Box<dyn std::future::Future<Output = Result<NetworkInspect, DockerError>> + Send + 'a>,
    > {
        Box::pin(async move {
            let mut state = self.inner.lock().unwrap();
            state.network_inspect_calls += 1;
            state
                .networks
                .iter()
                .find(|n| n.name.as_deref() == Some(name))
                .cloned()
                .ok_or_else(|| DockerError::NetworkNotFound(name.to_string()))
        })
    }
}
