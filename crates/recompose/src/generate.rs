//! Generate — the query → normalize → filter → serialize pipeline.
//!
//! The single entry point is [`generate`]: inspect the daemon's containers
//! and emit a compose YAML document describing how to recreate them. All
//! daemon calls go through [`DockerOps`], are read-only, and fully
//! sequential.

use std::collections::BTreeMap;

use bollard::models::{ContainerInspectResponse, ContainerSummary};
use thiserror::Error;
use tracing::warn;

use crate::client::docker::DockerOps;
use crate::compose::model::{Attrs, ComposeFile};
use crate::compose::network::{attached_stubs, host_network_details};
use crate::compose::render;
use crate::compose::service::{service_attrs, service_name};
use crate::docker::client::DockerError;
use crate::docker::container::{display_name, resolve_id};
use crate::filter::name::{FilterError, NameFilter};

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error(transparent)]
    InvalidFilter(#[from] FilterError),
    #[error(transparent)]
    Docker(#[from] DockerError),
    #[error("Failed to render compose YAML: {0}")]
    Render(#[from] serde_yaml::Error),
}

/// Generation options. The defaults inspect every container, keep
/// network output limited to attached networks, and leave named-volume
/// mounts out of the volume entries.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Replace per-container network stubs with full detail for every
    /// network on the host.
    pub include_all_networks: bool,
    /// Regex restricting which containers are processed; empty = all.
    pub container_filter: String,
    /// Render named-volume mounts as `volumeName:dest` entries.
    pub create_volumes: bool,
}

/// Generate a compose YAML document from the daemon's current state.
///
/// A container that fails inspection is logged and skipped; every other
/// failure aborts the whole generation.
pub async fn generate(
    docker: &dyn DockerOps,
    opts: &GenerateOptions,
) -> Result<String, ComposeError> {
    // Compile the filter before touching the daemon, so a malformed
    // pattern fails without wasting any inspection calls.
    let filter = match opts.container_filter.as_str() {
        "" => None,
        pattern => Some(NameFilter::new(pattern)?),
    };

    let summaries = docker.list_containers().await?;
    let mut names: Vec<String> = summaries.iter().filter_map(display_name).collect();
    if let Some(filter) = &filter {
        names.retain(|name| filter.matches(name));
    }

    let mut services: BTreeMap<String, Attrs> = BTreeMap::new();
    let mut networks: BTreeMap<String, Attrs> = BTreeMap::new();

    for name in &names {
        let inspect = match inspect_by_name(docker, &summaries, name).await {
            Ok(inspect) => inspect,
            Err(e) => {
                warn!(container = %name, error = %e, "skipping container");
                continue;
            }
        };

        let service = service_name(&inspect).unwrap_or_else(|| name.to_string());
        services.insert(service, service_attrs(&inspect, opts.create_volumes));

        // Host-wide mode replaces the stubs wholesale; don't collect
        // what would be discarded.
        if !opts.include_all_networks {
            networks.extend(attached_stubs(docker, &inspect).await);
        }
    }

    if opts.include_all_networks {
        networks = host_network_details(docker).await?;
    }

    // Compose short syntax carries volume names inside the service
    // entries; no top-level volume blocks are declared.
    let document = ComposeFile::new(services, networks, BTreeMap::new());
    Ok(render::to_yaml(&document)?)
}

/// Resolve a display name against the listed summaries and inspect the
/// matching container.
async fn inspect_by_name(
    docker: &dyn DockerOps,
    summaries: &[ContainerSummary],
    name: &str,
) -> Result<ContainerInspectResponse, DockerError> {
    let id = resolve_id(summaries, name)?;
    docker.inspect_container(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeDocker;
    use bollard::models::{ContainerConfig, NetworkInspect, NetworkSettings};

    fn summary(id: &str, name: &str) -> ContainerSummary {
        ContainerSummary {
            id: Some(id.to_string()),
            names: Some(vec![format!("/{}", name)]),
            ..Default::default()
        }
    }

    fn inspect(id: &str, name: &str, image: &str, networks: &[&str]) -> ContainerInspectResponse {
        ContainerInspectResponse {
            id: Some(id.to_string()),
            name: Some(format!("/{}", name)),
            config: Some(ContainerConfig {
                image: Some(image.to_string()),
                ..Default::default()
            }),
            network_settings: Some(NetworkSettings {
                networks: Some(
                    networks
                        .iter()
                        .map(|n| (n.to_string(), Default::default()))
                        .collect(),
                ),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn network(name: &str, internal: bool) -> NetworkInspect {
        NetworkInspect {
            name: Some(name.to_string()),
            scope: Some("local".to_string()),
            driver: Some("bridge".to_string()),
            internal: Some(internal),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_options() {
        let opts = GenerateOptions::default();
        assert!(!opts.include_all_networks);
        assert!(opts.container_filter.is_empty());
        assert!(!opts.create_volumes);
    }

    #[test]
    fn test_invalid_filter_error_message() {
        let err = ComposeError::from(NameFilter::new("(").unwrap_err());
        assert!(err.to_string().contains("Invalid filter pattern"));
        assert_eq!(err.to_string().matches("Invalid").count(), 1);
    }

    #[tokio::test]
    async fn test_failed_inspection_skips_only_that_container() {
        let fake = FakeDocker::new();
        fake.add_container(summary("aaa", "web1"), inspect("aaa", "web1", "nginx:1.25", &[]));
        fake.add_vanished_container(summary("bbb", "web2"));
        fake.add_container(summary("ccc", "db1"), inspect("ccc", "db1", "postgres:16", &[]));

        let yaml = generate(&fake, &GenerateOptions::default()).await.unwrap();
        let parsed: ComposeFile = serde_yaml::from_str(&yaml).unwrap();

        let names: Vec<_> = parsed.services.keys().cloned().collect();
        assert_eq!(names, vec!["db1", "web1"]);
    }

    #[tokio::test]
    async fn test_filter_restricts_services() {
        let fake = FakeDocker::new();
        fake.add_container(summary("aaa", "web1"), inspect("aaa", "web1", "nginx:1.25", &[]));
        fake.add_container(summary("bbb", "web2"), inspect("bbb", "web2", "nginx:1.25", &[]));
        fake.add_container(summary("ccc", "db1"), inspect("ccc", "db1", "postgres:16", &[]));

        let opts = GenerateOptions {
            container_filter: "^web".to_string(),
            ..Default::default()
        };
        let yaml = generate(&fake, &opts).await.unwrap();
        let parsed: ComposeFile = serde_yaml::from_str(&yaml).unwrap();

        let names: Vec<_> = parsed.services.keys().cloned().collect();
        assert_eq!(names, vec!["web1", "web2"]);
    }

    #[tokio::test]
    async fn test_attached_networks_become_stubs() {
        let fake = FakeDocker::new();
        fake.add_network(network("frontend", false));
        fake.add_container(
            summary("aaa", "web1"),
            inspect("aaa", "web1", "nginx:1.25", &["frontend"]),
        );

        let yaml = generate(&fake, &GenerateOptions::default()).await.unwrap();
        let parsed: ComposeFile = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.networks.len(), 1);
        assert_eq!(
            parsed.networks["frontend"].get("external"),
            Some(&serde_yaml::Value::Bool(true))
        );
    }

    #[tokio::test]
    async fn test_include_all_networks_exports_every_host_network() {
        let fake = FakeDocker::new();
        fake.add_network(network("frontend", false));
        fake.add_network(network("backend", true));
        // Attached to just one network; host-wide mode still exports both.
        fake.add_container(
            summary("aaa", "web1"),
            inspect("aaa", "web1", "nginx:1.25", &["frontend"]),
        );

        let opts = GenerateOptions {
            include_all_networks: true,
            ..Default::default()
        };
        let yaml = generate(&fake, &opts).await.unwrap();
        let parsed: ComposeFile = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.networks.len(), 2);
        // Full detail blocks, not `{name, external}` stubs.
        assert!(parsed.networks["backend"].contains_key("driver"));
        assert!(parsed.networks["backend"].contains_key("internal"));
        assert!(!parsed.networks["backend"].contains_key("external"));
    }

    #[tokio::test]
    async fn test_host_wide_mode_skips_stub_inspections() {
        let fake = FakeDocker::new();
        fake.add_network(network("frontend", false));
        fake.add_network(network("backend", true));
        // Attached to a network that no longer exists; host-wide mode
        // never inspects attachments, so this cannot fail anything.
        fake.add_container(
            summary("aaa", "web1"),
            inspect("aaa", "web1", "nginx:1.25", &["frontend", "ghost"]),
        );

        let opts = GenerateOptions {
            include_all_networks: true,
            ..Default::default()
        };
        generate(&fake, &opts).await.unwrap();

        // One inspection per host network, none for the attachments.
        assert_eq!(fake.network_inspect_calls(), 2);
    }
}
