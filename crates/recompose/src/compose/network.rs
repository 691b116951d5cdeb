//! Network extraction — per-container stubs and host-wide detail export.

use std::collections::BTreeMap;

use bollard::models::{ContainerInspectResponse, Ipam, IpamConfig, NetworkInspect};
use serde_yaml::Value;
use tracing::warn;

use super::model::{opt_string, Attrs};
use crate::client::docker::DockerOps;
use crate::docker::client::DockerError;

/// Names of the networks a container is attached to, sorted so that
/// downstream output is deterministic.
pub fn attached_networks(inspect: &ContainerInspectResponse) -> Vec<String> {
    let mut names: Vec<String> = inspect
        .network_settings
        .as_ref()
        .and_then(|ns| ns.networks.as_ref())
        .map(|nets| nets.keys().cloned().collect())
        .unwrap_or_default();
    names.sort();
    names
}

/// Stub entries for every network a container is attached to.
///
/// A failed network inspection is logged and that network omitted; the
/// rest of the container's output is unaffected.
pub async fn attached_stubs(
    docker: &dyn DockerOps,
    inspect: &ContainerInspectResponse,
) -> BTreeMap<String, Attrs> {
    let mut stubs = BTreeMap::new();
    for name in attached_networks(inspect) {
        match docker.inspect_network(&name).await {
            Ok(net) => {
                stubs.insert(
                    name.clone(),
                    stub_attrs(&name, net.internal.unwrap_or(false)),
                );
            }
            Err(e) => {
                warn!(network = %name, error = %e, "failed to inspect network, omitting");
            }
        }
    }
    stubs
}

/// Full detail for every network on the host. Any list or inspect
/// failure here aborts the export.
pub async fn host_network_details(
    docker: &dyn DockerOps,
) -> Result<BTreeMap<String, Attrs>, DockerError> {
    let mut networks = BTreeMap::new();
    for summary in docker.list_networks().await? {
        let Some(name) = summary.name else { continue };
        let net = docker.inspect_network(&name).await?;
        networks.insert(name, detail_attrs(&net));
    }
    Ok(networks)
}

/// `{name, external}` stub block. A network is external when the daemon
/// does not mark it internal.
pub(crate) fn stub_attrs(name: &str, internal: bool) -> Attrs {
    let mut attrs = Attrs::new();
    attrs.insert("external".into(), Value::Bool(!internal));
    attrs.insert("name".into(), Value::String(name.to_string()));
    attrs
}

/// Full network block: name, scope, driver, IPv6 flag, internal flag,
/// and IPAM driver/config.
pub(crate) fn detail_attrs(net: &NetworkInspect) -> Attrs {
    let mut attrs = Attrs::new();
    attrs.insert("name".into(), opt_string(net.name.clone()));
    attrs.insert("scope".into(), opt_string(net.scope.clone()));
    attrs.insert("driver".into(), opt_string(net.driver.clone()));
    attrs.insert(
        "enable_ipv6".into(),
        Value::Bool(net.enable_ipv6.unwrap_or(false)),
    );
    attrs.insert(
        "internal".into(),
        Value::Bool(net.internal.unwrap_or(false)),
    );
    attrs.insert("ipam".into(), ipam_value(net.ipam.as_ref()));
    attrs
}

fn ipam_value(ipam: Option<&Ipam>) -> Value {
    let mut mapping = serde_yaml::Mapping::new();
    mapping.insert(
        "driver".into(),
        opt_string(ipam.and_then(|i| i.driver.clone())),
    );
    mapping.insert(
        "config".into(),
        ipam.and_then(|i| i.config.as_ref())
            .map(|configs| Value::Sequence(configs.iter().map(ipam_config_value).collect()))
            .unwrap_or(Value::Null),
    );
    Value::Mapping(mapping)
}

fn ipam_config_value(config: &IpamConfig) -> Value {
    let mut mapping = serde_yaml::Mapping::new();
    if let Some(subnet) = &config.subnet {
        mapping.insert("subnet".into(), Value::String(subnet.clone()));
    }
    if let Some(ip_range) = &config.ip_range {
        mapping.insert("ip_range".into(), Value::String(ip_range.clone()));
    }
    if let Some(gateway) = &config.gateway {
        mapping.insert("gateway".into(), Value::String(gateway.clone()));
    }
    Value::Mapping(mapping)
}
