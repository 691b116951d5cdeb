//! Service normalization — one inspected container into a compose
//! service block.
//!
//! All functions here are pure over the `ContainerInspectResponse`; the
//! only daemon round-trips in the pipeline happen in [`crate::generate`]
//! and [`super::network`].

use bollard::models::{ContainerInspectResponse, MountPointTypeEnum};
use serde_yaml::Value;
use tracing::debug;

use super::model::{opt_string, string_map, string_seq, Attrs};
use super::network::attached_networks;
use super::sentinel::is_sentinel;

/// Service name for an inspected container: runtime name with the
/// leading `/` stripped.
pub fn service_name(inspect: &ContainerInspectResponse) -> Option<String> {
    inspect
        .name
        .as_deref()
        .map(|n| n.trim_start_matches('/').to_string())
}

/// Build the attribute block for one container, then drop every
/// attribute whose value is a sentinel.
pub fn service_attrs(inspect: &ContainerInspectResponse, create_volumes: bool) -> Attrs {
    let config = inspect.config.as_ref();
    let host = inspect.host_config.as_ref();

    let mut attrs = Attrs::new();
    attrs.insert("container_name".into(), opt_string(service_name(inspect)));
    attrs.insert(
        "image".into(),
        opt_string(config.and_then(|c| c.image.clone())),
    );
    attrs.insert(
        "labels".into(),
        string_map(config.and_then(|c| c.labels.as_ref())),
    );
    attrs.insert(
        "volumes".into(),
        string_seq(volume_entries(inspect, create_volumes)),
    );
    attrs.insert(
        "environment".into(),
        string_seq(config.and_then(|c| c.env.clone()).unwrap_or_default()),
    );
    attrs.insert(
        "command".into(),
        string_seq(config.and_then(|c| c.cmd.clone()).unwrap_or_default()),
    );
    attrs.insert(
        "entrypoint".into(),
        string_seq(config.and_then(|c| c.entrypoint.clone()).unwrap_or_default()),
    );
    attrs.insert(
        "working_dir".into(),
        opt_string(config.and_then(|c| c.working_dir.clone())),
    );
    attrs.insert(
        "user".into(),
        opt_string(config.and_then(|c| c.user.clone())),
    );
    attrs.insert(
        "hostname".into(),
        opt_string(config.and_then(|c| c.hostname.clone())),
    );
    attrs.insert(
        "domainname".into(),
        opt_string(config.and_then(|c| c.domainname.clone())),
    );
    attrs.insert("network_mode".into(), opt_string(network_mode(inspect)));
    attrs.insert("ports".into(), string_seq(port_entries(inspect)));
    attrs.insert(
        "privileged".into(),
        Value::Bool(host.and_then(|h| h.privileged).unwrap_or(false)),
    );
    attrs.insert(
        "restart".into(),
        opt_string(
            host.and_then(|h| h.restart_policy.as_ref())
                .and_then(|p| p.name.as_ref())
                .map(|n| n.to_string()),
        ),
    );
    attrs.insert(
        "tty".into(),
        Value::Bool(config.and_then(|c| c.tty).unwrap_or(false)),
    );
    attrs.insert(
        "stdin_open".into(),
        Value::Bool(config.and_then(|c| c.open_stdin).unwrap_or(false)),
    );

    attrs.retain(|_, value| !is_sentinel(value));
    attrs
}

/// Compose `volumes:` entries for a container's mounts, sorted.
///
/// Named volumes render `name:destination` only when `create_volumes` is
/// set; bind mounts always render `source:destination`. Everything else
/// (tmpfs, npipe, named volumes with the flag off) has no compose
/// short-syntax equivalent here and is skipped.
pub fn volume_entries(inspect: &ContainerInspectResponse, create_volumes: bool) -> Vec<String> {
    let mut entries = Vec::new();
    for mount in inspect.mounts.as_deref().unwrap_or_default() {
        let Some(destination) = mount.destination.as_deref() else {
            continue;
        };
        match &mount.typ {
            Some(MountPointTypeEnum::VOLUME) if create_volumes => {
                if let Some(name) = mount.name.as_deref() {
                    entries.push(format!("{}:{}", name, destination));
                }
            }
            Some(MountPointTypeEnum::BIND) => {
                if let Some(source) = mount.source.as_deref() {
                    entries.push(format!("{}:{}", source, destination));
                }
            }
            other => {
                debug!(mount_type = ?other, destination, "mount has no compose entry, skipping");
            }
        }
    }
    entries.sort();
    entries
}

/// Compose `ports:` entries: `hostPort:containerPort`, prefixed with the
/// host IP when one is bound. The container-port side keeps Docker's raw
/// `"80/tcp"` key form. Entries are sorted by container port, then host
/// port, for reproducible output.
pub fn port_entries(inspect: &ContainerInspectResponse) -> Vec<String> {
    let Some(bindings) = inspect
        .host_config
        .as_ref()
        .and_then(|h| h.port_bindings.as_ref())
    else {
        return Vec::new();
    };

    let mut keyed: Vec<(u32, u32, String)> = Vec::new();
    for (container_port, port_bindings) in bindings {
        for binding in port_bindings.as_deref().unwrap_or_default() {
            let host_port = binding.host_port.clone().unwrap_or_default();
            let host = match binding.host_ip.as_deref() {
                Some(ip) if !ip.is_empty() => format!("{}:{}", ip, host_port),
                _ => host_port.clone(),
            };
            keyed.push((
                numeric_port(container_port),
                numeric_port(&host_port),
                format!("{}:{}", host, container_port),
            ));
        }
    }
    keyed.sort();
    keyed.into_iter().map(|(_, _, entry)| entry).collect()
}

/// Numeric prefix of a port key like `"80/tcp"`; non-numeric values sort
/// after all real ports.
fn numeric_port(port: &str) -> u32 {
    port.split('/')
        .next()
        .unwrap_or("")
        .parse()
        .unwrap_or(u32::MAX)
}

/// Compose `network_mode`. Docker's implicit `"default"` mode is
/// replaced with the first network the container is attached to, if any;
/// every explicit mode (`host`, `none`, `container:<id>`, a user network)
/// passes through verbatim.
pub fn network_mode(inspect: &ContainerInspectResponse) -> Option<String> {
    let mode = inspect
        .host_config
        .as_ref()
        .and_then(|h| h.network_mode.clone())?;

    if mode == "default" {
        if let Some(first) = attached_networks(inspect).into_iter().next() {
            return Some(first);
        }
    }
    Some(mode)
}
