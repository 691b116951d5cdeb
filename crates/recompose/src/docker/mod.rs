//! Docker module — read-only daemon queries: containers and networks.

pub mod client;
pub mod container;
pub mod network;

pub use client::{DockerClient, DockerError};
