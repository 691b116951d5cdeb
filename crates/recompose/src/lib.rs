// Domain-driven module structure for Recompose.

// Core infrastructure
pub mod client;
pub mod docker;
pub mod filter;

// Domain modules
pub mod compose;
pub mod generate;

pub use client::docker::DockerOps;
pub use compose::model::ComposeFile;
pub use docker::client::{DockerClient, DockerError};
pub use generate::{generate, ComposeError, GenerateOptions};
