//! Client module — the Docker operations trait and its implementations.

pub mod docker;
pub mod fake;
pub mod live;

pub use docker::DockerOps;
pub use fake::FakeDocker;
