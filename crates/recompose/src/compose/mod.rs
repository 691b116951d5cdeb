//! Compose module — document model, normalization, and YAML rendering.

pub mod model;
pub mod network;
pub mod render;
pub mod sentinel;
pub mod service;

pub use model::{Attrs, ComposeFile};
