//! Filter module — container-name inclusion filtering.

pub mod name;

pub use name::{FilterError, NameFilter};
