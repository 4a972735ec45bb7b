//! High-level operations.
//!
//! This module contains what the CLI commands run: manifest discovery and
//! module configuration.

pub mod configure;
pub mod discover;

pub use configure::{configure_all, configure_module, ModuleReport};
pub use discover::{check_unique_names, find_manifests, load_manifests};
