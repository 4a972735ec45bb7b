//! Core data structures.
//!
//! This module contains the foundational types used throughout the crate:
//! - The closed set of codegen architectures and the two selection axes
//! - Per-architecture property fragments and tables
//! - Modules and their manifests

pub mod arch;
pub mod axis;
pub mod manifest;
pub mod module;
pub mod properties;
pub mod table;

pub use arch::{Arch, ArchParseError};
pub use axis::Axis;
pub use manifest::{Manifest, MANIFEST_NAME};
pub use module::{Module, ModuleKind};
pub use properties::{
    ArchProperties, CommonProperties, LibraryProperties, SharedLibs, SourceProperties, StaticLibs,
};
pub use table::CodegenTable;
