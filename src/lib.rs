//! codegen-arch - per-architecture codegen properties for build modules
//!
//! For every module, picks the CPU architectures to generate code for on the
//! host and on the device, then merges the sources, compiler flags and
//! library dependencies each architecture contributes into patches for the
//! module's build description.

pub mod core;
pub mod host;
pub mod ops;
pub mod resolver;
pub mod util;

/// Test fixtures for unit tests.
///
/// This module is only available when compiling with `--cfg test`.
#[cfg(test)]
pub mod test_support;

pub use core::{Arch, Axis, CodegenTable, Manifest, Module, ModuleKind};
pub use host::{DeviceConfig, Environment, ModuleContext, Patch, PropertyBag};
pub use resolver::{resolve, select, ArchSelection, CodegenError, ResolvedCodegen, SelectOptions};
pub use util::context::GlobalContext;
