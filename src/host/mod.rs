//! Interfaces to the build system hosting the resolver.
//!
//! The resolver never reads the process environment or the device
//! configuration itself and never mutates a module directly. It goes through
//! these traits, so a host build system can plug in its own lookups and
//! property storage.

pub mod bag;
pub mod env;
pub mod patch;

pub use bag::PropertyBag;
pub use env::{DeclaredArches, LayeredEnv, MapEnv, ProcessEnv};
pub use patch::{Patch, PatchScope};

/// Lookup of raw override strings.
pub trait Environment {
    /// Return the value of `name`, or `default` if it is unset or empty.
    fn get(&self, name: &str, default: &str) -> String;
}

/// The architectures configured for the current device target.
pub trait DeviceConfig {
    /// Declared device architecture names, in configuration order.
    fn declared_device_arches(&self) -> Vec<String>;
}

/// The module being configured, as seen by the resolver.
pub trait ModuleContext {
    /// Name of the module, for log and error messages.
    fn module_name(&self) -> &str;

    /// Record a fatal configuration error for this module.
    fn report_fatal(&mut self, message: String);

    /// Merge a structured patch into the module's properties.
    ///
    /// Repeated calls accumulate.
    fn attach(&mut self, patch: Patch);
}

impl<T: Environment + ?Sized> Environment for &T {
    fn get(&self, name: &str, default: &str) -> String {
        (**self).get(name, default)
    }
}

impl<T: DeviceConfig + ?Sized> DeviceConfig for &T {
    fn declared_device_arches(&self) -> Vec<String> {
        (**self).declared_device_arches()
    }
}
