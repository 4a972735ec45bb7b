//! Architecture selection.
//!
//! Produces, for each axis, the ordered list of architecture names a module
//! is configured for. Names are not validated here; an unsupported name is
//! reported when the merger resolves it.

use std::collections::BTreeSet;

use crate::core::arch::Arch;
use crate::core::axis::Axis;
use crate::host::{DeviceConfig, Environment};

/// Where an axis' override string is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideSource {
    /// Environment variable name
    pub var: String,
    /// Value used when the variable is unset
    pub default: String,
}

impl OverrideSource {
    /// The axis' standard variable with no fallback value.
    pub fn for_axis(axis: Axis) -> Self {
        OverrideSource {
            var: axis.default_override_var().to_string(),
            default: String::new(),
        }
    }
}

/// Override lookup settings for both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOptions {
    pub host: OverrideSource,
    pub device: OverrideSource,
}

impl Default for SelectOptions {
    fn default() -> Self {
        SelectOptions {
            host: OverrideSource::for_axis(Axis::Host),
            device: OverrideSource::for_axis(Axis::Device),
        }
    }
}

impl SelectOptions {
    /// The override source of an axis.
    pub fn source(&self, axis: Axis) -> &OverrideSource {
        match axis {
            Axis::Host => &self.host,
            Axis::Device => &self.device,
        }
    }
}

/// Selected architecture names per axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchSelection {
    pub host: Vec<String>,
    pub device: Vec<String>,
}

impl ArchSelection {
    /// The selected names of an axis.
    pub fn get(&self, axis: Axis) -> &[String] {
        match axis {
            Axis::Host => &self.host,
            Axis::Device => &self.device,
        }
    }
}

/// Split a raw override string into architecture names.
///
/// Order and repeats are kept; empty tokens from irregular whitespace are
/// dropped.
pub fn split_override(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Architectures used for the host when nothing overrides them.
pub fn default_host_arches() -> Vec<String> {
    Arch::all_names()
}

/// Derive the device architectures from the declared ones.
///
/// Every declared 64-bit architecture also selects its 32-bit companion.
/// The result is deduplicated and sorted by name.
pub fn default_device_arches(declared: &[String]) -> Vec<String> {
    let mut arches = BTreeSet::new();
    for name in declared {
        if let Some(companion) = name.parse::<Arch>().ok().and_then(|a| a.companion_32bit()) {
            arches.insert(companion.as_str().to_string());
        }
        arches.insert(name.clone());
    }
    arches.into_iter().collect()
}

/// Select the architectures of one axis.
///
/// A blank override variable counts as unset, so the configured default
/// applies before anything is derived.
pub fn select_axis(
    axis: Axis,
    options: &SelectOptions,
    env: &impl Environment,
    device: &impl DeviceConfig,
) -> Vec<String> {
    let source = options.source(axis);
    let mut overridden = split_override(&env.get(&source.var, &source.default));
    if overridden.is_empty() {
        overridden = split_override(&source.default);
    }

    if !overridden.is_empty() {
        tracing::debug!("{} arches from override: {}", axis, overridden.join(" "));
        return overridden;
    }

    let arches = match axis {
        Axis::Host => default_host_arches(),
        Axis::Device => default_device_arches(&device.declared_device_arches()),
    };
    tracing::debug!("{} arches derived: {}", axis, arches.join(" "));
    arches
}

/// Select the architectures of both axes.
pub fn select(
    options: &SelectOptions,
    env: &impl Environment,
    device: &impl DeviceConfig,
) -> ArchSelection {
    ArchSelection {
        host: select_axis(Axis::Host, options, env, device),
        device: select_axis(Axis::Device, options, env, device),
    }
}
