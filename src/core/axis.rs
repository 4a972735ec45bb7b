//! Selection axes.
//!
//! Every module is configured for two independent axes: the host the build
//! runs on and the device being built for. The axes share one shape and
//! differ only in the key their properties attach under.

use serde::{Deserialize, Serialize};

/// Environment variable holding the host architecture override.
pub const HOST_ARCHS_VAR: &str = "ART_HOST_CODEGEN_ARCHS";

/// Environment variable holding the device architecture override.
pub const DEVICE_ARCHS_VAR: &str = "ART_TARGET_CODEGEN_ARCHS";

/// One of the two selection/merge contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The device target.
    Device,
    /// The build host.
    Host,
}

impl Axis {
    /// Axes in the order they are resolved and emitted.
    pub const ALL: [Axis; 2] = [Axis::Device, Axis::Host];

    /// Key the axis' properties attach under in a module's `target` scope.
    pub fn key(&self) -> &'static str {
        match self {
            Axis::Device => "device",
            Axis::Host => "host",
        }
    }

    /// Default environment variable consulted for this axis' override.
    pub fn default_override_var(&self) -> &'static str {
        match self {
            Axis::Device => DEVICE_ARCHS_VAR,
            Axis::Host => HOST_ARCHS_VAR,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
