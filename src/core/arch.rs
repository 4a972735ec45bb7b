//! Supported codegen architectures.
//!
//! The set is closed: every architecture the per-architecture tables can
//! carry properties for is a variant of [`Arch`]. Names coming from the
//! environment or the device configuration stay plain strings until the
//! merger parses them.

use serde::{Deserialize, Serialize};

/// A codegen architecture.
///
/// Ordering follows the lexicographic order of the names, so sorted
/// collections of `Arch` and sorted collections of names agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arch {
    /// 32-bit ARM
    Arm,
    /// 64-bit ARM
    Arm64,
    /// 32-bit x86
    X86,
    /// 64-bit x86
    #[serde(rename = "x86_64")]
    X86_64,
}

impl Arch {
    /// Every supported architecture, in canonical order.
    pub const ALL: [Arch; 4] = [Arch::Arm, Arch::Arm64, Arch::X86, Arch::X86_64];

    /// Get the architecture name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Arm => "arm",
            Arch::Arm64 => "arm64",
            Arch::X86 => "x86",
            Arch::X86_64 => "x86_64",
        }
    }

    /// The 32-bit architecture implied by selecting this 64-bit one.
    ///
    /// Returns `None` for architectures that are already 32-bit.
    pub fn companion_32bit(&self) -> Option<Arch> {
        match self {
            Arch::Arm64 => Some(Arch::Arm),
            Arch::X86_64 => Some(Arch::X86),
            Arch::Arm | Arch::X86 => None,
        }
    }

    /// Check if this is a 64-bit architecture.
    pub fn is_64bit(&self) -> bool {
        self.companion_32bit().is_some()
    }

    /// Map a commonly used spelling that is not accepted to the supported name
    /// it most likely means.
    ///
    /// Only used for diagnostics; `"aarch64".parse::<Arch>()` still fails.
    pub fn hint_for(name: &str) -> Option<Arch> {
        match name.to_ascii_lowercase().as_str() {
            "aarch64" | "armv8" | "armv8a" | "arm64-v8a" => Some(Arch::Arm64),
            "armv7" | "armv7a" | "armeabi" | "armeabi-v7a" | "armhf" | "aarch32" => {
                Some(Arch::Arm)
            }
            "i386" | "i486" | "i586" | "i686" | "x86_32" | "ia32" => Some(Arch::X86),
            "amd64" | "x64" | "x86-64" | "x8664" => Some(Arch::X86_64),
            other => other.parse().ok(),
        }
    }

    /// Names of every supported architecture.
    pub fn all_names() -> Vec<String> {
        Arch::ALL.iter().map(|a| a.as_str().to_string()).collect()
    }
}

impl std::str::FromStr for Arch {
    type Err = ArchParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arm" => Ok(Arch::Arm),
            "arm64" => Ok(Arch::Arm64),
            "x86" => Ok(Arch::X86),
            "x86_64" => Ok(Arch::X86_64),
            _ => Err(ArchParseError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unsupported architecture name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchParseError(pub String);

impl std::fmt::Display for ArchParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown codegen architecture {:?}, valid values: arm, arm64, x86, x86_64",
            self.0
        )
    }
}

impl std::error::Error for ArchParseError {}
