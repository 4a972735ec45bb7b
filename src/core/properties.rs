//! Per-architecture property fragments.
//!
//! A fragment is split three ways because the pieces attach to different
//! scopes of a module: sources go to the source scope, flags and library
//! lists to the general scope. Library lists only matter for library
//! modules.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Source files compiled for an architecture.
///
/// The same path may appear under several architectures; the merged list
/// for an axis is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceProperties {
    /// Source file paths
    #[serde(default)]
    pub srcs: Vec<String>,
}

/// Compiler flags for an architecture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonProperties {
    /// C and C++ compiler flags
    #[serde(default)]
    pub cflags: Vec<String>,

    /// C++-only compiler flags
    #[serde(default)]
    pub cppflags: Vec<String>,
}

/// Static libraries linked as whole archives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticLibs {
    #[serde(default)]
    pub whole_static_libs: Vec<String>,
}

/// Shared libraries linked dynamically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SharedLibs {
    #[serde(default)]
    pub shared_libs: Vec<String>,
}

/// Library dependencies for an architecture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryProperties {
    /// Static library variant
    #[serde(default, rename = "static")]
    pub static_libs: StaticLibs,

    /// Shared library variant
    #[serde(default, rename = "shared")]
    pub shared_libs: SharedLibs,
}

/// Everything one architecture contributes to a module.
///
/// Deserialized through [`RawArchProperties`], so a misspelled key is an
/// error rather than a silently empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawArchProperties")]
pub struct ArchProperties {
    #[serde(flatten)]
    pub sources: SourceProperties,

    #[serde(flatten)]
    pub common: CommonProperties,

    #[serde(flatten)]
    pub library: LibraryProperties,
}

/// A `[codegen.<arch>]` section as written in a manifest.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawArchProperties {
    #[serde(default)]
    srcs: Vec<String>,

    #[serde(default)]
    cflags: Vec<String>,

    #[serde(default)]
    cppflags: Vec<String>,

    #[serde(default, rename = "static")]
    static_libs: StaticLibs,

    #[serde(default, rename = "shared")]
    shared_libs: SharedLibs,
}

impl From<RawArchProperties> for ArchProperties {
    fn from(raw: RawArchProperties) -> Self {
        ArchProperties {
            sources: SourceProperties { srcs: raw.srcs },
            common: CommonProperties {
                cflags: raw.cflags,
                cppflags: raw.cppflags,
            },
            library: LibraryProperties {
                static_libs: raw.static_libs,
                shared_libs: raw.shared_libs,
            },
        }
    }
}

impl SourceProperties {
    /// Append another fragment's sources.
    pub fn merge(&mut self, other: &SourceProperties) {
        self.srcs.extend(other.srcs.iter().cloned());
    }

    /// Drop repeated paths, keeping the first occurrence of each.
    pub fn dedup(&mut self) {
        self.srcs = first_unique(std::mem::take(&mut self.srcs));
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.srcs.is_empty()
    }
}

impl CommonProperties {
    /// Append another fragment's flags. Repeated flags are kept.
    pub fn merge(&mut self, other: &CommonProperties) {
        self.cflags.extend(other.cflags.iter().cloned());
        self.cppflags.extend(other.cppflags.iter().cloned());
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.cflags.is_empty() && self.cppflags.is_empty()
    }
}

impl LibraryProperties {
    /// Append another fragment's libraries. Repeated names are kept.
    pub fn merge(&mut self, other: &LibraryProperties) {
        self.static_libs
            .whole_static_libs
            .extend(other.static_libs.whole_static_libs.iter().cloned());
        self.shared_libs
            .shared_libs
            .extend(other.shared_libs.shared_libs.iter().cloned());
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.static_libs.whole_static_libs.is_empty() && self.shared_libs.shared_libs.is_empty()
    }
}

impl ArchProperties {
    /// Check if the architecture contributes nothing.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.common.is_empty() && self.library.is_empty()
    }
}

/// Remove duplicates from a list, preserving the order of first occurrence.
pub fn first_unique(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
