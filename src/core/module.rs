//! Module definitions - what gets configured.
//!
//! A Module is one buildable unit together with its per-architecture
//! codegen table.

use serde::{Deserialize, Serialize};

use crate::core::table::CodegenTable;

/// The kind of module being configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// Executable binary
    #[serde(alias = "bin", alias = "exe")]
    Binary,

    /// Library built in both static and shared variants
    #[default]
    #[serde(alias = "lib")]
    Library,

    /// Static library only
    #[serde(alias = "staticlib")]
    Static,

    /// Shared library only
    #[serde(alias = "sharedlib", alias = "dylib")]
    Shared,
}

impl ModuleKind {
    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Binary => "binary",
            ModuleKind::Library => "library",
            ModuleKind::Static => "static",
            ModuleKind::Shared => "shared",
        }
    }

    /// Check if this is a library (and so takes library properties).
    pub fn is_library(&self) -> bool {
        matches!(
            self,
            ModuleKind::Library | ModuleKind::Static | ModuleKind::Shared
        )
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A module with its codegen table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Module name
    pub name: String,

    /// What kind of artifact the module produces
    pub kind: ModuleKind,

    /// Per-architecture properties
    pub codegen: CodegenTable,
}

impl Module {
    /// Create a new module with an empty table.
    pub fn new(name: impl Into<String>, kind: ModuleKind) -> Self {
        Module {
            name: name.into(),
            kind,
            codegen: CodegenTable::new(),
        }
    }

    /// Set the codegen table.
    pub fn with_codegen(mut self, codegen: CodegenTable) -> Self {
        self.codegen = codegen;
        self
    }

    /// Check if the module takes library properties.
    pub fn is_library(&self) -> bool {
        self.kind.is_library()
    }
}
