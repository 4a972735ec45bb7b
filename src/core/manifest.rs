//! Codegen.toml manifest parsing and schema.
//!
//! A manifest describes one module and the properties each architecture
//! contributes to it:
//!
//! ```toml
//! [module]
//! name = "libart-compiler"
//! kind = "library"
//!
//! [codegen.arm64]
//! srcs = ["optimizing/code_generator_arm64.cc"]
//! cflags = ["-DART_ENABLE_CODEGEN_arm64"]
//! static.whole_static_libs = ["libvixl"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::module::{Module, ModuleKind};
use crate::core::table::CodegenTable;

/// Canonical manifest file name.
pub const MANIFEST_NAME: &str = "Codegen.toml";

/// Module metadata from the [module] section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleMetadata {
    /// Module name
    pub name: String,

    /// Module kind (defaults to library)
    #[serde(default)]
    pub kind: ModuleKind,

    /// Description
    #[serde(default)]
    pub description: Option<String>,
}

/// Raw manifest as deserialized from TOML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    module: Option<ModuleMetadata>,

    #[serde(default)]
    codegen: CodegenTable,
}

/// The parsed Codegen.toml manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Module metadata
    pub metadata: ModuleMetadata,

    /// Per-architecture table, total over the supported architectures
    pub codegen: CodegenTable,

    /// Path of the manifest file
    pub path: PathBuf,
}

impl Manifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;

        Self::parse(&content, path)
    }

    /// Parse manifest content.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawManifest = toml::from_str(content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        let Some(metadata) = raw.module else {
            anyhow::bail!("manifest at {} must have a [module] section", path.display());
        };

        if metadata.name.trim().is_empty() {
            anyhow::bail!("manifest at {} has an empty module name", path.display());
        }

        let unused: Vec<_> = raw
            .codegen
            .arches()
            .filter(|arch| raw.codegen.get(*arch).is_some_and(|p| p.is_empty()))
            .collect();
        for arch in unused {
            tracing::debug!(
                "{}: [codegen.{}] contributes no properties",
                metadata.name,
                arch
            );
        }

        Ok(Manifest {
            metadata,
            codegen: raw.codegen.filled(),
            path: path.to_path_buf(),
        })
    }

    /// Module name.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Convert into the module the resolver works on.
    pub fn to_module(&self) -> Module {
        Module::new(self.metadata.name.clone(), self.metadata.kind)
            .with_codegen(self.codegen.clone())
    }
}
