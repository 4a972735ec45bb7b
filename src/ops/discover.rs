//! Manifest discovery.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::{DirEntry, WalkDir};

use crate::core::manifest::{Manifest, MANIFEST_NAME};

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == "target"
}

/// Find every manifest below `root`, sorted by path.
///
/// Hidden directories and `target/` are not searched.
pub fn find_manifests(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e))
    {
        let entry =
            entry.with_context(|| format!("failed to walk directory: {}", root.display()))?;
        if entry.file_type().is_file() && entry.file_name() == MANIFEST_NAME {
            found.push(entry.into_path());
        }
    }

    found.sort();
    tracing::debug!("found {} manifests under {}", found.len(), root.display());
    Ok(found)
}

/// Load manifests, failing on the first that does not parse.
pub fn load_manifests(paths: &[PathBuf]) -> Result<Vec<Manifest>> {
    paths.iter().map(|path| Manifest::load(path)).collect()
}

/// Fail if two manifests declare the same module.
pub fn check_unique_names(manifests: &[Manifest]) -> Result<()> {
    let mut seen: HashMap<&str, &Path> = HashMap::new();
    for manifest in manifests {
        if let Some(first) = seen.insert(manifest.name(), &manifest.path) {
            anyhow::bail!(
                "module `{}` is declared by both {} and {}",
                manifest.name(),
                first.display(),
                manifest.path.display()
            );
        }
    }
    Ok(())
}
