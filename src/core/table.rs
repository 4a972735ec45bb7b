//! The per-architecture property table of a module.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::arch::Arch;
use crate::core::properties::ArchProperties;

/// Properties keyed by architecture.
///
/// A table may be partial. Tables loaded from a manifest are made total
/// with [`CodegenTable::filled`], so every supported architecture has an
/// entry, empty or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodegenTable {
    entries: BTreeMap<Arch, ArchProperties>,
}

impl CodegenTable {
    /// Create an empty table.
    pub fn new() -> Self {
        CodegenTable {
            entries: BTreeMap::new(),
        }
    }

    /// Set the properties of an architecture, replacing any previous entry.
    pub fn insert(&mut self, arch: Arch, props: ArchProperties) {
        self.entries.insert(arch, props);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, arch: Arch, props: ArchProperties) -> Self {
        self.insert(arch, props);
        self
    }

    /// Give every supported architecture an entry, empty if absent.
    pub fn filled(mut self) -> Self {
        for arch in Arch::ALL {
            self.entries.entry(arch).or_default();
        }
        self
    }

    /// Look up an architecture's properties.
    pub fn get(&self, arch: Arch) -> Option<&ArchProperties> {
        self.entries.get(&arch)
    }

    /// Check if every supported architecture has an entry.
    pub fn is_total(&self) -> bool {
        Arch::ALL.iter().all(|arch| self.entries.contains_key(arch))
    }

    /// Architectures with an entry, in canonical order.
    pub fn arches(&self) -> impl Iterator<Item = Arch> + '_ {
        self.entries.keys().copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
