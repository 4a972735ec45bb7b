//! Axis-scoped property patches.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::axis::Axis;
use crate::core::properties::{CommonProperties, LibraryProperties, SourceProperties};

/// Which part of a module a patch applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchScope {
    /// Source file list
    Sources,
    /// Compiler flags
    Common,
    /// Library dependencies
    Library,
}

impl std::fmt::Display for PatchScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatchScope::Sources => write!(f, "sources"),
            PatchScope::Common => write!(f, "common"),
            PatchScope::Library => write!(f, "library"),
        }
    }
}

/// Properties carried by a patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PatchBody {
    Sources(SourceProperties),
    Common(CommonProperties),
    Library(LibraryProperties),
}

/// A structured patch attaching properties under one axis.
///
/// Structurally a patch is `{"target": {"<axis>": <body>}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub axis: Axis,
    pub body: PatchBody,
}

impl Patch {
    pub fn sources(axis: Axis, props: SourceProperties) -> Self {
        Patch {
            axis,
            body: PatchBody::Sources(props),
        }
    }

    pub fn common(axis: Axis, props: CommonProperties) -> Self {
        Patch {
            axis,
            body: PatchBody::Common(props),
        }
    }

    pub fn library(axis: Axis, props: LibraryProperties) -> Self {
        Patch {
            axis,
            body: PatchBody::Library(props),
        }
    }

    /// Which part of the module this patch applies to.
    pub fn scope(&self) -> PatchScope {
        match self.body {
            PatchBody::Sources(_) => PatchScope::Sources,
            PatchBody::Common(_) => PatchScope::Common,
            PatchBody::Library(_) => PatchScope::Library,
        }
    }

    /// Structured form of the patch.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        let body = serde_json::to_value(&self.body)?;

        let mut axis = Map::new();
        axis.insert(self.axis.key().to_string(), body);

        let mut root = Map::new();
        root.insert("target".to_string(), Value::Object(axis));
        Ok(Value::Object(root))
    }
}
