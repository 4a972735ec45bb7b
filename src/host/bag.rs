//! In-memory module property set.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::host::{ModuleContext, Patch};

/// Accumulated properties and errors of one module.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PropertyBag {
    /// Module name
    pub name: String,

    /// Merged properties
    pub properties: Map<String, Value>,

    /// Fatal configuration errors reported for the module
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,

    #[serde(skip)]
    attached: usize,
}

impl PropertyBag {
    /// Create an empty bag for a module.
    pub fn new(name: impl Into<String>) -> Self {
        PropertyBag {
            name: name.into(),
            properties: Map::new(),
            errors: Vec::new(),
            attached: 0,
        }
    }

    /// Check if a fatal error was reported.
    pub fn is_failed(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of patches attached so far.
    pub fn patch_count(&self) -> usize {
        self.attached
    }

    /// Look up a value by path, e.g. `["target", "host", "srcs"]`.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.properties.get(*first)?;
        for key in rest {
            current = current.as_object()?.get(*key)?;
        }
        Some(current)
    }

    /// Look up a list of strings by path.
    pub fn strings(&self, path: &[&str]) -> Option<Vec<String>> {
        self.lookup(path)?
            .as_array()?
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect()
    }
}

impl ModuleContext for PropertyBag {
    fn module_name(&self) -> &str {
        &self.name
    }

    fn report_fatal(&mut self, message: String) {
        tracing::debug!("{}: {}", self.name, message);
        self.errors.push(message);
    }

    fn attach(&mut self, patch: Patch) {
        match patch.to_value() {
            Ok(Value::Object(map)) => {
                append_map(&mut self.properties, map);
                self.attached += 1;
            }
            Ok(_) => {}
            Err(e) => self.errors.push(format!(
                "failed to encode {} patch for {}: {}",
                patch.scope(),
                patch.axis,
                e
            )),
        }
    }
}

/// Deep-merge `src` into `dst`: objects merge, arrays append, scalars replace.
fn append_map(dst: &mut Map<String, Value>, src: Map<String, Value>) {
    for (key, value) in src {
        match dst.get_mut(&key) {
            Some(existing) => append_value(existing, value),
            None => {
                dst.insert(key, value);
            }
        }
    }
}

fn append_value(dst: &mut Value, src: Value) {
    match (dst, src) {
        (Value::Object(d), Value::Object(s)) => append_map(d, s),
        (Value::Array(d), Value::Array(s)) => d.extend(s),
        (d, s) => *d = s,
    }
}
