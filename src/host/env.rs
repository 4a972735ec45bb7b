//! Environment and device configuration sources.

use std::collections::HashMap;

use crate::host::{DeviceConfig, Environment};

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, name: &str, default: &str) -> String {
        match std::env::var(name) {
            Ok(value) if !value.is_empty() => value,
            _ => default.to_string(),
        }
    }
}

/// A fixed set of variables.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        MapEnv {
            vars: HashMap::new(),
        }
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Check if no variables are set.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Environment for MapEnv {
    fn get(&self, name: &str, default: &str) -> String {
        match self.vars.get(name) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => default.to_string(),
        }
    }
}

/// Variables from `top` shadow those from `base`.
#[derive(Debug, Clone)]
pub struct LayeredEnv<T, B> {
    top: T,
    base: B,
}

impl<T: Environment, B: Environment> LayeredEnv<T, B> {
    /// Layer `top` over `base`.
    pub fn new(top: T, base: B) -> Self {
        LayeredEnv { top, base }
    }
}

impl<T: Environment, B: Environment> Environment for LayeredEnv<T, B> {
    fn get(&self, name: &str, default: &str) -> String {
        let fallback = self.base.get(name, default);
        self.top.get(name, &fallback)
    }
}

/// A device configuration given as a plain list of architecture names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredArches(pub Vec<String>);

impl DeclaredArches {
    /// Create from any list of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DeclaredArches(names.into_iter().map(Into::into).collect())
    }
}

impl DeviceConfig for DeclaredArches {
    fn declared_device_arches(&self) -> Vec<String> {
        self.0.clone()
    }
}
