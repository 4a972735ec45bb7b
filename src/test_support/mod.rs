//! Test utilities for unit tests.
//!
//! Provides sample manifests, tables and modules, plus a device
//! configuration that counts how often it is queried.

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};

pub use fixtures::*;

use crate::host::DeviceConfig;

/// Device configuration that records how many times it was asked.
#[derive(Debug, Default)]
pub struct CountingDevice {
    arches: Vec<String>,
    calls: AtomicUsize,
}

impl CountingDevice {
    /// Create a device declaring the given architectures.
    pub fn new(arches: &[&str]) -> Self {
        CountingDevice {
            arches: arches.iter().map(|s| s.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of queries so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DeviceConfig for CountingDevice {
    fn declared_device_arches(&self) -> Vec<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.arches.clone()
    }
}
