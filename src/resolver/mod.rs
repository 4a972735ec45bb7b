//! Codegen resolution.
//!
//! Resolution runs in two phases. [`select`] picks the architectures of each
//! axis, then [`resolve`] merges the module's table for them. Both phases are
//! pure and deterministic; attaching the result to a module happens in
//! `ops::configure`.

pub mod errors;
pub mod merge;
pub mod select;

pub use errors::CodegenError;
pub use merge::{merge_axis, AxisProperties};
pub use select::{
    default_device_arches, default_host_arches, select, select_axis, split_override,
    ArchSelection, OverrideSource, SelectOptions,
};

use crate::core::axis::Axis;
use crate::core::module::Module;
use crate::host::Patch;

/// Merged properties of a module, per axis.
///
/// An axis with no selected architectures has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedCodegen {
    pub device: Option<AxisProperties>,
    pub host: Option<AxisProperties>,
}

impl ResolvedCodegen {
    /// The merged properties of an axis.
    pub fn get(&self, axis: Axis) -> Option<&AxisProperties> {
        match axis {
            Axis::Device => self.device.as_ref(),
            Axis::Host => self.host.as_ref(),
        }
    }

    fn slot(&mut self, axis: Axis) -> &mut Option<AxisProperties> {
        match axis {
            Axis::Device => &mut self.device,
            Axis::Host => &mut self.host,
        }
    }

    /// Patches to attach, in emission order.
    ///
    /// Device before host; per axis sources, then flags, then libraries.
    pub fn patches(&self) -> Vec<Patch> {
        let mut patches = Vec::new();
        for axis in Axis::ALL {
            let Some(props) = self.get(axis) else {
                continue;
            };
            patches.push(Patch::sources(axis, props.sources.clone()));
            patches.push(Patch::common(axis, props.common.clone()));
            if let Some(ref libs) = props.library {
                patches.push(Patch::library(axis, libs.clone()));
            }
        }
        patches
    }
}

/// Merge a module's table for the selected architectures.
///
/// Each axis is merged independently. The first failing axis aborts the
/// whole module, so either every axis resolves or nothing does.
pub fn resolve(module: &Module, selection: &ArchSelection) -> Result<ResolvedCodegen, CodegenError> {
    let mut resolved = ResolvedCodegen::default();

    for axis in Axis::ALL {
        let arches = selection.get(axis);
        if arches.is_empty() {
            tracing::debug!("{}: no {} architectures selected", module.name, axis);
            continue;
        }

        let merged = merge_axis(axis, arches, &module.codegen, module.is_library())?;
        *resolved.slot(axis) = Some(merged);
    }

    Ok(resolved)
}
