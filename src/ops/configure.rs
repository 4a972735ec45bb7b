//! Module configuration.
//!
//! Runs selection and merging for a module and hands the result to the
//! module's context. A module that fails to resolve gets a fatal error and
//! no patches at all.

use rayon::prelude::*;

use crate::core::module::Module;
use crate::host::{DeviceConfig, Environment, ModuleContext, PropertyBag};
use crate::resolver::{resolve, select, CodegenError, SelectOptions};

/// Configure one module against a host context.
///
/// Returns the number of patches attached. On failure the error is both
/// reported to `ctx` and returned.
pub fn configure_module<E, D, C>(
    module: &Module,
    options: &SelectOptions,
    env: &E,
    device: &D,
    ctx: &mut C,
) -> Result<usize, CodegenError>
where
    E: Environment + ?Sized,
    D: DeviceConfig + ?Sized,
    C: ModuleContext + ?Sized,
{
    let selection = select(options, &env, &device);

    let resolved = match resolve(module, &selection) {
        Ok(resolved) => resolved,
        Err(e) => {
            ctx.report_fatal(e.to_string());
            return Err(e);
        }
    };

    let patches = resolved.patches();
    let count = patches.len();
    for patch in patches {
        ctx.attach(patch);
    }

    tracing::debug!(
        "{}: attached {} patches (device: {}, host: {})",
        ctx.module_name(),
        count,
        selection.device.join(" "),
        selection.host.join(" ")
    );
    Ok(count)
}

/// Outcome of configuring one module.
#[derive(Debug)]
pub struct ModuleReport {
    /// The module's accumulated properties
    pub bag: PropertyBag,

    /// The error that stopped the module, if any
    pub error: Option<CodegenError>,
}

impl ModuleReport {
    /// Check if the module configured cleanly.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Configure independent modules in parallel.
///
/// Reports come back in the order of `modules`.
pub fn configure_all<E, D>(
    modules: &[Module],
    options: &SelectOptions,
    env: &E,
    device: &D,
) -> Vec<ModuleReport>
where
    E: Environment + Sync + ?Sized,
    D: DeviceConfig + Sync + ?Sized,
{
    modules
        .par_iter()
        .map(|module| {
            let mut bag = PropertyBag::new(module.name.clone());
            let error = configure_module(module, options, env, device, &mut bag).err();
            ModuleReport { bag, error }
        })
        .collect()
}
