//! Command implementations

pub mod arches;
pub mod completions;
pub mod resolve;

use codegen_arch::host::{DeclaredArches, LayeredEnv, MapEnv, ProcessEnv};
use codegen_arch::resolver::SelectOptions;
use codegen_arch::util::{Config, GlobalContext};

use crate::cli::SelectionArgs;

/// Selection inputs after applying config, environment and flags.
pub struct SelectionInputs {
    pub options: SelectOptions,
    pub env: LayeredEnv<MapEnv, ProcessEnv>,
    pub device: DeclaredArches,
}

/// Combine configuration files with command-line flags.
///
/// Flags shadow the environment variables named in the config; declared
/// `--device-arch` values replace the configured device.
pub fn selection_inputs(config: &Config, args: &SelectionArgs) -> SelectionInputs {
    let options = config.select_options();

    let mut flags = MapEnv::new();
    if let Some(ref host) = args.host_arches {
        flags.set(options.host.var.clone(), host.clone());
    }
    if let Some(ref device) = args.device_arches {
        flags.set(options.device.var.clone(), device.clone());
    }

    let device = if args.device_arch.is_empty() {
        config.device_config()
    } else {
        DeclaredArches(args.device_arch.clone())
    };

    SelectionInputs {
        options,
        env: LayeredEnv::new(flags, ProcessEnv),
        device,
    }
}

/// Load the configuration for the current directory.
pub fn load_config(ctx: &GlobalContext) -> Config {
    let config = ctx.load_config();
    tracing::debug!(
        "config: device arches [{}]",
        config.device.arches.join(", ")
    );
    config
}
