//! `codegen-arch arches` command

use anyhow::Result;

use crate::cli::ArchesArgs;
use codegen_arch::core::Axis;
use codegen_arch::resolver::select;
use codegen_arch::util::GlobalContext;

pub fn execute(args: ArchesArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let config = super::load_config(&ctx);
    let inputs = super::selection_inputs(&config, &args.selection);

    let selection = select(&inputs.options, &inputs.env, &inputs.device);

    for axis in Axis::ALL {
        let arches = selection.get(axis);
        if arches.is_empty() {
            println!("{}: (none)", axis);
        } else {
            println!("{}: {}", axis, arches.join(" "));
        }
    }

    Ok(())
}
