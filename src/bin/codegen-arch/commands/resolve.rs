//! `codegen-arch resolve` command

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::cli::{OutputFormat, ResolveArgs};
use codegen_arch::core::Module;
use codegen_arch::ops::{check_unique_names, configure_all, find_manifests, load_manifests};
use codegen_arch::util::diagnostic::{emit, suggestions};
use codegen_arch::util::GlobalContext;

pub fn execute(args: ResolveArgs, color: bool) -> Result<bool> {
    let mut ctx = GlobalContext::new()?;
    ctx.set_color(color);

    let paths = manifest_paths(&ctx, &args)?;
    let manifests = load_manifests(&paths)?;
    check_unique_names(&manifests)?;
    let modules: Vec<Module> = manifests.iter().map(|m| m.to_module()).collect();

    let config = super::load_config(&ctx);
    let inputs = super::selection_inputs(&config, &args.selection);

    let reports = configure_all(&modules, &inputs.options, &inputs.env, &inputs.device);

    let mut output = Map::new();
    let mut all_ok = true;

    for (manifest, report) in manifests.iter().zip(reports) {
        match report.error {
            Some(ref e) => {
                all_ok = false;
                let diag = e
                    .to_diagnostic(&report.bag.name)
                    .with_location(manifest.path.clone());
                emit(&diag, ctx.color());
            }
            None => {
                tracing::info!(
                    "Resolved {} ({} patches)",
                    report.bag.name,
                    report.bag.patch_count()
                );
                output.insert(report.bag.name.clone(), Value::Object(report.bag.properties));
            }
        }
    }

    let output = Value::Object(output);
    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&output)
            .context("failed to serialize resolved properties")?,
        OutputFormat::Toml => toml::to_string_pretty(&output)
            .context("failed to serialize resolved properties")?,
    };
    println!("{}", rendered.trim_end());

    Ok(all_ok)
}

fn manifest_paths(ctx: &GlobalContext, args: &ResolveArgs) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = args
        .manifests
        .iter()
        .map(|p| ctx.resolve_path(p))
        .collect();

    if let Some(ref dir) = args.workspace {
        let root = ctx.resolve_path(dir);
        let found = find_manifests(&root)?;
        if found.is_empty() {
            anyhow::bail!(
                "no Codegen.toml found under {}\n{}",
                root.display(),
                suggestions::NO_MANIFEST
            );
        }
        for path in found {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    if paths.is_empty() {
        let path = ctx
            .find_manifest()
            .map_err(|e| anyhow::anyhow!("{}\n{}", e, suggestions::NO_MANIFEST))?;
        paths.push(path);
    }

    Ok(paths)
}
