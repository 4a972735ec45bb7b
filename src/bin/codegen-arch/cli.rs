//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// codegen-arch - per-architecture codegen properties for build modules
#[derive(Parser)]
#[command(name = "codegen-arch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the codegen properties of one or more modules
    Resolve(ResolveArgs),

    /// Show the architectures selected for each axis
    Arches(ArchesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Architecture selection inputs shared by commands.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Space-separated host architectures (overrides the environment)
    #[arg(long, value_name = "ARCHS")]
    pub host_arches: Option<String>,

    /// Space-separated device architectures (overrides the environment)
    #[arg(long, value_name = "ARCHS")]
    pub device_arches: Option<String>,

    /// Declared device architecture (repeatable, replaces the configured device)
    #[arg(long = "device-arch", value_name = "ARCH")]
    pub device_arch: Vec<String>,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Manifests to resolve (defaults to the nearest Codegen.toml)
    pub manifests: Vec<PathBuf>,

    /// Resolve every Codegen.toml below this directory
    #[arg(long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ArchesArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Output format for resolved properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}
