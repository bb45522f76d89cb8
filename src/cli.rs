//! Command-line interface types.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::splice::MarkerStyle;

/// Top-level CLI entry point for the section generator.
#[derive(Parser, Debug)]
#[command(
    name = "topgen",
    about = "Config-driven generator for marked sections in build files",
    version
)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across all subcommands
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "topgen.conf")]
    pub config: PathBuf,

    /// Preview changes without writing files
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load and validate the configuration, printing a summary
    Check,
    /// Splice the generated dependency section into target files
    Gen(GenOpts),
    /// Splice an arbitrary body into one target file
    Splice(SpliceOpts),
    /// Print version information
    Version,
}

/// Options for the `gen` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct GenOpts {
    /// Target files to update
    #[arg(required = true)]
    pub targets: Vec<PathBuf>,

    /// Section tag identifying the generated block
    #[arg(long, default_value = "META")]
    pub tag: String,

    /// Force a marker style instead of inferring it from the target extension
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,
}

/// Options for the `splice` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct SpliceOpts {
    /// Target file to update
    #[arg(long)]
    pub target: PathBuf,

    /// Section tag identifying the generated block
    #[arg(long)]
    pub tag: String,

    /// Force a marker style instead of inferring it from the target extension
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,

    /// Read the section body from this file instead of stdin
    #[arg(long)]
    pub body_file: Option<PathBuf>,
}

/// Marker style selection on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    /// `# begin …` / `# end` line comments
    Hash,
    /// `(* begin … *)` / `(* end *)` comments
    Block,
}

impl From<StyleArg> for MarkerStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Hash => Self::Hash,
            StyleArg::Block => Self::Block,
        }
    }
}
