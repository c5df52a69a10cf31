//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Render Maven dependency:tree reports as numbered, color- and icon-coded trees
#[derive(Parser, Debug)]
#[command(name = "mvntree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Report file (output of `mvn dependency:tree`)
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Debug verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Config file (overrides the global config)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub show_config: bool,

    /// Print a configuration template and exit
    #[arg(long)]
    pub config_template: bool,

    /// Generate shell completions
    #[arg(long = "completions", value_enum)]
    pub generator: Option<clap_complete::Shell>,
}
