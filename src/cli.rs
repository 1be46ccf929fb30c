//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

/// Output variant selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Dark variant
    #[default]
    Dark,
    /// Light variant
    Light,
    /// Generate both variants (requires --output)
    Both,
}

/// Serialization format for the generated scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML output
    #[default]
    Yaml,
    /// JSON output
    Json,
}

/// Design-token scheme generator using the HCT color space.
#[derive(Parser, Debug)]
#[command(name = "tonesmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed color in any CSS color syntax (#0000ff, rgb(...), blue)
    #[arg(short, long, required_unless_present_any = ["config", "completions"])]
    pub seed: Option<String>,

    /// Derive palette chroma from the seed instead of the vivid defaults
    #[arg(long)]
    pub content: bool,

    /// Output variant: dark, light, or both
    #[arg(long, value_enum, default_value_t = VariantArg::Dark)]
    pub variant: VariantArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Output file (stdout if not specified, required for --variant both)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Scheme name
    #[arg(long)]
    pub name: Option<String>,

    /// Emit full tonal ramps alongside the role tokens
    #[arg(long)]
    pub ramps: bool,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save current configuration to TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Log file path
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Generate shell completions and exit
    #[arg(long, value_enum)]
    pub completions: Option<Shell>,
}
