//! CLI entry point for tonesmith.

use std::path::Path;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use tracing::{info, warn};

use tonesmith::cli::{Cli, OutputFormat, VariantArg};
use tonesmith::config::SchemeConfig;
use tonesmith::generate::{GenerateConfig, SchemeVariant, generate, parse_seed};
use tonesmith::logging::init_logging;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Handle shell completions early (before logging setup)
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "tonesmith", &mut std::io::stdout());
        return Ok(());
    }

    let _log_guard = init_logging(cli.log_file.as_deref(), Some(&cli.log_level));

    info!(version = env!("CARGO_PKG_VERSION"), "started");

    // Layer the generation config: defaults < TOML file < CLI args
    let mut config = match cli.config {
        Some(ref path) => SchemeConfig::load(path)
            .and_then(|c| c.to_generate_config())
            .map_err(|e| eyre!("Configuration error: {}", e))?,
        None => GenerateConfig::default(),
    };
    if let Some(ref seed) = cli.seed {
        config.seed = parse_seed(seed).map_err(|e| eyre!(e))?;
    } else if cli.config.is_none() {
        bail!("a seed color is required (pass --seed or --config)");
    }
    if let Some(ref name) = cli.name {
        config.name = name.clone();
    }
    if cli.content {
        config.content = true;
    }
    if cli.ramps {
        config.include_ramps = true;
    }

    // Handle --save-config if specified
    if let Some(ref save_path) = cli.save_config {
        SchemeConfig::from_generate_config(&config)
            .save(save_path)
            .map_err(|e| eyre!("Failed to save config: {}", e))?;
        eprintln!("Saved configuration to {}", save_path.display());
    }

    // Determine which variants to generate
    let variants: Vec<SchemeVariant> = match cli.variant {
        VariantArg::Dark => vec![SchemeVariant::Dark],
        VariantArg::Light => vec![SchemeVariant::Light],
        VariantArg::Both => {
            if cli.output.is_none() {
                bail!("--variant both requires --output to specify base filename");
            }
            vec![SchemeVariant::Dark, SchemeVariant::Light]
        }
    };

    for variant in variants {
        let result = generate(&config, variant);

        if !result.warnings.is_empty() {
            eprintln!("Generation warnings:");
            for warning in &result.warnings {
                warn!(warning = %warning, "generation warning");
                eprintln!("  {warning}");
            }
        }

        let output_content = match cli.format {
            OutputFormat::Yaml => serde_yaml::to_string(&result.scheme)
                .wrap_err("Failed to serialize scheme to YAML")?,
            OutputFormat::Json => serde_json::to_string_pretty(&result.scheme)
                .wrap_err("Failed to serialize scheme to JSON")?,
        };

        if let Some(ref base_path) = cli.output {
            let output_path = if cli.variant == VariantArg::Both {
                variant_filename(base_path, variant, cli.format)
            } else {
                base_path.clone()
            };

            info!(path = %output_path.display(), "wrote scheme");
            std::fs::write(&output_path, &output_content)
                .wrap_err_with(|| format!("Failed to write to {}", output_path.display()))?;
            eprintln!("Wrote scheme to {}", output_path.display());
        } else {
            print!("{output_content}");
        }
    }

    Ok(())
}

/// Generate output filename with variant suffix and format extension.
fn variant_filename(
    base_path: &Path,
    variant: SchemeVariant,
    format: OutputFormat,
) -> std::path::PathBuf {
    let suffix = match variant {
        SchemeVariant::Dark => "-dark",
        SchemeVariant::Light => "-light",
    };

    let ext = match format {
        OutputFormat::Yaml => "yaml",
        OutputFormat::Json => "json",
    };

    let stem = base_path.file_stem().unwrap_or_default().to_string_lossy();
    let parent = base_path.parent().unwrap_or(Path::new(""));

    parent.join(format!("{stem}{suffix}.{ext}"))
}
