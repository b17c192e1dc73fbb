use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fidelity_yaml::{DumpOptions, LoadOptions};

#[derive(Parser)]
#[command(name = "yamltidy")]
#[command(about = "Normalize YAML files to a stable, diff-friendly form")]
#[command(version)]
struct Cli {
    /// Input files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Fail on duplicate mapping keys instead of keeping the last value
    #[arg(short, long)]
    strict: bool,

    /// Indent width (2..=9)
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Rewrite each file instead of printing to stdout
    #[arg(short, long)]
    in_place: bool,

    /// Print the loaded document as JSON instead of normalized YAML
    #[arg(long, conflicts_with = "in_place")]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yamltidy=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let load_options = LoadOptions {
        allow_duplicate_keys: !cli.strict,
    };
    let dump_options = DumpOptions {
        indent: cli.indent,
        ..Default::default()
    };

    let mut failures = 0usize;
    for path in &cli.files {
        if let Err(e) = process(path, &cli, &load_options, &dump_options) {
            tracing::error!("{}: {:#}", path.display(), e);
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} file(s) failed");
    }
    Ok(())
}

fn process(
    path: &Path,
    cli: &Cli,
    load_options: &LoadOptions,
    dump_options: &DumpOptions,
) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let value = fidelity_yaml::load_with(&source, load_options)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let output = fidelity_yaml::dump_with(&value, dump_options)?;

    if cli.in_place {
        if output == source {
            tracing::debug!("{}: already tidy", path.display());
        } else {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("{}: rewritten", path.display());
        }
    } else {
        print!("{output}");
    }
    Ok(())
}
