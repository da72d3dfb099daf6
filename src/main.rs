//! gauge — render gauge definitions into markup and initialisation scripts.
//!
//! Run with:  `RUST_LOG=debug gauge render`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gauge")]
#[command(about = "Render radial and linear gauge definitions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Gauge file path (default: $XDG_CONFIG_HOME/gauge/gauges.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render gauges to HTML placeholders and scripts
    Render {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render only the gauge with this name
        #[arg(long)]
        name: Option<String>,
    },

    /// Report suspicious values without rendering
    Check,

    /// Print an example gauge file
    Init,
}

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let path = cli.config.unwrap_or_else(gauge_config::default_path);

    match cli.command {
        Commands::Render { output, name } => {
            let file = gauge_config::load(&path)
                .with_context(|| format!("cannot load '{}'", path.display()))?;
            let html = match name {
                Some(name) => gauge_renderer::render_named(&file, &name)?,
                None => gauge_renderer::render_all(&file)?,
            };
            match output {
                Some(out) => {
                    std::fs::write(&out, html + "\n")
                        .with_context(|| format!("cannot write '{}'", out.display()))?;
                    tracing::info!("wrote {}", out.display());
                }
                None => println!("{html}"),
            }
        }
        Commands::Check => {
            let file = gauge_config::load(&path)
                .with_context(|| format!("cannot load '{}'", path.display()))?;
            let diags = gauge_theme::lint_file(&file);
            for diag in &diags {
                println!("{diag}");
            }
            if !diags.is_empty() {
                anyhow::bail!("{} problem(s) in '{}'", diags.len(), path.display());
            }
            tracing::info!("'{}' looks fine", path.display());
        }
        Commands::Init => print!("{}", gauge_config::EXAMPLE),
    }

    Ok(())
}
