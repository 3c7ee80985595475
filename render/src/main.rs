//! `findmyteam-render` - write the FindMyTeam landing page as static HTML.
//!
//! ```bash
//! findmyteam-render                       # dist/index.html, findmyteam.toml if present
//! findmyteam-render --out public/index.html
//! findmyteam-render --config site.toml --stdout
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use findmyteam_landing::clock::SystemClock;
use findmyteam_render::config::RenderConfig;
use findmyteam_render::{Target, prerender};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "findmyteam-render")]
#[command(about = "Pre-render the FindMyTeam landing page to static HTML")]
#[command(version)]
struct Args {
    /// Config file (default: ./findmyteam.toml when it exists)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output file, overrides the config's output.path
    #[arg(long, value_name = "PATH", conflicts_with = "stdout")]
    out: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so --stdout output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting findmyteam-render v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => RenderConfig::load_from_path(path)?,
        None => {
            let cwd = std::env::current_dir().context("cannot read working directory")?;
            RenderConfig::load_default(&cwd)?
        }
    };

    let target = if args.stdout {
        Target::Stdout
    } else {
        Target::File(args.out.unwrap_or_else(|| config.output.path.clone()))
    };

    prerender(&config, &target, &SystemClock)?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[findmyteam-render] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
