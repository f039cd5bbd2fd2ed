use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "bannerkit",
    version,
    about = "Compose a banner image from a JSON composition request",
    after_help = "e.g.:\n  bannerkit -j ./jsons/preference.json"
)]
struct Cli {
    /// Composition request JSON.
    #[arg(short = 'j', long = "json")]
    json: PathBuf,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let req = bannerkit::CompositionRequest::load(&cli.json)
        .with_context(|| format!("load composition request '{}'", cli.json.display()))?;

    let report = bannerkit::run(&req).context("compose banner")?;

    tracing::info!(
        background = %report.background_path.display(),
        top_icons = report.top_icons,
        bottom_icons = report.bottom_icons,
        "{}x{} banner",
        report.width,
        report.height
    );
    eprintln!("wrote {}", report.output_path.display());
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
