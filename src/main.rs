use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use resumatch::config::Config;
use resumatch::logging::init_tracing;
use resumatch::ui::runtime;

/// Terminal client for the resume-analysis service: upload a PDF resume,
/// review the extracted skills, and match them against a job description.
#[derive(Debug, Parser)]
#[command(name = "resumatch", version, about)]
struct Cli {
    /// Path to a config file (default: ~/.config/resumatch/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the service base URL.
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    config.validate()?;

    runtime::run(config)
}
