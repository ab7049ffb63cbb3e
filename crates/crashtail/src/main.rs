use anyhow::Context;
use clap::Parser;
use crashtail::cli::Cli;
use crashtail::runtime::{boot, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    boot::init_logging();
    let cli = Cli::parse();
    let (config, path) = boot::boot(&cli).context("Failed to start crashtail")?;
    run::run(&config, &path)
        .await
        .with_context(|| format!("Failed while reading {}", path.display()))
}
