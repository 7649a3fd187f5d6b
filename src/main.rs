use anyhow::Result;
use clap::Parser;
use ghcn_processor::cli::{run, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    run(cli).await?;
    Ok(())
}
