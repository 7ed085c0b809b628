use anyhow::Result;
use atmos_backdrop::cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    atmos_backdrop::run(cli).await
}
