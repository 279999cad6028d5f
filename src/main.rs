use anyhow::Result;
use clap::Parser;
use condense::{config::Config, shell};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let cli = shell::Cli::parse();

    shell::run(cli, &config).await
}
