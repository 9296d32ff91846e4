use anyhow::Result;
use chirpy::{config, logging, server};
use clap::Parser;

/// Chirpy API server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Bind address, overrides `LISTEN`.
    #[arg(long)]
    listen: Option<String>,

    /// Directory served under `/app`, overrides `STATIC_DIR`.
    #[arg(long)]
    static_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(static_dir) = cli.static_dir {
        config.static_dir = static_dir;
    }
    config.validate()?;

    logging::init(&config.log_level, &config.log_format)?;
    config.print_summary();

    server::run(config).await
}
