//! railstatus Server Entry Point

use clap::Parser;
use railstatus::cli::Cli;
use railstatus::clock::ProcessClock;
use railstatus::config::{PageConfig, ServerConfig};
use railstatus::error::ServerResult;
use railstatus::shutdown::ShutdownHandle;
use railstatus::{logging, server, AppState};
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> ServerResult<()> {
    logging::init()?;

    let config = cli.apply(ServerConfig::from_env());
    info!("railstatus v{}", env!("CARGO_PKG_VERSION"));

    let clock = ProcessClock::start();
    info!("Server start time: {}", clock.started_at());

    let state = AppState::new(clock, PageConfig::from_env(), config.public_dir.clone());
    server::run(state, &config, ShutdownHandle::new()).await
}
