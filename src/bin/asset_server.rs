//! Static asset server for the game's web build
//!
//! Environment: `PORT` (default 3000), `BIND_ADDRESS`, `ASSET_ROOT`,
//! `ASSET_ENTRY` (default `index.html`).

use maze_archer::server::{self, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Maze Archer asset server v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::load_or_default();
    log::info!(
        "Configuration loaded: {}:{}, root={}, entry={}",
        config.bind_address,
        config.port,
        config.root.display(),
        config.entry
    );

    server::serve(config).await
}
