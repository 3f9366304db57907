//! # Site Server
//!
//! Thin entry point: environment in, server out.

use site_server::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    start_server(config).await
}
