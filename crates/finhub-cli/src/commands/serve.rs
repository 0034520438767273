//! Server command implementation

use std::path::Path;

use anyhow::Result;
use finhub_core::FinhubConfig;

use super::open_db;

pub async fn cmd_serve(db_path: &Path, config: FinhubConfig, host: &str, port: u16) -> Result<()> {
    println!("🚀 Starting FinHub web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);
    println!("   Currency: {} ({})", config.currency.code, config.currency.symbol);
    println!();
    println!("   Press Ctrl+C to stop");

    let db = open_db(db_path)?;
    finhub_server::serve(db, config, host, port).await?;

    Ok(())
}
