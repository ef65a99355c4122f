//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use tally_server::{ServerConfig, ALLOWED_ORIGINS_ENV, API_KEYS_ENV};

use super::open_db;

pub async fn cmd_serve(
    db_path: &Path,
    host: &str,
    port: u16,
    no_encrypt: bool,
    static_dir: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting Tally web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }

    let config = ServerConfig::from_env();

    if config.auth_enabled() {
        println!(
            "   🔑 API keys: {} configured ({})",
            config.api_keys.len(),
            API_KEYS_ENV
        );
    } else {
        println!();
        println!(
            "   ⚠️  Authentication DISABLED (set {}) - do not expose to network!",
            API_KEYS_ENV
        );
    }

    if config.allowed_origins.is_empty() {
        println!("   🌐 CORS: same-origin only ({} not set)", ALLOWED_ORIGINS_ENV);
    } else {
        println!("   🌐 CORS: {}", config.allowed_origins.join(", "));
    }
    println!();

    let db = open_db(db_path, no_encrypt)?;

    let static_dir = static_dir
        .map(|p| p.to_str().context("Static directory path is not valid UTF-8"))
        .transpose()?;

    tally_server::serve_with_config(db, host, port, static_dir, config).await
}
