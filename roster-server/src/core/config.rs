use anyhow::Context;

/// Server configuration
///
/// Loaded from environment variables (after `.env` has been applied):
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | DATABASE_URL | (required) | Record store connection string |
/// | HTTP_PORT | 8000 | HTTP API port |
#[derive(Debug, Clone)]
pub struct Config {
    /// Record store connection string (`ws://`, `http://`, `rocksdb://`, ...)
    pub database_url: String,
    /// HTTP API port
    pub http_port: u16,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Fails when `DATABASE_URL` is absent; every other setting falls back
    /// to its default.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL environment variable is not set")?;
        let http_port = std::env::var("HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        Ok(Self {
            database_url,
            http_port,
        })
    }
}
