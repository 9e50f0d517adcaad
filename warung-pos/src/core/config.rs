use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WARUNG_DATA_DIR | ./work_dir | Data directory (holds `store.redb`) |
/// | LOG_LEVEL | info | Log filter level |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | CHEF_SERVICE_URL | http://localhost:8787/describe | Description service endpoint |
/// | CHEF_TIMEOUT_MS | 10000 | Description request timeout (ms) |
///
/// # Example
///
/// ```ignore
/// WARUNG_DATA_DIR=/data/warung LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Data directory; the slot store database lives here
    pub data_dir: String,
    /// Log filter level
    pub log_level: String,
    /// Run environment: development | staging | production
    pub environment: String,
    /// Description generation service endpoint
    pub chef_service_url: String,
    /// Description request timeout in milliseconds
    pub chef_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("WARUNG_DATA_DIR").unwrap_or_else(|_| "./work_dir".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            chef_service_url: std::env::var("CHEF_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8787/describe".into()),
            chef_timeout_ms: std::env::var("CHEF_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
        }
    }

    /// Path of the slot store database file
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("store.redb")
    }

    pub fn chef_timeout(&self) -> Duration {
        Duration::from_millis(self.chef_timeout_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
