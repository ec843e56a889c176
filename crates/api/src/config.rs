use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Directory of template JSON files (default: `public/data`).
    pub data_dir: PathBuf,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether the admin keyword endpoints are reachable. Off by default;
    /// production deployments must never enable this.
    pub admin_enabled: bool,
    /// Canonical site origin used in sitemap and robots output.
    pub public_base_url: String,
    /// Base seed for synthesized display metrics. Changing it reshuffles
    /// the numbers shown for templates that carry none of their own.
    pub metrics_seed: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `DATA_DIR`             | `public/data`              |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_ENABLED`        | `false`                    |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:3000`    |
    /// | `METRICS_SEED`         | `0`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "public/data".into()));

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_enabled = std::env::var("ADMIN_ENABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let metrics_seed: u64 = std::env::var("METRICS_SEED")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("METRICS_SEED must be a valid u64");

        Self {
            host,
            port,
            data_dir,
            cors_origins,
            request_timeout_secs,
            admin_enabled,
            public_base_url,
            metrics_seed,
        }
    }
}
