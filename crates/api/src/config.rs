/// Runtime settings for the HTTP server, read once at startup.
///
/// Every field falls back to a local-development default when the
/// corresponding environment variable is unset. Malformed values abort
/// startup rather than limp along with a half-read configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind, from `HOST` (default `0.0.0.0`).
    pub host: String,
    /// TCP port to bind, from `PORT` (default `3000`).
    pub port: u16,
    /// CORS allow-list, from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// Per-request deadline in seconds, from `REQUEST_TIMEOUT_SECS`
    /// (default `30`). Requests past it get a 408.
    pub request_timeout_secs: u64,
}

/// Read `key` from the environment, or fall back to `default`.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl ServerConfig {
    /// Assemble the configuration from the process environment.
    ///
    /// Recognized variables: `HOST`, `PORT`, `CORS_ORIGINS` (comma
    /// separated, defaults to `http://localhost:5173` for the dev
    /// frontend), `REQUEST_TIMEOUT_SECS`.
    ///
    /// # Panics
    ///
    /// If `PORT` or `REQUEST_TIMEOUT_SECS` is present but not a number.
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}
