/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | SAMPLE_SEED | 42 | RNG seed for the sample dataset |
/// | SAMPLE_FEEDBACK_COUNT | 100 | Number of generated feedback rows |
/// | LOG_DIR | (unset) | Directory for daily-rolling log files |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 SAMPLE_SEED=7 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Seed for the deterministic sample dataset
    pub sample_seed: u64,
    /// Number of feedback rows to generate
    pub sample_feedback_count: usize,
    /// Optional log file directory
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Falls back to defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            sample_seed: std::env::var("SAMPLE_SEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(42),
            sample_feedback_count: std::env::var("SAMPLE_FEEDBACK_COUNT")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(100),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override selected items, keeping the rest from the environment
    ///
    /// Mostly used by tests that need a pinned seed and port.
    pub fn with_overrides(http_port: u16, sample_seed: u64) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.sample_seed = sample_seed;
        config
    }

    /// Whether running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether running in development
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
