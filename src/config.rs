//! Server configuration

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Directory of static site files served on unmatched routes
    pub public_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, with development defaults.
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:reservations.db?mode=rwc".into()),
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            public_dir: std::env::var("PUBLIC_DIR").ok().filter(|s| !s.is_empty()),
        }
    }
}
