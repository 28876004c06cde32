use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

// Fallback only; set SESSION_SECRET for any real deployment.
const DEV_SESSION_SECRET: &str = "outlay-dev-session-secret-0123456789abcdef0123456789abcdef";

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub log_level: String,
    pub session_secret: String,
    pub session_ttl_secs: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("database_url", &"<redacted>")
            .field("log_level", &self.log_level)
            .field("session_secret", &"<redacted>")
            .field("session_ttl_secs", &self.session_ttl_secs)
            .finish()
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            session_secret: env::var("SESSION_SECRET").unwrap_or_else(|_| DEV_SESSION_SECRET.to_string()),
            session_ttl_secs: env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(86_400),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
