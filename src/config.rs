//! Environment-driven settings.

use tracing::info;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
}

impl Settings {
    /// Read settings from the environment, falling back to local defaults.
    pub fn from_env() -> Self {
        Settings {
            database_url: env_or("DATABASE_URL", "sqlite://scolarite.db"),
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:3000"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v,
        _ => {
            info!("{} not set, using default: {}", key, default);
            default.to_string()
        }
    }
}
