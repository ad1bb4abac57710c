use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults suit local development.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON override for the keyword tables. Built-in tables when unset.
    pub tables_path: Option<String>,
    /// Seed for question and phrase selection. OS entropy when unset.
    pub seed: Option<u64>,
    pub max_answer_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            tables_path: None,
            seed: None,
            max_answer_chars: 10_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT")?.unwrap_or(defaults.port),
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            tables_path: std::env::var("COACH_TABLES_PATH").ok(),
            seed: parse_env("COACH_SEED")?,
            max_answer_chars: parse_env("MAX_ANSWER_CHARS")?
                .unwrap_or(defaults.max_answer_chars),
        })
    }
}

/// Reads and parses an optional variable. Unset is `None`; unparsable is an error.
fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(None),
    }
}
