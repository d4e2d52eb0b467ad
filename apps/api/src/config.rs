use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::scoring::priority::{DEFAULT_DEADLINE_WEIGHT, DEFAULT_SKILL_WEIGHT};
use crate::scoring::urgency::DEFAULT_HALF_POINT_DAYS;
use crate::scoring::ScoringConfig;

/// Application configuration loaded from environment variables.
/// Fails at startup if any value is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// In-memory storage is used when unset.
    pub database_url: Option<String>,
    pub skills_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let scoring = ScoringConfig::new(
            parse_env("SCORE_SKILL_WEIGHT", DEFAULT_SKILL_WEIGHT)?,
            parse_env("SCORE_DEADLINE_WEIGHT", DEFAULT_DEADLINE_WEIGHT)?,
            parse_env("URGENCY_HALF_POINT_DAYS", DEFAULT_HALF_POINT_DAYS)?,
        )
        .context("Invalid scoring configuration")?;

        Ok(Config {
            database_url: std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            skills_path: std::env::var("SKILLS_PATH")
                .unwrap_or_else(|_| "data/skills.txt".to_string())
                .into(),
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scoring,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
