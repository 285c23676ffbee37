use anyhow::{Context, Result};

use crate::roadmap::profile::RoadmapProfile;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
///
/// `OPENAI_API_KEY` is deliberately not required: a missing key surfaces as an
/// authentication failure on the first generate call.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub profile: RoadmapProfile,
    /// When set, structured data that does not match the profile schema fails the request.
    pub strict_schema: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            profile: std::env::var("ROADMAP_PROFILE")
                .unwrap_or_else(|_| "implementation".to_string())
                .parse::<RoadmapProfile>()
                .context("ROADMAP_PROFILE must be 'implementation' or 'technical'")?,
            strict_schema: parse_bool_env("STRICT_SCHEMA")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_bool_env(key: &str) -> Result<bool> {
    match std::env::var(key) {
        Ok(raw) => parse_bool(&raw).with_context(|| format!("{key} must be true or false")),
        Err(_) => Ok(false),
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("unrecognised boolean '{other}'"),
    }
}
