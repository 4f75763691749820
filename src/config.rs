use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,
}

#[derive(Debug, Deserialize)]
pub struct GithubConfig {
    /// Personal access token; raises the API rate limit when present.
    pub token: Option<String>,

    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: default_api_base(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Load configuration from config.toml and environment variables
pub fn load() -> Result<Config> {
    Figment::new()
        .merge(Toml::file("config.toml"))
        // Use double-underscore nesting for snake_case keys
        .merge(Env::prefixed("GHLOOKUP_").split("__"))
        .extract()
        .context("Failed to load configuration")
}

/// Validate configuration and return a user-friendly error
pub fn validate(config: &Config) -> Result<(), String> {
    let github = &config.github;

    if github.api_base.trim().is_empty() {
        return Err("github.api_base must not be empty".into());
    }

    if github.timeout_seconds == 0 {
        return Err("github.timeout_seconds must be greater than 0".into());
    }

    if let Some(token) = &github.token {
        if token.trim().is_empty() {
            return Err("github.token must not be blank; omit it instead".into());
        }
    }

    Ok(())
}

/// A sanitized view of GithubConfig safe for logging
#[derive(Debug)]
#[allow(dead_code)]
pub struct SanitizedGithubConfig {
    pub token: String,
    pub api_base: String,
    pub timeout_seconds: u64,
}

impl GithubConfig {
    pub fn sanitized_for_log(&self) -> SanitizedGithubConfig {
        SanitizedGithubConfig {
            token: if self.token.is_some() {
                "******".into()
            } else {
                "<not set>".into()
            },
            api_base: self.api_base.clone(),
            timeout_seconds: self.timeout_seconds,
        }
    }
}
