// src/config.rs
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSlugConfig")]
pub struct SlugConfig {
    space: String,
    glue: String,
    max_suffix_attempts: u64,
}

/// Unvalidated shape of [`SlugConfig`] as it appears in config files.
#[derive(Deserialize)]
struct RawSlugConfig {
    #[serde(default = "default_space")]
    space: String,
    #[serde(default = "default_glue")]
    glue: String,
    #[serde(default = "default_max_suffix_attempts")]
    max_suffix_attempts: u64,
}

impl TryFrom<RawSlugConfig> for SlugConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSlugConfig) -> Result<Self, ConfigError> {
        Self::new(raw.space, raw.glue, raw.max_suffix_attempts)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_space() -> String {
    "-".into()
}

fn default_glue() -> String {
    "-".into()
}

fn default_max_suffix_attempts() -> u64 {
    10_000
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            space: default_space(),
            glue: default_glue(),
            max_suffix_attempts: default_max_suffix_attempts(),
        }
    }
}

impl SlugConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a token contains characters a slug
    /// cannot hold or `max_suffix_attempts` is zero.
    pub fn new(
        space: impl Into<String>,
        glue: impl Into<String>,
        max_suffix_attempts: u64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            space: space.into(),
            glue: glue.into(),
            max_suffix_attempts,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from environment variables, falling back to the
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for unparseable or invalid values.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SlugConfig::from_env`] but reads keys through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for unparseable or invalid values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let space = lookup("SLUG_SPACE").unwrap_or_else(default_space);
        let glue = lookup("SLUG_GLUE").unwrap_or_else(default_glue);

        let max_suffix_attempts = lookup("SLUG_MAX_SUFFIX_ATTEMPTS")
            .map_or_else(|| Ok(default_max_suffix_attempts()), |raw| parse_attempts(&raw))?;

        Self::new(space, glue, max_suffix_attempts)
    }

    /// Tokens are only useful if they survive the final character strip.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_token("SLUG_SPACE", &self.space)?;
        check_token("SLUG_GLUE", &self.glue)?;
        if self.max_suffix_attempts == 0 {
            return Err(ConfigError::Invalid(
                "SLUG_MAX_SUFFIX_ATTEMPTS must be a positive integer".into(),
            ));
        }
        Ok(())
    }

    /// Replacement for runs of non-alphanumeric characters.
    #[must_use]
    pub fn space(&self) -> &str {
        &self.space
    }

    /// Separator between fields and before the dedup counter.
    #[must_use]
    pub fn glue(&self) -> &str {
        &self.glue
    }

    #[must_use]
    pub const fn max_suffix_attempts(&self) -> u64 {
        self.max_suffix_attempts
    }
}

fn parse_attempts(raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse::<u64>().map_err(|_| {
        ConfigError::Invalid(format!(
            "SLUG_MAX_SUFFIX_ATTEMPTS must be a positive integer, got {raw:?}"
        ))
    })
}

/// Space and glue end up verbatim in generated slugs, so they are held to the
/// slug alphabet: lowercase ASCII letters, digits, `-` and `_`.
pub(crate) fn check_token(key: &str, token: &str) -> Result<(), ConfigError> {
    let valid = token
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{key} may only contain lowercase ASCII letters, digits, '-' and '_', got {token:?}"
        )))
    }
}
