//! Site configuration.
//!
//! The browser build embeds `landing/site.toml`; every field is optional.
//!
//! ```toml
//! base_url = "/landing/"
//! copyright_year = 2025
//! log_level = "debug"
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while loading [`SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Not valid TOML, or a field has the wrong type.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `base_url` is not usable as a path prefix.
    #[error("invalid base_url {0:?}: must not contain '?', '#' or whitespace")]
    InvalidBaseUrl(String),
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix for static assets (logo, app preview)
    pub base_url: String,
    /// Pin the footer year instead of reading the clock
    pub copyright_year: Option<i32>,
    /// Max level for the browser logger: error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "/".into(),
            copyright_year: None,
            log_level: "info".into(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let bad = |c: char| c == '?' || c == '#' || c.is_whitespace();
        if self.base_url.contains(bad) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        Ok(())
    }

    /// Resolve an asset file name against `base_url`, joined by exactly one `/`.
    pub fn asset_url(&self, file: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let file = file.trim_start_matches('/');
        format!("{base}/{file}")
    }

    /// Year shown in the footer.
    pub fn year(&self) -> i32 {
        self.copyright_year
            .unwrap_or_else(|| time::OffsetDateTime::now_utc().year())
    }
}
