use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::render::fonts::FontStrategy;
use crate::render::plan::DEFAULT_WRAP_THRESHOLD;

/// Exporter configuration loaded from environment variables.
///
/// Every variable has a default, so `from_env` only fails on values that are
/// present but malformed. A `.env` file is honored when present.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the TTF family. `None` → probe standard system
    /// font directories at render time.
    pub font_dir: Option<PathBuf>,
    /// Font family file stem, e.g. `LiberationSans` for
    /// `LiberationSans-Regular.ttf`. `None` → probe known family names.
    pub font_name: Option<String>,
    pub strategy: FontStrategy,
    /// Longest run of non-whitespace characters the layout engine is asked
    /// to wrap; longer runs get spaces inserted before layout.
    pub wrap_threshold: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            font_dir: None,
            font_name: None,
            strategy: FontStrategy::Embedded,
            wrap_threshold: DEFAULT_WRAP_THRESHOLD,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let strategy = match std::env::var("FONT_STRATEGY") {
            Ok(raw) => raw
                .parse::<FontStrategy>()
                .context("FONT_STRATEGY must be 'embedded' or 'core'")?,
            Err(_) => FontStrategy::Embedded,
        };

        let wrap_threshold = match std::env::var("WRAP_THRESHOLD") {
            Ok(raw) => raw
                .parse::<usize>()
                .context("WRAP_THRESHOLD must be a non-negative integer")?,
            Err(_) => DEFAULT_WRAP_THRESHOLD,
        };

        Ok(Config {
            font_dir: std::env::var("FONT_DIR").ok().map(PathBuf::from),
            font_name: std::env::var("FONT_NAME").ok(),
            strategy,
            wrap_threshold,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_prefers_embedded_fonts() {
        let config = Config::default();
        assert_eq!(config.strategy, FontStrategy::Embedded);
        assert_eq!(config.wrap_threshold, DEFAULT_WRAP_THRESHOLD);
        assert!(config.font_dir.is_none());
        assert!(config.font_name.is_none());
    }

    #[test]
    fn test_strategy_parses_both_names() {
        assert_eq!(
            "embedded".parse::<FontStrategy>().unwrap(),
            FontStrategy::Embedded
        );
        assert_eq!("core".parse::<FontStrategy>().unwrap(), FontStrategy::Core);
        assert!("marker".parse::<FontStrategy>().is_err());
    }
}
