//! # Site Configuration
//!
//! Site-wide settings read from a TOML file. Every key is optional; missing
//! keys take the built-in defaults.
//!
//! ```toml
//! site_url = "https://www.healthgauge.com"
//! site_name = "Health Gauge"
//! default_language = "ro"
//! default_theme = "dark"
//! news_page_size = 6
//! content_dir = "content/posts"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{GaugeError, GaugeResult};
use crate::i18n::{Language, Theme};

pub const DEFAULT_SITE_URL: &str = "https://www.healthgauge.com";
pub const DEFAULT_SITE_NAME: &str = "Health Gauge";
pub const DEFAULT_SITE_DESCRIPTION: &str = "Professional health calculators, fitness tools, and evidence-based \
wellness insights. Track BMI, calculate macros, plan nutrition, and optimize your health journey.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute origin, without a trailing slash
    pub site_url: String,
    pub site_name: String,
    pub site_description: String,
    pub default_language: Language,
    pub default_theme: Theme,
    /// Posts per newsroom listing page
    pub news_page_size: usize,
    /// Posts shown in the "latest" strip
    pub latest_posts: usize,
    /// Related calculators and related posts shown on detail pages
    pub related_limit: usize,
    /// Directory of post documents; `None` uses the bundled posts
    pub content_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_url: DEFAULT_SITE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            site_description: DEFAULT_SITE_DESCRIPTION.to_string(),
            default_language: Language::En,
            default_theme: Theme::Light,
            news_page_size: 6,
            latest_posts: 3,
            related_limit: 3,
            content_dir: None,
        }
    }
}

impl SiteConfig {
    /// Read a config file.
    ///
    /// # Errors
    ///
    /// * `GaugeError::FileError` - the file cannot be read
    /// * `GaugeError::ConfigError` - the file is not valid config TOML
    pub fn load(path: &Path) -> GaugeResult<Self> {
        let origin = path.display().to_string();
        let source = fs::read_to_string(path).map_err(|e| GaugeError::file_error("read", &origin, e.to_string()))?;
        let mut config: SiteConfig =
            toml::from_str(&source).map_err(|e| GaugeError::config_error(&origin, e.to_string()))?;

        config.site_url = config.site_url.trim_end_matches('/').to_string();
        debug!(path = %origin, "loaded site config");
        Ok(config)
    }

    /// Like [`SiteConfig::load`], but a file that does not exist yields the
    /// defaults. A file that exists and is broken is still an error.
    pub fn load_or_default(path: &Path) -> GaugeResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no site config, using defaults");
            Ok(Self::default())
        }
    }

    /// Absolute URL for a site-relative path
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.site_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.site_name, "Health Gauge");
        assert_eq!(config.news_page_size, 6);
        assert_eq!(config.latest_posts, 3);
        assert_eq!(config.absolute_url("/news"), "https://www.healthgauge.com/news");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(
            &path,
            "site_url = \"https://staging.example.org/\"\ndefault_language = \"ro\"\nnews_page_size = 4\n",
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.site_url, "https://staging.example.org");
        assert_eq!(config.default_language, Language::Ro);
        assert_eq!(config.news_page_size, 4);
        assert_eq!(config.site_name, DEFAULT_SITE_NAME);
        assert_eq!(config.default_theme, Theme::Light);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "default_theme = \"sepia\"\n").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        assert_eq!(SiteConfig::load(&path).unwrap_err().error_code(), "FILE_ERROR");
        assert_eq!(SiteConfig::load_or_default(&path).unwrap(), SiteConfig::default());
    }
}
