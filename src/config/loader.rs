//! Configuration structures and loading logic.

use crate::config::modes::SortOrder;
use crate::error::Result;
use crate::media::MediaType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default download directory, relative to the working directory.
const DEFAULT_DOWNLOAD_DIR: &str = "data";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Scrape target configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Subreddit to scrape.
    #[serde(default)]
    pub subreddit: String,
}

/// Scrape options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Media types to save, in the order they are attempted per post.
    #[serde(default)]
    pub media_types: Vec<MediaType>,

    /// Listing sort order.
    #[serde(default)]
    pub sort: SortOrder,

    /// Number of listing pages to fetch (25 posts each).
    #[serde(default = "default_pages")]
    pub pages: u32,

    /// Base directory for downloads.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Whether to log each completed download.
    #[serde(default = "default_true")]
    pub show_downloads: bool,

    /// Whether to log skipped (already existing) files and extraction misses.
    #[serde(default = "default_true")]
    pub show_skipped_downloads: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            media_types: Vec::new(),
            sort: SortOrder::default(),
            pages: default_pages(),
            download_directory: None,
            show_downloads: true,
            show_skipped_downloads: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Get the base download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_DIR))
    }
}

fn default_pages() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [target]
            subreddit = "earthporn"

            [options]
            media_types = ["image", "text"]
            sort = "top"
            pages = 3
            download_directory = "/tmp/scrapes"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.target.subreddit, "earthporn");
        assert_eq!(
            config.options.media_types,
            vec![MediaType::Image, MediaType::Text]
        );
        assert_eq!(config.options.sort, SortOrder::Top);
        assert_eq!(config.options.pages, 3);
        assert_eq!(
            config.download_directory(),
            PathBuf::from("/tmp/scrapes")
        );
    }

    #[test]
    fn test_defaults_apply_for_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.target.subreddit.is_empty());
        assert!(config.options.media_types.is_empty());
        assert_eq!(config.options.sort, SortOrder::New);
        assert_eq!(config.options.pages, 1);
        assert!(config.options.show_downloads);
        assert_eq!(config.download_directory(), PathBuf::from("data"));
    }
}
