//! Path and directory management.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::media::MediaType;

/// Get the directory all files for the configured subreddit land in.
pub fn subreddit_dir(config: &Config) -> PathBuf {
    config.download_directory().join(&config.target.subreddit)
}

/// Get the directory for one media type under the subreddit folder.
pub fn media_dir(config: &Config, media_type: MediaType) -> PathBuf {
    subreddit_dir(config).join(media_type.folder_name())
}

/// Create the per-media-type subdirectories for every configured media type.
pub fn prepare_media_dirs(config: &Config) -> Result<()> {
    for media_type in &config.options.media_types {
        ensure_dir(&media_dir(config, *media_type))?;
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &PathBuf) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
