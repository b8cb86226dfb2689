//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use crate::media::MediaType;
use regex::Regex;

/// Minimum subreddit name length.
const MIN_SUBREDDIT_LENGTH: usize = 3;

/// Maximum subreddit name length.
const MAX_SUBREDDIT_LENGTH: usize = 21;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_subreddit(&config.target.subreddit)?;
    validate_media_types(&config.options.media_types)?;
    validate_pages(config.options.pages)?;

    Ok(())
}

/// Validate the subreddit name.
pub fn validate_subreddit(subreddit: &str) -> Result<()> {
    if subreddit.is_empty() {
        return Err(Error::MissingConfig("subreddit".to_string()));
    }

    // Accept a leading "r/" the way people paste subreddit names
    let clean_name = subreddit.trim_start_matches("r/");

    if clean_name.len() < MIN_SUBREDDIT_LENGTH {
        return Err(Error::ConfigValidation {
            field: "subreddit".to_string(),
            message: format!(
                "Subreddit '{}' is too short (minimum {} characters)",
                subreddit, MIN_SUBREDDIT_LENGTH
            ),
        });
    }

    if clean_name.len() > MAX_SUBREDDIT_LENGTH {
        return Err(Error::ConfigValidation {
            field: "subreddit".to_string(),
            message: format!(
                "Subreddit '{}' is too long (maximum {} characters)",
                subreddit, MAX_SUBREDDIT_LENGTH
            ),
        });
    }

    // Subreddit pattern: alphanumeric and underscores, no leading underscore
    let subreddit_pattern = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_]*$").unwrap();
    if !subreddit_pattern.is_match(clean_name) {
        return Err(Error::ConfigValidation {
            field: "subreddit".to_string(),
            message: format!(
                "Subreddit '{}' contains invalid characters. Only alphanumeric and underscores allowed.",
                subreddit
            ),
        });
    }

    // Check for placeholder values
    let lower = clean_name.to_lowercase();
    if lower == "replaceme" || lower == "subreddit" {
        return Err(Error::ConfigValidation {
            field: "subreddit".to_string(),
            message: format!(
                "Subreddit '{}' appears to be a placeholder. Please provide an actual subreddit name.",
                subreddit
            ),
        });
    }

    Ok(())
}

/// Validate the media type list.
pub fn validate_media_types(media_types: &[MediaType]) -> Result<()> {
    if media_types.is_empty() {
        return Err(Error::MissingConfig(
            "media_types (at least one media type required)".to_string(),
        ));
    }

    Ok(())
}

/// Validate the page count.
pub fn validate_pages(pages: u32) -> Result<()> {
    if pages == 0 {
        return Err(Error::ConfigValidation {
            field: "pages".to_string(),
            message: "Page count must be at least 1".to_string(),
        });
    }

    Ok(())
}

/// Strip an optional "r/" prefix from a subreddit name.
pub fn normalize_subreddit(subreddit: &str) -> String {
    subreddit.trim_start_matches("r/").to_string()
}
