//! Reddit Scraper - batch downloader for subreddit media.
//!
//! This library paginates through a subreddit's public listing and saves one
//! or more representations of each post to disk, organized by media type.
//!
//! # Features
//!
//! - Pluggable media type strategies (raw JSON, text, image, video)
//! - Deterministic filenames, so re-runs skip what is already on disk
//! - Opaque cursor pagination over listing pages
//! - Per-item failure counting without aborting the run
//!
//! # Example
//!
//! ```no_run
//! use reddit_scraper::{scrape_subreddit, Config, MediaType, RedditApi, ScrapeState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.target.subreddit = "earthporn".to_string();
//!     config.options.media_types = vec![MediaType::Image, MediaType::Text];
//!
//!     let api = RedditApi::new()?;
//!     reddit_scraper::fs::prepare_media_dirs(&config)?;
//!
//!     let mut state = ScrapeState::default();
//!     scrape_subreddit(&api, &config, &mut state).await?;
//!     println!("downloaded {} files", state.stats.successful);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::RedditApi;
pub use config::{Config, SortOrder};
pub use download::{scrape_subreddit, ScrapeState, ScrapeStats, TransferOutcome};
pub use error::{Error, Result};
pub use media::{Extraction, MediaType, Resource};
