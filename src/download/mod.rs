//! Download module for the scrape loop.
//!
//! This module provides:
//! - Run-scoped state (counters, pagination cursor)
//! - Resource transfer (download-or-write)
//! - Page fetching and per-post processing

pub mod scrape;
pub mod state;
pub mod transfer;

pub use scrape::scrape_subreddit;
pub use state::{ScrapeState, ScrapeStats};
pub use transfer::{clean_media_url, materialize, TransferOutcome};
