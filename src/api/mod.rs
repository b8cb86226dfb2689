//! Reddit API module.
//!
//! This module provides:
//! - HTTP client for the public listing endpoints
//! - Listing response types

pub mod client;
pub mod types;

pub use client::{RedditApi, PAGE_SIZE};
pub use types::*;
