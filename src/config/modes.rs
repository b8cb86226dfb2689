//! Listing sort order definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort order for subreddit listings, mirroring the API's listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Newest posts first (default).
    #[default]
    New,
    /// Top-rated posts.
    Top,
    /// Currently trending posts.
    Hot,
    /// Most controversial posts.
    Controversial,
}

impl SortOrder {
    /// Path segment used in the listing URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::New => "new",
            SortOrder::Top => "top",
            SortOrder::Hot => "hot",
            SortOrder::Controversial => "controversial",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
