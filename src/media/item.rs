//! Media type and resource representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Representation of a post that can be saved to disk.
///
/// Each variant is a stateless extraction strategy: given a raw post record
/// it produces a [`Resource`] and a deterministic filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// The full post record, serialized as JSON.
    Raw,
    /// Post title and self-text.
    Text,
    /// First preview image.
    Image,
    /// Video fallback stream.
    Video,
}

impl MediaType {
    /// Short name used in log and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            MediaType::Raw => "raw data",
            MediaType::Text => "text",
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }

    /// Get the folder name for this media type.
    pub fn folder_name(&self) -> &'static str {
        match self {
            MediaType::Raw => "Raw",
            MediaType::Text => "Text",
            MediaType::Image => "Pictures",
            MediaType::Video => "Videos",
        }
    }

    /// File extension (without dot) for saved files of this type.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaType::Raw => "json",
            MediaType::Text => "txt",
            MediaType::Image => "jpg",
            MediaType::Video => "mp4",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What to save: a remote locator to fetch, or inline content to write as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// Remote URL, fetched over HTTP.
    Remote(String),
    /// Inline textual content, written directly.
    Inline(String),
}

/// Result of applying a [`MediaType`] strategy to one post record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub resource: Resource,
    pub filename: String,
}
