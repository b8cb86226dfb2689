//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, SortOrder};
use crate::media::MediaType;

/// Reddit media scraper CLI.
#[derive(Parser, Debug)]
#[command(
    name = "reddit-scraper",
    version,
    about = "Download media from subreddits",
    long_about = "A CLI tool to batch-download images, videos, post text, and raw post data\n\
                  from a subreddit's public listing, skipping files that already exist."
)]
pub struct Args {
    /// Subreddit to scrape (with or without the "r/" prefix).
    #[arg(short, long)]
    pub subreddit: Option<String>,

    /// Number of listing pages to fetch (25 posts per page).
    #[arg(short, long)]
    pub pages: Option<u32>,

    /// Listing sort order.
    #[arg(long, value_enum)]
    pub sort: Option<SortOrderArg>,

    /// Media types to save, attempted in order for every post.
    #[arg(short, long, value_enum, value_delimiter = ',', num_args = 1..)]
    pub media: Option<Vec<MediaTypeArg>>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide per-download and per-skip information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI media type argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MediaTypeArg {
    /// Full post record as JSON.
    Raw,
    /// Post title and self-text.
    Text,
    /// First preview image.
    Image,
    /// Video fallback stream.
    Video,
}

impl From<MediaTypeArg> for MediaType {
    fn from(arg: MediaTypeArg) -> Self {
        match arg {
            MediaTypeArg::Raw => MediaType::Raw,
            MediaTypeArg::Text => MediaType::Text,
            MediaTypeArg::Image => MediaType::Image,
            MediaTypeArg::Video => MediaType::Video,
        }
    }
}

/// CLI sort order argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortOrderArg {
    /// Newest posts first.
    New,
    /// Top-rated posts.
    Top,
    /// Currently trending posts.
    Hot,
    /// Most controversial posts.
    Controversial,
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::New => SortOrder::New,
            SortOrderArg::Top => SortOrder::Top,
            SortOrderArg::Hot => SortOrder::Hot,
            SortOrderArg::Controversial => SortOrder::Controversial,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(subreddit) = self.subreddit {
            config.target.subreddit = subreddit;
        }

        if let Some(pages) = self.pages {
            config.options.pages = pages;
        }

        if let Some(sort) = self.sort {
            config.options.sort = sort.into();
        }

        if let Some(media) = self.media {
            config.options.media_types = media.into_iter().map(MediaType::from).collect();
        }

        if let Some(dir) = self.download_directory {
            config.options.download_directory = Some(dir);
        }

        // Boolean flags (only override if set to non-default)
        if self.quiet {
            config.options.show_downloads = false;
            config.options.show_skipped_downloads = false;
        }
    }
}
