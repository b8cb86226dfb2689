//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Filename sanitization

pub mod naming;
pub mod paths;

pub use naming::sanitize_filename;
pub use paths::{ensure_dir, media_dir, prepare_media_dirs, subreddit_dir};
