//! Configuration module for the reddit-scraper.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, OptionsConfig, TargetConfig};
pub use modes::SortOrder;
pub use validation::validate_config;
