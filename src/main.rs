//! Reddit Scraper - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use reddit_scraper::{
    api::RedditApi,
    cli::Args,
    config::{validate_config, validation::normalize_subreddit, Config},
    download::{scrape_subreddit, ScrapeState},
    error::{exit_codes, Error, Result},
    fs::prepare_media_dirs,
    output::{
        print_banner, print_config_summary, print_error, print_info, print_scrape_stats,
        print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Api(_) | Error::UrlParse(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Download(_) | Error::Http(_) | Error::Io(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);
    config.target.subreddit = normalize_subreddit(&config.target.subreddit);

    // Validate configuration
    validate_config(&config)?;

    // Print configuration summary
    print_config_summary(&config);

    // Initialize API client and target directories
    let api = RedditApi::new()?;
    prepare_media_dirs(&config)?;

    // Run the scrape
    let mut state = ScrapeState::default();
    scrape_subreddit(&api, &config, &mut state).await?;

    // Print final counters
    print_scrape_stats(&config.target.subreddit, &state.stats);

    Ok(())
}
