//! Subreddit scrape loop: pagination and per-post processing.

use serde_json::Value;

use crate::api::{RedditApi, PAGE_SIZE};
use crate::config::Config;
use crate::download::state::ScrapeState;
use crate::download::transfer::{materialize, TransferOutcome};
use crate::error::Result;
use crate::fs::paths::media_dir;
use crate::media::extract;
use crate::output::create_item_bar;

/// Scrape the configured number of listing pages.
///
/// Listing failures propagate out and abort the run; everything per item is
/// recovered and counted in `state.stats`.
pub async fn scrape_subreddit(
    api: &RedditApi,
    config: &Config,
    state: &mut ScrapeState,
) -> Result<()> {
    let subreddit = &config.target.subreddit;

    tracing::info!(
        "Scraping r/{} ({} pages, sorted by {})...",
        subreddit,
        config.options.pages,
        config.options.sort
    );

    let bar = create_item_bar(u64::from(config.options.pages) * PAGE_SIZE, "posts");

    for _ in 0..config.options.pages {
        let page = api
            .get_listing(subreddit, config.options.sort, state.after.as_deref())
            .await?;

        let exhausted = page.posts.is_empty();

        for post in &page.posts {
            process_post(api, config, state, post).await;
            bar.inc(1);
        }

        state.after = page.after;

        if exhausted {
            tracing::debug!("Listing exhausted before requested page count");
            break;
        }
    }

    bar.finish_and_clear();

    Ok(())
}

/// Try every configured media type against one post record.
///
/// A failure for one media type never aborts the others; each attempt lands
/// in exactly one counter.
async fn process_post(api: &RedditApi, config: &Config, state: &mut ScrapeState, post: &Value) {
    for media_type in &config.options.media_types {
        let extraction = match extract(*media_type, post) {
            Ok(extraction) => extraction,
            Err(e) => {
                if config.options.show_skipped_downloads {
                    tracing::debug!("Skipping {}: {}", media_type, e);
                }
                state.stats.increment_failed();
                continue;
            }
        };

        let path = media_dir(config, *media_type).join(&extraction.filename);

        match materialize(api, &extraction.resource, &path).await {
            Ok(TransferOutcome::Written) => {
                state.stats.increment_successful();
                if config.options.show_downloads {
                    tracing::info!("Downloaded: {}", path.display());
                }
            }
            Ok(TransferOutcome::AlreadyExisted) => {
                state.stats.increment_existed();
                if config.options.show_skipped_downloads {
                    tracing::debug!("Skipping existing file: {}", path.display());
                }
            }
            Err(e) => {
                state.stats.increment_failed();
                tracing::warn!("Failed to save {} to {}: {}", media_type, path.display(), e);
            }
        }
    }
}
