//! Statistics reporting.

use console::style;

use crate::download::ScrapeStats;

/// Print the final counters for a scrape run.
pub fn print_scrape_stats(subreddit: &str, stats: &ScrapeStats) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for r/{}:", subreddit)).bold()
    );
    println!(
        "  Downloaded: {}",
        style(stats.successful).green()
    );
    println!(
        "  Skipped:    {} (already existed)",
        style(stats.existed).yellow()
    );
    println!("  Failed:     {}", style(stats.failed).red());
    println!("  Total:      {} attempted", stats.total());
}
