//! Console output utilities.

use console::style;

use crate::config::Config;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Reddit Scraper                                    ║
║     Batch downloader for subreddit media              ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(config: &Config) {
    let media_types: Vec<&str> = config
        .options
        .media_types
        .iter()
        .map(|m| m.name())
        .collect();

    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Subreddit: r/{}", config.target.subreddit);
    println!("  Sort:      {}", config.options.sort);
    println!("  Pages:     {}", config.options.pages);
    println!("  Media:     {}", media_types.join(", "));
    println!(
        "  Directory: {}",
        config.download_directory().display()
    );
    println!();
}
