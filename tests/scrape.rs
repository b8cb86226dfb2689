//! End-to-end scrape tests against a mock listing server.

use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reddit_scraper::api::RedditApi;
use reddit_scraper::config::{Config, OptionsConfig, SortOrder, TargetConfig};
use reddit_scraper::download::{scrape_subreddit, ScrapeState};
use reddit_scraper::fs::prepare_media_dirs;
use reddit_scraper::media::MediaType;

fn text_post(subreddit_id: &str, id: &str, title: &str, selftext: &str) -> Value {
    json!({
        "kind": "t3",
        "data": {
            "subreddit_id": subreddit_id,
            "id": id,
            "title": title,
            "selftext": selftext
        }
    })
}

fn listing(children: Vec<Value>, after: Option<&str>) -> Value {
    json!({
        "kind": "Listing",
        "data": {
            "after": after,
            "children": children
        }
    })
}

fn test_config(dir: &TempDir, media_types: Vec<MediaType>, pages: u32) -> Config {
    Config {
        target: TargetConfig {
            subreddit: "rustpics".to_string(),
        },
        options: OptionsConfig {
            media_types,
            sort: SortOrder::New,
            pages,
            download_directory: Some(dir.path().to_path_buf()),
            ..OptionsConfig::default()
        },
    }
}

async fn setup(config: &Config) -> (MockServer, RedditApi) {
    let server = MockServer::start().await;
    let api = RedditApi::with_base_url(server.uri()).unwrap();
    prepare_media_dirs(config).unwrap();
    (server, api)
}

#[tokio::test]
async fn cursor_threads_across_pages_and_counters_sum_outcomes() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, vec![MediaType::Text], 2);
    let (server, api) = setup(&config).await;

    // Second page: only matched when the first page's cursor is threaded through.
    Mock::given(method("GET"))
        .and(path("/r/rustpics/new.json"))
        .and(query_param("after", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(
            vec![text_post("t5_abc", "125", "Third", "post")],
            Some("c2"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/r/rustpics/new.json"))
        .and(query_param_is_missing("after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(
            vec![
                text_post("t5_abc", "123", "Hi", "body"),
                text_post("t5_abc", "124", "Second", "post"),
            ],
            Some("c1"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = ScrapeState::default();
    scrape_subreddit(&api, &config, &mut state).await.unwrap();

    assert_eq!(state.stats.successful, 3);
    assert_eq!(state.stats.failed, 0);
    assert_eq!(state.stats.existed, 0);
    assert_eq!(state.after.as_deref(), Some("c2"));

    let saved = dir.path().join("rustpics/Text/t5_abc_123.txt");
    assert_eq!(std::fs::read_to_string(saved).unwrap(), "Hi\nbody");
}

#[tokio::test]
async fn rerun_skips_existing_files_without_refetching() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, vec![MediaType::Text], 1);
    let (server, api) = setup(&config).await;

    Mock::given(method("GET"))
        .and(path("/r/rustpics/new.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(
            vec![text_post("t5_abc", "123", "Hi", "body")],
            None,
        )))
        .mount(&server)
        .await;

    let mut first = ScrapeState::default();
    scrape_subreddit(&api, &config, &mut first).await.unwrap();
    assert_eq!(first.stats.successful, 1);

    let saved = dir.path().join("rustpics/Text/t5_abc_123.txt");
    let before = std::fs::metadata(&saved).unwrap().modified().unwrap();

    let mut second = ScrapeState::default();
    scrape_subreddit(&api, &config, &mut second).await.unwrap();

    assert_eq!(second.stats.successful, 0);
    assert_eq!(second.stats.existed, 1);
    assert_eq!(second.stats.failed, 0);

    // Content and mtime untouched by the second run
    assert_eq!(std::fs::read_to_string(&saved).unwrap(), "Hi\nbody");
    let after = std::fs::metadata(&saved).unwrap().modified().unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn image_download_strips_escaped_ampersands() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, vec![MediaType::Image], 1);
    let (server, api) = setup(&config).await;

    let image_url = format!("{}/img/one.jpg?width=640&amp;s=abc", server.uri());
    let post = json!({
        "kind": "t3",
        "data": {
            "subreddit_id": "t5_abc",
            "id": "456",
            "preview": {"images": [{"source": {"url": image_url}}]}
        }
    });

    Mock::given(method("GET"))
        .and(path("/r/rustpics/new.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![post], None)))
        .mount(&server)
        .await;

    // Only matches once `amp;` is stripped from the query string.
    Mock::given(method("GET"))
        .and(path("/img/one.jpg"))
        .and(query_param("width", "640"))
        .and(query_param("s", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = ScrapeState::default();
    scrape_subreddit(&api, &config, &mut state).await.unwrap();

    assert_eq!(state.stats.successful, 1);
    let saved = dir.path().join("rustpics/Pictures/t5_abc_456.jpg");
    assert_eq!(std::fs::read(saved).unwrap(), vec![0xFF, 0xD8, 0xFF]);
}

#[tokio::test]
async fn extraction_failures_count_per_media_type() {
    let dir = TempDir::new().unwrap();
    // Text posts carry no preview image, so the image strategy fails per post
    // while the text strategy keeps working.
    let config = test_config(&dir, vec![MediaType::Text, MediaType::Image], 1);
    let (server, api) = setup(&config).await;

    Mock::given(method("GET"))
        .and(path("/r/rustpics/new.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(
            vec![
                text_post("t5_abc", "123", "Hi", "body"),
                text_post("t5_abc", "124", "Second", "post"),
            ],
            None,
        )))
        .mount(&server)
        .await;

    let mut state = ScrapeState::default();
    scrape_subreddit(&api, &config, &mut state).await.unwrap();

    assert_eq!(state.stats.successful, 2);
    assert_eq!(state.stats.failed, 2);
    assert_eq!(state.stats.existed, 0);
}

#[tokio::test]
async fn failed_media_download_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, vec![MediaType::Image], 1);
    let (server, api) = setup(&config).await;

    let image_url = format!("{}/img/gone.jpg", server.uri());
    let post = json!({
        "kind": "t3",
        "data": {
            "subreddit_id": "t5_abc",
            "id": "457",
            "preview": {"images": [{"source": {"url": image_url}}]}
        }
    });

    Mock::given(method("GET"))
        .and(path("/r/rustpics/new.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![post], None)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/img/gone.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut state = ScrapeState::default();
    scrape_subreddit(&api, &config, &mut state).await.unwrap();

    assert_eq!(state.stats.successful, 0);
    assert_eq!(state.stats.failed, 1);
    assert!(!dir.path().join("rustpics/Pictures/t5_abc_457.jpg").exists());
}

#[tokio::test]
async fn listing_failure_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, vec![MediaType::Text], 3);
    let (server, api) = setup(&config).await;

    Mock::given(method("GET"))
        .and(path("/r/rustpics/new.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut state = ScrapeState::default();
    let err = scrape_subreddit(&api, &config, &mut state).await.unwrap_err();

    assert!(matches!(err, reddit_scraper::Error::Api(_)));
    assert_eq!(state.stats.total(), 0);
}

#[tokio::test]
async fn malformed_listing_body_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, vec![MediaType::Text], 1);
    let (server, api) = setup(&config).await;

    Mock::given(method("GET"))
        .and(path("/r/rustpics/new.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let mut state = ScrapeState::default();
    let err = scrape_subreddit(&api, &config, &mut state).await.unwrap_err();

    assert!(matches!(err, reddit_scraper::Error::Api(_)));
}

#[tokio::test]
async fn empty_page_stops_pagination_early() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, vec![MediaType::Text], 5);
    let (server, api) = setup(&config).await;

    // A single empty page; requesting it five times would trip expect(1).
    Mock::given(method("GET"))
        .and(path("/r/rustpics/new.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![], None)))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = ScrapeState::default();
    scrape_subreddit(&api, &config, &mut state).await.unwrap();

    assert_eq!(state.stats.total(), 0);
}

#[test]
fn config_download_directory_round_trip() {
    let config = Config {
        target: TargetConfig {
            subreddit: "rustpics".to_string(),
        },
        options: OptionsConfig {
            download_directory: Some(PathBuf::from("/tmp/elsewhere")),
            ..OptionsConfig::default()
        },
    };

    assert_eq!(config.download_directory(), PathBuf::from("/tmp/elsewhere"));
}
