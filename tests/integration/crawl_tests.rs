//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use creeper::config::HttpConfig;
use creeper::crawler::{crawl, CrawlLimits, Crawler, FetchError, Fetcher, HttpFetcher};
use creeper::state::PageState;
use creeper::CreeperError;
use std::cell::RefCell;
use std::rc::Rc;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html")
}

async fn mount_page(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(html(body))
        .mount(server)
        .await;
}

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(&HttpConfig {
        user_agent: "creeper-test/1.0".to_string(),
        timeout_secs: 5,
        connect_timeout_secs: 2,
    })
    .expect("Failed to build fetcher")
}

fn limits(max_pages: usize, max_depth: usize) -> CrawlLimits {
    CrawlLimits {
        max_pages,
        max_depth,
    }
}

#[tokio::test]
async fn test_full_crawl_single_site() {
    // Start a mock server
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        &format!(
            r#"<html><head><title>Home</title></head><body>
            <a href="{}/page1">Page 1</a>
            <a href="/page2?ref=nav">Page 2</a>
            <a href="https://elsewhere.example/">Elsewhere</a>
            </body></html>"#,
            base_url
        ),
    )
    .await;
    mount_page(&mock_server, "/page1", r#"<a href="/">Home</a><a href="page2">2</a>"#).await;
    mount_page(&mock_server, "/page2", "<p>Content 2</p>").await;

    let seed = Url::parse(&format!("{}/", base_url)).unwrap();
    let graph = crawl(fetcher(), &seed, limits(100, 0))
        .await
        .expect("Crawl failed");

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.pages_visited(), 3);
    assert_eq!(graph.count_by_state(PageState::Processed), 3);

    assert_eq!(graph.seed_node().incoming, 1);
    assert_eq!(graph.seed_node().outgoing, 2);

    let page2 = graph
        .get_str(&format!("{}/page2", base_url))
        .expect("page2 missing");
    assert_eq!(page2.incoming, 2);
    assert_eq!(page2.path, "/page2");
}

#[tokio::test]
async fn test_visit_callback_reports_fetched_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", r#"<a href="/a">A</a><a href="/b">B</a>"#).await;
    mount_page(&mock_server, "/a", "").await;
    mount_page(&mock_server, "/b", "").await;

    let visited = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&visited);
    let mut crawler = Crawler::new(fetcher(), limits(100, 0))
        .on_visit(move |url| sink.borrow_mut().push(url.to_string()));

    let seed = Url::parse(&format!("{}/", base_url)).unwrap();
    crawler.crawl(&seed).await.expect("Crawl failed");

    assert_eq!(
        *visited.borrow(),
        vec![format!("{}/a", base_url), format!("{}/b", base_url)]
    );
}

#[tokio::test]
async fn test_page_budget_limits_requests() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/one">1</a><a href="/two">2</a><a href="/three">3</a>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/one"))
        .respond_with(html("<p>one</p>"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/two"))
        .respond_with(html("<p>two</p>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let seed = Url::parse(&format!("{}/", base_url)).unwrap();
    let graph = crawl(fetcher(), &seed, limits(2, 0))
        .await
        .expect("Crawl failed");

    assert_eq!(graph.pages_visited(), 2);
    assert_eq!(graph.seed_node().outgoing, 3);
    let three = graph.get_str(&format!("{}/three", base_url)).unwrap();
    assert_eq!(three.state, PageState::Discovered);
    assert_eq!(three.incoming, 1);

    // expectations are verified when the server drops
}

#[tokio::test]
async fn test_broken_child_is_leaf() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/gone">Gone</a><a href="/pdf">PDF</a><a href="/fine">Fine</a>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pdf"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"%PDF-1.4".to_vec(), "application/pdf"),
        )
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/fine", r#"<a href="/">Home</a>"#).await;

    let seed = Url::parse(&format!("{}/", base_url)).unwrap();
    let graph = crawl(fetcher(), &seed, limits(100, 0))
        .await
        .expect("Crawl failed");

    let gone = graph.get_str(&format!("{}/gone", base_url)).unwrap();
    assert_eq!(gone.state, PageState::Failed);
    assert_eq!(gone.outgoing, 0);

    let pdf = graph.get_str(&format!("{}/pdf", base_url)).unwrap();
    assert_eq!(pdf.state, PageState::Failed);

    let fine = graph.get_str(&format!("{}/fine", base_url)).unwrap();
    assert_eq!(fine.state, PageState::Processed);
    assert_eq!(graph.seed_node().incoming, 1);
}

#[tokio::test]
async fn test_seed_fetch_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let seed = Url::parse(&format!("{}/", mock_server.uri())).unwrap();
    let result = crawl(fetcher(), &seed, CrawlLimits::default()).await;

    match result {
        Err(CreeperError::SeedFetch { source, .. }) => {
            assert!(matches!(source, FetchError::Status { status: 500 }));
        }
        other => panic!("expected SeedFetch, got {:?}", other.map(|g| g.len())),
    }
}

#[tokio::test]
async fn test_fetcher_status_and_content_type() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/ok", "<p>ok</p>").await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"{}".to_vec(), "application/json"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = fetcher();
    let url = |p: &str| Url::parse(&format!("{}{}", base_url, p)).unwrap();

    assert_eq!(fetcher.fetch(&url("/ok")).await.unwrap(), "<p>ok</p>");
    assert!(matches!(
        fetcher.fetch(&url("/missing")).await,
        Err(FetchError::Status { status: 404 })
    ));
    assert!(matches!(
        fetcher.fetch(&url("/data.json")).await,
        Err(FetchError::ContentMismatch { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_seed() {
    // Nothing listens on the discard port
    let seed = Url::parse("http://127.0.0.1:9/").unwrap();
    let result = crawl(fetcher(), &seed, CrawlLimits::default()).await;
    assert!(matches!(result, Err(CreeperError::SeedFetch { .. })));
}
