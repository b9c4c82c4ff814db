//! End-to-end tests from crawl to rendered reports

use creeper::config::HttpConfig;
use creeper::crawler::{crawl, CrawlLimits, HttpFetcher};
use creeper::output::{format_summary_table, write_sitemap};
use creeper::priority::rank;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html"),
        )
        .mount(server)
        .await;
}

async fn crawl_test_site() -> (MockServer, creeper::CrawlGraph) {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<nav><a href="/">Home</a><a href="/blog">Blog</a><a href="/about">About</a></nav>"#,
    )
    .await;
    mount_page(
        &mock_server,
        "/blog",
        r#"<a href="/">Home</a><a href="/blog/first">First</a><a href="/blog/second">Second</a>"#,
    )
    .await;
    mount_page(&mock_server, "/blog/first", r#"<a href="/blog">Back</a>"#).await;
    mount_page(&mock_server, "/blog/second", r#"<a href="/blog">Back</a>"#).await;
    mount_page(&mock_server, "/about", "<p>About us</p>").await;

    let fetcher = HttpFetcher::new(&HttpConfig::default()).unwrap();
    let seed = Url::parse(&format!("{}/", mock_server.uri())).unwrap();
    let graph = crawl(fetcher, &seed, CrawlLimits::default())
        .await
        .expect("Crawl failed");

    (mock_server, graph)
}

#[tokio::test]
async fn test_summary_table_from_crawl() {
    let (_server, graph) = crawl_test_site().await;

    let table = format_summary_table(&graph, 80);
    let lines: Vec<_> = table.lines().collect();

    assert_eq!(lines[0], "Count  | Path");
    assert_eq!(lines[2], "1      | /");
    assert_eq!(lines[3], "1      | /about");
    assert_eq!(lines[4], "3      | /blog");
    assert_eq!(lines[5], "1      | /blog/first");
    assert_eq!(lines[6], "1      | /blog/second");
    assert_eq!(lines.len(), 7);
}

#[tokio::test]
async fn test_sitemap_from_crawl() {
    let (server, graph) = crawl_test_site().await;
    let base_url = server.uri();

    let ranked = rank(&graph);
    // /blog has the most outgoing links (3) and the most incoming (3)
    assert_eq!(ranked[0].url.as_str(), format!("{}/blog", base_url));
    assert_eq!(ranked[0].formatted(), "1.00");

    let dir = tempfile::tempdir().unwrap();
    let sitemap_path = dir.path().join("sitemap.xml");
    write_sitemap(&ranked, &sitemap_path).unwrap();

    let xml = std::fs::read_to_string(&sitemap_path).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert_eq!(xml.matches("<url>").count(), 5);

    let blog = xml.find(&format!("<loc>{}/blog</loc>", base_url)).unwrap();
    let about = xml.find(&format!("<loc>{}/about</loc>", base_url)).unwrap();
    assert!(blog < about);
}
