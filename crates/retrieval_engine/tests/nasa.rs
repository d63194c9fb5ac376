mod common;

use pretty_assertions::assert_eq;
use retrieval_core::{NasaConfig, RunConfig};
use retrieval_engine::sources::NasaSource;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn feed(links: &[String]) -> String {
    let items: String = links
        .iter()
        .map(|link| format!("<item><title>x</title><link>{link}</link></item>"))
        .collect();
    format!(
        r#"<?xml version="1.0"?><rss version="2.0"><channel><title>EO</title>
        <link>https://earthobservatory.example/</link>{items}</channel></rss>"#
    )
}

fn article(title: &str, published: &str, topic: &str, image_href: &str) -> String {
    format!(
        r#"<html><body><h1>{title}</h1>
        <p>Published {published}</p>
        <a href="/topic/{slug}">{topic}</a>
        <a href="{image_href}">JPEG</a>
        <img src="/thumb.jpg" alt="Surface temperatures">
        </body></html>"#,
        slug = topic.to_lowercase()
    )
}

async fn serve(server: &MockServer, route: &str, body: String, content_type: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, content_type))
        .mount(server)
        .await;
}

#[tokio::test]
async fn feeds_are_deduplicated_and_articles_filtered() {
    let server = MockServer::start().await;
    let uri = server.uri();
    let heat = format!("{uri}/images/100/heat-wave");
    let old = format!("{uri}/images/200/old-story");
    let ocean = format!("{uri}/images/300/ocean");

    serve(&server, "/feeds/a.rss", feed(&[heat.clone(), old]), "application/rss+xml").await;
    serve(&server, "/feeds/b.rss", feed(&[heat, ocean]), "application/rss+xml").await;

    Mock::given(method("GET"))
        .and(path("/images/100/heat-wave"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            article("Heat Wave in Texas", "Jul 19, 2023", "Heat", "/media/100/heat.jpg"),
            "text/html; charset=utf-8",
        ))
        .expect(1)
        .mount(&server)
        .await;
    serve(
        &server,
        "/images/200/old-story",
        article("Old Story", "Jan 02, 2010", "Heat", "/media/200/old.jpg"),
        "text/html",
    )
    .await;
    serve(
        &server,
        "/images/300/ocean",
        article("Ocean Colour", "Mar 01, 2024", "Oceans", "/media/300/ocean.jpg"),
        "text/html",
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/media/100/heat.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(common::jpeg_bytes(16, 10), "image/jpeg"))
        .mount(&server)
        .await;

    let config = NasaConfig {
        feeds: vec![
            format!("{uri}/feeds/a.rss"),
            format!("{uri}/feeds/missing.rss"),
            format!("{uri}/feeds/b.rss"),
        ],
        ..RunConfig::default().nasa
    };
    let source = NasaSource::new(common::http(), common::fixed_clock(), &config);
    let temp = TempDir::new().unwrap();

    let result = common::driver(temp.path(), None).drive(&source).await.unwrap();

    assert_eq!(result.attempted, 3);
    assert_eq!(result.succeeded, 1);
    assert_eq!(result.skipped, 2);
    assert_eq!(result.failed, 0);
    assert_eq!(
        common::files_under(temp.path()),
        vec![
            "heat/Heat_Wave_in_Texas_100.jpg".to_string(),
            "heat/Heat_Wave_in_Texas_100.json".to_string(),
        ]
    );

    let sidecar = common::read_json(&temp.path().join("heat/Heat_Wave_in_Texas_100.json"));
    assert_eq!(sidecar["url"], format!("{uri}/media/100/heat.jpg"));
    assert_eq!(sidecar["categories"], serde_json::json!(["heat"]));
    assert_eq!(sidecar["additional_info"]["resolution"], "16x10");
    assert_eq!(sidecar["additional_info"]["caption"], "Surface temperatures");
    assert_eq!(
        sidecar["additional_info"]["article_url"],
        format!("{uri}/images/100/heat-wave")
    );
}

#[tokio::test]
async fn article_without_image_link_fails() {
    let server = MockServer::start().await;
    let uri = server.uri();
    serve(
        &server,
        "/feed.rss",
        feed(&[format!("{uri}/images/400/no-image")]),
        "application/rss+xml",
    )
    .await;
    serve(
        &server,
        "/images/400/no-image",
        "<html><body><h1>Land Cover</h1><p>Published May 05, 2024</p>\
         <a href=\"/topic/land\">Land</a></body></html>"
            .to_string(),
        "text/html",
    )
    .await;

    let config = NasaConfig {
        feeds: vec![format!("{uri}/feed.rss")],
        ..RunConfig::default().nasa
    };
    let source = NasaSource::new(common::http(), common::fixed_clock(), &config);
    let temp = TempDir::new().unwrap();

    let result = common::driver(temp.path(), None).drive(&source).await.unwrap();
    assert_eq!(result.attempted, 1);
    assert_eq!(result.failed, 1);
    assert!(common::files_under(temp.path()).is_empty());
}

#[tokio::test]
async fn undated_articles_count_as_published_today() {
    let server = MockServer::start().await;
    let uri = server.uri();
    serve(
        &server,
        "/feed.rss",
        feed(&[
            format!("{uri}/images/500/dry-spell"),
            format!("{uri}/images/600/hot-nights"),
        ]),
        "application/rss+xml",
    )
    .await;
    serve(
        &server,
        "/images/500/dry-spell",
        "<html><body><h1>Dry Spell</h1>\
         <a href=\"/topic/heat\">Heat</a>\
         <a href=\"/media/500/dry.jpg\">JPEG</a></body></html>"
            .to_string(),
        "text/html",
    )
    .await;
    serve(
        &server,
        "/images/600/hot-nights",
        article("Hot Nights", "sometime last summer", "Heat", "/media/600/hot.jpg"),
        "text/html",
    )
    .await;
    for route in ["/media/500/dry.jpg", "/media/600/hot.jpg"] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_raw(common::jpeg_bytes(8, 8), "image/jpeg"))
            .mount(&server)
            .await;
    }

    let config = NasaConfig {
        feeds: vec![format!("{uri}/feed.rss")],
        ..RunConfig::default().nasa
    };
    let source = NasaSource::new(common::http(), common::fixed_clock(), &config);
    let temp = TempDir::new().unwrap();

    let result = common::driver(temp.path(), None).drive(&source).await.unwrap();

    assert_eq!(result.attempted, 2);
    assert_eq!(result.succeeded, 2);
    assert_eq!(result.skipped, 0);
    assert_eq!(
        common::files_under(temp.path()),
        vec![
            "heat/Dry_Spell_500.jpg".to_string(),
            "heat/Dry_Spell_500.json".to_string(),
            "heat/Hot_Nights_600.jpg".to_string(),
            "heat/Hot_Nights_600.json".to_string(),
        ]
    );
    let sidecar = common::read_json(&temp.path().join("heat/Dry_Spell_500.json"));
    assert_eq!(sidecar["retrieved_date"], "2024-06-01");
    assert_eq!(sidecar["url"], format!("{uri}/media/500/dry.jpg"));
}
