mod common;

use std::fs;

use pretty_assertions::assert_eq;
use retrieval_core::WikipediaConfig;
use retrieval_engine::sources::WikipediaSource;
use retrieval_engine::{PipelineError, SourceError};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WIND_POWER: &str = r#"<html><body><div class="mw-parser-output">
    <p>Wind power is the use of wind energy.</p>
    <figure><img src="/media/Turbines.png"><figcaption>Offshore turbines</figcaption></figure>
    <figure><img src="/media/Broken.png"><figcaption>Broken link</figcaption></figure>
</div></body></html>"#;

fn config(input: &std::path::Path) -> WikipediaConfig {
    WikipediaConfig {
        enabled: true,
        max_items: None,
        input: input.to_path_buf(),
    }
}

#[tokio::test]
async fn figures_of_listed_articles_are_saved() {
    let server = MockServer::start().await;
    let uri = server.uri();
    Mock::given(method("GET"))
        .and(path("/wiki/Wind_power"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(WIND_POWER, "text/html; charset=UTF-8"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/media/Turbines.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(common::png_bytes(7, 3), "image/png"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/media/Broken.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wiki/Gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let input = temp.path().join("wiki.jsonl");
    fs::write(
        &input,
        format!(
            "{{\"title\": \"Wind power\", \"url\": \"{uri}/wiki/Wind_power\", \"text\": \"...\"}}\n\
             \n\
             {{\"title\": \"Gone\", \"url\": \"{uri}/wiki/Gone\"}}\n"
        ),
    )
    .unwrap();
    let out = temp.path().join("out");

    let source = WikipediaSource::new(common::http(), &config(&input));
    let result = common::driver(&out, None).drive(&source).await.unwrap();

    assert_eq!(result.attempted, 2);
    assert_eq!(result.succeeded, 1);
    assert_eq!(result.failed, 1);
    assert_eq!(
        common::files_under(&out),
        vec![
            "Wind_power/Wind_power_Turbines.json".to_string(),
            "Wind_power/Wind_power_Turbines.png".to_string(),
        ]
    );
    let sidecar = common::read_json(&out.join("Wind_power/Wind_power_Turbines.json"));
    assert_eq!(sidecar["title"], "Wind power");
    assert_eq!(sidecar["url"], format!("{uri}/media/Turbines.png"));
    assert_eq!(sidecar["additional_info"]["caption"], "Offshore turbines");
    assert_eq!(sidecar["additional_info"]["resolution"], "7x3");
}

#[tokio::test]
async fn missing_input_is_a_source_failure() {
    let temp = TempDir::new().unwrap();
    let source = WikipediaSource::new(common::http(), &config(&temp.path().join("absent.jsonl")));

    let err = common::driver(temp.path(), None)
        .drive(&source)
        .await
        .expect_err("no input file");
    let PipelineError::Source { error, .. } = err;
    assert!(matches!(error, SourceError::Input { .. }));
}

#[tokio::test]
async fn malformed_line_is_reported_with_its_number() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("wiki.jsonl");
    fs::write(&input, "{\"title\": \"A\", \"url\": \"https://x.example/A\"}\nnot json\n").unwrap();
    let source = WikipediaSource::new(common::http(), &config(&input));

    let err = common::driver(&temp.path().join("out"), None)
        .drive(&source)
        .await
        .expect_err("malformed input");
    let PipelineError::Source { error, partial } = err;
    assert!(matches!(error, SourceError::MalformedInput { line: 2, .. }));
    assert_eq!(partial.attempted, 0);
}
