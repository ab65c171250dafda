use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use devconvert::server;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn converts_marked_section_payload() {
    let (status, body) = post_json(
        server::router(),
        "/api/convert/html-to-markdown",
        json!({ "html": "<div class='markdown-section' data-markdown-raw='# Title\n\nSome text'></div>" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "markdown": "# Title\n\nSome text" }));
}

#[tokio::test]
async fn falls_back_to_code_blocks_and_text() {
    let (status, body) = post_json(
        server::router(),
        "/api/convert/html-to-markdown",
        json!({ "html": "<body><pre class='language-js'>let a=1;</pre><p>hello</p></body>" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "markdown": "```js\nlet a=1;\n```\n\nhello" }));
}

#[tokio::test]
async fn missing_html_field_is_a_client_error() {
    let (status, body) =
        post_json(server::router(), "/api/convert/html-to-markdown", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No HTML content provided" }));
}

#[tokio::test]
async fn empty_html_field_is_a_client_error() {
    let (status, body) = post_json(
        server::router(),
        "/api/convert/html-to-markdown",
        json!({ "html": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No HTML content provided" }));
}

#[tokio::test]
async fn empty_document_converts_to_empty_markdown() {
    let (status, body) = post_json(
        server::router(),
        "/api/convert/html-to-markdown",
        json!({ "html": "<body></body>" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "markdown": "" }));
}

#[tokio::test]
async fn json_format_endpoint_round_trips() {
    let (status, body) = post_json(
        server::router(),
        "/api/convert/json-format",
        json!({ "input": "{\"a\":1}" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "output": "{\n  \"a\": 1\n}" }));
}

#[tokio::test]
async fn json_format_rejects_missing_input() {
    let (status, body) = post_json(server::router(), "/api/convert/json-format", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No input provided" }));
}

#[tokio::test]
async fn json_format_surfaces_invalid_json_as_server_error() {
    let (status, body) = post_json(
        server::router(),
        "/api/convert/json-format",
        json!({ "input": "{not json" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to format JSON" }));
}

#[tokio::test]
async fn sql_format_endpoint_uppercases_keywords() {
    let (status, body) = post_json(
        server::router(),
        "/api/convert/sql-format",
        json!({ "input": "select 1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let output = body["output"].as_str().unwrap();
    assert!(output.contains("SELECT"));
}
