//! Thin JSON endpoints around the converters.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::converter::{jsonfmt, sqlfmt};
use crate::error::ConvertError;
use crate::generator::html2md;

#[derive(Debug, Deserialize)]
struct HtmlRequest {
    #[serde(default)]
    html: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InputRequest {
    #[serde(default)]
    input: Option<String>,
}

pub fn router() -> Router {
    Router::new()
        .route("/api/convert/html-to-markdown", post(html_to_markdown))
        .route("/api/convert/json-format", post(json_format))
        .route("/api/convert/sql-format", post(sql_format))
}

async fn html_to_markdown(Json(request): Json<HtmlRequest>) -> Response {
    let html = match request.html {
        Some(html) if !html.is_empty() => html,
        _ => return error_response(StatusCode::BAD_REQUEST, "No HTML content provided"),
    };

    match html2md::run(&html) {
        Ok(markdown) => (StatusCode::OK, Json(json!({ "markdown": markdown }))).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "html-to-markdown conversion failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to convert HTML to Markdown",
            )
        }
    }
}

async fn json_format(Json(request): Json<InputRequest>) -> Response {
    convert_input(request, jsonfmt::format, "Failed to format JSON")
}

async fn sql_format(Json(request): Json<InputRequest>) -> Response {
    convert_input(request, sqlfmt::format, "Failed to format SQL")
}

fn convert_input(
    request: InputRequest,
    convert: fn(&str) -> Result<String, ConvertError>,
    failure_message: &str,
) -> Response {
    let input = match request.input {
        Some(input) if !input.is_empty() => input,
        _ => return error_response(StatusCode::BAD_REQUEST, "No input provided"),
    };

    match convert(&input) {
        Ok(output) => (StatusCode::OK, Json(json!({ "output": output }))).into_response(),
        Err(err) if err.is_precondition() => {
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
        Err(err) => {
            tracing::warn!(error = %err, "conversion failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, failure_message)
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
