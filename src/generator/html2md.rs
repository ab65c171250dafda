//! HTML to Markdown extraction.
//!
//! Documents produced by a Markdown-aware authoring tool mark their
//! sections with the `markdown-section` class and may attach the original
//! Markdown source in a `data-markdown-raw` attribute. When such sections
//! exist, their payloads are authoritative and nothing else in the
//! document is consulted. Otherwise the whole document is reduced to
//! fenced code blocks (one per `<pre>`) followed by its remaining visible
//! text.

use crate::error::ConvertError;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static SECTION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".markdown-section").unwrap());
static PRE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("pre").unwrap());
static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

// Non-greedy: the first closing fence terminates a code run.
static FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// How a parsed document is handled. Resolved once, immediately after
/// parsing; the presence of even one marked section suppresses the
/// freeform path entirely.
enum ParsedDocument<'a> {
    Structured(Vec<ElementRef<'a>>),
    Freeform,
}

pub fn run(html: &str) -> Result<String, ConvertError> {
    Ok(extract(html))
}

/// Converts an HTML document or fragment to Markdown. Pure; returns an
/// empty string when the input normalizes to nothing.
pub fn extract(html: &str) -> String {
    let document = Html::parse_document(html);

    let sections: Vec<ElementRef> = document.select(&SECTION_SELECTOR).collect();
    let parsed = if sections.is_empty() {
        ParsedDocument::Freeform
    } else {
        ParsedDocument::Structured(sections)
    };

    let fragments = match parsed {
        ParsedDocument::Structured(sections) => structured_fragments(&sections),
        ParsedDocument::Freeform => freeform_fragments(&document),
    };
    fragments.join("\n\n")
}

/// Collapses all whitespace runs to single spaces and trims the ends.
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn structured_fragments(sections: &[ElementRef]) -> Vec<String> {
    let mut fragments = Vec::new();
    for section in sections {
        match section.value().attr("data-markdown-raw") {
            Some(raw) if !raw.is_empty() => push_raw_markdown(raw, &mut fragments),
            _ => {
                let text = clean_text(&section.text().collect::<String>());
                if !text.is_empty() {
                    fragments.push(text);
                }
            }
        }
    }
    fragments
}

/// Splits a raw Markdown payload into alternating fenced and prose runs.
/// Fenced runs are kept verbatim; prose runs are trimmed and dropped when
/// empty.
fn push_raw_markdown(raw: &str, fragments: &mut Vec<String>) {
    let raw = raw.trim();
    if !raw.contains("```") {
        if !raw.is_empty() {
            fragments.push(raw.to_string());
        }
        return;
    }

    let mut last = 0;
    for fence in FENCE_RE.find_iter(raw) {
        push_split_part(&raw[last..fence.start()], fragments);
        push_split_part(fence.as_str(), fragments);
        last = fence.end();
    }
    push_split_part(&raw[last..], fragments);
}

// A part opening with a fence is emitted untouched even when unbalanced.
fn push_split_part(part: &str, fragments: &mut Vec<String>) {
    if part.starts_with("```") {
        fragments.push(part.to_string());
    } else {
        let trimmed = part.trim();
        if !trimmed.is_empty() {
            fragments.push(trimmed.to_string());
        }
    }
}

fn freeform_fragments(document: &Html) -> Vec<String> {
    let mut fragments = Vec::new();

    for pre in document.select(&PRE_SELECTOR) {
        fragments.push(fenced_code_block(&pre));
    }

    if let Some(body) = document.select(&BODY_SELECTOR).next() {
        for node in body.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let inside_pre = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| element.name() == "pre")
            });
            if inside_pre {
                continue;
            }
            let cleaned = clean_text(text);
            if !cleaned.is_empty() && !fragments.iter().any(|f| f.contains(&cleaned)) {
                fragments.push(cleaned);
            }
        }
    }

    fragments
}

/// Fenced code block for a `<pre>` element. The language tag comes from
/// the first `language-*` class token; absence yields an untagged fence.
fn fenced_code_block(pre: &ElementRef) -> String {
    let mut language = "";
    if let Some(classes) = pre.value().attr("class") {
        for class in classes.split(' ') {
            if let Some(tag) = class.strip_prefix("language-") {
                language = tag;
                break;
            }
        }
    }
    let code: String = pre.text().collect();
    format!("```{}\n{}\n```", language, code.trim())
}
