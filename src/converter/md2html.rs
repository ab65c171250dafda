use crate::error::ConvertError;
use pulldown_cmark::{Options, Parser, html};

/// Renders Markdown to HTML with tables, strikethrough, and task lists
/// enabled.
pub fn render(input: &str) -> Result<String, ConvertError> {
    if input.trim().is_empty() {
        return Err(ConvertError::precondition("No input provided"));
    }
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(input, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    Ok(output)
}
