pub mod config;
pub mod converter;
pub mod error;
pub mod generator;
pub mod server;

pub use error::ConvertError;

/// The converters exposed through the CLI and GUI front ends. Each one is
/// a stateless text-to-text transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    HtmlToMarkdown,
    MarkdownToHtml,
    Base64Encode,
    Base64Decode,
    ImageToDataUri,
    Hash,
    TimestampToDatetime,
    DatetimeToTimestamp,
    JsonFormat,
    JsonMinify,
    SqlFormat,
    SvgToReact,
    GeoIp,
}

impl Conversion {
    pub const ALL: [Conversion; 13] = [
        Conversion::HtmlToMarkdown,
        Conversion::MarkdownToHtml,
        Conversion::Base64Encode,
        Conversion::Base64Decode,
        Conversion::ImageToDataUri,
        Conversion::Hash,
        Conversion::TimestampToDatetime,
        Conversion::DatetimeToTimestamp,
        Conversion::JsonFormat,
        Conversion::JsonMinify,
        Conversion::SqlFormat,
        Conversion::SvgToReact,
        Conversion::GeoIp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Conversion::HtmlToMarkdown => "HTML -> Markdown",
            Conversion::MarkdownToHtml => "Markdown -> HTML",
            Conversion::Base64Encode => "Base64 encode",
            Conversion::Base64Decode => "Base64 decode",
            Conversion::ImageToDataUri => "Image -> data URI",
            Conversion::Hash => "Hash digests",
            Conversion::TimestampToDatetime => "Timestamp -> date",
            Conversion::DatetimeToTimestamp => "Date -> timestamp",
            Conversion::JsonFormat => "JSON format",
            Conversion::JsonMinify => "JSON minify",
            Conversion::SqlFormat => "SQL format",
            Conversion::SvgToReact => "SVG -> React",
            Conversion::GeoIp => "IP geolocation",
        }
    }

    /// Whether the output is Markdown, and worth previewing as such.
    pub fn produces_markdown(&self) -> bool {
        matches!(self, Conversion::HtmlToMarkdown)
    }
}

// text in -> text out
pub fn convert(kind: Conversion, input: &str) -> Result<String, ConvertError> {
    match kind {
        Conversion::HtmlToMarkdown => generator::html2md::run(input),
        Conversion::MarkdownToHtml => converter::md2html::render(input),
        Conversion::Base64Encode => converter::base64::encode_text(input),
        Conversion::Base64Decode => converter::base64::decode_text(input),
        Conversion::ImageToDataUri => Err(ConvertError::precondition(
            "Image input must be supplied as a file",
        )),
        Conversion::Hash => converter::hash::report(input, &converter::hash::HashAlgorithm::ALL),
        Conversion::TimestampToDatetime => converter::timestamp::to_datetime(input),
        Conversion::DatetimeToTimestamp => {
            converter::timestamp::to_unix(input).map(|seconds| seconds.to_string())
        }
        Conversion::JsonFormat => converter::jsonfmt::format(input),
        Conversion::JsonMinify => converter::jsonfmt::minify(input),
        Conversion::SqlFormat => converter::sqlfmt::format(input),
        Conversion::SvgToReact => converter::svg2react::generate(input, "SvgIcon"),
        Conversion::GeoIp => converter::geoip::lookup_text(input),
    }
}

pub fn convert_from_path(kind: Conversion, file_path: &str) -> Result<String, ConvertError> {
    let file_stream = std::fs::read(file_path).map_err(|e| {
        ConvertError::precondition(format!("Failed to read file {}: {}", file_path, e))
    })?;

    match kind {
        Conversion::ImageToDataUri => converter::base64::image_to_data_uri(&file_stream),
        _ => {
            let text = String::from_utf8(file_stream).map_err(|e| {
                ConvertError::precondition(format!("File {} is not valid UTF-8: {}", file_path, e))
            })?;
            convert(kind, &text)
        }
    }
}
