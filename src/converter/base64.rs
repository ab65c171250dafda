use crate::error::ConvertError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

static IMG_SRC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"src=["'](data:image/[^"']+)["']"#).unwrap());

pub fn encode_text(input: &str) -> Result<String, ConvertError> {
    if input.is_empty() {
        return Err(ConvertError::precondition("No input provided"));
    }
    Ok(STANDARD.encode(input.as_bytes()))
}

pub fn decode_text(input: &str) -> Result<String, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::precondition("No input provided"));
    }
    let bytes = STANDARD
        .decode(trimmed)
        .map_err(|e| ConvertError::conversion(format!("Invalid Base64 input: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| ConvertError::conversion(format!("Decoded data is not valid UTF-8: {}", e)))
}

/// Encodes raw image bytes as a `data:` URI, sniffing the MIME type from
/// the file's magic bytes.
pub fn image_to_data_uri(file_stream: &[u8]) -> Result<String, ConvertError> {
    if file_stream.is_empty() {
        return Err(ConvertError::precondition("Input stream is empty"));
    }
    let mime_type = infer::get(file_stream)
        .map(|kind| kind.mime_type().to_string())
        .unwrap_or_else(|| "image/png".to_string());
    let encoded = STANDARD.encode(file_stream);
    Ok(format!("data:{};base64,{}", mime_type, encoded))
}

/// Decodes an image from a `data:` URI, an `<img>` tag carrying one in its
/// `src` attribute, or a bare Base64 payload.
pub fn data_uri_to_image(input: &str) -> Result<Vec<u8>, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::precondition("No input provided"));
    }

    let captures = IMG_SRC_RE.captures(trimmed);
    let payload = if let Some(ref captures) = captures {
        &captures[1]
    } else if trimmed.starts_with("data:image/") {
        trimmed
    } else {
        // bare base64, assume a PNG payload
        return STANDARD
            .decode(trimmed)
            .map_err(|e| ConvertError::conversion(format!("Invalid Base64 input: {}", e)));
    };

    let encoded = payload
        .split_once("base64,")
        .map(|(_, rest)| rest)
        .ok_or_else(|| ConvertError::conversion("Data URI carries no Base64 payload".to_string()))?;
    STANDARD
        .decode(encoded)
        .map_err(|e| ConvertError::conversion(format!("Invalid Base64 payload: {}", e)))
}

/// Writes decoded image bytes under `dir` with a timestamp-based name and
/// an extension derived from the image's magic bytes.
pub fn save_image(file_stream: &[u8], dir: &Path) -> Result<PathBuf, ConvertError> {
    if file_stream.is_empty() {
        return Err(ConvertError::precondition("Input stream is empty"));
    }
    let extension = match infer::get(file_stream).map(|kind| kind.mime_type()) {
        Some("image/jpeg") => "jpg",
        Some("image/png") => "png",
        Some("image/gif") => "gif",
        Some("image/webp") => "webp",
        _ => "png",
    };
    let timestamp = chrono::Utc::now().timestamp();
    let file_path = dir.join(format!("pic-{}.{}", timestamp, extension));

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| ConvertError::conversion(format!("Failed to create image directory: {}", e)))?;
    }
    fs::write(&file_path, file_stream)
        .map_err(|e| ConvertError::conversion(format!("Failed to save image file: {}", e)))?;
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_and_decodes_text() {
        let encoded = encode_text("hello world").unwrap();
        assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
        assert_eq!(decode_text(&encoded).unwrap(), "hello world");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(encode_text("").unwrap_err().is_precondition());
        assert!(decode_text("   ").unwrap_err().is_precondition());
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode_text("not base64!!!").unwrap_err();
        assert!(!err.is_precondition());
    }

    #[test]
    fn builds_data_uri_with_sniffed_mime() {
        // minimal PNG signature
        let bytes = [
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
        ];
        let uri = image_to_data_uri(&bytes).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn extracts_payload_from_img_tag() {
        let encoded = STANDARD.encode(b"fake image bytes");
        let tag = format!(r#"<img src="data:image/png;base64,{}" alt="x">"#, encoded);
        assert_eq!(data_uri_to_image(&tag).unwrap(), b"fake image bytes");
    }

    #[test]
    fn decodes_bare_base64() {
        let encoded = STANDARD.encode(b"fake image bytes");
        assert_eq!(data_uri_to_image(&encoded).unwrap(), b"fake image bytes");
    }

    #[test]
    fn rejects_data_uri_without_payload() {
        let err = data_uri_to_image("data:image/png;hex,00ff").unwrap_err();
        assert!(!err.is_precondition());
    }
}
