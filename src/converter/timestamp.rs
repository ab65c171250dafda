use crate::error::ConvertError;
use chrono::{NaiveDateTime, TimeZone, Utc};

/// Converts a Unix timestamp to a `YYYY-MM-DDTHH:MM:SS` string in UTC.
///
/// Values longer than ten digits are interpreted as milliseconds, shorter
/// ones as seconds.
pub fn to_datetime(input: &str) -> Result<String, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::precondition("No timestamp provided"));
    }
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConvertError::precondition("Timestamp must be numeric"));
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|e| ConvertError::conversion(format!("Invalid timestamp: {}", e)))?;

    let millis = if digits.len() > 10 {
        value
    } else {
        value
            .checked_mul(1000)
            .ok_or_else(|| ConvertError::conversion("Timestamp out of range".to_string()))?
    };

    let datetime = Utc
        .timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| ConvertError::conversion("Timestamp out of range".to_string()))?;
    Ok(datetime.format("%Y-%m-%dT%H:%M:%S").to_string())
}

/// Converts a `YYYY-MM-DDTHH:MM[:SS]` date-time string, read as UTC, to
/// Unix seconds.
pub fn to_unix(input: &str) -> Result<i64, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::precondition("No date-time provided"));
    }
    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .map_err(|e| ConvertError::conversion(format!("Invalid date-time: {}", e)))?;
    Ok(naive.and_utc().timestamp())
}
