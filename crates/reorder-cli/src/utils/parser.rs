use lmpreorder::engine::config::TypeColumn;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Empty key in --set value '{0}'.")]
    EmptyKey(String),

    #[error("Invalid boolean value for {key}: '{value}'. Expected true/false, yes/no, y/n or 1/0.")]
    InvalidBool { key: String, value: String },

    #[error("Invalid integer value for {key}: '{value}'.")]
    InvalidInteger { key: String, value: String },
}

/// Splits a `KEY=VALUE` pair at the first `=`. The key is trimmed, the value is kept as is.
pub fn parse_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(pair.to_string()));
    }
    Ok((key, value))
}

pub fn parse_bool(key: &str, value: &str) -> Result<bool, ParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Ok(true),
        "false" | "no" | "n" | "0" | "off" => Ok(false),
        _ => Err(ParseError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

pub fn parse_integer(key: &str, value: &str) -> Result<i64, ParseError> {
    value.trim().parse().map_err(|_| ParseError::InvalidInteger {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Negative indices request auto-detection.
pub fn type_column(index: i64) -> TypeColumn {
    usize::try_from(index).map_or(TypeColumn::Auto, TypeColumn::Index)
}
