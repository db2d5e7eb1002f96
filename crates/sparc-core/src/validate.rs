use crate::error::{Result, SparcError};
use crate::sanitize::sanitize;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const MIN_INPUT_CHARS: usize = 10;
pub const MAX_INPUT_CHARS: usize = 10_000;

pub const ERR_REQUIRED: &str = "Input is required";
pub const ERR_TOO_SHORT: &str = "Input must be at least 10 characters";
pub const ERR_TOO_LONG: &str = "Input exceeds maximum length of 10000 characters";
pub const ERR_ENCODING: &str = "Invalid character encoding detected";

static PRINTABLE_RE: OnceLock<Regex> = OnceLock::new();

/// Printable ASCII, any whitespace, or anything from U+00A0 upward.
/// Rejects C0/C1 control characters that are not whitespace.
fn printable_re() -> &'static Regex {
    PRINTABLE_RE.get_or_init(|| Regex::new(r"^[\x20-\x7E\s\x{A0}-\x{10FFFF}]*$").unwrap())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized_input: Option<String>,
}

impl ValidationResult {
    /// The sanitized text of a valid input, or its errors as `InvalidInput`.
    pub fn into_sanitized(self) -> Result<String> {
        match (self.is_valid, self.sanitized_input) {
            (true, Some(text)) => Ok(text),
            _ => Err(SparcError::InvalidInput(self.errors)),
        }
    }
}

fn has_valid_encoding(text: &str) -> bool {
    !text.contains('\u{FFFD}') && printable_re().is_match(text)
}

/// Validate a raw description.
///
/// Empty or whitespace-only input short-circuits with a single error and no
/// sanitized text. Otherwise every check runs, errors accumulate in check
/// order, and the sanitized text is attached regardless of the outcome.
pub fn validate_input(text: &str) -> ValidationResult {
    if text.trim().is_empty() {
        return ValidationResult {
            is_valid: false,
            errors: vec![ERR_REQUIRED.to_string()],
            sanitized_input: None,
        };
    }

    let mut errors = Vec::new();
    let len = text.chars().count();

    if len < MIN_INPUT_CHARS {
        errors.push(ERR_TOO_SHORT.to_string());
    }
    if len > MAX_INPUT_CHARS {
        errors.push(ERR_TOO_LONG.to_string());
    }
    if !has_valid_encoding(text) {
        errors.push(ERR_ENCODING.to_string());
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        sanitized_input: Some(sanitize(text)),
    }
}
