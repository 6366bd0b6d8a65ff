use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("keyword input is empty")]
    EmptyInput,
}

/// Keyword text that passed [`validate`]: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword(String);

impl Keyword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for Keyword {
    type Error = ValidationError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        validate(raw)
    }
}

/// Trim the raw input once and reject it if nothing is left.
///
/// The byte order mark counts as whitespace at either end; pasted text often
/// starts with one. No other normalization happens: case and inner whitespace
/// are preserved.
pub fn validate(raw: &str) -> Result<Keyword, ValidationError> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(Keyword(trimmed.to_owned()))
}
