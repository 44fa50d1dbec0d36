use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a Telugu paragraph")]
    EmptyInput,
    #[error("The paragraph does not contain any Telugu text")]
    ScriptMismatch,
}

/// The Telugu Unicode block, U+0C00 through U+0C7F.
pub const fn is_telugu(c: char) -> bool {
    matches!(c, '\u{0C00}'..='\u{0C7F}')
}

/// Checks that the paragraph is non-empty and contains at least one Telugu
/// character. Pure predicate, no side effects.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if !text.chars().any(is_telugu) {
        return Err(ValidationError::ScriptMismatch);
    }

    Ok(())
}
