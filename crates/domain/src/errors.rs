//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A date string matched none of the candidate input patterns
    #[error("Invalid date format: '{raw}'")]
    UnrecognizedFormat { raw: String },

    /// An output pattern could not be applied to a calendar instant
    #[error("Invalid output format: '{pattern}'")]
    UnrenderablePattern { pattern: String },
}

impl DomainError {
    /// Create an unrecognized-format error for a raw input string
    pub fn unrecognized_format(raw: impl Into<String>) -> Self {
        Self::UnrecognizedFormat { raw: raw.into() }
    }

    /// Create an unrenderable-pattern error for an output pattern
    pub fn unrenderable_pattern(pattern: impl Into<String>) -> Self {
        Self::UnrenderablePattern {
            pattern: pattern.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_format_message_names_the_input() {
        let err = DomainError::unrecognized_format("not-a-date");
        assert_eq!(err.to_string(), "Invalid date format: 'not-a-date'");
    }

    #[test]
    fn unrenderable_pattern_message_names_the_pattern() {
        let err = DomainError::unrenderable_pattern("%Q");
        assert_eq!(err.to_string(), "Invalid output format: '%Q'");
    }

    #[test]
    fn unrecognized_format_constructor_stores_raw() {
        match DomainError::unrecognized_format("junk") {
            DomainError::UnrecognizedFormat { raw } => assert_eq!(raw, "junk"),
            DomainError::UnrenderablePattern { .. } => unreachable!("wrong variant"),
        }
    }
}
