//! Bidirectional strftime-style format pattern

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::errors::DomainError;
use crate::value_objects::CalendarInstant;

/// A strftime-style date pattern, usable in both directions
///
/// Parsing probes a text against the pattern; rendering substitutes an
/// instant's fields into it. Patterns are immutable. The fixed candidate
/// patterns are constructed once from static strings; only the
/// caller-supplied output pattern is built per request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatPattern {
    strftime: Cow<'static, str>,
}

impl FormatPattern {
    /// Wrap a static pattern string (used for the fixed candidate list)
    #[must_use]
    pub const fn from_static(strftime: &'static str) -> Self {
        Self {
            strftime: Cow::Borrowed(strftime),
        }
    }

    /// Wrap a caller-supplied pattern string
    pub fn new(strftime: impl Into<String>) -> Self {
        Self {
            strftime: Cow::Owned(strftime.into()),
        }
    }

    /// The raw strftime pattern
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.strftime
    }

    /// Probe a text against this pattern
    ///
    /// Succeeds only when the pattern fully consumes the text and every
    /// field is in legal range (month 1-12, day valid for the month and
    /// year). Leftover characters, partial matches, and out-of-range
    /// fields all yield `None` so the caller can try the next candidate.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<CalendarInstant> {
        NaiveDate::parse_from_str(text, &self.strftime)
            .ok()
            .map(CalendarInstant::from_date)
    }

    /// Render an instant with this pattern
    ///
    /// Fails with [`DomainError::UnrenderablePattern`] when the pattern
    /// contains a directive chrono cannot format for a naive instant,
    /// such as an unknown specifier or a timezone offset.
    pub fn render(&self, instant: &CalendarInstant) -> Result<String, DomainError> {
        let mut out = String::with_capacity(self.strftime.len());
        write!(out, "{}", instant.as_naive().format(&self.strftime))
            .map_err(|_| DomainError::unrenderable_pattern(self.strftime.as_ref()))?;
        Ok(out)
    }
}

impl fmt::Display for FormatPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.strftime)
    }
}
