//! Multi-format date resolution
//!
//! Resolves a raw date string against a fixed, ordered list of candidate
//! strftime patterns. The list order doubles as the tie-break for inputs
//! that are syntactically ambiguous (e.g. `02/03/2025` resolves as
//! month/day/year because that candidate comes first), so the order must
//! not be changed.

use domain::{CalendarInstant, DomainError, FormatPattern};
use tracing::debug;

/// A supported input pattern together with a representative example
#[derive(Debug, Clone)]
pub struct CandidateFormat {
    /// The strftime pattern tried against raw input
    pub pattern: FormatPattern,
    /// Example string that this pattern accepts
    pub example: &'static str,
}

impl CandidateFormat {
    const fn new(strftime: &'static str, example: &'static str) -> Self {
        Self {
            pattern: FormatPattern::from_static(strftime),
            example,
        }
    }
}

/// Candidate input patterns, most specific to most generic.
///
/// Scanned in order; the first pattern that fully consumes the input with
/// every field in range wins.
static CANDIDATE_FORMATS: [CandidateFormat; 12] = [
    CandidateFormat::new("%Y-%m-%d", "2025-01-15"),
    CandidateFormat::new("%m/%d/%Y", "01/15/2025"),
    CandidateFormat::new("%d/%m/%Y", "15/01/2025"),
    CandidateFormat::new("%Y/%m/%d", "2025/01/15"),
    CandidateFormat::new("%B %d, %Y", "January 15, 2025"),
    CandidateFormat::new("%b %d, %Y", "Jan 15, 2025"),
    CandidateFormat::new("%d-%m-%Y", "15-01-2025"),
    CandidateFormat::new("%Y.%m.%d", "2025.01.15"),
    CandidateFormat::new("%m-%d-%Y", "01-15-2025"),
    CandidateFormat::new("%d %B %Y", "15 January 2025"),
    CandidateFormat::new("%d %b %Y", "15 Jan 2025"),
    CandidateFormat::new("%Y%m%d", "20250115"),
];

/// The candidate patterns in scan order, for informational listings
#[must_use]
pub fn candidate_formats() -> &'static [CandidateFormat] {
    &CANDIDATE_FORMATS
}

/// Resolve a raw date string to a calendar instant
///
/// The input is trimmed of leading and trailing whitespace; beyond that it
/// must match a candidate pattern exactly. A candidate whose fields are
/// out of range (month 13, February 30th) is rejected and scanning moves
/// on to the next one, so the winner is the first *fully valid* match,
/// not the first textually shaped one. On failure the error carries the
/// caller's original string, padding included.
pub fn resolve(raw: &str) -> Result<CalendarInstant, DomainError> {
    let trimmed = raw.trim();
    for candidate in &CANDIDATE_FORMATS {
        if let Some(instant) = candidate.pattern.parse(trimmed) {
            debug!(raw = %trimmed, pattern = %candidate.pattern, "Resolved date");
            return Ok(instant);
        }
    }
    debug!(raw = %trimmed, "No candidate pattern matched");
    Err(DomainError::unrecognized_format(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn instant(year: i32, month: u32, day: u32) -> CalendarInstant {
        CalendarInstant::from_ymd(year, month, day).expect("valid date")
    }

    #[test]
    fn resolves_iso_format() {
        assert_eq!(resolve("2025-01-15"), Ok(instant(2025, 1, 15)));
    }

    #[test]
    fn resolves_every_candidate_example() {
        for candidate in candidate_formats() {
            assert_eq!(
                resolve(candidate.example),
                Ok(instant(2025, 1, 15)),
                "example for {} should resolve",
                candidate.pattern
            );
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(resolve("  2025-01-15\t"), Ok(instant(2025, 1, 15)));
    }

    #[test]
    fn ambiguous_slash_date_prefers_month_day_year() {
        // 02/03/2025 could be Feb 3 or Mar 2; the earlier candidate wins.
        assert_eq!(resolve("02/03/2025"), Ok(instant(2025, 2, 3)));
    }

    #[test]
    fn out_of_range_month_falls_through_to_day_month_year() {
        // 15 is no month, so %m/%d/%Y rejects and %d/%m/%Y matches.
        assert_eq!(resolve("15/01/2025"), Ok(instant(2025, 1, 15)));
    }

    #[test]
    fn ambiguous_dash_date_prefers_day_month_year() {
        // 02-03-2025 fits both %d-%m-%Y and %m-%d-%Y; the earlier wins.
        assert_eq!(resolve("02-03-2025"), Ok(instant(2025, 3, 2)));
    }

    #[test]
    fn resolves_month_names() {
        assert_eq!(resolve("June 20, 2025"), Ok(instant(2025, 6, 20)));
        assert_eq!(resolve("Jan 15, 2025"), Ok(instant(2025, 1, 15)));
        assert_eq!(resolve("15 January 2025"), Ok(instant(2025, 1, 15)));
        assert_eq!(resolve("15 Jan 2025"), Ok(instant(2025, 1, 15)));
    }

    #[test]
    fn resolves_contiguous_digits() {
        assert_eq!(resolve("20251231"), Ok(instant(2025, 12, 31)));
    }

    #[test]
    fn rejects_unparseable_input() {
        assert_eq!(
            resolve("not-a-date"),
            Err(DomainError::unrecognized_format("not-a-date"))
        );
    }

    #[test]
    fn rejects_date_invalid_under_every_candidate() {
        // Shaped like a slash date, but 31 April does not exist under any
        // of the slash candidates.
        assert_eq!(
            resolve("31/31/2025"),
            Err(DomainError::unrecognized_format("31/31/2025"))
        );
    }

    #[test]
    fn rejects_empty_string() {
        assert!(resolve("").is_err());
        assert!(resolve("   ").is_err());
    }

    #[test]
    fn error_reports_the_original_untrimmed_input() {
        assert_eq!(
            resolve("  junk  "),
            Err(DomainError::unrecognized_format("  junk  "))
        );
    }

    #[test]
    fn internal_whitespace_is_not_normalized() {
        assert!(resolve("2025 - 01 - 15").is_err());
    }

    #[test]
    fn candidate_examples_round_trip_under_their_own_pattern() {
        for candidate in candidate_formats() {
            let instant = resolve(candidate.example).expect("example resolves");
            let rendered = candidate.pattern.render(&instant).expect("renderable");
            assert_eq!(rendered, candidate.example);
        }
    }

    #[test]
    fn candidate_list_order_is_stable() {
        let patterns: Vec<&str> = candidate_formats()
            .iter()
            .map(|c| c.pattern.as_str())
            .collect();
        assert_eq!(
            patterns,
            vec![
                "%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y",
                "%d-%m-%Y", "%Y.%m.%d", "%m-%d-%Y", "%d %B %Y", "%d %b %Y", "%Y%m%d",
            ]
        );
    }

    proptest! {
        #[test]
        fn resolve_never_panics_on_arbitrary_input(input in "\\PC{0,40}") {
            let _ = resolve(&input);
        }

        #[test]
        fn valid_iso_dates_always_resolve(
            year in 1583i32..=9999,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let text = format!("{year:04}-{month:02}-{day:02}");
            let resolved = resolve(&text);
            prop_assert_eq!(resolved, Ok(instant(year, month, day)));
        }
    }
}
