//! Batch date sorting service

use domain::FormatPattern;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::format_resolver;

/// Result of a successful batch sort
///
/// `count` always equals `sorted_dates.len()`; the operation never drops
/// or adds entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortedDates {
    /// Rendered dates in chronological order
    pub sorted_dates: Vec<String>,
    /// Number of rendered dates
    pub count: usize,
}

/// Stateless batch sorter
///
/// Holds no mutable state, so a single instance can serve any number of
/// concurrent calls without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateSortService;

impl DateSortService {
    /// Output pattern used when the caller does not supply one
    pub const DEFAULT_OUTPUT_FORMAT: &'static str = "%Y-%m-%d";

    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Sort a batch of raw date strings chronologically
    ///
    /// All-or-nothing: an empty batch, the first unparseable entry (in
    /// input order), or an unrenderable output pattern fails the whole
    /// call with no partial results. Entries denoting the same calendar
    /// day keep their relative input order (the sort is stable).
    #[instrument(skip(self, raw_dates), fields(batch_len = raw_dates.len()))]
    pub fn sort_dates(
        &self,
        raw_dates: &[String],
        output_pattern: &str,
    ) -> Result<SortedDates, ApplicationError> {
        if raw_dates.is_empty() {
            return Err(ApplicationError::EmptyBatch);
        }

        let mut instants = Vec::with_capacity(raw_dates.len());
        for raw in raw_dates {
            instants.push(format_resolver::resolve(raw)?);
        }

        // Vec::sort is stable: equal instants keep their input order.
        instants.sort();

        let pattern = FormatPattern::new(output_pattern);
        let sorted_dates = instants
            .iter()
            .map(|instant| pattern.render(instant))
            .collect::<Result<Vec<_>, _>>()?;

        let count = sorted_dates.len();
        debug!(count, output_pattern, "Batch sorted");
        Ok(SortedDates {
            sorted_dates,
            count,
        })
    }
}
