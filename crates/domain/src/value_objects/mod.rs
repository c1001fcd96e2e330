//! Value objects for the date sorting domain

pub mod calendar_instant;
pub mod format_pattern;

pub use calendar_instant::CalendarInstant;
pub use format_pattern::FormatPattern;
