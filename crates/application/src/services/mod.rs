//! Application services

pub mod sort_service;

pub use sort_service::{DateSortService, SortedDates};
