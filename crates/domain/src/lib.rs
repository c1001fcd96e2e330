//! Domain layer for ChronoSort
//!
//! Contains the core value objects (calendar instants, format patterns) and
//! domain errors. This layer has no async code and performs no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
