//! Application layer - use cases and orchestration
//!
//! Contains the format resolver and the batch sorting service that the
//! HTTP layer calls into. Everything here is pure and synchronous.

pub mod error;
pub mod format_resolver;
pub mod services;

pub use error::ApplicationError;
pub use format_resolver::{CandidateFormat, candidate_formats, resolve};
pub use services::*;
