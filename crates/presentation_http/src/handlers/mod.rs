//! HTTP request handlers

pub mod dates;
pub mod health;
