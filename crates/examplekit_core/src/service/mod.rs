//! Core example operations.
//!
//! # Responsibility
//! - Expose the three example operations over optional-field params.
//! - Keep failure kinds distinguishable for callers.

pub mod example_service;
