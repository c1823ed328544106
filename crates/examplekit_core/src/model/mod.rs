//! Static data and request models.
//!
//! # Responsibility
//! - Hold process-wide read-only data tables.
//! - Define optional-field parameter shapes for service operations.
//!
//! # Invariants
//! - Static tables are never mutated after first access.

pub mod catalog;
pub mod params;
pub mod placeholder;
