//! Field-less validated model.
//!
//! Reserved for future fields; carries no rules today.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// Empty structural model. Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyModel {}

impl EmptyModel {
    /// Validates model invariants. There are none, so this always succeeds.
    pub fn validate(&self) -> Result<(), Infallible> {
        Ok(())
    }
}
