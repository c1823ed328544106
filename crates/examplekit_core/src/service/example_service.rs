//! Example operations that log their inputs and/or fail.
//!
//! # Invariants
//! - `do_example` never logs and always returns `ExampleError::Domain`.
//! - `do_example2` emits exactly one `info` record and never fails.
//! - `do_example3` emits exactly one `info` record, then returns
//!   `ExampleError::Generic`.
//! - Failures are returned to the caller unlogged.

use crate::logging::render_fields;
use crate::model::params::{ExampleParams, ExtendedExampleParams};
use log::info;
use std::convert::Infallible;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed message carried by both failure kinds.
pub const NO_WAY_MESSAGE: &str = "no way";

/// Result alias for example operations.
pub type ExampleResult<T> = Result<T, ExampleError>;

/// Failure returned by the example operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleError {
    /// Intentional failure specific to this module.
    Domain { message: String },
    /// Untyped ad hoc failure.
    Generic { message: String },
}

impl ExampleError {
    /// Returns the human-readable message regardless of kind.
    pub fn message(&self) -> &str {
        match self {
            Self::Domain { message } | Self::Generic { message } => message,
        }
    }

    /// Returns whether this is the domain-specific failure kind.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

impl Display for ExampleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ExampleError {}

/// Always fails with the domain-specific error.
///
/// Inputs are accepted but not used.
pub fn do_example(_params: &ExampleParams) -> ExampleResult<Infallible> {
    Err(ExampleError::Domain {
        message: NO_WAY_MESSAGE.to_string(),
    })
}

/// Logs all six inputs in parameter order and returns.
pub fn do_example2(params: &ExtendedExampleParams) {
    info!(
        "event=do_example2 module=core {}",
        render_fields(&params.log_fields())
    );
}

/// Logs all five inputs in parameter order, then fails with the generic error.
pub fn do_example3(params: &ExampleParams) -> ExampleResult<Infallible> {
    info!(
        "event=do_example3 module=core {}",
        render_fields(&params.log_fields())
    );
    Err(ExampleError::Generic {
        message: NO_WAY_MESSAGE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{do_example, do_example3, ExampleError, NO_WAY_MESSAGE};
    use crate::model::params::ExampleParams;

    #[test]
    fn do_example_ignores_inputs() {
        let empty = do_example(&ExampleParams::default()).unwrap_err();
        let full = do_example(&ExampleParams {
            a: Some("z".to_string()),
            b: Some(1),
            c: Some(2),
            d: Some(3),
            e: Some(4),
        })
        .unwrap_err();
        assert_eq!(empty, full);
        assert!(empty.is_domain());
    }

    #[test]
    fn failure_kinds_share_message_but_differ_in_kind() {
        let domain = do_example(&ExampleParams::default()).unwrap_err();
        let generic = do_example3(&ExampleParams::default()).unwrap_err();

        assert_eq!(domain.to_string(), NO_WAY_MESSAGE);
        assert_eq!(generic.to_string(), NO_WAY_MESSAGE);
        assert_ne!(domain, generic);
        assert!(matches!(generic, ExampleError::Generic { .. }));
        assert!(!generic.is_domain());
    }
}
