//! Core logic for examplekit.
//! Static data tables, optional-argument example operations and logging bootstrap.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, flush_logging, init_logging, logging_status, LogValue};
pub use model::catalog::{fixed_sequence, lookup, lookup_table};
pub use model::params::{ExampleParams, ExtendedExampleParams};
pub use model::placeholder::EmptyModel;
pub use service::example_service::{
    do_example, do_example2, do_example3, ExampleError, ExampleResult, NO_WAY_MESSAGE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
