//! Parameter models for the example operations.
//!
//! Every field is independently optional and carries no validation rules.

use crate::logging::LogValue;
use serde::{Deserialize, Serialize};

/// Five-argument input: one optional string and four optional integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleParams {
    pub a: Option<String>,
    pub b: Option<i64>,
    pub c: Option<i64>,
    pub d: Option<i64>,
    pub e: Option<i64>,
}

impl ExampleParams {
    /// Creates params with only `a` set.
    pub fn with_text(a: impl Into<String>) -> Self {
        Self {
            a: Some(a.into()),
            ..Self::default()
        }
    }

    /// Returns the arguments in parameter order, as logged.
    pub fn log_fields(&self) -> [(&'static str, LogValue<'_>); 5] {
        [
            ("a", LogValue::Text(self.a.as_deref())),
            ("b", LogValue::Int(self.b)),
            ("c", LogValue::Int(self.c)),
            ("d", LogValue::Int(self.d)),
            ("e", LogValue::Int(self.e)),
        ]
    }
}

/// Six-argument input: [`ExampleParams`] plus optional integer `f`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedExampleParams {
    pub a: Option<String>,
    pub b: Option<i64>,
    pub c: Option<i64>,
    pub d: Option<i64>,
    pub e: Option<i64>,
    pub f: Option<i64>,
}

impl ExtendedExampleParams {
    /// Returns the arguments in parameter order, as logged.
    pub fn log_fields(&self) -> [(&'static str, LogValue<'_>); 6] {
        [
            ("a", LogValue::Text(self.a.as_deref())),
            ("b", LogValue::Int(self.b)),
            ("c", LogValue::Int(self.c)),
            ("d", LogValue::Int(self.d)),
            ("e", LogValue::Int(self.e)),
            ("f", LogValue::Int(self.f)),
        ]
    }
}
