//! Error types for the fitplan application.

use thiserror::Error;

/// Errors that can occur while generating a plan.
///
/// Plan generation is total over well-formed profiles: unknown labels fall
/// back to documented defaults. The only failure left is a computed value
/// that cannot be truncated into an integer field.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("{field} cannot be represented as an integer: {value}")]
    NotRepresentable { field: &'static str, value: f64 },
}
