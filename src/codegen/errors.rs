//! Error types for the code generators
//!
//! Lowering either produces the whole output or fails; there is no partial
//! result.

use thiserror::Error;

/// Errors raised while lowering a parsed tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// The tree has the outline of a known convention but its parts disagree
    #[error("cannot lower input: {message}")]
    SerializationInvariantViolation { message: String },
}

impl CodegenError {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        CodegenError::SerializationInvariantViolation {
            message: message.into(),
        }
    }
}

/// An option value that does not name any known setting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
