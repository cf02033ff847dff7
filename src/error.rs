//! Crate-level error type

use crate::codegen::CodegenError;
use crate::parser::ParseError;
use thiserror::Error;

/// Any failure of a text → C++ conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

pub type Result<T> = std::result::Result<T, Error>;
