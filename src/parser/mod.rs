//! Expression parser
//!
//! This module transforms input text into an S-expression tree:
//! - [`lexer`]: Tokenization (text → tokens)
//! - [`grammar`]: Operator table with binding powers
//! - [`parse`]: Binding-power parsing (tokens → [`ast::SExpr`])
//! - [`ast`]: Tree node and source location definitions
//!
//! # Notation
//!
//! One grammar serves both inputs the crate understands: LeetCode test cases
//! (`nums = [2,7,11,15], target = 9`) and Wolfram-style formulas
//! (`-1/2 (a - b - 1) (a + b)`). Juxtaposed expressions are joined by an
//! implicit `prod` operator.
//!
//! # Parser Implementation
//!
//! Hand-written Pratt parser driven by the operator table; no external parser
//! generator dependencies.

pub mod ast;
pub mod grammar;
pub mod lexer;
pub mod parse;

pub use ast::{SExpr, SourceLocation};
pub use parse::{parse, parse_tokens, ParseError, Parser};
