//! # Introduction
//!
//! cppgen turns the text people copy out of problem statements into C++
//! they can paste into a test harness. Two notations are understood:
//!
//! - LeetCode test cases such as `nums = [2,7,11,15], target = 9`, lowered to
//!   typed variable declarations, binary trees, linked lists or class-method
//!   call sequences;
//! - Wolfram-style formulas such as `-1/2 (a - b - 1) (a + b)`, lowered to a
//!   fully parenthesized C++ expression.
//!
//! ## Conversion pipeline
//!
//! ```text
//! Text → Lexer → Parser (+ Grammar) → SExpr → Serializer → C++
//! ```
//!
//! 1. [`parser`] — tokenises the text and builds an S-expression tree with a
//!    binding-power parser driven by an operator table.
//! 2. [`codegen`] — the two serializers and the literal inference they use.
//! 3. [`convert`] — runs the whole pipeline for a [`Target`].
//! 4. [`ui`] — ratatui-based playground; not part of the stable library API.
//!
//! ```
//! use cppgen::{convert, Target};
//!
//! let out = convert("nums = [2,7,11,15], target = 9", &Target::default()).unwrap();
//! assert_eq!(out, "vector<int> nums = {2, 7, 11, 15};\nint target = 9;\n");
//! ```

pub mod codegen;
pub mod convert;
pub mod error;
pub mod parser;
pub mod ui;

pub use convert::{convert, Target};
pub use error::{Error, Result};
