//! C++ code generation from parsed trees
//!
//! Two independent lowerings share the parser output:
//! - [`declarations`]: LeetCode test cases → variable declarations, trees,
//!   lists and class-method call sequences
//! - [`math`]: Wolfram-style formulas → fully parenthesized expressions
//!
//! Supporting modules:
//! - [`literals`]: shape and element-type inference over `[...]` literals
//! - [`structures`]: binary tree, linked list and class-method emitters
//! - [`errors`]: lowering and option errors

pub mod declarations;
pub mod errors;
pub mod literals;
pub mod math;
pub mod structures;

pub use declarations::{DeclarationOptions, DeclarationSerializer, IntVectorFormat};
pub use errors::{CodegenError, UnknownOption};
pub use math::{MathOptions, MathSerializer, PowerStyle};
