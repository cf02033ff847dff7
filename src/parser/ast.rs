// AST (S-expression) definitions shared by the parser and the code generators

use super::grammar::{Operator, OperatorKind};
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A node of the parse tree.
///
/// Leaves are bare atoms (numbers, quoted strings, identifiers) with no
/// children and no operator. Every internal node was created by matching an
/// operator and carries a shared reference to it; `atom` is then the
/// operator's name.
#[derive(Debug, Clone, PartialEq)]
pub struct SExpr<'g> {
    pub atom: String,
    pub children: Vec<SExpr<'g>>,
    pub operator: Option<&'g Operator>,
}

impl<'g> SExpr<'g> {
    /// Create a leaf node
    pub fn leaf(atom: impl Into<String>) -> Self {
        SExpr {
            atom: atom.into(),
            children: Vec::new(),
            operator: None,
        }
    }

    /// Create a node produced by `operator`
    pub fn node(operator: &'g Operator, children: Vec<SExpr<'g>>) -> Self {
        SExpr {
            atom: operator.name.to_string(),
            children,
            operator: Some(operator),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.operator.is_none()
    }

    pub fn kind(&self) -> Option<&'g OperatorKind> {
        self.operator.map(|op| &op.kind)
    }

    /// True if this node was produced by the operator called `name`
    pub fn is_op(&self, name: &str) -> bool {
        self.operator.is_some_and(|op| op.name == name)
    }

    pub fn child(&self, index: usize) -> Option<&SExpr<'g>> {
        self.children.get(index)
    }
}

impl fmt::Display for SExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            return write!(f, "{}", self.atom);
        }
        write!(f, "({}", self.atom)?;
        for child in &self.children {
            write!(f, " {}", child)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::grammar::Operator;

    #[test]
    fn test_display_nested() {
        let plus = Operator::infix("+", "+", 50, 51);
        let times = Operator::infix("*", "*", 80, 81);
        let expr = SExpr::node(
            &plus,
            vec![
                SExpr::leaf("1"),
                SExpr::node(&times, vec![SExpr::leaf("2"), SExpr::leaf("x")]),
            ],
        );
        assert_eq!(expr.to_string(), "(+ 1 (* 2 x))");
    }

    #[test]
    fn test_empty_node_prints_its_name() {
        let square = Operator::paren("paren_sq", "[", "]");
        let expr = SExpr::node(&square, Vec::new());
        assert_eq!(expr.to_string(), "paren_sq");
        assert!(!expr.is_leaf());
        assert!(expr.is_op("paren_sq"));
    }
}
