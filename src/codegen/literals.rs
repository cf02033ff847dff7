//! Literal recognition and shape inference over bracketed values
//!
//! LeetCode inputs are nested array literals. Before a declaration can be
//! written, the generator needs the nesting depth and the element type of the
//! literal, the flat list of its values (for trees and lists), or its nested
//! structure (for the class-method convention).

use crate::parser::ast::SExpr;
use crate::parser::grammar::{names, OperatorKind};
use std::fmt;

/// Atom consisting of ASCII digits only
pub fn is_int_literal(atom: &str) -> bool {
    !atom.is_empty() && atom.bytes().all(|b| b.is_ascii_digit())
}

/// Atom wrapped in matching single or double quotes whose closing quote is
/// not escaped
pub fn is_string_literal(atom: &str) -> bool {
    let Some(quote) = atom.chars().next().filter(|c| *c == '\'' || *c == '"') else {
        return false;
    };
    let mut rest = atom.chars().skip(1).collect::<Vec<_>>();
    if rest.pop() != Some(quote) || rest.contains(&'\n') {
        return false;
    }
    rest.last() != Some(&'\\')
}

/// Element type of a bracketed literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Int,
    String,
    Char,
    Unknown,
}

impl ElementType {
    /// Element type of a single leaf atom
    pub fn of_atom(atom: &str) -> Self {
        if is_int_literal(atom) {
            ElementType::Int
        } else if is_string_literal(atom) {
            // one character between the quotes
            if atom.chars().count() == 3 {
                ElementType::Char
            } else {
                ElementType::String
            }
        } else {
            ElementType::Unknown
        }
    }

    /// Combine with the type of a later sibling.
    ///
    /// The later type wins, except that an unknown sibling changes nothing
    /// and a char sibling does not demote an established string.
    pub fn merge(self, later: ElementType) -> ElementType {
        match (self, later) {
            (current, ElementType::Unknown) => current,
            (ElementType::String, ElementType::Char) => ElementType::String,
            (_, later) => later,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Int => "int",
            ElementType::String => "string",
            ElementType::Char => "char",
            ElementType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nesting depth and element type of a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub depth: usize,
    pub element: ElementType,
}

impl Shape {
    /// C++ type for a value of this shape, e.g. `vector<vector<int>>`
    pub fn vector_type(&self) -> String {
        format!(
            "{}{}{}",
            "vector<".repeat(self.depth),
            self.element,
            ">".repeat(self.depth)
        )
    }
}

/// Infer the shape of `expr`; every bracket pair adds one level of depth
pub fn classify(expr: &SExpr<'_>) -> Shape {
    classify_at(expr, 0)
}

fn classify_at(expr: &SExpr<'_>, outer_depth: usize) -> Shape {
    if expr.is_leaf() {
        return Shape {
            depth: outer_depth,
            element: ElementType::of_atom(&expr.atom),
        };
    }

    let depth = match expr.kind() {
        Some(OperatorKind::Paren) => outer_depth + 1,
        _ => outer_depth,
    };
    expr.children.iter().fold(
        Shape {
            depth,
            element: ElementType::Unknown,
        },
        |shape, child| {
            let inner = classify_at(child, depth);
            Shape {
                depth: shape.depth.max(inner.depth),
                element: shape.element.merge(inner.element),
            }
        },
    )
}

/// Flat list of the values of a one-dimensional literal, signs included
pub fn collect_values(expr: &SExpr<'_>) -> Vec<String> {
    let Some(op) = expr.operator else {
        return vec![expr.atom.clone()];
    };
    match op.kind {
        OperatorKind::Prefix { .. } => {
            let sign = op.opening().unwrap_or_default();
            expr.child(0)
                .map(collect_values)
                .unwrap_or_default()
                .into_iter()
                .map(|value| format!("{sign}{value}"))
                .collect()
        }
        OperatorKind::Infix { .. } if op.name == names::COMMA => {
            expr.children.iter().flat_map(collect_values).collect()
        }
        OperatorKind::Paren if op.name == names::SQUARE => {
            expr.child(0).map(collect_values).unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// A bracketed literal rebuilt as nested lists of atoms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NestedArray {
    Item(String),
    List(Vec<NestedArray>),
}

impl NestedArray {
    pub fn is_atom(&self, atom: &str) -> bool {
        matches!(self, NestedArray::Item(item) if item == atom)
    }

    /// Every atom in order, joined with `", "`. With `strip_quotes` the
    /// surrounding quote characters of each atom are dropped.
    pub fn render(&self, strip_quotes: bool) -> String {
        let mut atoms = Vec::new();
        self.flatten_into(&mut atoms, strip_quotes);
        atoms.join(", ")
    }

    fn flatten_into(&self, atoms: &mut Vec<String>, strip_quotes: bool) {
        match self {
            NestedArray::Item(item) if strip_quotes => atoms.push(strip_outer(item).to_string()),
            NestedArray::Item(item) => atoms.push(item.clone()),
            NestedArray::List(items) => {
                for item in items {
                    item.flatten_into(atoms, strip_quotes);
                }
            }
        }
    }
}

fn strip_outer(atom: &str) -> &str {
    let mut chars = atom.chars();
    match (chars.next(), chars.next_back()) {
        (Some(_), Some(_)) => chars.as_str(),
        _ => atom,
    }
}

/// Rebuild the elements of the `[...]` literal `expr`.
///
/// Returns `None` when `expr` is not a square-bracket literal.
pub fn nested_array(expr: &SExpr<'_>) -> Option<Vec<NestedArray>> {
    let mut out = Vec::new();
    push_nested(expr, &mut out, "");
    match out.into_iter().next() {
        Some(NestedArray::List(items)) => Some(items),
        _ => None,
    }
}

fn push_nested(expr: &SExpr<'_>, out: &mut Vec<NestedArray>, sign: &str) {
    let Some(op) = expr.operator else {
        out.push(NestedArray::Item(format!("{sign}{}", expr.atom)));
        return;
    };
    match op.kind {
        OperatorKind::Prefix { .. } => {
            if let Some(operand) = expr.child(0) {
                push_nested(operand, out, op.opening().unwrap_or_default());
            }
        }
        OperatorKind::Infix { .. } if op.name == names::COMMA => {
            for child in &expr.children {
                push_nested(child, out, "");
            }
        }
        OperatorKind::Paren if op.name == names::SQUARE => {
            let mut items = Vec::new();
            if let Some(inner) = expr.child(0) {
                push_nested(inner, &mut items, "");
            }
            out.push(NestedArray::List(items));
        }
        _ => {}
    }
}
