//! LeetCode test case → C++ declarations
//!
//! Turns an input such as `nums = [2,7,11,15], target = 9` into
//!
//! ```text
//! vector<int> nums = {2, 7, 11, 15};
//! int target = 9;
//! ```
//!
//! # Statement context
//!
//! The top of the tree is read as a sequence of statements. `,` and implicit
//! adjacency separate statements, `name = value` declares `name` with a type
//! inferred from `value`, and a bare literal gets a fresh name (`num0`,
//! `vec1`, ...; the suffix counts every variable declared so far). Three
//! adjacent arrays of method names, argument lists and return values are
//! lowered to a sequence of method calls instead.
//!
//! Integer arrays can optionally be read as a level-order binary tree or as a
//! linked list, in which case node construction code is emitted and matching
//! `delete` loops are appended after all declarations.

use super::errors::{CodegenError, UnknownOption};
use super::literals::{classify, collect_values, is_int_literal, is_string_literal, nested_array, ElementType};
use super::structures::{self, CleanupSection};
use crate::parser::ast::SExpr;
use crate::parser::grammar::{names, OperatorKind};
use std::fmt;
use std::str::FromStr;

/// How a one-dimensional integer array is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntVectorFormat {
    /// `vector<int>`
    #[default]
    Normal,
    /// `TreeNode *` built from a level-order array
    BinaryTree,
    /// `ListNode *` built in array order
    LinkedList,
}

impl IntVectorFormat {
    pub const ALL: [IntVectorFormat; 3] = [
        IntVectorFormat::Normal,
        IntVectorFormat::BinaryTree,
        IntVectorFormat::LinkedList,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntVectorFormat::Normal => "normal",
            IntVectorFormat::BinaryTree => "binary_tree",
            IntVectorFormat::LinkedList => "linked_list",
        }
    }

    /// The next format, wrapping around
    pub fn next(self) -> Self {
        match self {
            IntVectorFormat::Normal => IntVectorFormat::BinaryTree,
            IntVectorFormat::BinaryTree => IntVectorFormat::LinkedList,
            IntVectorFormat::LinkedList => IntVectorFormat::Normal,
        }
    }
}

impl fmt::Display for IntVectorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntVectorFormat {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        IntVectorFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| UnknownOption {
                kind: "int vector format",
                value: s.to_string(),
                expected: "normal, binary_tree, linked_list",
            })
    }
}

/// Settings for [`DeclarationSerializer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationOptions {
    /// Append a call of the solution method with every declared variable
    pub append_call: bool,
    pub int_vector_format: IntVectorFormat,
    /// Method called on the `Solution` object when `append_call` is set
    pub method_name: String,
}

impl Default for DeclarationOptions {
    fn default() -> Self {
        DeclarationOptions {
            append_call: false,
            int_vector_format: IntVectorFormat::Normal,
            method_name: "solve".to_string(),
        }
    }
}

/// Lowers a parsed test case to C++ declarations
#[derive(Debug, Clone, Default)]
pub struct DeclarationSerializer {
    options: DeclarationOptions,
}

impl DeclarationSerializer {
    pub fn new(options: DeclarationOptions) -> Self {
        DeclarationSerializer { options }
    }

    pub fn options(&self) -> &DeclarationOptions {
        &self.options
    }

    pub fn serialize(&self, expr: &SExpr<'_>) -> Result<String, CodegenError> {
        let mut emitter = Emitter::new(&self.options);
        let mut out = emitter.statement(expr)?;

        if self.options.append_call {
            out.push('\n');
            out.push_str("Solution sol;\n");
            out.push_str(&format!(
                "auto ans = sol.{}({});\n",
                self.options.method_name,
                emitter.variables.join(", ")
            ));
            out.push_str("dump(ans);");
        }
        if !emitter.cleanup.is_empty() {
            out.push('\n');
            out.push_str(emitter.cleanup.as_str());
        }

        log::debug!(
            "declared {} variable(s) in {} format",
            emitter.variables.len(),
            self.options.int_vector_format
        );
        Ok(out)
    }
}

/// Per-call state: declared names and pending cleanup
struct Emitter<'o> {
    options: &'o DeclarationOptions,
    variables: Vec<String>,
    cleanup: CleanupSection,
}

impl<'o> Emitter<'o> {
    fn new(options: &'o DeclarationOptions) -> Self {
        Emitter {
            options,
            variables: Vec::new(),
            cleanup: CleanupSection::default(),
        }
    }

    fn fresh_name(&mut self, prefix: &str) -> String {
        let name = format!("{prefix}{}", self.variables.len());
        self.variables.push(name.clone());
        name
    }

    fn statement(&mut self, expr: &SExpr<'_>) -> Result<String, CodegenError> {
        if let Some(number) = int_text(expr) {
            let name = self.fresh_name("num");
            return Ok(format!("int {name} = {number};\n"));
        }
        if expr.is_leaf() && is_string_literal(&expr.atom) {
            let name = self.fresh_name("str");
            return Ok(format!("string {name} = {};\n", expr.atom));
        }

        match expr.operator.map(|op| op.name) {
            Some(names::SQUARE) => Ok(self.declare_array(expr, None)),
            Some(names::ASSIGN) => match expr.children.as_slice() {
                [target, value] => Ok(self.assignment(target, value)),
                _ => Ok(format!("{};\n", render_value(expr))),
            },
            Some(names::COMMA) => self.statements(&expr.children),
            Some(names::ADJACENT) => match self.class_method(expr)? {
                Some(calls) => Ok(calls),
                None => self.statements(&expr.children),
            },
            _ => Ok(format!("{};\n", render_value(expr))),
        }
    }

    fn statements(&mut self, exprs: &[SExpr<'_>]) -> Result<String, CodegenError> {
        let mut out = String::new();
        for expr in exprs {
            out.push_str(&self.statement(expr)?);
        }
        Ok(out)
    }

    /// `name = value`, typed by the value
    fn assignment(&mut self, target: &SExpr<'_>, value: &SExpr<'_>) -> String {
        let name = render_value(target);
        self.variables.push(name.clone());

        if let Some(number) = int_text(value) {
            format!("int {name} = {number};\n")
        } else if value.is_leaf() && is_string_literal(&value.atom) {
            format!("string {name} = {};\n", value.atom)
        } else if value.is_op(names::SQUARE) {
            self.declare_array(value, Some(name))
        } else {
            format!("{name} = {};\n", render_value(value))
        }
    }

    /// Declare a `[...]` literal, under `name` or a fresh one
    fn declare_array(&mut self, expr: &SExpr<'_>, name: Option<String>) -> String {
        let shape = classify(expr);

        if shape.depth == 1 && shape.element == ElementType::Int {
            match self.options.int_vector_format {
                IntVectorFormat::BinaryTree => {
                    let name = name.unwrap_or_else(|| self.fresh_name("root_"));
                    return structures::binary_tree(&collect_values(expr), &name, &mut self.cleanup);
                }
                IntVectorFormat::LinkedList => {
                    let name = name.unwrap_or_else(|| self.fresh_name("head_"));
                    return structures::linked_list(&collect_values(expr), &name, &mut self.cleanup);
                }
                IntVectorFormat::Normal => {}
            }
        }

        let name = name.unwrap_or_else(|| self.fresh_name("vec"));
        let mut initializer = render_value(expr);
        if shape.element == ElementType::Char {
            initializer = initializer.replace('"', "'");
        }
        format!("{} {name} = {initializer};\n", shape.vector_type())
    }

    /// `[methods] [arguments] [returns]`, parsed as `prod(prod(a, b), c)`
    fn class_method(&mut self, expr: &SExpr<'_>) -> Result<Option<String>, CodegenError> {
        let [head, returns] = expr.children.as_slice() else {
            return Ok(None);
        };
        if !head.is_op(names::ADJACENT) {
            return Ok(None);
        }
        let [methods, arguments] = head.children.as_slice() else {
            return Ok(None);
        };

        let method_shape = classify(methods);
        if method_shape.depth != 1
            || method_shape.element != ElementType::String
            || classify(arguments).depth != 2
            || classify(returns).depth != 1
        {
            return Ok(None);
        }

        let array = |expr: &SExpr<'_>, what: &str| {
            nested_array(expr)
                .ok_or_else(|| CodegenError::invariant(format!("{what} must be a [...] array")))
        };
        let methods = array(methods, "method names")?;
        let arguments = array(arguments, "method arguments")?;
        let returns = array(returns, "return values")?;
        structures::class_method_calls(&methods, &arguments, &returns).map(Some)
    }
}

/// Text of an integer literal, with its sign if it has one
fn int_text(expr: &SExpr<'_>) -> Option<String> {
    if expr.is_leaf() {
        return is_int_literal(&expr.atom).then(|| expr.atom.clone());
    }
    let op = expr.operator?;
    match (op.kind, expr.children.as_slice()) {
        (OperatorKind::Prefix { .. }, [operand]) if operand.is_leaf() && is_int_literal(&operand.atom) => {
            Some(format!("{}{}", op.opening().unwrap_or_default(), operand.atom))
        }
        _ => None,
    }
}

/// Render an expression as a C++ initializer or value
fn render_value(expr: &SExpr<'_>) -> String {
    let Some(op) = expr.operator else {
        return expr.atom.clone();
    };
    let parts: Vec<String> = expr.children.iter().map(render_value).collect();
    let symbol = op.opening().unwrap_or(op.name);
    match op.kind {
        OperatorKind::Paren => format!("{{{}}}", parts.join(" ")),
        OperatorKind::Prefix { .. } => format!("{symbol}{}", parts.join(" ")),
        OperatorKind::Postfix { .. } => format!("{}{symbol}", parts.join(" ")),
        OperatorKind::Infix { .. } => match op.name {
            names::COMMA => parts.join(", "),
            names::ADJACENT => parts.join(" "),
            name => parts.join(&format!(" {name} ")),
        },
    }
}
