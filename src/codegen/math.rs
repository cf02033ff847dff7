//! Wolfram-style formula → fully parenthesized C++ expression
//!
//! Every prefix and binary application gets its own parentheses, so the
//! output never depends on C++ operator precedence:
//!
//! ```text
//! -1/2 (a - b - 1) (a + b)   →   (-(((1 / 2) * ((a - b) - 1)) * (a + b)))
//! ```
//!
//! Brackets contribute no text of their own, `n!` becomes `fact(n)` and
//! implicit multiplication becomes `*`. Exponentiation is rendered in one of
//! four [`PowerStyle`]s.

use super::errors::UnknownOption;
use super::literals::is_int_literal;
use crate::parser::ast::SExpr;
use crate::parser::grammar::{names, OperatorKind};
use std::fmt;
use std::str::FromStr;

/// Rendering of `a ^ b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerStyle {
    /// `(a ^ b)`
    Hat,
    /// `(a ** b)`
    Asterisk,
    /// `pow(a, b)`
    PowFunction,
    /// `a.pow(b)`
    #[default]
    PowMethod,
}

impl PowerStyle {
    pub const ALL: [PowerStyle; 4] = [
        PowerStyle::Hat,
        PowerStyle::Asterisk,
        PowerStyle::PowFunction,
        PowerStyle::PowMethod,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerStyle::Hat => "hat",
            PowerStyle::Asterisk => "asterisk",
            PowerStyle::PowFunction => "pow-function",
            PowerStyle::PowMethod => "pow-method",
        }
    }

    /// Numeric code, `0..=3`
    pub fn code(&self) -> u8 {
        match self {
            PowerStyle::Hat => 0,
            PowerStyle::Asterisk => 1,
            PowerStyle::PowFunction => 2,
            PowerStyle::PowMethod => 3,
        }
    }

    /// The next style, wrapping around
    pub fn next(self) -> Self {
        match self {
            PowerStyle::Hat => PowerStyle::Asterisk,
            PowerStyle::Asterisk => PowerStyle::PowFunction,
            PowerStyle::PowFunction => PowerStyle::PowMethod,
            PowerStyle::PowMethod => PowerStyle::Hat,
        }
    }
}

impl fmt::Display for PowerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerStyle {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        PowerStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized || style.code().to_string() == normalized)
            .ok_or_else(|| UnknownOption {
                kind: "power style",
                value: s.to_string(),
                expected: "hat, asterisk, pow-function, pow-method, 0-3",
            })
    }
}

/// Settings for [`MathSerializer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MathOptions {
    pub power_style: PowerStyle,
    /// Wrap an integer literal on the left of a binary operator in `mint(...)`
    pub wrap_literal: bool,
}

/// Lowers a parsed formula to a C++ expression
#[derive(Debug, Clone, Copy, Default)]
pub struct MathSerializer {
    options: MathOptions,
}

impl MathSerializer {
    pub fn new(options: MathOptions) -> Self {
        MathSerializer { options }
    }

    pub fn options(&self) -> &MathOptions {
        &self.options
    }

    pub fn serialize(&self, expr: &SExpr<'_>) -> String {
        let out = self.render(expr);
        log::debug!(
            "rendered formula with {} powers ({} bytes)",
            self.options.power_style,
            out.len()
        );
        out
    }

    fn render(&self, expr: &SExpr<'_>) -> String {
        let Some(op) = expr.operator else {
            return expr.atom.clone();
        };

        match op.kind {
            OperatorKind::Paren => self.join(&expr.children, " "),
            OperatorKind::Prefix { .. } => {
                format!("({}{})", op.opening().unwrap_or_default(), self.join(&expr.children, " "))
            }
            OperatorKind::Postfix { .. } if op.name == names::FACTORIAL => {
                format!("fact({})", self.join(&expr.children, " "))
            }
            OperatorKind::Postfix { .. } => format!("{}({})", op.name, self.join(&expr.children, " ")),
            OperatorKind::Infix { .. } => match expr.children.as_slice() {
                [left, right] => self.binary(op.name, left, right),
                children => self.join(children, &format!(" {} ", op.name)),
            },
        }
    }

    fn binary(&self, name: &str, left: &SExpr<'_>, right: &SExpr<'_>) -> String {
        if name == names::SUBSCRIPT {
            return format!("({}_{})", self.render(left), self.render(right));
        }

        let lhs = self.operand(left);
        let rhs = self.render(right);
        match name {
            names::POWER => match self.options.power_style {
                PowerStyle::Hat => format!("({lhs} ^ {rhs})"),
                PowerStyle::Asterisk => format!("({lhs} ** {rhs})"),
                PowerStyle::PowFunction => format!("pow({lhs}, {rhs})"),
                PowerStyle::PowMethod => format!("{lhs}.pow({rhs})"),
            },
            names::ADJACENT => format!("({lhs} * {rhs})"),
            _ => format!("({lhs} {name} {rhs})"),
        }
    }

    /// Left operand, wrapped when it is a bare integer and wrapping is on
    fn operand(&self, expr: &SExpr<'_>) -> String {
        if self.options.wrap_literal && expr.is_leaf() && is_int_literal(&expr.atom) {
            format!("mint({})", expr.atom)
        } else {
            self.render(expr)
        }
    }

    fn join(&self, exprs: &[SExpr<'_>], separator: &str) -> String {
        exprs
            .iter()
            .map(|expr| self.render(expr))
            .collect::<Vec<_>>()
            .join(separator)
    }
}
