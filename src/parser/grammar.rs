//! Operator definitions and the grammar table
//!
//! A [`Grammar`] is an ordered list of leading operators (prefix operators and
//! brackets), an ordered list of following operators (postfix and infix) and
//! the default infix operator used when two expressions sit next to each
//! other. Precedence and associativity are encoded entirely in binding powers:
//! an infix operator with `left_bp < right_bp` chains to the left, one with
//! `left_bp > right_bp` chains to the right.
//!
//! The table is immutable once built. [`standard`] returns the process-wide
//! instance shared by both input notations.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Operator names used by the standard grammar.
///
/// The code generators dispatch on these names.
pub mod names {
    pub const PAREN: &str = "paren";
    pub const SQUARE: &str = "paren_sq";
    pub const BRACE: &str = "paren_wv";
    pub const FACTORIAL: &str = "!";
    pub const COMMA: &str = ",";
    pub const ASSIGN: &str = "=";
    pub const MINUS: &str = "-";
    pub const POWER: &str = "^";
    pub const SUBSCRIPT: &str = "_";
    pub const ADJACENT: &str = "prod";
}

/// Kind-specific data of an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    /// Leading unary operator, e.g. `-x`
    Prefix { right_bp: u32 },
    /// Leading bracket pair, e.g. `( ... )`
    Paren,
    /// Following unary operator, e.g. `n!`
    Postfix { left_bp: u32 },
    /// Following binary operator, e.g. `a + b`
    Infix { left_bp: u32, right_bp: u32 },
}

impl OperatorKind {
    pub fn is_leading(&self) -> bool {
        matches!(self, OperatorKind::Prefix { .. } | OperatorKind::Paren)
    }

    pub fn is_following(&self) -> bool {
        !self.is_leading()
    }

    /// Left binding power of a following operator
    pub fn left_bp(&self) -> Option<u32> {
        match *self {
            OperatorKind::Postfix { left_bp } | OperatorKind::Infix { left_bp, .. } => {
                Some(left_bp)
            }
            OperatorKind::Prefix { .. } | OperatorKind::Paren => None,
        }
    }

    /// Right binding power of the trailing operand, if the operator has one
    pub fn right_bp(&self) -> Option<u32> {
        match *self {
            OperatorKind::Prefix { right_bp } | OperatorKind::Infix { right_bp, .. } => {
                Some(right_bp)
            }
            OperatorKind::Paren | OperatorKind::Postfix { .. } => None,
        }
    }
}

/// A named operator and the symbols that spell it.
///
/// The first symbol triggers the match; any further symbols are interior
/// delimiters that must follow an inner expression each (a closing bracket is
/// the interior delimiter of a `Paren`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub name: &'static str,
    pub symbols: Vec<&'static str>,
    pub kind: OperatorKind,
}

impl Operator {
    pub fn new(name: &'static str, symbols: Vec<&'static str>, kind: OperatorKind) -> Self {
        Operator {
            name,
            symbols,
            kind,
        }
    }

    pub fn prefix(name: &'static str, symbol: &'static str, right_bp: u32) -> Self {
        Self::new(name, vec![symbol], OperatorKind::Prefix { right_bp })
    }

    pub fn paren(name: &'static str, open: &'static str, close: &'static str) -> Self {
        Self::new(name, vec![open, close], OperatorKind::Paren)
    }

    pub fn postfix(name: &'static str, symbol: &'static str, left_bp: u32) -> Self {
        Self::new(name, vec![symbol], OperatorKind::Postfix { left_bp })
    }

    pub fn infix(name: &'static str, symbol: &'static str, left_bp: u32, right_bp: u32) -> Self {
        Self::new(name, vec![symbol], OperatorKind::Infix { left_bp, right_bp })
    }

    /// The operator used for implicit adjacency; it has no symbols.
    pub fn adjacency(name: &'static str, left_bp: u32, right_bp: u32) -> Self {
        Self::new(name, Vec::new(), OperatorKind::Infix { left_bp, right_bp })
    }

    /// Symbol that starts this operator
    pub fn opening(&self) -> Option<&'static str> {
        self.symbols.first().copied()
    }

    /// Interior symbols, in the order they must appear
    pub fn interior(&self) -> &[&'static str] {
        self.symbols.get(1..).unwrap_or(&[])
    }
}

/// Grammar construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("operator '{name}' has no symbols")]
    EmptySymbols { name: &'static str },

    #[error("operator '{name}' cannot be used as a {position} operator")]
    MisplacedOperator {
        name: &'static str,
        position: &'static str,
    },

    #[error("bracket operator '{name}' needs exactly two symbols, found {found}")]
    ParenArity { name: &'static str, found: usize },

    #[error("default operator '{name}' must be an infix operator")]
    DefaultNotInfix { name: &'static str },
}

/// Immutable operator table
#[derive(Debug)]
pub struct Grammar {
    leading: Vec<Operator>,
    following: Vec<Operator>,
    default_infix: Operator,
    closing_symbols: FxHashSet<&'static str>,
}

impl Grammar {
    pub fn new(
        leading: Vec<Operator>,
        following: Vec<Operator>,
        default_infix: Operator,
    ) -> Result<Self, GrammarError> {
        for op in &leading {
            check_symbols(op)?;
            if !op.kind.is_leading() {
                return Err(GrammarError::MisplacedOperator {
                    name: op.name,
                    position: "leading",
                });
            }
            if op.kind == OperatorKind::Paren && op.symbols.len() != 2 {
                return Err(GrammarError::ParenArity {
                    name: op.name,
                    found: op.symbols.len(),
                });
            }
        }
        for op in &following {
            check_symbols(op)?;
            if !op.kind.is_following() {
                return Err(GrammarError::MisplacedOperator {
                    name: op.name,
                    position: "following",
                });
            }
        }
        if !matches!(default_infix.kind, OperatorKind::Infix { .. }) {
            return Err(GrammarError::DefaultNotInfix {
                name: default_infix.name,
            });
        }

        let closing_symbols = leading
            .iter()
            .filter(|op| op.kind == OperatorKind::Paren)
            .filter_map(|op| op.symbols.get(1).copied())
            .collect();

        Ok(Grammar {
            leading,
            following,
            default_infix,
            closing_symbols,
        })
    }

    /// First leading operator whose opening symbol is `symbol`
    pub fn leading_for(&self, symbol: &str) -> Option<&Operator> {
        self.leading.iter().find(|op| op.opening() == Some(symbol))
    }

    /// First following operator whose opening symbol is `symbol`
    pub fn following_for(&self, symbol: &str) -> Option<&Operator> {
        self.following.iter().find(|op| op.opening() == Some(symbol))
    }

    pub fn default_infix(&self) -> &Operator {
        &self.default_infix
    }

    pub fn is_closing_symbol(&self, symbol: &str) -> bool {
        self.closing_symbols.contains(symbol)
    }

    pub fn leading_operators(&self) -> &[Operator] {
        &self.leading
    }

    pub fn following_operators(&self) -> &[Operator] {
        &self.following
    }
}

fn check_symbols(op: &Operator) -> Result<(), GrammarError> {
    if op.symbols.is_empty() {
        Err(GrammarError::EmptySymbols { name: op.name })
    } else {
        Ok(())
    }
}

static STANDARD: Lazy<Grammar> = Lazy::new(|| {
    Grammar::new(
        vec![
            Operator::prefix("-", "-", 51),
            Operator::prefix("+", "+", 51),
            Operator::paren(names::PAREN, "(", ")"),
            Operator::paren(names::SQUARE, "[", "]"),
            Operator::paren(names::BRACE, "{", "}"),
        ],
        vec![
            Operator::postfix(names::FACTORIAL, "!", 102),
            Operator::infix(names::COMMA, ",", 10, 11),
            Operator::infix(names::ASSIGN, "=", 21, 20),
            Operator::infix(">", ">", 21, 20),
            Operator::infix("<", "<", 21, 20),
            Operator::infix(">=", ">=", 21, 20),
            Operator::infix("<=", "<=", 21, 20),
            Operator::infix("mod", "mod", 40, 41),
            Operator::infix(":", ":", 40, 41),
            Operator::infix("+", "+", 50, 51),
            Operator::infix(names::MINUS, "-", 50, 51),
            Operator::infix("*", "*", 80, 81),
            Operator::infix("/", "/", 80, 81),
            Operator::infix(names::POWER, "^", 101, 100),
            Operator::infix(names::SUBSCRIPT, "_", 111, 110),
        ],
        Operator::adjacency(names::ADJACENT, 80, 81),
    )
    .expect("built-in grammar is well-formed")
});

/// The grammar shared by the LeetCode and Wolfram notations
pub fn standard() -> &'static Grammar {
    &STANDARD
}
