//! One-call conversion: text → tokens → tree → C++

use crate::codegen::{DeclarationOptions, DeclarationSerializer, MathOptions, MathSerializer};
use crate::error::Result;
use crate::parser::{lexer, parse_tokens};
use std::fmt;

/// Which notation the input is in, and how to lower it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// LeetCode test case → declarations
    LeetCode(DeclarationOptions),
    /// Wolfram-style formula → expression
    Wolfram(MathOptions),
}

impl Target {
    pub fn name(&self) -> &'static str {
        match self {
            Target::LeetCode(_) => "leetcode",
            Target::Wolfram(_) => "wolfram",
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::LeetCode(DeclarationOptions::default())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::LeetCode(options) => {
                write!(f, "leetcode (format: {}", options.int_vector_format)?;
                if options.append_call {
                    write!(f, ", call: {}", options.method_name)?;
                }
                write!(f, ")")
            }
            Target::Wolfram(options) => {
                write!(f, "wolfram (power: {}", options.power_style)?;
                if options.wrap_literal {
                    write!(f, ", mint")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Convert `text` for `target`
///
/// # Errors
///
/// Fails with [`crate::Error::Parse`] when the text does not parse and with
/// [`crate::Error::Codegen`] when the tree cannot be lowered. No partial
/// output is produced.
pub fn convert(text: &str, target: &Target) -> Result<String> {
    let tokens = lexer::tokenize(text);
    let expr = parse_tokens(&tokens)?;
    log::debug!("converting {} tokens for {}", tokens.len(), target);

    let out = match target {
        Target::LeetCode(options) => DeclarationSerializer::new(options.clone()).serialize(&expr)?,
        Target::Wolfram(options) => MathSerializer::new(*options).serialize(&expr),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::PowerStyle;
    use crate::error::Error;
    use crate::parser::ParseError;

    #[test]
    fn test_convert_both_targets() {
        let leetcode = convert("s = \"abcabcbb\"", &Target::default()).unwrap();
        assert_eq!(leetcode, "string s = \"abcabcbb\";\n");

        let wolfram = Target::Wolfram(MathOptions {
            power_style: PowerStyle::Asterisk,
            wrap_literal: false,
        });
        assert_eq!(convert("x^2", &wolfram).unwrap(), "(x ** 2)");
    }

    #[test]
    fn test_convert_reports_parse_errors() {
        let err = convert("[1, 2", &Target::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::MissingClosingSymbol { .. })
        ));
        assert_eq!(err.to_string(), "missing ']' to close 'paren_sq'");
    }

    #[test]
    fn test_target_display() {
        assert_eq!(Target::default().to_string(), "leetcode (format: normal)");
        let wolfram = Target::Wolfram(MathOptions {
            power_style: PowerStyle::Hat,
            wrap_literal: true,
        });
        assert_eq!(wolfram.to_string(), "wolfram (power: hat, mint)");
        assert_eq!(wolfram.name(), "wolfram");
    }
}
