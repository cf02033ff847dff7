//! Lexer (tokenizer) for test-case and formula notation
//!
//! Splits raw text into a flat sequence of [`Token`]s. At each position the
//! first matching class wins:
//!
//! 1. single-quoted string, a backslash keeps a quote from closing it
//! 2. double-quoted string, same rule
//! 3. identifier: an ASCII letter followed by ASCII letters or digits
//! 4. integer: ASCII digits
//! 5. punctuation, including the two-character `>=` and `<=`
//! 6. any other single character
//!
//! Whitespace is dropped. The lexer never fails: an unterminated quote or a
//! stray character simply becomes a one-character token and is rejected later
//! by the parser if it does not fit.

use super::ast::SourceLocation;
use std::fmt;

/// A slice of the input text plus where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub text: &'src str,
    pub location: SourceLocation,
}

impl<'src> Token<'src> {
    pub fn new(text: &'src str, location: SourceLocation) -> Self {
        Token { text, location }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.text)
    }
}

const TWO_CHAR_SYMBOLS: [&str; 2] = [">=", "<="];

/// Tokenize `text` in one pass
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let tokens = Lexer::new(text).tokenize();
    log::debug!("tokenized {} bytes into {} tokens", text.len(), tokens.len());
    tokens
}

/// Character scanner over the input text
pub struct Lexer<'src> {
    source: &'src str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn tokenize(&mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn next_token(&mut self) -> Option<Token<'src>> {
        loop {
            let ch = self.peek()?;
            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            let start = self.position;
            let location = self.current_location();
            let len = self.match_length(ch);
            for _ in 0..len {
                self.advance();
            }
            return Some(Token::new(&self.source[start..self.position], location));
        }
    }

    /// Length in chars of the token starting at the current position
    fn match_length(&self, ch: char) -> usize {
        if ch == '\'' || ch == '"' {
            if let Some(len) = self.quoted_length(ch) {
                return len;
            }
            return 1;
        }
        if ch.is_ascii_alphabetic() {
            return self.run_length(|c| c.is_ascii_alphanumeric());
        }
        if ch.is_ascii_digit() {
            return self.run_length(|c| c.is_ascii_digit());
        }
        let rest = &self.source[self.position..];
        if TWO_CHAR_SYMBOLS.iter().any(|sym| rest.starts_with(sym)) {
            return 2;
        }
        // single-character punctuation and stray characters alike
        1
    }

    /// Shortest quoted literal starting here, if it closes on this line
    fn quoted_length(&self, quote: char) -> Option<usize> {
        let mut prev = quote;
        for (i, ch) in self.source[self.position..].chars().enumerate().skip(1) {
            if ch == '\n' || ch == '\r' {
                return None;
            }
            if ch == quote && prev != '\\' {
                return Some(i + 1);
            }
            prev = ch;
        }
        None
    }

    fn run_length(&self, accept: impl Fn(char) -> bool) -> usize {
        self.source[self.position..]
            .chars()
            .take_while(|&c| accept(c))
            .count()
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Texts of `tokens`, mostly useful in tests and diagnostics
pub fn texts<'src>(tokens: &[Token<'src>]) -> Vec<&'src str> {
    tokens.iter().map(|t| t.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_tokens() {
        let tokens = tokenize("1 * 2 + 3 * 4 - 5 / 6");
        assert_eq!(
            texts(&tokens),
            vec!["1", "*", "2", "+", "3", "*", "4", "-", "5", "/", "6"]
        );
    }

    #[test]
    fn test_identifiers_and_numbers_split() {
        let tokens = tokenize("2x abc12 12abc mod");
        assert_eq!(texts(&tokens), vec!["2", "x", "abc12", "12", "abc", "mod"]);
    }

    #[test]
    fn test_comparison_operators() {
        let tokens = tokenize("a>=b<=c>d<e=f");
        assert_eq!(
            texts(&tokens),
            vec!["a", ">=", "b", "<=", "c", ">", "d", "<", "e", "=", "f"]
        );
    }

    #[test]
    fn test_quoted_literals() {
        let tokens = tokenize(r#"s = "abc", c = 'x', ["a", "b"]"#);
        assert_eq!(
            texts(&tokens),
            vec!["s", "=", "\"abc\"", ",", "c", "=", "'x'", ",", "[", "\"a\"", ",", "\"b\"", "]"]
        );
    }

    #[test]
    fn test_escaped_quote_does_not_terminate() {
        let tokens = tokenize(r#""a\"b" x"#);
        assert_eq!(texts(&tokens), vec![r#""a\"b""#, "x"]);

        let tokens = tokenize(r"'\''");
        assert_eq!(texts(&tokens), vec![r"'\''"]);
    }

    #[test]
    fn test_unterminated_quote_is_a_single_char() {
        let tokens = tokenize("\"abc\ndef\"");
        assert_eq!(texts(&tokens), vec!["\"", "abc", "def", "\""]);
    }

    #[test]
    fn test_stray_characters() {
        let tokens = tokenize("3.14 % é");
        assert_eq!(texts(&tokens), vec!["3", ".", "14", "%", "é"]);
    }

    #[test]
    fn test_locations() {
        let tokens = tokenize("[1,\n  22]");
        assert_eq!(tokens[0].location, SourceLocation::new(1, 1));
        assert_eq!(tokens[3].location, SourceLocation::new(2, 3));
        assert_eq!(tokens[4].location, SourceLocation::new(2, 5));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }
}
