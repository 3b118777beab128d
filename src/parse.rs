//! Scanner shared by the attribute mini-language parsers.
//!
//! Path data, transform lists, point lists and quantities all use the same
//! lexical conventions: numbers in compact scientific notation, whitespace
//! and at most one comma between arguments, and single-character flags.

use crate::error::{Result, SvgError};

/// Byte-position cursor over attribute text.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    grammar: &'static str,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str, grammar: &'static str) -> Self {
        Self {
            input,
            pos: 0,
            grammar,
        }
    }

    /// Builds a parse error that names this scanner's grammar.
    pub(crate) fn error(&self, message: impl Into<String>) -> SvgError {
        SvgError::parse(self.grammar, message)
    }

    fn unexpected(&self) -> SvgError {
        match self.peek() {
            Some(c) => self.error(format!("unexpected character '{}' at position {}", c, self.pos)),
            None => self.error("unexpected end of input"),
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_byte_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Skips whitespace with at most one comma in it.
    pub(crate) fn skip_separator(&mut self) {
        self.skip_whitespace();
        if self.peek() == Some(',') {
            self.pos += 1;
            self.skip_whitespace();
        }
    }

    /// Returns an error unless only whitespace remains.
    pub(crate) fn finish(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    pub(crate) fn expect(&mut self, expected: char) -> Result<()> {
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(format!(
                "expected '{}' at position {}",
                expected, self.pos
            )))
        }
    }

    /// Returns true if the next character can start a number.
    pub(crate) fn has_number(&self) -> bool {
        matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.')
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek_byte_at(0), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Parses a number such as `-1.5e3`, `.5` or `10.`.
    ///
    /// An exponent is only consumed when digits follow it, so `1em` reads
    /// as `1` followed by the unit.
    pub(crate) fn number(&mut self) -> Result<f64> {
        let start = self.pos;

        if matches!(self.peek_byte_at(0), Some(b'+') | Some(b'-')) {
            self.pos += 1;
        }

        let mut digits = self.skip_digits();
        if self.peek_byte_at(0) == Some(b'.') {
            self.pos += 1;
            digits += self.skip_digits();
        }

        if digits == 0 {
            self.pos = start;
            return Err(self.unexpected());
        }

        if matches!(self.peek_byte_at(0), Some(b'e') | Some(b'E')) {
            let sign = usize::from(matches!(self.peek_byte_at(1), Some(b'+') | Some(b'-')));
            if matches!(self.peek_byte_at(1 + sign), Some(b) if b.is_ascii_digit()) {
                self.pos += 1 + sign;
                self.skip_digits();
            }
        }

        let text = &self.input[start..self.pos];
        text.parse::<f64>()
            .map_err(|e| self.error(format!("invalid number '{}': {}", text, e)))
    }

    /// Parses a number followed by an optional separator.
    pub(crate) fn argument(&mut self) -> Result<f64> {
        let value = self.number()?;
        self.skip_separator();
        Ok(value)
    }

    /// Parses an arc flag, which is always a single `0` or `1`.
    pub(crate) fn flag(&mut self) -> Result<bool> {
        let value = match self.peek() {
            Some('0') => false,
            Some('1') => true,
            _ => return Err(self.unexpected()),
        };
        self.pos += 1;
        self.skip_separator();
        Ok(value)
    }

    /// Parses a run of ASCII letters.
    pub(crate) fn identifier(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek_byte_at(0), Some(b) if b.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        let input = self.input;
        &input[start..self.pos]
    }

    /// Consumes the rest of the input.
    pub(crate) fn rest(&mut self) -> &'a str {
        let input = self.input;
        let rest = &input[self.pos..];
        self.pos = input.len();
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_without_separators() {
        let mut scanner = Scanner::new("10-20.5.5e2", "test");
        assert_eq!(scanner.number().unwrap(), 10.0);
        assert_eq!(scanner.number().unwrap(), -20.5);
        assert_eq!(scanner.number().unwrap(), 50.0);
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_exponent_needs_digits() {
        let mut scanner = Scanner::new("1em", "test");
        assert_eq!(scanner.number().unwrap(), 1.0);
        assert_eq!(scanner.identifier(), "em");

        let mut scanner = Scanner::new("2e-1", "test");
        assert_eq!(scanner.number().unwrap(), 0.2);
    }

    #[test]
    fn test_number_rejects_sign_only() {
        let mut scanner = Scanner::new("-x", "test");
        let err = scanner.number().unwrap_err();
        assert!(matches!(err, SvgError::Parse { grammar: "test", .. }));
    }

    #[test]
    fn test_separators_and_flags() {
        let mut scanner = Scanner::new("1 , 0 1", "test");
        assert_eq!(scanner.argument().unwrap(), 1.0);
        assert!(!scanner.flag().unwrap());
        assert!(scanner.flag().unwrap());
        assert!(scanner.finish().is_ok());
    }

    #[test]
    fn test_compact_flags() {
        let mut scanner = Scanner::new("110-20", "test");
        assert!(scanner.flag().unwrap());
        assert!(scanner.flag().unwrap());
        assert_eq!(scanner.argument().unwrap(), 0.0);
        assert_eq!(scanner.argument().unwrap(), -20.0);
    }

    #[test]
    fn test_finish_reports_trailing_text() {
        let mut scanner = Scanner::new("1 x", "test");
        scanner.argument().unwrap();
        let err = scanner.finish().unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse test: unexpected character 'x' at position 2"
        );
    }
}
