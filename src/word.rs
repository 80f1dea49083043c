use crate::cursor::Cursor;
use crate::debug::{Category, log_detail};
use crate::parser::{Outcome, Parser};
use std::borrow::Cow;

/// Parser that skips leading whitespace and then matches an exact string
///
/// On success the whitespace and the string are consumed together and the
/// matched slice of the input is yielded. On failure nothing is consumed,
/// not even the whitespace.
#[derive(Debug, Clone)]
pub struct Word {
    expected: Cow<'static, str>,
}

impl Word {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Match `expected` at `cursor`, shared with literal coercion
    pub(crate) fn lex<'code>(
        expected: &str,
        cursor: Cursor<'code>,
    ) -> Option<(&'code str, Cursor<'code>)> {
        let start = cursor.skip_whitespace();
        let rest = start.as_str();

        if rest.starts_with(expected) {
            log_detail!(
                Category::Lexeme,
                "word {:?} matched at byte {}",
                expected,
                start.position()
            );
            Some((&rest[..expected.len()], start.advance(expected.len())))
        } else {
            log_detail!(
                Category::Lexeme,
                "word {:?} missed at byte {}",
                expected,
                start.position()
            );
            None
        }
    }
}

impl<'code> Parser<'code> for Word {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        Ok(Word::lex(&self.expected, cursor))
    }
}

/// Convenience function to create a Word parser
pub fn word(expected: impl Into<Cow<'static, str>>) -> Word {
    Word::new(expected)
}
