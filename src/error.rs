use crate::cursor::Cursor;
use std::error::Error;
use std::fmt;

/// Number of characters of remaining input shown when displaying a failure
const PREVIEW_CHARS: usize = 20;

/// Escalated parse failure.
///
/// Raised only when a sub-parse invoked in throwable mode does not match.
/// Unlike a soft failure it is not absorbed by ordered choice or repetition:
/// it travels out of every enclosing parser to the caller of
/// [`Parser::parse_str`](crate::parser::Parser::parse_str).
///
/// The only location carried is the residual cursor at the point of failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParserFailure<'code> {
    cursor: Cursor<'code>,
}

impl<'code> ParserFailure<'code> {
    pub fn new(cursor: Cursor<'code>) -> Self {
        ParserFailure { cursor }
    }

    /// The input that was left when the failure was raised
    pub fn cursor(&self) -> Cursor<'code> {
        self.cursor
    }

    /// Byte offset of the failure within the source
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The unconsumed text at the failure
    pub fn remaining(&self) -> &'code str {
        self.cursor.as_str()
    }

    fn preview(&self) -> String {
        let rest = self.remaining();
        let mut preview: String = rest.chars().take(PREVIEW_CHARS).collect();
        if preview.len() < rest.len() {
            preview.push_str("...");
        }
        preview
    }
}

impl fmt::Display for ParserFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cursor.is_empty() {
            write!(
                f,
                "parser failure at byte {}: unexpected end of input",
                self.position()
            )
        } else {
            write!(
                f,
                "parser failure at byte {}: no match for {:?}",
                self.position(),
                self.preview()
            )
        }
    }
}

impl Error for ParserFailure<'_> {}

/// Error raised while constructing a grammar, before any input is seen
#[derive(Debug)]
pub enum GrammarError {
    /// A `pattern` was given text that does not compile as a regex
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::InvalidPattern { pattern, .. } => {
                write!(f, "invalid pattern {:?}", pattern)
            }
        }
    }
}

impl Error for GrammarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GrammarError::InvalidPattern { source, .. } => Some(source),
        }
    }
}
