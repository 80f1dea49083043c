use crate::cursor::Cursor;
use crate::debug::{Category, log_detail};
use crate::error::GrammarError;
use crate::parser::{Outcome, Parser};
use regex::Regex;

/// Parser that skips leading whitespace and then matches a regex anchored at
/// the start of the remaining input
///
/// A match may be empty, in which case nothing but the whitespace is
/// consumed. Repetition combinators stop on such zero-width matches.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile `pattern`, anchoring it at the start of the input
    pub fn new(pattern: &str) -> Result<Self, GrammarError> {
        let anchored = format!("^(?:{})", pattern);
        let regex = Regex::new(&anchored).map_err(|source| GrammarError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Pattern { regex })
    }

    /// Use an already compiled regex, recompiling it anchored at the start
    /// of the input
    pub fn from_regex(regex: &Regex) -> Result<Self, GrammarError> {
        Pattern::new(regex.as_str())
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl<'code> Parser<'code> for Pattern {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let start = cursor.skip_whitespace();
        let rest = start.as_str();

        match self.regex.find(rest) {
            Some(found) => {
                log_detail!(
                    Category::Lexeme,
                    "pattern {:?} matched {:?} at byte {}",
                    self.regex.as_str(),
                    found.as_str(),
                    start.position()
                );
                Ok(Some((found.as_str(), start.advance(found.end()))))
            }
            _ => {
                log_detail!(
                    Category::Lexeme,
                    "pattern {:?} missed at byte {}",
                    self.regex.as_str(),
                    start.position()
                );
                Ok(None)
            }
        }
    }
}

/// Convenience function to create a Pattern parser
pub fn pattern(pattern: &str) -> Result<Pattern, GrammarError> {
    Pattern::new(pattern)
}
