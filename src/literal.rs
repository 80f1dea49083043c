//! String literals as silent syntax.
//!
//! A `&str` can be used anywhere a parser is expected. It matches like
//! [`word`](crate::word::word) but contributes nothing to the result, so
//! punctuation can appear inside a [`cat`](crate::cat::cat) without
//! inflating the result shape. The literal is matched where it is used; no
//! parser is built for it up front.

use crate::cursor::Cursor;
use crate::map::{Map, MapExt};
use crate::matched::Match;
use crate::parser::{Outcome, Parser};
use crate::word::Word;

impl<'code> Parser<'code> for str {
    type Output = Vec<Match<'code>>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        Ok(Word::lex(self, cursor).map(|(_, cursor)| (Vec::new(), cursor)))
    }
}

/// Parser that runs `parser` and discards its value, yielding the empty sequence
pub fn silent<'code, P>(parser: P) -> Map<P, fn(P::Output) -> Vec<Match<'code>>>
where
    P: Parser<'code>,
{
    parser.map(discard as fn(P::Output) -> Vec<Match<'code>>)
}

fn discard<'code, T>(_value: T) -> Vec<Match<'code>> {
    Vec::new()
}

/// Extension trait to add .silent() method support for parsers
pub trait SilentExt<'code>: Parser<'code> + Sized {
    fn silent(self) -> Map<Self, fn(Self::Output) -> Vec<Match<'code>>> {
        silent(self)
    }
}

/// Implement SilentExt for all parsers
impl<'code, P> SilentExt<'code> for P where P: Parser<'code> {}
