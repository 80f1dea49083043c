use crate::cursor::Cursor;
use crate::map::map;
use crate::matched::Match;
use crate::or::or;
use crate::parser::{Outcome, Parser};
use crate::unit::empty;

/// Parser combinator that tries a parser and falls back to the empty sequence
///
/// Never fails softly. The value is the parser's result as a [`Match`], or
/// `Match::Seq(vec![])` when it did not match.
#[derive(Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
    P::Output: Into<Match<'code>>,
{
    type Output = Match<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let present = map(&self.parser, Into::<Match<'code>>::into);
        let absent = map(empty(), Match::Seq);
        or(present, absent).parse(cursor)
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
    P::Output: Into<Match<'code>>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self>
    where
        Self::Output: Into<Match<'code>>,
    {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
