use crate::cat::cat;
use crate::cursor::Cursor;
use crate::literal::silent;
use crate::many::more_than0;
use crate::matched::Match;
use crate::parser::{Outcome, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). Item results are concatenated the way
/// [`cat`] concatenates; separator values are dropped.
///
/// # Examples
/// - `"a,b,c"` with separator `","` → `["a", "b", "c"]`
/// - `"1, 2,3"` with separator `word(",")` → `["1", "2", "3"]`
///
/// # Note
/// - Requires at least one element; wrap in
///   [`optional`](crate::optional::optional) to accept an empty list
/// - A trailing separator is left unconsumed
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    P::Output: Into<Match<'code>>,
    PS: Parser<'code>,
{
    type Output = Vec<Match<'code>>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let rest = more_than0(cat(silent(&self.separator), &self.parser));
        cat(&self.parser, rest).parse(cursor)
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn sep_by<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    P::Output: Into<Match<'code>>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}

/// Extension trait to add .sep_by() method support for parsers
pub trait SepByExt<'code>: Parser<'code> + Sized {
    fn sep_by<PS>(self, separator: PS) -> SeparatedList<Self, PS>
    where
        Self::Output: Into<Match<'code>>,
        PS: Parser<'code>,
    {
        SeparatedList::new(self, separator)
    }
}

/// Implement SepByExt for all parsers
impl<'code, P> SepByExt<'code> for P where P: Parser<'code> {}
