use crate::cat::cat;
use crate::cursor::Cursor;
use crate::many::more_than0;
use crate::matched::Match;
use crate::parser::{Outcome, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first application must succeed; the rest behave like
/// [`more_than0`](crate::many::more_than0).
#[derive(Clone)]
pub struct MoreThan1<P> {
    parser: P,
}

impl<P> MoreThan1<P> {
    pub fn new(parser: P) -> Self {
        MoreThan1 { parser }
    }
}

impl<'code, P> Parser<'code> for MoreThan1<P>
where
    P: Parser<'code>,
    P::Output: Into<Match<'code>>,
{
    type Output = Vec<Match<'code>>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        cat(&self.parser, more_than0(&self.parser)).parse(cursor)
    }
}

/// Convenience function to create a MoreThan1 parser
pub fn more_than1<'code, P>(parser: P) -> MoreThan1<P>
where
    P: Parser<'code>,
    P::Output: Into<Match<'code>>,
{
    MoreThan1::new(parser)
}

/// Extension trait to add .more_than1() method support for parsers
pub trait MoreThan1Ext<'code>: Parser<'code> + Sized {
    fn more_than1(self) -> MoreThan1<Self>
    where
        Self::Output: Into<Match<'code>>,
    {
        MoreThan1::new(self)
    }
}

/// Implement MoreThan1Ext for all parsers
impl<'code, P> MoreThan1Ext<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::pattern;
    use crate::word::word;

    #[test]
    fn test_zero_matches_fails() {
        let parser = more_than1(word("a"));
        assert_eq!(parser.parse_str("b").unwrap(), None);
    }

    #[test]
    fn test_one_match() {
        let parser = more_than1(word("a"));

        let (results, rest) = parser.parse_str("ab").unwrap().unwrap();
        assert_eq!(results, vec![Match::Token("a")]);
        assert_eq!(rest, "b");
    }

    #[test]
    fn test_multiple_matches() {
        let parser = more_than1(word("a"));

        let (results, rest) = parser.parse_str("a a a").unwrap().unwrap();
        assert_eq!(results, vec![Match::Token("a"); 3]);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_empty_input_fails() {
        let parser = word("a").more_than1();
        assert_eq!(parser.parse_str("").unwrap(), None);
    }

    #[test]
    fn test_zero_width_first_match_is_accepted() {
        // Only the repeated tail requires progress
        let parser = more_than1(pattern("a*").unwrap());

        let (results, rest) = parser.parse_str("b").unwrap().unwrap();
        assert_eq!(results, vec![Match::Token("")]);
        assert_eq!(rest, "b");
    }

    #[test]
    fn test_digits_then_other() {
        let parser = more_than1(pattern("[0-9]").unwrap());

        let (results, rest) = parser.parse_str("1 2 3x").unwrap().unwrap();
        assert_eq!(Match::Seq(results).tokens(), vec!["1", "2", "3"]);
        assert_eq!(rest, "x");
    }
}
