use crate::cursor::Cursor;
use crate::matched::Match;
use crate::parser::{BoxedExt, BoxedParser, Outcome, Parser};
use crate::sequence::sequence;
use crate::unit::empty;

/// Parser combinator that sequences two parsers and concatenates their results
///
/// Each result is normalized to a sequence first: a token contributes itself,
/// a sequence contributes its elements. Chained `cat` calls therefore produce
/// one flat list rather than nested pairs:
///
/// ```
/// use parsido::{CatExt, Match, Parser, word};
///
/// let parser = word("a").cat(word("b")).cat(word("c"));
/// let (value, _) = parser.parse_str("a b c").unwrap().unwrap();
/// assert_eq!(value, vec![Match::Token("a"), Match::Token("b"), Match::Token("c")]);
/// ```
#[derive(Clone)]
pub struct Cat<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Cat<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Cat { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Cat<P1, P2>
where
    P1: Parser<'code>,
    P1::Output: Into<Match<'code>>,
    P2: Parser<'code>,
    P2::Output: Into<Match<'code>>,
{
    type Output = Vec<Match<'code>>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        sequence(|run| {
            let first: Match<'code> = run.invoke(&self.parser1)?.into();
            let second: Match<'code> = run.invoke(&self.parser2)?.into();
            let mut items = first.into_seq();
            items.extend(second.into_seq());
            Ok(items)
        })
        .parse(cursor)
    }
}

/// Convenience function to create a Cat parser
pub fn cat<'code, P1, P2>(parser1: P1, parser2: P2) -> Cat<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Cat::new(parser1, parser2)
}

/// Extension trait to add .cat() method support for parsers
pub trait CatExt<'code>: Parser<'code> + Sized {
    fn cat<P>(self, other: P) -> Cat<Self, P>
    where
        P: Parser<'code>,
    {
        Cat::new(self, other)
    }
}

/// Implement CatExt for all parsers
impl<'code, P> CatExt<'code> for P where P: Parser<'code> {}

/// Concatenate a runtime list of parsers, left to right
///
/// An empty list yields the empty sequence. For a fixed list of parsers of
/// different types use the [`seq!`](crate::seq!) macro.
pub fn seq<'code, I, P>(parsers: I) -> BoxedParser<'code, Vec<Match<'code>>>
where
    I: IntoIterator<Item = P>,
    P: Parser<'code> + 'code,
    P::Output: Into<Match<'code>>,
{
    parsers
        .into_iter()
        .fold(empty().boxed(), |acc, parser| cat(acc, parser).boxed())
}

/// Concatenate a fixed list of parsers, left to right
///
/// Expands to nested [`cat`](crate::cat::cat) calls starting from
/// [`empty`](crate::unit::empty), so the parsers may have different types.
///
/// ```
/// use parsido::{Match, Parser, pattern, seq, word};
///
/// let call = seq![word("f"), "(", pattern("[0-9]+").unwrap(), ")"];
/// let (value, _) = call.parse_str("f(42)").unwrap().unwrap();
/// assert_eq!(value, vec![Match::Token("f"), Match::Token("42")]);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::unit::empty()
    };
    ($($parser:expr),+ $(,)?) => {{
        let acc = $crate::unit::empty();
        $(let acc = $crate::cat::cat(acc, $parser);)+
        acc
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::pattern;
    use crate::unit::unit;
    use crate::word::word;

    #[test]
    fn test_cat_flattens_tokens() {
        let parser = cat(word("a"), word("b"));

        let (value, rest) = parser.parse_str("a b").unwrap().unwrap();
        assert_eq!(value, vec![Match::Token("a"), Match::Token("b")]);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_cat_first_fails() {
        let parser = cat(word("a"), word("b"));
        assert_eq!(parser.parse_str("b b").unwrap(), None);
    }

    #[test]
    fn test_cat_second_fails() {
        let cursor = Cursor::new("a c");
        let parser = cat(word("a"), word("b"));

        assert_eq!(parser.parse(cursor).unwrap(), None);
    }

    #[test]
    fn test_cat_method_chain_stays_flat() {
        let parser = word("a").cat(word("b")).cat(word("c"));

        let (value, _) = parser.parse_str("abc").unwrap().unwrap();
        assert_eq!(value.len(), 3);
        assert_eq!(Match::Seq(value).tokens(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cat_keeps_deeper_nesting() {
        // A sequence inside a sequence is an element, not spliced further
        let nested = unit(vec![Match::Seq(vec![Match::Token("x")])]);
        let parser = cat(word("a"), nested);

        let (value, _) = parser.parse_str("a").unwrap().unwrap();
        assert_eq!(
            value,
            vec![Match::Token("a"), Match::Seq(vec![Match::Token("x")])]
        );
    }

    #[test]
    fn test_cat_with_empty_sides() {
        let parser = cat(empty(), word("a"));

        let (value, _) = parser.parse_str("a").unwrap().unwrap();
        assert_eq!(value, vec![Match::Token("a")]);
    }

    #[test]
    fn test_seq_function() {
        let parser = seq(vec![word("let"), word("x"), word("=")]);

        let (value, rest) = parser.parse_str("let x = 1").unwrap().unwrap();
        assert_eq!(Match::Seq(value).tokens(), vec!["let", "x", "="]);
        assert_eq!(rest, " 1");
    }

    #[test]
    fn test_seq_function_empty_list() {
        let parser = seq(Vec::<crate::word::Word>::new());

        let (value, rest) = parser.parse_str("abc").unwrap().unwrap();
        assert!(value.is_empty());
        assert_eq!(rest, "abc");
    }

    #[test]
    fn test_seq_macro_mixed_parsers() {
        let number = pattern("[0-9]+").unwrap();
        let parser = seq![word("sum"), "(", number.clone(), ",", number, ")"];

        let (value, rest) = parser.parse_str("sum(1, 22);").unwrap().unwrap();
        assert_eq!(
            value,
            vec![Match::Token("sum"), Match::Token("1"), Match::Token("22")]
        );
        assert_eq!(rest, ";");
    }

    #[test]
    fn test_seq_macro_empty() {
        let parser = seq![];

        let (value, _) = parser.parse_str("x").unwrap().unwrap();
        assert!(value.is_empty());
    }
}
