use crate::cursor::Cursor;
use crate::debug::{Category, log_detail};
use crate::matched::Match;
use crate::parser::{Outcome, Parser};
use crate::sequence::sequence;
use crate::state::get;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Applications continue until one fails or succeeds without consuming
/// input; a zero-width match ends the repetition as if it had failed, so a
/// parser that can match the empty string does not loop. The results are
/// concatenated the same way [`cat`](crate::cat::cat) concatenates.
///
/// Constructing a `MoreThan0` does no work, and running it uses constant
/// stack however many elements it matches.
#[derive(Clone)]
pub struct MoreThan0<P> {
    parser: P,
}

impl<P> MoreThan0<P> {
    pub fn new(parser: P) -> Self {
        MoreThan0 { parser }
    }
}

impl<'code, P> Parser<'code> for MoreThan0<P>
where
    P: Parser<'code>,
    P::Output: Into<Match<'code>>,
{
    type Output = Vec<Match<'code>>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let step = Advancing {
            parser: &self.parser,
        };
        sequence(|run| {
            let mut items = Vec::new();
            while let Some(value) = run.nullable(&step)? {
                let value: Match<'code> = value.into();
                items.extend(value.into_seq());
            }
            Ok(items)
        })
        .parse(cursor)
    }
}

/// One application of the repeated parser, failing unless it consumed input
struct Advancing<'p, P> {
    parser: &'p P,
}

impl<'code, P> Parser<'code> for Advancing<'_, P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        sequence(|run| {
            let before = run.invoke(&get())?;
            let value = run.invoke(self.parser)?;
            let after = run.invoke(&get())?;
            if after.len() < before.len() {
                return Ok(value);
            }
            log_detail!(
                Category::Repeat,
                "zero-width match at byte {}, stopping",
                before.position()
            );
            run.fail()
        })
        .parse(cursor)
    }
}

/// Convenience function to create a MoreThan0 parser
pub fn more_than0<'code, P>(parser: P) -> MoreThan0<P>
where
    P: Parser<'code>,
    P::Output: Into<Match<'code>>,
{
    MoreThan0::new(parser)
}

/// Extension trait to add .more_than0() method support for parsers
pub trait MoreThan0Ext<'code>: Parser<'code> + Sized {
    fn more_than0(self) -> MoreThan0<Self>
    where
        Self::Output: Into<Match<'code>>,
    {
        MoreThan0::new(self)
    }
}

/// Implement MoreThan0Ext for all parsers
impl<'code, P> MoreThan0Ext<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cat::cat;
    use crate::pattern::pattern;
    use crate::separated_list::sep_by;
    use crate::word::word;

    #[test]
    fn test_zero_matches() {
        let parser = more_than0(word("a"));

        let (results, rest) = parser.parse_str("xyz").unwrap().unwrap();
        assert_eq!(results, vec![]);
        assert_eq!(rest, "xyz");
    }

    #[test]
    fn test_multiple_matches() {
        let parser = more_than0(word("a"));

        let (results, rest) = parser.parse_str("a a ab").unwrap().unwrap();
        assert_eq!(results, vec![Match::Token("a"); 3]);
        assert_eq!(rest, "b");
    }

    #[test]
    fn test_empty_input() {
        let parser = more_than0(word("a"));

        let (results, rest) = parser.parse_str("").unwrap().unwrap();
        assert!(results.is_empty());
        assert_eq!(rest, "");
    }

    #[test]
    fn test_zero_width_pattern_terminates_on_empty_input() {
        let parser = more_than0(pattern("a*").unwrap());

        let (results, rest) = parser.parse_str("").unwrap().unwrap();
        assert!(results.is_empty());
        assert_eq!(rest, "");
    }

    #[test]
    fn test_zero_width_pattern_stops_after_progress() {
        let parser = more_than0(pattern("a*").unwrap());

        let (results, rest) = parser.parse_str("aab").unwrap().unwrap();
        assert_eq!(results, vec![Match::Token("aa")]);
        assert_eq!(rest, "b");
    }

    #[test]
    fn test_skipped_whitespace_counts_as_progress() {
        // The second application matches nothing but still eats the spaces
        let parser = more_than0(pattern("a*").unwrap());

        let (results, rest) = parser.parse_str("a   b").unwrap().unwrap();
        assert_eq!(results, vec![Match::Token("a"), Match::Token("")]);
        assert_eq!(rest, "b");
    }

    #[test]
    fn test_sequence_results_are_concatenated() {
        let pair = cat(word(","), word("x"));
        let parser = more_than0(pair);

        let (results, rest) = parser.parse_str(",x ,x;").unwrap().unwrap();
        assert_eq!(Match::Seq(results).tokens(), vec![",", "x", ",", "x"]);
        assert_eq!(rest, ";");
    }

    #[test]
    fn test_many_elements() {
        let input = "a ".repeat(100_000);
        let parser = more_than0(word("a"));

        let (results, rest) = parser.parse_str(&input).unwrap().unwrap();
        assert_eq!(results.len(), 100_000);
        assert_eq!(rest, " ");
    }

    #[test]
    fn test_long_separated_list() {
        let input = (0..100_000)
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let parser = sep_by(pattern("[0-9]+").unwrap(), word(","));

        let (results, rest) = parser.parse_str(&input).unwrap().unwrap();
        assert_eq!(results.len(), 100_000);
        assert_eq!(results[99_999], Match::Token("99999"));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_reusable() {
        let parser = word("a").more_than0();

        let first = parser.parse_str("a a").unwrap();
        let second = parser.parse_str("a a").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_escalation_propagates() {
        let strict = sequence(|run| {
            run.invoke(&word("a"))?;
            run.throwable(&word("b"))
        });
        let parser = more_than0(strict);

        // The second element starts with "a" but is missing its "b"
        let failure = parser.parse_str("ab a;").unwrap_err();
        assert_eq!(failure.remaining(), ";");
    }
}
