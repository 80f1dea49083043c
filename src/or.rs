use crate::cursor::Cursor;
use crate::debug::{Category, log_detail};
use crate::parser::{BoxedExt, BoxedParser, Outcome, Parser};
use crate::sequence::sequence;
use crate::unit::fail;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// This is ordered choice: the first parser always gets the first attempt and
/// its success is final, even when the second would have consumed more.
/// Whatever the first parser consumed before failing is discarded.
#[derive(Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        sequence(|run| {
            if let Some(value) = run.nullable(&self.parser1)? {
                return Ok(value);
            }
            log_detail!(
                Category::Choice,
                "first branch failed at byte {}, trying second",
                cursor.position()
            );
            run.invoke(&self.parser2)
        })
        .parse(cursor)
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Ordered choice over a runtime list of parsers
///
/// An empty list always fails. For a fixed list of parsers of different types
/// use the [`one_of!`](crate::one_of!) macro.
pub fn one_of<'code, I, P, O>(parsers: I) -> BoxedParser<'code, O>
where
    I: IntoIterator<Item = P>,
    P: Parser<'code, Output = O> + 'code,
    O: 'code,
{
    parsers
        .into_iter()
        .fold(fail().boxed(), |acc, parser| or(acc, parser).boxed())
}

/// Ordered choice over a fixed list of parsers
///
/// Expands to nested [`or`](crate::or::or) calls starting from
/// [`fail`](crate::unit::fail). All parsers must share an output type.
///
/// ```
/// use parsido::{Parser, one_of, word};
///
/// let op = one_of![word("+"), word("-"), word("*")];
/// let (found, rest) = op.parse_str("- 1").unwrap().unwrap();
/// assert_eq!(found, "-");
/// assert_eq!(rest, " 1");
/// ```
#[macro_export]
macro_rules! one_of {
    () => {
        $crate::unit::fail()
    };
    ($($parser:expr),+ $(,)?) => {{
        let acc = $crate::unit::fail();
        $(let acc = $crate::or::or(acc, $parser);)+
        acc
    }};
}
