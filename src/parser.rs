use crate::cursor::Cursor;
use crate::error::ParserFailure;
use std::rc::Rc;

/// Result of running a parser.
///
/// - `Ok(Some((value, cursor)))`: matched, `cursor` is the remaining input
/// - `Ok(None)`: soft failure, no match and nothing consumed
/// - `Err(failure)`: escalated failure raised in throwable mode
pub type Outcome<'code, T> = Result<Option<(T, Cursor<'code>)>, ParserFailure<'code>>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Parsers hold no mutable state: the same parser may be run any number
    /// of times, including from within its own definition. A failed parse
    /// never consumes input, since the caller still owns its cursor.
    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output>;

    /// Run this parser over a whole input string
    ///
    /// Returns the value together with the leftover text on success, `None`
    /// when the input does not match.
    fn parse_str(
        &self,
        input: &'code str,
    ) -> Result<Option<(Self::Output, &'code str)>, ParserFailure<'code>> {
        let outcome = self.parse(Cursor::new(input))?;
        Ok(outcome.map(|(value, cursor)| (value, cursor.as_str())))
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// A type-erased parser, for grammars whose shape is only known at runtime
pub type BoxedParser<'code, O> = Box<dyn Parser<'code, Output = O> + 'code>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: 'code,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}
