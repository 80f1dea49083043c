use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser built from a thunk each time it runs
///
/// Grammar rules written as functions can name each other through `lazy`
/// without recursing at construction time: `lazy(expr)` does not call `expr`
/// until input arrives. For a rule that refers to itself as a value, see
/// [`recursive`](crate::recursive::recursive).
#[derive(Clone, Copy)]
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    pub fn new(factory: F) -> Self {
        Lazy { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (self.factory)().parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
