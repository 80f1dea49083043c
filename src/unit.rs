use crate::cursor::Cursor;
use crate::matched::Match;
use crate::parser::{Outcome, Parser};
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and yields a clone of its value
#[derive(Debug, Clone)]
pub struct Unit<T> {
    value: T,
}

impl<T> Unit<T> {
    pub fn new(value: T) -> Self {
        Unit { value }
    }
}

impl<'code, T> Parser<'code> for Unit<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        Ok(Some((self.value.clone(), cursor)))
    }
}

/// Convenience function to create a Unit parser
pub fn unit<T: Clone>(value: T) -> Unit<T> {
    Unit::new(value)
}

/// Parser that succeeds with the empty sequence
pub fn empty<'code>() -> Unit<Vec<Match<'code>>> {
    Unit::new(Vec::new())
}

/// Parser that always fails without consuming input
pub struct Fail<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new() -> Self {
        Fail {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Fail<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Fail<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, _cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        Ok(None)
    }
}

/// Convenience function to create a Fail parser, producing whatever type the
/// surrounding grammar expects
pub fn fail<T>() -> Fail<T> {
    Fail::new()
}
