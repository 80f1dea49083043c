//! Raw access to the cursor threaded through a [`Sequence`](crate::sequence::Sequence).
//!
//! Used through [`Run::invoke`](crate::sequence::Run::invoke) like any other
//! parser: `get` reads the current cursor, `put` replaces it.

use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser that yields the current cursor without consuming anything
#[derive(Debug, Copy, Clone, Default)]
pub struct Get;

impl<'code> Parser<'code> for Get {
    type Output = Cursor<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        Ok(Some((cursor, cursor)))
    }
}

pub fn get() -> Get {
    Get
}

/// Parser that replaces the current cursor and yields the replacement
#[derive(Debug, Copy, Clone)]
pub struct Put<'code> {
    cursor: Cursor<'code>,
}

impl<'code> Parser<'code> for Put<'code> {
    type Output = Cursor<'code>;

    fn parse(&self, _cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        Ok(Some((self.cursor, self.cursor)))
    }
}

pub fn put(cursor: Cursor<'_>) -> Put<'_> {
    Put { cursor }
}
