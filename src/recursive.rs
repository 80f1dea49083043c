//! Forward-declared parsers for self-referential grammar rules.
//!
//! [`recursive`] hands the rule body a [`RecursiveRef`] standing for the rule
//! being defined. The body may use it anywhere a parser is expected; it
//! resolves to the finished rule when it is run. The reference is weak, so a
//! rule that mentions itself does not keep itself alive.

use crate::cursor::Cursor;
use crate::debug::{Category, log_fail};
use crate::parser::{BoxedExt, BoxedParser, Outcome, Parser};
use std::cell::OnceCell;
use std::rc::{Rc, Weak};

type Slot<'code, O> = OnceCell<BoxedParser<'code, O>>;

/// A grammar rule that may refer to itself
pub struct Recursive<'code, O> {
    slot: Rc<Slot<'code, O>>,
}

impl<'code, O> Clone for Recursive<'code, O> {
    fn clone(&self) -> Self {
        Recursive {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<'code, O> Parser<'code> for Recursive<'code, O> {
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.slot.get() {
            Some(parser) => parser.parse(cursor),
            // Unreachable: `recursive` fills the slot before returning
            None => Ok(None),
        }
    }
}

/// Handle to a [`Recursive`] rule from inside its own definition
///
/// Fails softly when run before the rule is complete or after every
/// [`Recursive`] owning it has been dropped.
pub struct RecursiveRef<'code, O> {
    slot: Weak<Slot<'code, O>>,
}

impl<'code, O> Clone for RecursiveRef<'code, O> {
    fn clone(&self) -> Self {
        RecursiveRef {
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<'code, O> Parser<'code> for RecursiveRef<'code, O> {
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let Some(slot) = self.slot.upgrade() else {
            log_fail!(
                Category::Recursive,
                "rule dropped, reference at byte {} is dangling",
                cursor.position()
            );
            return Ok(None);
        };
        match slot.get() {
            Some(parser) => parser.parse(cursor),
            None => {
                log_fail!(
                    Category::Recursive,
                    "rule run at byte {} before its definition finished",
                    cursor.position()
                );
                Ok(None)
            }
        }
    }
}

/// Define a rule in terms of itself
///
/// ```
/// use parsido::{Match, Parser, cat, optional, recursive, word};
///
/// // nested := "[" nested? "]"
/// let nested = recursive(|this| cat(cat(word("["), optional(this)), word("]")));
/// let (value, rest) = nested.parse_str("[[]]!").unwrap().unwrap();
/// assert_eq!(Match::Seq(value).tokens(), vec!["[", "[", "]", "]"]);
/// assert_eq!(rest, "!");
/// ```
pub fn recursive<'code, F, P, O>(body: F) -> Recursive<'code, O>
where
    F: FnOnce(RecursiveRef<'code, O>) -> P,
    P: Parser<'code, Output = O> + 'code,
    O: 'code,
{
    let slot = Rc::new(OnceCell::new());
    let this = RecursiveRef {
        slot: Rc::downgrade(&slot),
    };
    let parser = body(this).boxed();
    // The slot is fresh, so this cannot already be filled
    let _ = slot.set(parser);
    Recursive { slot }
}
