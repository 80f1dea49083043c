use crate::cursor::Cursor;
use crate::debug::{Category, log, log_detail};
use crate::error::ParserFailure;
use crate::parser::{Outcome, Parser};
use crate::unit::fail;
use std::marker::PhantomData;

/// Short-circuit signal returned by [`Run`] when a sub-parse stops the sequence.
///
/// Authoring closures propagate it with `?`. It cannot be constructed outside
/// this module and carries nothing: what actually happened is recorded in the
/// `Run` and resolved by the [`Sequence`] that owns it.
#[derive(Debug, PartialEq, Eq)]
pub struct Abort {
    _private: (),
}

/// Why a run stopped
#[derive(Debug)]
enum Signal<'code> {
    NoMatch,
    Raised(ParserFailure<'code>),
}

/// State of one invocation of a [`Sequence`].
///
/// Holds the cursor threaded through the sub-parses. A new `Run` is created
/// for every parse, so nothing is shared between invocations.
#[derive(Debug)]
pub struct Run<'code> {
    cursor: Cursor<'code>,
    signal: Option<Signal<'code>>,
}

impl<'code> Run<'code> {
    fn new(cursor: Cursor<'code>) -> Self {
        Run {
            cursor,
            signal: None,
        }
    }

    /// Run `parser` on the current input, committing its cursor on success.
    ///
    /// A soft failure aborts the whole sequence.
    pub fn invoke<P>(&mut self, parser: &P) -> Result<P::Output, Abort>
    where
        P: Parser<'code> + ?Sized,
    {
        match self.nullable(parser)? {
            Some(value) => Ok(value),
            None => Err(self.abort(Signal::NoMatch)),
        }
    }

    /// Like [`invoke`](Self::invoke), but a soft failure yields `None`
    /// and the sequence continues from the unchanged cursor
    pub fn nullable<P>(&mut self, parser: &P) -> Result<Option<P::Output>, Abort>
    where
        P: Parser<'code> + ?Sized,
    {
        self.live()?;
        match parser.parse(self.cursor) {
            Ok(Some((value, cursor))) => {
                self.cursor = cursor;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(failure) => Err(self.abort(Signal::Raised(failure))),
        }
    }

    /// Like [`invoke`](Self::invoke), but a soft failure is escalated to a
    /// [`ParserFailure`] that leaves every enclosing parser
    pub fn throwable<P>(&mut self, parser: &P) -> Result<P::Output, Abort>
    where
        P: Parser<'code> + ?Sized,
    {
        match self.nullable(parser)? {
            Some(value) => Ok(value),
            None => {
                let failure = ParserFailure::new(self.cursor);
                log!(Category::Sequence, "raising: {}", failure);
                Err(self.abort(Signal::Raised(failure)))
            }
        }
    }

    /// Abort the sequence with a soft failure
    pub fn fail<T>(&mut self) -> Result<T, Abort> {
        self.invoke(&fail())
    }

    /// Once aborted a run refuses further work, even if the author
    /// swallowed the `Abort`
    fn live(&self) -> Result<(), Abort> {
        match self.signal {
            Some(_) => Err(Abort { _private: () }),
            None => Ok(()),
        }
    }

    fn abort(&mut self, signal: Signal<'code>) -> Abort {
        if self.signal.is_none() {
            self.signal = Some(signal);
        }
        Abort { _private: () }
    }

    /// Resolve the author's result at the sequence boundary
    fn finish<O>(self, result: Result<O, Abort>) -> Outcome<'code, O> {
        match (self.signal, result) {
            (None, Ok(value)) => Ok(Some((value, self.cursor))),
            (Some(Signal::Raised(failure)), _) => Err(failure),
            (Some(Signal::NoMatch), Ok(_)) => {
                log_detail!(
                    Category::Sequence,
                    "author ignored an abort, failing at byte {}",
                    self.cursor.position()
                );
                Ok(None)
            }
            (Some(Signal::NoMatch), Err(_)) | (None, Err(_)) => {
                log_detail!(
                    Category::Sequence,
                    "abort absorbed at byte {}",
                    self.cursor.position()
                );
                Ok(None)
            }
        }
    }
}

/// Parser authored as an ordered list of sub-parses.
///
/// The authoring closure receives a [`Run`] and calls sub-parsers through it
/// as if they were plain sequential calls. The run threads the cursor from
/// one call to the next, and the first failing `?` ends the sequence.
pub struct Sequence<F, O> {
    author: F,
    _output: PhantomData<fn() -> O>,
}

impl<F, O> Sequence<F, O> {
    pub fn new(author: F) -> Self {
        Sequence {
            author,
            _output: PhantomData,
        }
    }
}

impl<'code, F, O> Parser<'code> for Sequence<F, O>
where
    F: Fn(&mut Run<'code>) -> Result<O, Abort>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut run = Run::new(cursor);
        let result = (self.author)(&mut run);
        run.finish(result)
    }
}

/// Convenience function to create a Sequence parser
///
/// ```
/// use parsido::{Parser, sequence, word};
///
/// let assignment = sequence(|run| {
///     let name = run.invoke(&word("x"))?;
///     run.invoke("=")?;
///     let value = run.invoke(&word("1"))?;
///     Ok((name, value))
/// });
///
/// let ((name, value), rest) = assignment.parse_str("x = 1;").unwrap().unwrap();
/// assert_eq!((name, value), ("x", "1"));
/// assert_eq!(rest, ";");
/// ```
pub fn sequence<'code, F, O>(author: F) -> Sequence<F, O>
where
    F: Fn(&mut Run<'code>) -> Result<O, Abort>,
{
    Sequence::new(author)
}
