use std::fmt;

/// The remaining unconsumed input of a parse.
///
/// A cursor is a suffix view over the source text: the full source plus the
/// byte position where the unconsumed part begins. Cursors are `Copy` and are
/// never mutated in place; advancing produces a new cursor, so a cursor kept
/// by a caller is unaffected by whatever a parser does with its own copy.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    /// Byte offset into `source`, always on a char boundary
    position: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor positioned at the start of `source`
    pub fn new(source: &'code str) -> Self {
        Cursor {
            source,
            position: 0,
        }
    }

    /// The remaining text
    pub fn as_str(&self) -> &'code str {
        &self.source[self.position..]
    }

    /// Length in bytes of the remaining text
    pub fn len(&self) -> usize {
        self.source.len() - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte offset of the remaining text within the source
    pub fn position(&self) -> usize {
        self.position
    }

    /// The full text this cursor was created from
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// Move forward by `bytes`, clamped to the end of the source.
    ///
    /// A count that lands inside a multi-byte character is rounded up to the
    /// end of that character.
    pub fn advance(self, bytes: usize) -> Self {
        let mut position = (self.position + bytes).min(self.source.len());
        while !self.source.is_char_boundary(position) {
            position += 1;
        }
        Cursor {
            source: self.source,
            position,
        }
    }

    /// Move past any leading whitespace
    pub fn skip_whitespace(self) -> Self {
        let rest = self.as_str();
        self.advance(rest.len() - rest.trim_start().len())
    }
}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
