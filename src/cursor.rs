use crate::atomic::Atomic;
use crate::error::{CodeLoc, ParseError};

/// Generic cursor trait for parser combinators
///
/// A cursor is an immutable view of a position in fully resident input.
/// Advancing returns a new cursor and leaves the old one untouched, so
/// backtracking is simply reusing an earlier copy. A cursor never copies
/// the underlying input; it only tracks where into it it is.
pub trait Cursor<'code>: Copy + Clone + Sized {
    /// The type of elements this cursor iterates over
    type Element: Atomic;

    /// Get the element at the current cursor position without consuming it
    ///
    /// Returns `EndOfInput` if the cursor is positioned at the end of the sequence
    fn value(&self) -> Result<Self::Element, ParseError<'code, Self::Element>>;

    /// Advance the cursor to the next element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Advance the cursor to the next element, returning an error if already at end
    fn try_next(self) -> Result<Self, ParseError<'code, Self::Element>>;

    /// Get the current position in the sequence
    ///
    /// For end-of-sequence cursors, this returns the length of the sequence
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the sequence
    fn eos(&self) -> bool {
        self.value().is_err()
    }

    /// Get the source data without consuming the cursor
    fn source(&self) -> &'code [Self::Element];

    /// Consume the cursor and return its inner data and position
    fn inner(self) -> (&'code [Self::Element], usize);

    /// The input that has not been consumed yet
    fn remaining(&self) -> &'code [Self::Element] {
        let (data, position) = self.inner();
        &data[position..]
    }

    /// Location of this cursor for error reporting
    fn loc(&self) -> CodeLoc<'code, Self::Element> {
        let (data, position) = self.inner();
        CodeLoc::new(data, position)
    }
}
