use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{CodeLoc, ParseError};

/// Cursor over a borrowed slice of atomic elements
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AtomicCursor<'code, T: Atomic> {
    /// Cursor pointing at a valid element
    Valid {
        data: &'code [T],
        /// Element position in the data slice (0-based index)
        position: usize,
    },
    /// Cursor at end of input - no more elements to read
    EndOfFile { data: &'code [T] },
}

impl<'code, T: Atomic> AtomicCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            return AtomicCursor::EndOfFile { data };
        }
        AtomicCursor::Valid { data, position: 0 }
    }
}

impl<'code, T: Atomic> Cursor<'code> for AtomicCursor<'code, T> {
    type Element = T;

    fn value(&self) -> Result<Self::Element, ParseError<'code, T>> {
        match self {
            AtomicCursor::Valid { data, position } => {
                data.get(*position).copied().ok_or(ParseError::EndOfInput {
                    loc: CodeLoc::new(data, data.len()),
                })
            }
            AtomicCursor::EndOfFile { data } => Err(ParseError::EndOfInput {
                loc: CodeLoc::new(data, data.len()),
            }),
        }
    }

    fn next(self) -> Self {
        match self {
            AtomicCursor::Valid { data, position } => {
                if position + 1 >= data.len() {
                    AtomicCursor::EndOfFile { data }
                } else {
                    AtomicCursor::Valid {
                        data,
                        position: position + 1,
                    }
                }
            }
            AtomicCursor::EndOfFile { data } => AtomicCursor::EndOfFile { data },
        }
    }

    fn try_next(self) -> Result<Self, ParseError<'code, T>> {
        self.value()?;
        Ok(self.next())
    }

    fn position(&self) -> usize {
        match self {
            AtomicCursor::Valid { data, position } => (*position).min(data.len()),
            AtomicCursor::EndOfFile { data } => data.len(),
        }
    }

    fn source(&self) -> &'code [Self::Element] {
        match self {
            AtomicCursor::Valid { data, .. } => data,
            AtomicCursor::EndOfFile { data } => data,
        }
    }

    fn inner(self) -> (&'code [Self::Element], usize) {
        match self {
            AtomicCursor::Valid { data, position } => (data, position.min(data.len())),
            AtomicCursor::EndOfFile { data } => (data, data.len()),
        }
    }
}
