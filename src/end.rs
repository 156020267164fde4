use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Parser that succeeds only when no input is left
#[derive(Debug, Clone, Copy)]
pub struct EndOfInput<T> {
    _element: PhantomData<T>,
}

impl<'code, T: Atomic> Parser<'code> for EndOfInput<T> {
    type Cursor = AtomicCursor<'code, T>;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            Err(ParseError::TrailingInput { loc: cursor.loc() })
        }
    }
}

/// Convenience function to create an EndOfInput parser
pub fn end_of_input<T: Atomic>() -> EndOfInput<T> {
    EndOfInput {
        _element: PhantomData,
    }
}
