//! Entry points that start a parse at the beginning of an input slice

use crate::and::and;
use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::end::end_of_input;
use crate::error::ParseError;
use crate::parser::Parser;

/// Run `parser` from the start of `input`
///
/// Returns the produced value together with the input the parser did not
/// consume. Leftover input is not an error here.
///
/// ```
/// use retrace::{literal, one_or_more, run};
///
/// let (run_of_a, rest) = run(&one_or_more(literal(b'a')), b"aaab").unwrap();
/// assert_eq!(run_of_a, b"aaa");
/// assert_eq!(rest, b"b");
/// ```
pub fn run<'code, P, T>(
    parser: &P,
    input: &'code [T],
) -> Result<(P::Output, &'code [T]), ParseError<'code, T>>
where
    P: Parser<'code, Cursor = AtomicCursor<'code, T>> + ?Sized,
    T: Atomic,
{
    let (value, cursor) = parser.parse(AtomicCursor::new(input))?;
    Ok((value, cursor.remaining()))
}

/// Run `parser` over all of `input`
///
/// Fails with [`ParseError::TrailingInput`] when the parser stops before the
/// end of the input.
pub fn run_complete<'code, P, T>(parser: &P, input: &'code [T]) -> Result<P::Output, ParseError<'code, T>>
where
    P: Parser<'code, Cursor = AtomicCursor<'code, T>> + ?Sized,
    T: Atomic,
{
    let ((value, ()), _) = and(parser, end_of_input::<T>()).parse(AtomicCursor::new(input))?;
    Ok(value)
}
