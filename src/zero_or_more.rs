use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Apply `parser` repeatedly, pushing each value into `results`
///
/// Stops at the first failure, which is the natural end of a repetition and
/// is not propagated. The returned cursor sits at the end of the last
/// successful iteration. An iteration that succeeds without consuming input
/// is kept once and ends the loop, so repeating an optional terminates.
pub(crate) fn repeat<'code, P>(
    parser: &P,
    mut cursor: P::Cursor,
    results: &mut Vec<P::Output>,
) -> P::Cursor
where
    P: Parser<'code>,
{
    while let Ok((value, next_cursor)) = parser.parse(cursor) {
        results.push(value);
        if next_cursor.position() == cursor.position() {
            break;
        }
        cursor = next_cursor;
    }
    cursor
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails: zero matches yields an empty vector and the cursor unchanged.
#[derive(Debug, Clone)]
pub struct ZeroOrMore<P> {
    parser: P,
}

impl<P> ZeroOrMore<P> {
    pub fn new(parser: P) -> Self {
        ZeroOrMore { parser }
    }
}

impl<'code, P> Parser<'code> for ZeroOrMore<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let mut results = Vec::new();
        let cursor = repeat(&self.parser, cursor, &mut results);
        Ok((results, cursor))
    }
}

/// Convenience function to create a ZeroOrMore parser
pub fn zero_or_more<'code, P>(parser: P) -> ZeroOrMore<P>
where
    P: Parser<'code>,
{
    ZeroOrMore::new(parser)
}
