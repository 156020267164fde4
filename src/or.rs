use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both attempts start from the same cursor. The first success wins even if
/// the second parser would have consumed more input.
#[derive(Debug, Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = O>,
{
    type Cursor = P1::Cursor;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let first = match self.parser1.parse(cursor) {
            Ok(result) => return Ok(result),
            Err(error) => error,
        };
        match self.parser2.parse(cursor) {
            Ok(result) => Ok(result),
            Err(second) => Err(ParseError::NoAlternativeMatched {
                causes: vec![first, second],
                loc: cursor.loc(),
            }),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = O>,
{
    Or::new(parser1, parser2)
}
