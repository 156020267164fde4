use crate::cursor::Cursor;
use crate::error::ParseError;

/// Element type produced by a cursor
pub type Element<'code, C> = <C as Cursor<'code>>::Element;

/// Outcome of a single parse attempt
pub type ParseResult<'code, C, O> = Result<(O, C), ParseError<'code, Element<'code, C>>>;

/// Core parser trait for parser combinators
///
/// Parsers are stateless: invoking one twice on the same cursor yields the
/// same result. A parser never sees a cursor it did not receive, and it hands
/// back a new cursor only on success, so a failed attempt cannot leave the
/// caller partially advanced.
pub trait Parser<'code> {
    type Cursor: Cursor<'code>;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and the advanced cursor on success,
    /// or Err if the parse fails.
    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser, used for recursive grammars and heterogeneous lists
pub type BoxedParser<'code, C, O> = Box<dyn Parser<'code, Cursor = C, Output = O> + 'code>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Cursor, Self::Output> {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
