use super::decimal;
use super::digit::digit;
use crate::and::AndExt;
use crate::cursors::ByteCursor;
use crate::literal::literal;
use crate::one_or_more::one_or_more;
use crate::parser::Parser;
use crate::transform::TransformExt;

/// Parser for `digits '.' digits`, as an `f64`
///
/// Both digit runs are required: `12` and `12.` are not floats.
pub fn float<'code>() -> impl Parser<'code, Cursor = ByteCursor<'code>, Output = f64> {
    one_or_more(digit())
        .and(literal(b'.'))
        .and(one_or_more(digit()))
        .transform(|((mut text, dot), fraction)| {
            text.push(dot);
            text.extend(fraction);
            decimal::<f64>(&text)
        })
}
