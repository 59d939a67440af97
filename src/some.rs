use crate::many::{Many, many};
use crate::parser::Parser;

/// Convenience function for repetition requiring at least one match
///
/// Equivalent to [`many`] with a lower bound of one: zero matches is a
/// failure carrying the child's error.
pub fn some<'src, P: Parser<'src>>(parser: P) -> Many<P> {
    many(parser).at_least(1)
}
