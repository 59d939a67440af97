use crate::cursor::Cursor;
use crate::error::ParseError;

/// The element type a parser's cursor iterates over
pub type ElementOf<'src, P> = <<P as Parser<'src>>::Cursor as Cursor<'src>>::Element;

/// Result of a parse attempt: the output plus the advanced cursor, or a
/// parse error. The caller's own cursor copy is untouched on failure.
pub type Parsed<'src, P> = Result<
    (<P as Parser<'src>>::Output, <P as Parser<'src>>::Cursor),
    ParseError<'src, ElementOf<'src, P>>,
>;

/// Core parser trait for combinators
///
/// Combinator trees are immutable after construction and re-entrant: the same
/// tree may be invoked concurrently as long as each invocation uses its own
/// cursor.
pub trait Parser<'src> {
    type Cursor: Cursor<'src>;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and advanced cursor on success.
    /// Cursors are values, so a failed attempt never moves the cursor the
    /// caller still holds; the failure position lives in the error.
    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self>;

    /// Parse a complete input, failing if trailing input remains
    fn parse_all(
        &self,
        source: &'src [ElementOf<'src, Self>],
    ) -> Result<Self::Output, ParseError<'src, ElementOf<'src, Self>>>
    where
        Self: Sized,
    {
        let cursor = Self::Cursor::from_source(source);
        let (output, rest) = self.parse(cursor)?;
        if !rest.eos() {
            return Err(ParseError::expected("end of input", rest.loc()));
        }
        Ok(output)
    }
}
