use crate::cursor::Cursor;
use crate::error::{ParseError, PrintError};
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Negative lookahead: succeeds when the child fails, consuming nothing
///
/// Printing is a no-op, since a successful lookahead never contributed any
/// input.
pub struct Not<P> {
    parser: P,
}

/// Convenience function to create a Not parser
pub fn not<P>(parser: P) -> Not<P> {
    Not { parser }
}

impl<'src, P> Parser<'src> for Not<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        match self.parser.parse(cursor) {
            Ok(_) => Err(ParseError::expected(
                "input not matching the lookahead",
                cursor.loc(),
            )),
            Err(_) => Ok(((), cursor)),
        }
    }
}

impl<'src, P> Printer<'src> for Not<P>
where
    P: Parser<'src>,
{
    fn print(
        &self,
        _output: &(),
        _cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::ByteCursor;
    use crate::literal::literal;

    #[test]
    fn test_not_succeeds_when_child_fails() {
        let cursor = ByteCursor::new(b"hello");
        let parser = not(literal("goodbye"));

        let ((), rest) = parser.parse(cursor).unwrap();
        assert_eq!(rest.position(), 0);
    }

    #[test]
    fn test_not_fails_when_child_matches() {
        let cursor = ByteCursor::new(b"hello");
        assert!(not(literal("hello")).parse(cursor).is_err());
    }
}
