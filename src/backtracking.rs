use crate::error::PrintError;
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer guaranteeing the cursor is unchanged after a failed attempt
///
/// On the parse side this guarantee already holds structurally: cursors are
/// values, so a failed child can never move the copy the caller still holds.
/// The wrapper exists so grammars can state the intent explicitly, and so the
/// print side discards any partial output a failed child print left behind.
pub struct Backtracking<P> {
    parser: P,
}

/// Convenience function to create a Backtracking parser
pub fn backtracking<P>(parser: P) -> Backtracking<P> {
    Backtracking { parser }
}

impl<'src, P> Parser<'src> for Backtracking<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        self.parser.parse(cursor)
    }
}

impl<'src, P> Printer<'src> for Backtracking<P>
where
    P: Printer<'src>,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        let mark = cursor.mark();
        match self.parser.print(output, cursor) {
            Ok(()) => Ok(()),
            Err(error) => {
                cursor.restore(mark);
                Err(error)
            }
        }
    }
}

/// Extension trait adding explicit backtracking to all parsers
pub trait BacktrackingExt<'src>: Parser<'src> + Sized {
    fn backtracking(self) -> Backtracking<Self> {
        backtracking(self)
    }
}

impl<'src, P> BacktrackingExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::is_byte;
    use crate::cursor::Cursor;
    use crate::cursors::ByteCursor;
    use crate::literal::literal;
    use crate::or::OrExt;
    use crate::then::ThenExt;

    #[test]
    fn test_backtracking_failed_branch_restarts_cleanly() {
        let cursor = ByteCursor::new(b"a1");
        let parser = literal("a2")
            .backtracking()
            .or(literal("a").skip_then(literal("1")));

        let ((), rest) = parser.parse(cursor).unwrap();
        assert!(rest.eos());
    }

    #[test]
    fn test_backtracking_passes_error_through() {
        let cursor = ByteCursor::new(b"xy");
        let parser = literal("ab").backtracking();
        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_backtracking_print_discards_partial_output() {
        // The pair prints its second leg first, so the failing first leg
        // would otherwise leave the second leg's byte behind.
        let printer = is_byte(b'a').then(is_byte(b'b')).backtracking();
        let mut cursor = crate::print_cursor::PrintCursor::new();
        assert!(printer.print(&(b'x', b'b'), &mut cursor).is_err());
        assert!(cursor.is_empty());
    }
}
