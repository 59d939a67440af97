use crate::error::PrintError;
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer wrapping a child so that failure becomes `None`
///
/// A failed child attempt consumes nothing, since the caller's cursor copy is
/// untouched. Printing `Some` delegates to the child; printing `None` emits
/// nothing.
pub struct Optionally<P> {
    parser: P,
}

/// Convenience function to create an Optionally parser
pub fn optionally<P>(parser: P) -> Optionally<P> {
    Optionally { parser }
}

impl<'src, P> Parser<'src> for Optionally<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        match self.parser.parse(cursor) {
            Ok((output, next)) => Ok((Some(output), next)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

impl<'src, P> Printer<'src> for Optionally<P>
where
    P: Printer<'src>,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        match output {
            Some(inner) => self.parser.print(inner, cursor),
            None => Ok(()),
        }
    }
}

/// Extension trait adding optional matching to all parsers
pub trait OptionallyExt<'src>: Parser<'src> + Sized {
    fn optionally(self) -> Optionally<Self> {
        optionally(self)
    }
}

impl<'src, P> OptionallyExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::ByteCursor;
    use crate::literal::literal;
    use crate::then::ThenExt;

    #[test]
    fn test_optionally_present() {
        let cursor = ByteCursor::new(b"-5");
        let parser = literal("-").optionally();

        let (output, rest) = parser.parse(cursor).unwrap();
        assert_eq!(output, Some(()));
        assert_eq!(rest.position(), 1);
    }

    #[test]
    fn test_optionally_absent_consumes_nothing() {
        let cursor = ByteCursor::new(b"5");
        let parser = literal("-").optionally();

        let (output, rest) = parser.parse(cursor).unwrap();
        assert_eq!(output, None);
        assert_eq!(rest.position(), 0);
    }

    #[test]
    fn test_optionally_partial_match_leaves_cursor_at_start() {
        // The child consumes "ab" before failing; the cursor handed onward
        // must still sit at the start.
        let cursor = ByteCursor::new(b"abX");
        let parser = literal("abc").optionally().then(literal("abX"));

        let ((output, ()), _) = parser.parse(cursor).unwrap();
        assert_eq!(output, None);
    }

    #[test]
    fn test_optionally_print_some_and_none() {
        let printer = literal("-").optionally();
        assert_eq!(printer.print_all(&Some(())).unwrap(), b"-".to_vec());
        assert!(printer.print_all(&None).unwrap().is_empty());
    }
}
