use crate::error::PrintError;
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer that turns child failure into a default value
///
/// Parsing never fails: a failed child attempt yields the default and
/// consumes nothing. Printing must stay the inverse of that, so a value that
/// fails to print is treated as the recovered default and emits nothing, and
/// a value equal to what the default itself would print is also emitted as
/// nothing so the next parse recovers the default rather than mistaking the
/// printed text for real input.
pub struct ReplaceError<P, O> {
    parser: P,
    default: O,
}

impl<'src, P> Parser<'src> for ReplaceError<P, P::Output>
where
    P: Parser<'src>,
    P::Output: Clone,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        match self.parser.parse(cursor) {
            Ok(success) => Ok(success),
            Err(_) => Ok((self.default.clone(), cursor)),
        }
    }
}

impl<'src, P> Printer<'src> for ReplaceError<P, P::Output>
where
    P: Printer<'src>,
    P::Output: Clone,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        let original = cursor.clone();
        if self.parser.print(output, cursor).is_err() {
            *cursor = original;
            return Ok(());
        }

        let mut default_rendering = original.clone();
        if self
            .parser
            .print(&self.default, &mut default_rendering)
            .is_ok()
            && *cursor == default_rendering
        {
            *cursor = original;
        }
        Ok(())
    }
}

/// Extension trait adding error replacement to all parsers
pub trait ReplaceErrorExt<'src>: Parser<'src> + Sized {
    /// Recover from failure with the given default value
    fn replace_error_with(self, default: Self::Output) -> ReplaceError<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        ReplaceError {
            parser: self,
            default,
        }
    }
}

impl<'src, P> ReplaceErrorExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::ByteCursor;
    use crate::int::int;

    #[test]
    fn test_replace_error_passes_through_success() {
        let cursor = ByteCursor::new(b"42");
        let parser = int::<i64>().replace_error_with(0);

        let (value, rest) = parser.parse(cursor).unwrap();
        assert_eq!(value, 42);
        assert_eq!(rest.position(), 2);
    }

    #[test]
    fn test_replace_error_recovers_default() {
        let cursor = ByteCursor::new(b"oops");
        let parser = int::<i64>().replace_error_with(0);

        let (value, rest) = parser.parse(cursor).unwrap();
        assert_eq!(value, 0);
        assert_eq!(rest.position(), 0);
    }

    #[test]
    fn test_replace_error_print_skips_default_value() {
        // Printing the default emits nothing, so a later parse of the printed
        // stream recovers the default the same way the original parse did.
        let printer = int::<i64>().replace_error_with(0);
        assert!(printer.print_all(&0).unwrap().is_empty());
    }

    #[test]
    fn test_replace_error_print_emits_non_default_value() {
        let printer = int::<i64>().replace_error_with(0);
        assert_eq!(printer.print_all(&42).unwrap(), b"42".to_vec());
    }

    #[test]
    fn test_replace_error_round_trip_on_default() {
        let parser = int::<i64>().replace_error_with(0);
        let printed = parser.print_all(&0).unwrap();
        assert_eq!(parser.parse_all(&printed).unwrap(), 0);
    }
}
