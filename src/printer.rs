use crate::error::PrintError;
use crate::parser::{ElementOf, Parser};
use crate::print_cursor::PrintCursor;

/// The inverse capability: a parser that can also re-emit the stream a value
/// was parsed from.
///
/// The contract tying the two directions together is the round trip: for any
/// value the printer accepts, parsing the printed stream yields the value
/// back, and printing a freshly parsed value reproduces the consumed stream.
pub trait Printer<'src>: Parser<'src> {
    /// Prepend the printed form of `output` onto the front of the cursor
    ///
    /// Printing assembles the stream back-to-front, so sequential combinators
    /// run their steps in reverse when printing.
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError>;

    /// Print into a fresh cursor and return the assembled sequence
    fn print_all(
        &self,
        output: &Self::Output,
    ) -> Result<Vec<ElementOf<'src, Self>>, PrintError>
    where
        Self: Sized,
    {
        let mut cursor = PrintCursor::new();
        self.print(output, &mut cursor)?;
        Ok(cursor.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use crate::literal::literal;
    use crate::print_cursor::PrintCursor;
    use crate::printer::Printer;

    #[test]
    fn test_print_all_fresh_cursor() {
        let printer = literal("hi");
        assert_eq!(printer.print_all(&()).unwrap(), b"hi".to_vec());
    }

    #[test]
    fn test_print_into_existing_cursor_prepends() {
        let printer = literal("hi");
        let mut cursor = PrintCursor::from_suffix(b" there");
        printer.print(&(), &mut cursor).unwrap();
        assert_eq!(cursor.into_vec(), b"hi there".to_vec());
    }
}
