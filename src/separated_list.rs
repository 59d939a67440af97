use crate::error::PrintError;
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer for element lists joined by a void separator
///
/// Matches zero or more elements with the separator between consecutive
/// elements but not after the last. After each separator an element must
/// follow; a trailing separator therefore fails the whole list rather than
/// being left unconsumed. Printing interleaves separators back-to-front.
pub struct SeparatedList<P, S> {
    element: P,
    separator: S,
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<P, S>(element: P, separator: S) -> SeparatedList<P, S> {
    SeparatedList { element, separator }
}

impl<'src, P, S> Parser<'src> for SeparatedList<P, S>
where
    P: Parser<'src>,
    S: Parser<'src, Cursor = P::Cursor, Output = ()>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let mut outputs = Vec::new();

        let (first, mut cursor) = match self.element.parse(cursor) {
            Ok(success) => success,
            Err(_) => return Ok((outputs, cursor)),
        };
        outputs.push(first);

        loop {
            let ((), after_separator) = match self.separator.parse(cursor) {
                Ok(success) => success,
                Err(_) => break,
            };
            let (output, next) = self.element.parse(after_separator)?;
            outputs.push(output);
            cursor = next;
        }

        Ok((outputs, cursor))
    }
}

impl<'src, P, S> Printer<'src> for SeparatedList<P, S>
where
    P: Printer<'src>,
    S: Printer<'src, Cursor = P::Cursor, Output = ()>,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        for (index, item) in output.iter().enumerate().rev() {
            self.element.print(item, cursor)?;
            if index > 0 {
                self.separator.print(&(), cursor)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::ByteCursor;
    use crate::int::int;
    use crate::literal::literal;

    #[test]
    fn test_separated_list_basic() {
        let cursor = ByteCursor::new(b"1,2,3]");
        let parser = separated_list(int::<i64>(), literal(","));

        let (outputs, rest) = parser.parse(cursor).unwrap();
        assert_eq!(outputs, vec![1, 2, 3]);
        assert_eq!(rest.value().unwrap(), b']');
    }

    #[test]
    fn test_separated_list_empty() {
        let cursor = ByteCursor::new(b"]");
        let parser = separated_list(int::<i64>(), literal(","));

        let (outputs, rest) = parser.parse(cursor).unwrap();
        assert!(outputs.is_empty());
        assert_eq!(rest.position(), 0);
    }

    #[test]
    fn test_separated_list_single_element_takes_no_separator() {
        let cursor = ByteCursor::new(b"42");
        let parser = separated_list(int::<i64>(), literal(","));

        let (outputs, rest) = parser.parse(cursor).unwrap();
        assert_eq!(outputs, vec![42]);
        assert!(rest.eos());
    }

    #[test]
    fn test_separated_list_trailing_separator_fails() {
        let cursor = ByteCursor::new(b"1,2,");
        let parser = separated_list(int::<i64>(), literal(","));
        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_separated_list_round_trip() {
        let parser = separated_list(int::<i64>(), literal(", "));
        let printed = parser.print_all(&vec![1, -2, 30]).unwrap();
        assert_eq!(printed, b"1, -2, 30".to_vec());
        assert_eq!(parser.parse_all(&printed).unwrap(), vec![1, -2, 30]);
    }

    #[test]
    fn test_separated_list_print_empty_emits_nothing() {
        let printer = separated_list(int::<i64>(), literal(","));
        assert!(printer.print_all(&vec![]).unwrap().is_empty());
    }
}
