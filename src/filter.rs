use crate::cursor::Cursor;
use crate::error::{ParseError, PrintError, Span};
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer accepting a child's output only when a predicate holds
///
/// The predicate guards both directions: a parsed value that fails it becomes
/// a parse error spanning the consumed input, and a value handed to the print
/// side that fails it is rejected before anything is emitted.
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
    description: String,
}

impl<'src, P, F> Parser<'src> for Filter<P, F>
where
    P: Parser<'src>,
    F: Fn(&P::Output) -> bool,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let (output, next) = self.parser.parse(cursor)?;
        if (self.predicate)(&output) {
            Ok((output, next))
        } else {
            Err(ParseError::failed(
                format!("expected {}", self.description),
                "predicate rejected value",
                Span::new(cursor.source(), cursor.position(), next.position()),
            ))
        }
    }
}

impl<'src, P, F> Printer<'src> for Filter<P, F>
where
    P: Printer<'src>,
    F: Fn(&P::Output) -> bool,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        if !(self.predicate)(output) {
            return Err(PrintError::failed(
                format!("expected {}", self.description),
                "predicate rejected value",
                cursor.len(),
            ));
        }
        self.parser.print(output, cursor)
    }
}

/// Extension trait adding predicate filtering to all parsers
pub trait FilterExt<'src>: Parser<'src> + Sized {
    /// Accept the child's output only when the predicate holds; the
    /// description names what was expected in error messages
    fn filter<F>(self, predicate: F, description: impl Into<String>) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Filter {
            parser: self,
            predicate,
            description: description.into(),
        }
    }
}

impl<'src, P> FilterExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::any_byte;
    use crate::cursors::ByteCursor;

    fn digit<'src>() -> impl Printer<'src, Cursor = ByteCursor<'src>, Output = u8> {
        any_byte().filter(|byte: &u8| byte.is_ascii_digit(), "a digit")
    }

    #[test]
    fn test_filter_accepts_matching_value() {
        let cursor = ByteCursor::new(b"7x");
        let (byte, _) = digit().parse(cursor).unwrap();
        assert_eq!(byte, b'7');
    }

    #[test]
    fn test_filter_rejects_with_description() {
        let cursor = ByteCursor::new(b"x7");
        let error = digit().parse(cursor).unwrap_err();
        assert!(error.to_string().contains("a digit"));
    }

    #[test]
    fn test_filter_print_guards_output() {
        let printer = digit();
        assert_eq!(printer.print_all(&b'3').unwrap(), vec![b'3']);
        assert!(printer.print_all(&b'x').is_err());
    }
}
