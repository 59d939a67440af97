use crate::convert::Conversion;
use crate::cursor::Cursor;
use crate::error::{ParseError, PrintError, Span};
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer threading a child's output through a
/// [`Conversion`](crate::convert::Conversion)
///
/// The conversion's `apply` leg runs after a successful parse; a conversion
/// failure becomes a parse error spanning the input the child consumed. The
/// `unapply` leg runs before printing, turning the domain value back into the
/// child's output.
pub struct Via<P, C> {
    parser: P,
    conversion: C,
}

impl<'src, P, C> Parser<'src> for Via<P, C>
where
    P: Parser<'src>,
    C: Conversion<Input = P::Output>,
{
    type Cursor = P::Cursor;
    type Output = C::Output;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let (output, next) = self.parser.parse(cursor)?;
        match self.conversion.apply(output) {
            Ok(converted) => Ok((converted, next)),
            Err(error) => Err(ParseError::failed(
                error.message().to_string(),
                "conversion",
                Span::new(cursor.source(), cursor.position(), next.position()),
            )),
        }
    }
}

impl<'src, P, C> Printer<'src> for Via<P, C>
where
    P: Printer<'src>,
    C: Conversion<Input = P::Output>,
    C::Output: Clone,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        let input = self.conversion.unapply(output.clone()).map_err(|error| {
            PrintError::failed(error.message().to_string(), "conversion", cursor.len())
        })?;
        self.parser.print(&input, cursor)
    }
}

/// Extension trait threading conversions through all parsers
pub trait ViaExt<'src>: Parser<'src> + Sized {
    fn via<C>(self, conversion: C) -> Via<Self, C>
    where
        C: Conversion<Input = Self::Output>,
    {
        Via {
            parser: self,
            conversion,
        }
    }
}

impl<'src, P> ViaExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::any_byte;
    use crate::convert::{string_to_bool, utf8};
    use crate::cursors::ByteCursor;
    use crate::filter::FilterExt;
    use crate::many::many;

    fn word<'src>() -> impl Printer<'src, Cursor = ByteCursor<'src>, Output = String> {
        many(any_byte().filter(|byte: &u8| byte.is_ascii_alphanumeric(), "a word character"))
            .via(utf8())
    }

    #[test]
    fn test_via_applies_conversion() {
        let cursor = ByteCursor::new(b"true!");
        let parser = word().via(string_to_bool());

        let (value, _) = parser.parse(cursor).unwrap();
        assert!(value);
    }

    #[test]
    fn test_via_conversion_failure_spans_consumed_input() {
        let cursor = ByteCursor::new(b"maybe");
        let parser = word().via(string_to_bool());

        let error = parser.parse(cursor).unwrap_err();
        match error {
            ParseError::Failed { span, .. } => {
                assert_eq!(span.start, 0);
                assert_eq!(span.end, 5);
            }
            other => panic!("unexpected error shape: {:?}", other),
        }
    }

    #[test]
    fn test_via_round_trip() {
        let printed;
        let parser = word().via(string_to_bool());
        printed = parser.print_all(&false).unwrap();
        assert_eq!(printed, b"false".to_vec());
        assert!(!parser.parse_all(&printed).unwrap());
    }
}
