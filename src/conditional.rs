use crate::error::PrintError;
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// A parser-printer chosen at run time between two concrete alternatives
///
/// Unlike [`Or`](crate::or::Or), which tries both branches, a `Conditional`
/// holds exactly one of them and delegates both directions to it. Useful when
/// grammar construction itself branches on configuration.
pub enum Conditional<F, S> {
    First(F),
    Second(S),
}

impl<'src, F, S> Parser<'src> for Conditional<F, S>
where
    F: Parser<'src>,
    S: Parser<'src, Cursor = F::Cursor, Output = F::Output>,
{
    type Cursor = F::Cursor;
    type Output = F::Output;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        match self {
            Conditional::First(parser) => parser.parse(cursor),
            Conditional::Second(parser) => parser.parse(cursor),
        }
    }
}

impl<'src, F, S> Printer<'src> for Conditional<F, S>
where
    F: Printer<'src>,
    S: Printer<'src, Cursor = F::Cursor, Output = F::Output>,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        match self {
            Conditional::First(printer) => printer.print(output, cursor),
            Conditional::Second(printer) => printer.print(output, cursor),
        }
    }
}
