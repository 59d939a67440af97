use crate::cursor::Cursor;
use crate::error::{ParseError, PrintError};
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer trying two alternatives of the same output type
///
/// Parsing tries the first branch, then the second from the same position; if
/// both fail the errors are gathered into one multi-error at the pre-attempt
/// position. Printing tries the branches in the opposite order, so the branch
/// that parses last is the one that prints first. A branch that fails to
/// print leaves no partial output behind.
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

impl<'src, P1, P2> Parser<'src> for Or<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let first_error = match self.first.parse(cursor) {
            Ok(success) => return Ok(success),
            Err(error) => error,
        };
        match self.second.parse(cursor) {
            Ok(success) => Ok(success),
            Err(second_error) => Err(ParseError::many(
                vec![first_error, second_error],
                cursor.loc(),
            )),
        }
    }
}

impl<'src, P1, P2> Printer<'src> for Or<P1, P2>
where
    P1: Printer<'src>,
    P2: Printer<'src, Cursor = P1::Cursor, Output = P1::Output>,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        let mark = cursor.mark();
        let second_error = match self.second.print(output, cursor) {
            Ok(()) => return Ok(()),
            Err(error) => {
                cursor.restore(mark);
                error
            }
        };
        match self.first.print(output, cursor) {
            Ok(()) => Ok(()),
            Err(first_error) => {
                cursor.restore(mark);
                // Report in declaration order even though printing tried the
                // branches in reverse.
                Err(PrintError::many(
                    vec![first_error, second_error],
                    cursor.len(),
                ))
            }
        }
    }
}

/// Extension trait adding alternation to all parsers
pub trait OrExt<'src>: Parser<'src> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, Cursor = Self::Cursor, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

impl<'src, P> OrExt<'src> for P where P: Parser<'src> {}
