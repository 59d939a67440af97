use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::error::{ParseError, PrintError};
use crate::parser::{Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;
use std::marker::PhantomData;

/// Parser-printer that always fails in both directions
///
/// Useful as a placeholder branch and for exercising recovery combinators.
pub struct Fail<O, T: Atomic = u8> {
    _output: PhantomData<O>,
    _element: PhantomData<T>,
}

/// Convenience function to create a Fail parser
pub fn fail<O, T: Atomic>() -> Fail<O, T> {
    Fail {
        _output: PhantomData,
        _element: PhantomData,
    }
}

impl<'src, O, T: Atomic> Parser<'src> for Fail<O, T> {
    type Cursor = AtomicCursor<'src, T>;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        Err(ParseError::expected("fail", cursor.loc()))
    }
}

impl<'src, O, T: Atomic> Printer<'src> for Fail<O, T> {
    fn print(&self, _output: &O, cursor: &mut PrintCursor<T>) -> Result<(), PrintError> {
        Err(PrintError::failed("fail", "", cursor.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::ByteCursor;

    #[test]
    fn test_fail_always_fails() {
        let cursor = ByteCursor::new(b"anything");
        let parser: Fail<u8> = fail();
        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_fail_print_fails() {
        let printer: Fail<u8> = fail();
        assert!(printer.print_all(&0).is_err());
    }
}
