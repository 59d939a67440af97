use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::error::{ParseError, PrintError};
use crate::parser::{Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;
use std::marker::PhantomData;

/// Parser-printer that succeeds only at the end of input, consuming nothing;
/// printing is a no-op
pub struct End<T: Atomic = u8> {
    _element: PhantomData<T>,
}

/// Convenience function to create an End parser
pub fn end<T: Atomic>() -> End<T> {
    End {
        _element: PhantomData,
    }
}

impl<'src, T: Atomic> Parser<'src> for End<T> {
    type Cursor = AtomicCursor<'src, T>;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            Err(ParseError::expected("end of input", cursor.loc()))
        }
    }
}

impl<'src, T: Atomic> Printer<'src> for End<T> {
    fn print(&self, _output: &(), _cursor: &mut PrintCursor<T>) -> Result<(), PrintError> {
        Ok(())
    }
}
