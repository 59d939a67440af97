use crate::cursor::Cursor;
use crate::cursors::ByteCursor;
use crate::error::{ParseError, PrintError};
use crate::parser::{Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer that consumes any single byte
pub struct AnyByte;

/// Convenience function to create an AnyByte parser
pub fn any_byte() -> AnyByte {
    AnyByte
}

impl<'src> Parser<'src> for AnyByte {
    type Cursor = ByteCursor<'src>;
    type Output = u8;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let value = cursor.value()?;
        Ok((value, cursor.next()))
    }
}

impl<'src> Printer<'src> for AnyByte {
    fn print(&self, output: &u8, cursor: &mut PrintCursor<u8>) -> Result<(), PrintError> {
        cursor.prepend_one(*output);
        Ok(())
    }
}

/// Parser-printer that matches one specific byte and yields it
pub struct IsByte {
    expected: u8,
}

/// Convenience function to create an IsByte parser
pub fn is_byte(expected: u8) -> IsByte {
    IsByte { expected }
}

impl<'src> Parser<'src> for IsByte {
    type Cursor = ByteCursor<'src>;
    type Output = u8;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        match cursor.value() {
            Ok(value) if value == self.expected => Ok((value, cursor.next())),
            _ => Err(ParseError::expected(
                format!("{:?}", self.expected as char),
                cursor.loc(),
            )),
        }
    }
}

impl<'src> Printer<'src> for IsByte {
    fn print(&self, output: &u8, cursor: &mut PrintCursor<u8>) -> Result<(), PrintError> {
        if *output != self.expected {
            return Err(PrintError::failed(
                format!("expected {:?}", self.expected as char),
                format!("got {:?}", *output as char),
                cursor.len(),
            ));
        }
        cursor.prepend_one(self.expected);
        Ok(())
    }
}
