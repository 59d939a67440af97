use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::error::{ParseError, PrintError};
use crate::parser::{Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer that matches a fixed sequence of elements and produces no
/// output; printing re-emits the sequence.
pub struct Literal<T: Atomic = u8> {
    expected: Vec<T>,
    description: String,
}

impl<T: Atomic> Literal<T> {
    pub fn elements(expected: Vec<T>) -> Self {
        let description = format!("{:?}", expected);
        Literal {
            expected,
            description,
        }
    }
}

/// Match the UTF-8 bytes of the given text
pub fn literal(text: &str) -> Literal<u8> {
    Literal {
        expected: text.as_bytes().to_vec(),
        description: format!("{:?}", text),
    }
}

impl<'src, T: Atomic> Parser<'src> for Literal<T> {
    type Cursor = AtomicCursor<'src, T>;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let mut current = cursor;
        for &expected in &self.expected {
            match current.value() {
                Ok(value) if value == expected => current = current.next(),
                _ => {
                    return Err(ParseError::expected(
                        self.description.clone(),
                        cursor.loc(),
                    ));
                }
            }
        }
        Ok(((), current))
    }
}

impl<'src, T: Atomic> Printer<'src> for Literal<T> {
    fn print(&self, _output: &(), cursor: &mut PrintCursor<T>) -> Result<(), PrintError> {
        cursor.prepend(&self.expected);
        Ok(())
    }
}
