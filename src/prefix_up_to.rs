use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::error::{ParseError, PrintError};
use crate::parser::{Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer consuming everything before the next occurrence of a
/// delimiter, leaving the delimiter itself unconsumed
///
/// Fails when the delimiter never occurs in the remaining input. Printing
/// prepends the borrowed prefix verbatim; the delimiter is expected to be
/// printed by whatever combinator follows.
pub struct PrefixUpTo<T: Atomic = u8> {
    delimiter: Vec<T>,
    description: String,
}

/// Consume up to the UTF-8 bytes of the given text
pub fn prefix_up_to(text: &str) -> PrefixUpTo<u8> {
    PrefixUpTo {
        delimiter: text.as_bytes().to_vec(),
        description: format!("{:?}", text),
    }
}

impl<T: Atomic> PrefixUpTo<T> {
    pub fn elements(delimiter: Vec<T>) -> Self {
        let description = format!("{:?}", delimiter);
        PrefixUpTo {
            delimiter,
            description,
        }
    }
}

impl<'src, T: Atomic> Parser<'src> for PrefixUpTo<T> {
    type Cursor = AtomicCursor<'src, T>;
    type Output = &'src [T];

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let source = cursor.source();
        let start = cursor.position();

        let mut current = cursor;
        while current.position() + self.delimiter.len() <= source.len() {
            let at = current.position();
            if source[at..at + self.delimiter.len()] == self.delimiter[..] {
                return Ok((&source[start..at], current));
            }
            current = current.next();
        }

        Err(ParseError::expected(
            format!("{} in the remaining input", self.description),
            cursor.loc(),
        ))
    }
}

impl<'src, T: Atomic> Printer<'src> for PrefixUpTo<T> {
    fn print(&self, output: &&'src [T], cursor: &mut PrintCursor<T>) -> Result<(), PrintError> {
        cursor.prepend(output);
        Ok(())
    }
}
