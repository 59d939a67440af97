use crate::atomic::Atomic;
use crate::cursors::AtomicCursor;
use crate::error::PrintError;
use crate::parser::{Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;
use std::marker::PhantomData;

/// Parser-printer that always succeeds with a fixed value, consuming nothing;
/// printing emits nothing
pub struct Always<O, T: Atomic = u8> {
    value: O,
    _element: PhantomData<T>,
}

/// Convenience function to create an Always parser
pub fn always<O: Clone, T: Atomic>(value: O) -> Always<O, T> {
    Always {
        value,
        _element: PhantomData,
    }
}

impl<'src, O: Clone, T: Atomic> Parser<'src> for Always<O, T> {
    type Cursor = AtomicCursor<'src, T>;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        Ok((self.value.clone(), cursor))
    }
}

impl<'src, O: Clone, T: Atomic> Printer<'src> for Always<O, T> {
    fn print(&self, _output: &O, _cursor: &mut PrintCursor<T>) -> Result<(), PrintError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::ByteCursor;

    #[test]
    fn test_always_consumes_nothing() {
        let cursor = ByteCursor::new(b"abc");
        let parser: Always<i32> = always(42);
        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, 42);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_always_prints_nothing() {
        let printer: Always<i32> = always(42);
        assert!(printer.print_all(&42).unwrap().is_empty());
    }
}
