use crate::error::PrintError;
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;
use once_cell::sync::OnceCell;

/// Parser-printer built on first use, for tying recursive grammars
///
/// The closure runs once, on the first parse or print; the constructed child
/// is cached for every later invocation. Recursive grammars combine this with
/// type erasure: the closure refers back to the whole grammar through an
/// [`AnyParserPrinter`](crate::any_parser::AnyParserPrinter).
pub struct Lazy<F, P> {
    make: F,
    cell: OnceCell<P>,
}

/// Convenience function to create a Lazy parser
pub fn lazy<F, P>(make: F) -> Lazy<F, P>
where
    F: Fn() -> P,
{
    Lazy {
        make,
        cell: OnceCell::new(),
    }
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
{
    pub(crate) fn inner(&self) -> &P {
        self.cell.get_or_init(|| (self.make)())
    }
}

impl<'src, F, P> Parser<'src> for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        self.inner().parse(cursor)
    }
}

impl<'src, F, P> Printer<'src> for Lazy<F, P>
where
    F: Fn() -> P,
    P: Printer<'src>,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        self.inner().print(output, cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::ByteCursor;
    use crate::literal::{Literal, literal};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_lazy_defers_construction() {
        let constructions = AtomicUsize::new(0);
        let parser = lazy(|| {
            constructions.fetch_add(1, Ordering::SeqCst);
            literal("hi")
        });
        assert_eq!(constructions.load(Ordering::SeqCst), 0);

        assert!(parser.parse(ByteCursor::new(b"hi")).is_ok());
        assert_eq!(constructions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lazy_constructs_only_once() {
        let constructions = AtomicUsize::new(0);
        let parser: Lazy<_, Literal> = lazy(|| {
            constructions.fetch_add(1, Ordering::SeqCst);
            literal("hi")
        });

        for _ in 0..3 {
            assert!(parser.parse(ByteCursor::new(b"hi")).is_ok());
        }
        assert_eq!(parser.print_all(&()).unwrap(), b"hi".to_vec());
        assert_eq!(constructions.load(Ordering::SeqCst), 1);
    }
}
