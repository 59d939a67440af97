use crate::parser::{Parsed, Parser};

/// Parse-only output transformation through a plain closure
///
/// A closure has no inverse, so mapping forfeits the print direction. Use
/// [`via`](crate::via::ViaExt::via) with a
/// [`Conversion`](crate::convert::Conversion) when the grammar must keep
/// printing.
pub struct Map<P, F> {
    parser: P,
    transform: F,
}

impl<'src, P, F, O> Parser<'src> for Map<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> O,
{
    type Cursor = P::Cursor;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let (output, cursor) = self.parser.parse(cursor)?;
        Ok(((self.transform)(output), cursor))
    }
}

/// Extension trait adding map to all parsers
pub trait MapExt<'src>: Parser<'src> + Sized {
    fn map<F, O>(self, transform: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> O,
    {
        Map {
            parser: self,
            transform,
        }
    }
}

impl<'src, P> MapExt<'src> for P where P: Parser<'src> {}
