use crate::error::PrintError;
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer that runs two steps in order and pairs their outputs
///
/// Parsing threads the cursor left to right and aborts on the first failure
/// without restoring it (the error keeps the exact failure position; wrap in
/// [`Backtracking`](crate::backtracking::Backtracking) if restoration is
/// wanted). Printing runs the same steps in reverse, because printing builds
/// the stream by prepending and the later output must already be in place.
pub struct Then<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Then { first, second }
    }
}

impl<'src, P1, P2> Parser<'src> for Then<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let (first, cursor) = self.first.parse(cursor)?;
        let (second, cursor) = self.second.parse(cursor)?;
        Ok(((first, second), cursor))
    }
}

impl<'src, P1, P2> Printer<'src> for Then<P1, P2>
where
    P1: Printer<'src>,
    P2: Printer<'src, Cursor = P1::Cursor>,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        let (first, second) = output;
        self.second.print(second, cursor)?;
        self.first.print(first, cursor)
    }
}

/// Parser-printer that runs a void step, then an informative step, keeping
/// only the informative output
pub struct SkipThen<P1, P2> {
    first: P1,
    second: P2,
}

impl<'src, P1, P2> Parser<'src> for SkipThen<P1, P2>
where
    P1: Parser<'src, Output = ()>,
    P2: Parser<'src, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let ((), cursor) = self.first.parse(cursor)?;
        self.second.parse(cursor)
    }
}

impl<'src, P1, P2> Printer<'src> for SkipThen<P1, P2>
where
    P1: Printer<'src, Output = ()>,
    P2: Printer<'src, Cursor = P1::Cursor>,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        self.second.print(output, cursor)?;
        self.first.print(&(), cursor)
    }
}

/// Parser-printer that runs an informative step, then a void step, keeping
/// only the informative output
pub struct ThenSkip<P1, P2> {
    first: P1,
    second: P2,
}

impl<'src, P1, P2> Parser<'src> for ThenSkip<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor, Output = ()>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let (output, cursor) = self.first.parse(cursor)?;
        let ((), cursor) = self.second.parse(cursor)?;
        Ok((output, cursor))
    }
}

impl<'src, P1, P2> Printer<'src> for ThenSkip<P1, P2>
where
    P1: Printer<'src>,
    P2: Printer<'src, Cursor = P1::Cursor, Output = ()>,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        self.second.print(&(), cursor)?;
        self.first.print(output, cursor)
    }
}

/// Extension trait adding sequencing methods to all parsers
pub trait ThenExt<'src>: Parser<'src> + Sized {
    /// Run `other` after this parser and keep both outputs
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'src, Cursor = Self::Cursor>,
    {
        Then::new(self, other)
    }

    /// Run a void `other` after this parser, keeping only this output
    fn then_skip<P>(self, other: P) -> ThenSkip<Self, P>
    where
        P: Parser<'src, Cursor = Self::Cursor, Output = ()>,
    {
        ThenSkip {
            first: self,
            second: other,
        }
    }

    /// Discard this parser's void output and keep `other`'s
    fn skip_then<P>(self, other: P) -> SkipThen<Self, P>
    where
        Self: Parser<'src, Output = ()>,
        P: Parser<'src, Cursor = Self::Cursor>,
    {
        SkipThen {
            first: self,
            second: other,
        }
    }
}

impl<'src, P> ThenExt<'src> for P where P: Parser<'src> {}
