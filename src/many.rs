use crate::cursor::Cursor;
use crate::error::{ParseError, PrintError};
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer repeating a child as long as it matches, collecting the
/// outputs into a `Vec`
///
/// Zero repetitions is a success unless a lower bound is set. The loop stops
/// on the first child failure, or as soon as the upper bound is reached, or
/// when a successful child consumes nothing (an empty match can never make
/// progress, so one is kept and the loop ends). Printing emits the collected
/// outputs in reverse so the assembled stream reads in parse order.
pub struct Many<P> {
    parser: P,
    at_least: usize,
    at_most: usize,
}

/// Convenience function to create a Many parser with no bounds
pub fn many<P>(parser: P) -> Many<P> {
    Many {
        parser,
        at_least: 0,
        at_most: usize::MAX,
    }
}

impl<P> Many<P> {
    /// Require at least `count` repetitions
    pub fn at_least(mut self, count: usize) -> Self {
        self.at_least = count;
        self
    }

    /// Stop after `count` repetitions
    pub fn at_most(mut self, count: usize) -> Self {
        self.at_most = count;
        self
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Self::Cursor) -> Parsed<'src, Self> {
        let mut outputs = Vec::new();

        while outputs.len() < self.at_most {
            match self.parser.parse(cursor) {
                Ok((output, next)) => {
                    let stalled = next.position() == cursor.position();
                    outputs.push(output);
                    cursor = next;
                    if stalled {
                        break;
                    }
                }
                Err(error) => {
                    if outputs.len() < self.at_least {
                        return Err(error);
                    }
                    break;
                }
            }
        }

        // The lower bound applies to every exit, including the stall exit.
        if outputs.len() < self.at_least {
            return Err(ParseError::expected(
                format!("at least {} repetitions", self.at_least),
                cursor.loc(),
            ));
        }

        Ok((outputs, cursor))
    }
}

impl<'src, P> Printer<'src> for Many<P>
where
    P: Printer<'src>,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        if output.len() < self.at_least || output.len() > self.at_most {
            return Err(PrintError::failed(
                "repetition count out of bounds",
                format!("{} outputs", output.len()),
                cursor.len(),
            ));
        }
        for item in output.iter().rev() {
            self.parser.print(item, cursor)?;
        }
        Ok(())
    }
}

/// Parser-printer repeating a child into a caller-chosen accumulator
///
/// `init` builds the empty accumulator, `fold` absorbs one child output, and
/// `unfold` recovers the outputs so the print direction can re-emit them.
/// Round trips hold only when `unfold` returns exactly the outputs `fold`
/// absorbed, in order.
pub struct ManyFold<P, I, F, U> {
    parser: P,
    init: I,
    fold: F,
    unfold: U,
}

/// Convenience function to create a ManyFold parser
pub fn many_fold<P, C, I, F, U>(parser: P, init: I, fold: F, unfold: U) -> ManyFold<P, I, F, U>
where
    I: Fn() -> C,
{
    ManyFold {
        parser,
        init,
        fold,
        unfold,
    }
}

impl<'src, P, C, I, F, U> Parser<'src> for ManyFold<P, I, F, U>
where
    P: Parser<'src>,
    I: Fn() -> C,
    F: Fn(&mut C, P::Output),
    U: Fn(&C) -> Vec<P::Output>,
{
    type Cursor = P::Cursor;
    type Output = C;

    fn parse(&self, mut cursor: Self::Cursor) -> Parsed<'src, Self> {
        let mut accumulator = (self.init)();

        loop {
            match self.parser.parse(cursor) {
                Ok((output, next)) => {
                    let stalled = next.position() == cursor.position();
                    (self.fold)(&mut accumulator, output);
                    cursor = next;
                    if stalled {
                        break;
                    }
                }
                Err(_) => break,
            }
        }

        Ok((accumulator, cursor))
    }
}

impl<'src, P, C, I, F, U> Printer<'src> for ManyFold<P, I, F, U>
where
    P: Printer<'src>,
    I: Fn() -> C,
    F: Fn(&mut C, P::Output),
    U: Fn(&C) -> Vec<P::Output>,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        let items = (self.unfold)(output);
        for item in items.iter().rev() {
            self.parser.print(item, cursor)?;
        }
        Ok(())
    }
}
