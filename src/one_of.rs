use crate::cursor::Cursor;
use crate::error::{ParseError, PrintError};
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer trying each member of a tuple of alternatives in order
///
/// All members must share one output type. Parsing attempts the branches in
/// declaration order from the same position and reports a single multi-error
/// when none matches. Printing attempts them in reverse declaration order,
/// restoring the cursor after each failed attempt; the gathered print errors
/// are reported in declaration order. Implemented for tuples of length two
/// through ten.
pub struct OneOf<Ps> {
    parsers: Ps,
}

/// Convenience function to create a OneOf parser from a tuple of alternatives
pub fn one_of<Ps>(parsers: Ps) -> OneOf<Ps> {
    OneOf { parsers }
}

macro_rules! impl_one_of {
    ($first:ident $fp:ident $(, $rest:ident $rp:ident)+ ; $($bp:ident),+) => {
        impl<'src, $first, $($rest),+> Parser<'src> for OneOf<($first, $($rest),+)>
        where
            $first: Parser<'src>,
            $($rest: Parser<'src, Cursor = $first::Cursor, Output = $first::Output>,)+
        {
            type Cursor = $first::Cursor;
            type Output = $first::Output;

            fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
                let ($fp, $($rp),+) = &self.parsers;
                let mut errors = Vec::new();
                match $fp.parse(cursor) {
                    Ok(success) => return Ok(success),
                    Err(error) => errors.push(error),
                }
                $(
                    match $rp.parse(cursor) {
                        Ok(success) => return Ok(success),
                        Err(error) => errors.push(error),
                    }
                )+
                Err(ParseError::many(errors, cursor.loc()))
            }
        }

        impl<'src, $first, $($rest),+> Printer<'src> for OneOf<($first, $($rest),+)>
        where
            $first: Printer<'src>,
            $($rest: Printer<'src, Cursor = $first::Cursor, Output = $first::Output>,)+
        {
            fn print(
                &self,
                output: &Self::Output,
                cursor: &mut PrintCursor<ElementOf<'src, Self>>,
            ) -> Result<(), PrintError> {
                let ($fp, $($rp),+) = &self.parsers;
                let mark = cursor.mark();
                let mut errors = Vec::new();
                $(
                    match $bp.print(output, cursor) {
                        Ok(()) => return Ok(()),
                        Err(error) => {
                            cursor.restore(mark);
                            errors.push(error);
                        }
                    }
                )+
                errors.reverse();
                Err(PrintError::many(errors, cursor.len()))
            }
        }
    };
}

// Branch lists pair each type parameter with its binding; the trailing list
// names the bindings in reverse for the print attempts.
impl_one_of!(P0 p0, P1 p1;
    p1, p0);
impl_one_of!(P0 p0, P1 p1, P2 p2;
    p2, p1, p0);
impl_one_of!(P0 p0, P1 p1, P2 p2, P3 p3;
    p3, p2, p1, p0);
impl_one_of!(P0 p0, P1 p1, P2 p2, P3 p3, P4 p4;
    p4, p3, p2, p1, p0);
impl_one_of!(P0 p0, P1 p1, P2 p2, P3 p3, P4 p4, P5 p5;
    p5, p4, p3, p2, p1, p0);
impl_one_of!(P0 p0, P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6;
    p6, p5, p4, p3, p2, p1, p0);
impl_one_of!(P0 p0, P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7;
    p7, p6, p5, p4, p3, p2, p1, p0);
impl_one_of!(P0 p0, P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7, P8 p8;
    p8, p7, p6, p5, p4, p3, p2, p1, p0);
impl_one_of!(P0 p0, P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7, P8 p8, P9 p9;
    p9, p8, p7, p6, p5, p4, p3, p2, p1, p0);

/// Parser-printer trying each member of a homogeneous list of alternatives
///
/// The run-time sibling of [`OneOf`], for alternatives built in a loop rather
/// than written out as a tuple.
pub struct OneOfMany<P> {
    parsers: Vec<P>,
}

/// Convenience function to create a OneOfMany parser
pub fn one_of_many<P>(parsers: Vec<P>) -> OneOfMany<P> {
    OneOfMany { parsers }
}

impl<'src, P> Parser<'src> for OneOfMany<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let mut errors = Vec::new();
        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(success) => return Ok(success),
                Err(error) => errors.push(error),
            }
        }
        Err(ParseError::many(errors, cursor.loc()))
    }
}

impl<'src, P> Printer<'src> for OneOfMany<P>
where
    P: Printer<'src>,
{
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<ElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        let mark = cursor.mark();
        let mut errors = Vec::new();
        for parser in self.parsers.iter().rev() {
            match parser.print(output, cursor) {
                Ok(()) => return Ok(()),
                Err(error) => {
                    cursor.restore(mark);
                    errors.push(error);
                }
            }
        }
        errors.reverse();
        Err(PrintError::many(errors, cursor.len()))
    }
}
