use crate::error::PrintError;
use crate::parser::{ElementOf, Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;

/// Parser-printer running a tuple of steps in order, producing a tuple of
/// their outputs
///
/// Covers the common case of fixed-arity sequences without nesting
/// [`Then`](crate::then::Then) pairs. Parsing runs the steps left to right;
/// printing runs them right to left because the stream is assembled by
/// prepending. Implemented for tuples of length two through ten.
pub struct Seq<Ps> {
    parsers: Ps,
}

/// Convenience function to create a Seq parser from a tuple of parsers
pub fn seq<Ps>(parsers: Ps) -> Seq<Ps> {
    Seq { parsers }
}

macro_rules! impl_seq {
    ($first:ident $fp:ident $fo:ident $(, $rest:ident $rp:ident $ro:ident)+ ;
     $(($bp:ident, $bo:ident))+) => {
        impl<'src, $first, $($rest),+> Parser<'src> for Seq<($first, $($rest),+)>
        where
            $first: Parser<'src>,
            $($rest: Parser<'src, Cursor = $first::Cursor>,)+
        {
            type Cursor = $first::Cursor;
            type Output = ($first::Output, $($rest::Output),+);

            fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
                let ($fp, $($rp),+) = &self.parsers;
                let ($fo, cursor) = $fp.parse(cursor)?;
                $(let ($ro, cursor) = $rp.parse(cursor)?;)+
                Ok((($fo, $($ro),+), cursor))
            }
        }

        impl<'src, $first, $($rest),+> Printer<'src> for Seq<($first, $($rest),+)>
        where
            $first: Printer<'src>,
            $($rest: Printer<'src, Cursor = $first::Cursor>,)+
        {
            fn print(
                &self,
                output: &Self::Output,
                cursor: &mut PrintCursor<ElementOf<'src, Self>>,
            ) -> Result<(), PrintError> {
                let ($fp, $($rp),+) = &self.parsers;
                let ($fo, $($ro),+) = output;
                $($bp.print($bo, cursor)?;)+
                Ok(())
            }
        }
    };
}

// Each arity lists its steps forward for parsing and as (parser, output)
// pairs in reverse for printing.
impl_seq!(P0 p0 o0, P1 p1 o1;
    (p1, o1) (p0, o0));
impl_seq!(P0 p0 o0, P1 p1 o1, P2 p2 o2;
    (p2, o2) (p1, o1) (p0, o0));
impl_seq!(P0 p0 o0, P1 p1 o1, P2 p2 o2, P3 p3 o3;
    (p3, o3) (p2, o2) (p1, o1) (p0, o0));
impl_seq!(P0 p0 o0, P1 p1 o1, P2 p2 o2, P3 p3 o3, P4 p4 o4;
    (p4, o4) (p3, o3) (p2, o2) (p1, o1) (p0, o0));
impl_seq!(P0 p0 o0, P1 p1 o1, P2 p2 o2, P3 p3 o3, P4 p4 o4, P5 p5 o5;
    (p5, o5) (p4, o4) (p3, o3) (p2, o2) (p1, o1) (p0, o0));
impl_seq!(P0 p0 o0, P1 p1 o1, P2 p2 o2, P3 p3 o3, P4 p4 o4, P5 p5 o5, P6 p6 o6;
    (p6, o6) (p5, o5) (p4, o4) (p3, o3) (p2, o2) (p1, o1) (p0, o0));
impl_seq!(P0 p0 o0, P1 p1 o1, P2 p2 o2, P3 p3 o3, P4 p4 o4, P5 p5 o5, P6 p6 o6, P7 p7 o7;
    (p7, o7) (p6, o6) (p5, o5) (p4, o4) (p3, o3) (p2, o2) (p1, o1) (p0, o0));
impl_seq!(P0 p0 o0, P1 p1 o1, P2 p2 o2, P3 p3 o3, P4 p4 o4, P5 p5 o5, P6 p6 o6, P7 p7 o7,
    P8 p8 o8;
    (p8, o8) (p7, o7) (p6, o6) (p5, o5) (p4, o4) (p3, o3) (p2, o2) (p1, o1) (p0, o0));
impl_seq!(P0 p0 o0, P1 p1 o1, P2 p2 o2, P3 p3 o3, P4 p4 o4, P5 p5 o5, P6 p6 o6, P7 p7 o7,
    P8 p8 o8, P9 p9 o9;
    (p9, o9) (p8, o8) (p7, o7) (p6, o6) (p5, o5) (p4, o4) (p3, o3) (p2, o2) (p1, o1) (p0, o0));
