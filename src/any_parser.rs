use crate::convert::Conversion;
use crate::cursor::Cursor;
use crate::error::{ParseError, PrintError};
use crate::parser::{Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;
use std::rc::Rc;

/// A type-erased parser-printer holding one closure per direction
///
/// Erasure gives every grammar fragment with the same cursor and output type
/// a single concrete name, which is what recursive grammars, heterogeneous
/// collections and API boundaries need. The combinator methods here mirror
/// the structural combinators so erased fragments still compose.
pub struct AnyParserPrinter<'src, C: Cursor<'src>, O> {
    parse_fn: Box<dyn Fn(C) -> Result<(O, C), ParseError<'src, C::Element>> + 'src>,
    print_fn: Box<dyn Fn(&O, &mut PrintCursor<C::Element>) -> Result<(), PrintError> + 'src>,
}

impl<'src, C: Cursor<'src> + 'src, O: 'src> AnyParserPrinter<'src, C, O> {
    pub fn new(
        parse: impl Fn(C) -> Result<(O, C), ParseError<'src, C::Element>> + 'src,
        print: impl Fn(&O, &mut PrintCursor<C::Element>) -> Result<(), PrintError> + 'src,
    ) -> Self {
        Self {
            parse_fn: Box::new(parse),
            print_fn: Box::new(print),
        }
    }

    /// Erase a concrete parser-printer
    pub fn erase<P>(parser: P) -> Self
    where
        P: Printer<'src, Cursor = C, Output = O> + 'src,
    {
        let shared = Rc::new(parser);
        let printer = Rc::clone(&shared);
        Self::new(
            move |cursor| shared.parse(cursor),
            move |output, cursor| printer.print(output, cursor),
        )
    }

    /// Run another erased fragment after this one, pairing the outputs
    pub fn zip<O2: 'src>(
        self,
        other: AnyParserPrinter<'src, C, O2>,
    ) -> AnyParserPrinter<'src, C, (O, O2)> {
        let AnyParserPrinter { parse_fn, print_fn } = self;
        let AnyParserPrinter {
            parse_fn: other_parse,
            print_fn: other_print,
        } = other;
        AnyParserPrinter::new(
            move |cursor| {
                let (first, cursor) = parse_fn(cursor)?;
                let (second, cursor) = other_parse(cursor)?;
                Ok(((first, second), cursor))
            },
            move |(first, second), cursor| {
                other_print(second, cursor)?;
                print_fn(first, cursor)
            },
        )
    }

    /// Try this fragment, then the alternative from the same position
    ///
    /// Printing tries the alternative first, mirroring
    /// [`Or`](crate::or::Or).
    pub fn or(self, other: Self) -> Self {
        let AnyParserPrinter { parse_fn, print_fn } = self;
        let AnyParserPrinter {
            parse_fn: other_parse,
            print_fn: other_print,
        } = other;
        Self::new(
            move |cursor| {
                let first_error = match parse_fn(cursor) {
                    Ok(success) => return Ok(success),
                    Err(error) => error,
                };
                match other_parse(cursor) {
                    Ok(success) => Ok(success),
                    Err(second_error) => Err(ParseError::many(
                        vec![first_error, second_error],
                        cursor.loc(),
                    )),
                }
            },
            move |output, cursor| {
                let mark = cursor.mark();
                let second_error = match other_print(output, cursor) {
                    Ok(()) => return Ok(()),
                    Err(error) => {
                        cursor.restore(mark);
                        error
                    }
                };
                match print_fn(output, cursor) {
                    Ok(()) => Ok(()),
                    Err(first_error) => {
                        cursor.restore(mark);
                        Err(PrintError::many(
                            vec![first_error, second_error],
                            cursor.len(),
                        ))
                    }
                }
            },
        )
    }

    /// Thread the output through a conversion, like
    /// [`via`](crate::via::ViaExt::via)
    pub fn via<Cv>(self, conversion: Cv) -> AnyParserPrinter<'src, C, Cv::Output>
    where
        Cv: Conversion<Input = O> + 'src,
        Cv::Output: Clone + 'src,
    {
        let AnyParserPrinter { parse_fn, print_fn } = self;
        let conversion = Rc::new(conversion);
        let unapplying = Rc::clone(&conversion);
        AnyParserPrinter::new(
            move |cursor: C| {
                let (output, next) = parse_fn(cursor)?;
                match conversion.apply(output) {
                    Ok(converted) => Ok((converted, next)),
                    Err(error) => Err(ParseError::failed(
                        error.message().to_string(),
                        "conversion",
                        crate::error::Span::new(
                            cursor.source(),
                            cursor.position(),
                            next.position(),
                        ),
                    )),
                }
            },
            move |output: &Cv::Output, cursor| {
                let input = unapplying.unapply(output.clone()).map_err(|error| {
                    PrintError::failed(error.message().to_string(), "conversion", cursor.len())
                })?;
                print_fn(&input, cursor)
            },
        )
    }

    /// Run a void fragment after this one, keeping this output
    pub fn then_skip(self, other: AnyParserPrinter<'src, C, ()>) -> Self {
        let AnyParserPrinter { parse_fn, print_fn } = self;
        let AnyParserPrinter {
            parse_fn: other_parse,
            print_fn: other_print,
        } = other;
        Self::new(
            move |cursor| {
                let (output, cursor) = parse_fn(cursor)?;
                let ((), cursor) = other_parse(cursor)?;
                Ok((output, cursor))
            },
            move |output, cursor| {
                other_print(&(), cursor)?;
                print_fn(output, cursor)
            },
        )
    }
}

impl<'src, C: Cursor<'src> + 'src> AnyParserPrinter<'src, C, ()> {
    /// Discard this fragment's void output and keep the other's
    pub fn skip_then<O2: 'src>(
        self,
        other: AnyParserPrinter<'src, C, O2>,
    ) -> AnyParserPrinter<'src, C, O2> {
        let AnyParserPrinter { parse_fn, print_fn } = self;
        let AnyParserPrinter {
            parse_fn: other_parse,
            print_fn: other_print,
        } = other;
        AnyParserPrinter::new(
            move |cursor| {
                let ((), cursor) = parse_fn(cursor)?;
                other_parse(cursor)
            },
            move |output, cursor| {
                other_print(output, cursor)?;
                print_fn(&(), cursor)
            },
        )
    }
}

impl<'src, C: Cursor<'src>, O> Parser<'src> for AnyParserPrinter<'src, C, O> {
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        (self.parse_fn)(cursor)
    }
}

impl<'src, C: Cursor<'src>, O> Printer<'src> for AnyParserPrinter<'src, C, O> {
    fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<C::Element>,
    ) -> Result<(), PrintError> {
        (self.print_fn)(output, cursor)
    }
}

/// Extension trait erasing concrete parser-printers
pub trait EraseExt<'src>: Printer<'src> + Sized + 'src {
    fn erased(self) -> AnyParserPrinter<'src, Self::Cursor, Self::Output>
    where
        Self::Cursor: 'src,
        Self::Output: 'src,
    {
        AnyParserPrinter::erase(self)
    }
}

impl<'src, P> EraseExt<'src> for P where P: Printer<'src> + 'src {}
