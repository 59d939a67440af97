use crate::cursor::Cursor;
use crate::cursors::ByteCursor;
use crate::error::{ParseError, PrintError, Span};
use crate::parser::{Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;
use std::marker::PhantomData;

/// Machine integer types parseable in any radix from 2 to 36
///
/// Accumulation runs through the negative range so that the minimum value of
/// a signed type parses without overflowing, and `finalize` flips the sign
/// back at the end.
pub trait Integer: Copy + PartialEq + std::fmt::Debug + 'static {
    const SIGNED: bool;
    const NAME: &'static str;

    fn zero() -> Self;

    /// Absorb one more digit, or `None` on overflow
    fn accumulate(self, radix: u32, digit: u32) -> Option<Self>;

    /// Convert the negatively-accumulated magnitude into the final value
    fn finalize(self, negative: bool) -> Option<Self>;

    fn from_str_radix(text: &str, radix: u32) -> Result<Self, std::num::ParseIntError>;

    /// Render in the given radix with lowercase digit letters
    fn format_radix(&self, radix: u32) -> String;

    fn max_description() -> String;

    fn min_description() -> String;
}

fn format_magnitude(mut magnitude: u128, radix: u32, negative: bool) -> String {
    if magnitude == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while magnitude > 0 {
        let digit = (magnitude % radix as u128) as u32;
        digits.push(char::from_digit(digit, radix).unwrap_or('?'));
        magnitude /= radix as u128;
    }
    if negative {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

macro_rules! impl_integer_signed {
    ($($t:ty),+) => {$(
        impl Integer for $t {
            const SIGNED: bool = true;
            const NAME: &'static str = stringify!($t);

            fn zero() -> Self {
                0
            }

            fn accumulate(self, radix: u32, digit: u32) -> Option<Self> {
                self.checked_mul(radix as $t)?.checked_sub(digit as $t)
            }

            fn finalize(self, negative: bool) -> Option<Self> {
                if negative { Some(self) } else { self.checked_neg() }
            }

            fn from_str_radix(text: &str, radix: u32) -> Result<Self, std::num::ParseIntError> {
                <$t>::from_str_radix(text, radix)
            }

            fn format_radix(&self, radix: u32) -> String {
                format_magnitude(self.unsigned_abs() as u128, radix, *self < 0)
            }

            fn max_description() -> String {
                <$t>::MAX.to_string()
            }

            fn min_description() -> String {
                <$t>::MIN.to_string()
            }
        }
    )+};
}

macro_rules! impl_integer_unsigned {
    ($($t:ty),+) => {$(
        impl Integer for $t {
            const SIGNED: bool = false;
            const NAME: &'static str = stringify!($t);

            fn zero() -> Self {
                0
            }

            fn accumulate(self, radix: u32, digit: u32) -> Option<Self> {
                self.checked_mul(radix as $t)?.checked_add(digit as $t)
            }

            fn finalize(self, negative: bool) -> Option<Self> {
                if negative { None } else { Some(self) }
            }

            fn from_str_radix(text: &str, radix: u32) -> Result<Self, std::num::ParseIntError> {
                <$t>::from_str_radix(text, radix)
            }

            fn format_radix(&self, radix: u32) -> String {
                format_magnitude(*self as u128, radix, false)
            }

            fn max_description() -> String {
                <$t>::MAX.to_string()
            }

            fn min_description() -> String {
                <$t>::MIN.to_string()
            }
        }
    )+};
}

impl_integer_signed!(i8, i16, i32, i64, i128, isize);
impl_integer_unsigned!(u8, u16, u32, u64, u128, usize);

/// The digit value of a byte under the given radix, with letters continuing
/// past nine in either case
fn digit_value(byte: u8, radix: u32) -> Option<u32> {
    let value = match byte {
        b'0'..=b'9' => (byte - b'0') as u32,
        b'a'..=b'z' => (byte - b'a') as u32 + 10,
        b'A'..=b'Z' => (byte - b'A') as u32 + 10,
        _ => return None,
    };
    (value < radix).then_some(value)
}

/// Parser-printer for machine integers in a fixed radix
///
/// Signed types accept an optional leading sign; unsigned types accept bare
/// digits only. Consumes the longest run of digits valid under the radix and
/// reports overflow as a failure spanning the consumed text rather than
/// silently stopping at the widest fitting prefix.
pub struct IntParser<O> {
    radix: u32,
    _output: PhantomData<O>,
}

/// Convenience function to create a base-ten integer parser
pub fn int<O: Integer>() -> IntParser<O> {
    int_radix(10)
}

/// Convenience function to create an integer parser in the given radix
pub fn int_radix<O: Integer>(radix: u32) -> IntParser<O> {
    assert!((2..=36).contains(&radix), "radix not in range 2..=36");
    IntParser {
        radix,
        _output: PhantomData,
    }
}

impl<'src, O: Integer> Parser<'src> for IntParser<O> {
    type Cursor = ByteCursor<'src>;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let mut current = cursor;
        let mut negative = false;

        if O::SIGNED {
            match current.value() {
                Ok(b'-') => {
                    negative = true;
                    current = current.next();
                }
                Ok(b'+') => current = current.next(),
                _ => {}
            }
        }

        // A negative accumulation overflows past MIN, not MAX; the message
        // names the bound that was actually exceeded.
        let overflow = |end: Self::Cursor| {
            let bound = if negative {
                O::min_description()
            } else {
                O::max_description()
            };
            ParseError::failed(
                format!("failed to process {:?}", O::NAME),
                format!("overflowed {}", bound),
                Span::new(cursor.source(), cursor.position(), end.position()),
            )
        };

        let mut value = O::zero();
        let mut digits = 0usize;
        while let Ok(byte) = current.value() {
            let Some(digit) = digit_value(byte, self.radix) else {
                break;
            };
            current = current.next();
            value = value
                .accumulate(self.radix, digit)
                .ok_or_else(|| overflow(current))?;
            digits += 1;
        }

        if digits == 0 {
            return Err(ParseError::expected("integer", cursor.loc()));
        }

        let value = value.finalize(negative).ok_or_else(|| overflow(current))?;
        Ok((value, current))
    }
}

impl<'src, O: Integer> Printer<'src> for IntParser<O> {
    fn print(&self, output: &O, cursor: &mut PrintCursor<u8>) -> Result<(), PrintError> {
        cursor.prepend(output.format_radix(self.radix).as_bytes());
        Ok(())
    }
}
