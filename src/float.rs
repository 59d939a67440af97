use crate::cursor::Cursor;
use crate::cursors::ByteCursor;
use crate::error::{ParseError, PrintError};
use crate::parser::{Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;
use std::marker::PhantomData;

/// Floating point types the scanner can produce
pub trait Float:
    Copy + PartialEq + std::fmt::Debug + std::fmt::Display + 'static
{
    const NAME: &'static str;

    fn from_f64(value: f64) -> Self;
}

impl Float for f32 {
    const NAME: &'static str = "f32";

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Float for f64 {
    const NAME: &'static str = "f64";

    fn from_f64(value: f64) -> Self {
        value
    }
}

/// How far a float scan got, and whether it saw a hexadecimal literal
struct Scan {
    length: usize,
    hex: bool,
}

fn scan_keyword(bytes: &[u8]) -> Option<usize> {
    for keyword in [b"infinity".as_slice(), b"inf", b"nan"] {
        if bytes.len() >= keyword.len()
            && bytes[..keyword.len()].eq_ignore_ascii_case(keyword)
        {
            return Some(keyword.len());
        }
    }
    None
}

/// Scan the longest prefix forming a valid float literal
///
/// Accepts an optional sign, then either a case-insensitive keyword (`inf`,
/// `infinity`, `nan`), a hexadecimal literal (`0x` mantissa with optional
/// binary `p` exponent), or a decimal literal with optional `e` exponent. An
/// exponent marker not followed by a digit is left unconsumed, so `"1e"`
/// scans as `"1"`.
fn scan_float(bytes: &[u8]) -> Option<Scan> {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    if let Some(length) = scan_keyword(&bytes[i..]) {
        return Some(Scan {
            length: i + length,
            hex: false,
        });
    }

    if bytes[i..].len() >= 2 && bytes[i] == b'0' && bytes[i + 1].eq_ignore_ascii_case(&b'x') {
        if let Some(scan) = scan_hex(bytes, i + 2) {
            return Some(scan);
        }
    }

    scan_decimal(bytes, i)
}

fn scan_hex(bytes: &[u8], mantissa_start: usize) -> Option<Scan> {
    let mut i = mantissa_start;
    let mut digits = 0;

    while i < bytes.len() && bytes[i].is_ascii_hexdigit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_hexdigit() {
            j += 1;
            digits += 1;
        }
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }

    if i < bytes.len() && bytes[i].eq_ignore_ascii_case(&b'p') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exponent_digits = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exponent_digits {
            i = j;
        }
    }

    Some(Scan {
        length: i,
        hex: true,
    })
}

fn scan_decimal(bytes: &[u8], start: usize) -> Option<Scan> {
    let mut i = start;
    let mut digits = 0;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            digits += 1;
        }
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }

    if i < bytes.len() && bytes[i].eq_ignore_ascii_case(&b'e') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exponent_digits = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exponent_digits {
            i = j;
        }
    }

    Some(Scan {
        length: i,
        hex: false,
    })
}

/// Evaluate a scanned hexadecimal literal such as `-0x1.8p3`
fn hex_to_f64(bytes: &[u8]) -> f64 {
    let mut i = 0;
    let mut negative = false;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        negative = bytes[0] == b'-';
        i += 1;
    }
    // Skip the 0x marker
    i += 2;

    let mut mantissa = 0.0f64;
    while i < bytes.len() && bytes[i].is_ascii_hexdigit() {
        mantissa = mantissa * 16.0 + hex_digit(bytes[i]) as f64;
        i += 1;
    }
    let mut fraction_digits = 0i32;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_hexdigit() {
            mantissa = mantissa * 16.0 + hex_digit(bytes[i]) as f64;
            fraction_digits += 1;
            i += 1;
        }
    }

    let mut exponent = 0i32;
    if i < bytes.len() && bytes[i].eq_ignore_ascii_case(&b'p') {
        i += 1;
        let mut exponent_negative = false;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            exponent_negative = bytes[i] == b'-';
            i += 1;
        }
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            exponent = exponent.saturating_mul(10) + (bytes[i] - b'0') as i32;
            i += 1;
        }
        if exponent_negative {
            exponent = -exponent;
        }
    }

    let value = mantissa * 2f64.powi(exponent - 4 * fraction_digits);
    if negative { -value } else { value }
}

fn hex_digit(byte: u8) -> u32 {
    match byte {
        b'0'..=b'9' => (byte - b'0') as u32,
        b'a'..=b'f' => (byte - b'a') as u32 + 10,
        _ => (byte - b'A') as u32 + 10,
    }
}

/// Parser-printer for floating point numbers
///
/// Consumes the longest valid float literal at the cursor, covering decimal
/// and hexadecimal forms plus the `inf`, `infinity` and `nan` keywords in any
/// case. Printing emits the shortest decimal rendering that parses back to
/// the same value.
pub struct FloatParser<O> {
    _output: PhantomData<O>,
}

/// Convenience function to create a FloatParser
pub fn float<O: Float>() -> FloatParser<O> {
    FloatParser {
        _output: PhantomData,
    }
}

impl<'src, O: Float> Parser<'src> for FloatParser<O> {
    type Cursor = ByteCursor<'src>;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let bytes = &cursor.source()[cursor.position()..];
        let Some(scan) = scan_float(bytes) else {
            return Err(ParseError::expected(O::NAME, cursor.loc()));
        };

        let consumed = &bytes[..scan.length];
        let value = if scan.hex {
            hex_to_f64(consumed)
        } else {
            let text = std::str::from_utf8(consumed)
                .map_err(|_| ParseError::expected(O::NAME, cursor.loc()))?;
            text.parse::<f64>()
                .map_err(|_| ParseError::expected(O::NAME, cursor.loc()))?
        };

        let mut current = cursor;
        for _ in 0..scan.length {
            current = current.next();
        }
        Ok((O::from_f64(value), current))
    }
}

impl<'src, O: Float> Printer<'src> for FloatParser<O> {
    fn print(&self, output: &O, cursor: &mut PrintCursor<u8>) -> Result<(), PrintError> {
        cursor.prepend(format!("{}", output).as_bytes());
        Ok(())
    }
}
