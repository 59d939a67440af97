use crate::cursor::Cursor;
use crate::cursors::ByteCursor;
use crate::error::{ParseError, PrintError};
use crate::parser::{Parsed, Parser};
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;
use std::fmt;
use std::str::FromStr;

/// Positions of the hyphens within the canonical 36-byte rendering
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

const TEXT_LENGTH: usize = 36;

/// A universally unique identifier, stored as sixteen raw bytes
///
/// The canonical textual form is the 8-4-4-4-12 hyphenated rendering with
/// uppercase hex digits. Parsing accepts either case.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Uuid([u8; 16]);

impl Uuid {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Uuid(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Decode exactly 36 bytes of canonical hyphenated text
    fn decode(text: &[u8]) -> Option<Self> {
        if text.len() != TEXT_LENGTH {
            return None;
        }

        let mut bytes = [0u8; 16];
        let mut nibbles = 0;
        for (index, &byte) in text.iter().enumerate() {
            if HYPHENS.contains(&index) {
                if byte != b'-' {
                    return None;
                }
                continue;
            }
            let digit = match byte {
                b'0'..=b'9' => byte - b'0',
                b'a'..=b'f' => byte - b'a' + 10,
                b'A'..=b'F' => byte - b'A' + 10,
                _ => return None,
            };
            bytes[nibbles / 2] = (bytes[nibbles / 2] << 4) | digit;
            nibbles += 1;
        }
        Some(Uuid(bytes))
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, byte) in self.0.iter().enumerate() {
            if [4, 6, 8, 10].contains(&index) {
                write!(f, "-")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// Error returned when a string is not a canonically formatted UUID
#[derive(Debug, thiserror::Error)]
#[error("invalid UUID: {text:?}")]
pub struct InvalidUuid {
    text: String,
}

impl FromStr for Uuid {
    type Err = InvalidUuid;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Uuid::decode(text.as_bytes()).ok_or_else(|| InvalidUuid {
            text: text.to_string(),
        })
    }
}

/// Parser-printer for hyphenated UUIDs
///
/// Consumes exactly 36 bytes; there is no shorter or longer accepted form.
/// Printing emits the canonical uppercase rendering even when the parsed text
/// was lowercase.
pub struct UuidParser;

/// Convenience function to create a UuidParser
pub fn uuid() -> UuidParser {
    UuidParser
}

impl<'src> Parser<'src> for UuidParser {
    type Cursor = ByteCursor<'src>;
    type Output = Uuid;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'src, Self> {
        let bytes = &cursor.source()[cursor.position()..];
        if bytes.len() < TEXT_LENGTH {
            return Err(ParseError::expected("UUID", cursor.loc()));
        }

        let Some(value) = Uuid::decode(&bytes[..TEXT_LENGTH]) else {
            return Err(ParseError::expected("UUID", cursor.loc()));
        };

        let mut current = cursor;
        for _ in 0..TEXT_LENGTH {
            current = current.next();
        }
        Ok((value, current))
    }
}

impl<'src> Printer<'src> for UuidParser {
    fn print(&self, output: &Uuid, cursor: &mut PrintCursor<u8>) -> Result<(), PrintError> {
        cursor.prepend(output.to_string().as_bytes());
        Ok(())
    }
}
