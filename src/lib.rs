//! # BidiComb - Bidirectional Parser Combinator Library
//!
//! A combinator library where every grammar runs in two directions: the same
//! tree that parses input into structured values can print those values back
//! into the input they came from.
//!
//! BidiComb provides composable, type-safe parser-printers built from simple
//! building blocks. The library emphasizes:
//!
//! - **Round trips**: Printing a parsed value reproduces the consumed input,
//!   and parsing a printed value yields the value back
//! - **Zero panics**: All parsing and printing errors are handled through
//!   `Result` types
//! - **Rich error reporting**: Provides line numbers, context, and detailed
//!   error messages
//! - **Composability**: Small parser-printers combine into larger ones using
//!   combinators

pub mod always;
pub mod any_parser;
pub mod asynchronous;
pub mod atomic;
pub mod backtracking;
pub mod byte;
pub mod conditional;
pub mod convert;
pub mod cursor;
pub mod cursors;
pub mod end;
pub mod error;
pub mod fail;
pub mod filter;
pub mod float;
pub mod int;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod not;
pub mod one_of;
pub mod optionally;
pub mod or;
pub mod parser;
pub mod prefix_up_to;
pub mod print_cursor;
pub mod printer;
pub mod replace_error;
pub mod separated_list;
pub mod seq;
pub mod some;
pub mod stream;
pub mod then;
pub mod uuid;
pub mod via;

pub use any_parser::{AnyParserPrinter, EraseExt};
pub use atomic::Atomic;
pub use backtracking::BacktrackingExt;
pub use convert::Conversion;
pub use cursor::Cursor;
pub use cursors::{AtomicCursor, ByteCursor};
pub use error::{CodeLoc, ConvertError, ParseError, PrintError, Span};
pub use filter::FilterExt;
pub use map::MapExt;
pub use optionally::OptionallyExt;
pub use or::OrExt;
pub use parser::Parser;
pub use print_cursor::{Mark, PrintCursor};
pub use printer::Printer;
pub use replace_error::ReplaceErrorExt;
pub use then::ThenExt;
pub use via::ViaExt;
