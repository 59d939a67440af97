use crate::atomic::Atomic;
use crate::error::{CodeLoc, ParseError};

/// Generic cursor trait for the parse direction
///
/// A cursor represents a position in a sequence of elements that can be
/// advanced and queried. Cursors are `Copy` views over borrowed source, so
/// taking a restore point for backtracking is just keeping the old value.
pub trait Cursor<'src>: Copy + Clone + Sized {
    /// The type of elements this cursor iterates over
    type Element: Atomic;

    /// Build a cursor positioned at the start of the given source
    fn from_source(source: &'src [Self::Element]) -> Self;

    /// Get the element at the current cursor position
    ///
    /// Returns an error if the cursor is positioned at the end of the sequence
    fn value(&self) -> Result<Self::Element, ParseError<'src, Self::Element>>;

    /// Advance the cursor to the next element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Get the current position in the sequence
    ///
    /// For end-of-sequence cursors, this returns the length of the sequence
    fn position(&self) -> usize;

    /// Get the source data without consuming the cursor
    fn source(&self) -> &'src [Self::Element];

    /// Check if the cursor is at the end of the sequence
    fn eos(&self) -> bool {
        self.value().is_err()
    }

    /// Number of elements between the current position and the end
    fn remaining(&self) -> usize {
        self.source().len().saturating_sub(self.position())
    }

    /// Snapshot the current position for error reporting
    fn loc(&self) -> CodeLoc<'src, Self::Element> {
        CodeLoc::new(self.source(), self.position())
    }
}
