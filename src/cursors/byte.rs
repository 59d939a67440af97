use crate::cursors::AtomicCursor;

/// A specialized cursor for byte data (u8), the common case for textual and
/// binary grammars alike
pub type ByteCursor<'src> = AtomicCursor<'src, u8>;
