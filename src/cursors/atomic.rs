use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;

#[derive(Debug, Copy, Clone)]
pub enum AtomicCursor<'src, T: Atomic> {
    Valid { data: &'src [T], position: usize },
    EndOfInput { data: &'src [T] },
}

impl<'src, T: Atomic> AtomicCursor<'src, T> {
    pub fn new(data: &'src [T]) -> Self {
        if data.is_empty() {
            return AtomicCursor::EndOfInput { data };
        }
        AtomicCursor::Valid { data, position: 0 }
    }
}

impl<'src, T: Atomic> Cursor<'src> for AtomicCursor<'src, T> {
    type Element = T;

    fn from_source(source: &'src [Self::Element]) -> Self {
        AtomicCursor::new(source)
    }

    fn value(&self) -> Result<Self::Element, ParseError<'src, T>> {
        match self {
            AtomicCursor::Valid { data, position } => Ok(data[*position]),
            AtomicCursor::EndOfInput { .. } => Err(ParseError::expected("input", self.loc())),
        }
    }

    fn next(self) -> Self {
        match self {
            AtomicCursor::Valid { data, position } => {
                if position + 1 >= data.len() {
                    AtomicCursor::EndOfInput { data }
                } else {
                    AtomicCursor::Valid {
                        data,
                        position: position + 1,
                    }
                }
            }
            AtomicCursor::EndOfInput { data } => AtomicCursor::EndOfInput { data },
        }
    }

    fn position(&self) -> usize {
        match self {
            AtomicCursor::Valid { position, .. } => *position,
            AtomicCursor::EndOfInput { data } => data.len(),
        }
    }

    fn source(&self) -> &'src [Self::Element] {
        match self {
            AtomicCursor::Valid { data, .. } => data,
            AtomicCursor::EndOfInput { data } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let data = b"hello\nworld";
        let cursor: AtomicCursor<u8> = AtomicCursor::new(data);

        assert_eq!(cursor.value().unwrap(), b'h');

        let cursor = cursor.next();
        assert_eq!(cursor.value().unwrap(), b'e');
    }

    #[test]
    fn test_eos() {
        let data = b"ab";
        let mut cursor: AtomicCursor<u8> = AtomicCursor::new(data);

        assert_eq!(cursor.value().unwrap(), b'a');
        cursor = cursor.next();
        assert_eq!(cursor.value().unwrap(), b'b');

        cursor = cursor.next();
        assert!(matches!(cursor, AtomicCursor::EndOfInput { .. }));
        assert!(cursor.eos());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_empty_data() {
        let data = b"";
        let cursor: AtomicCursor<u8> = AtomicCursor::new(data);

        assert!(matches!(cursor, AtomicCursor::EndOfInput { .. }));
        assert!(cursor.value().is_err());
    }

    #[test]
    fn test_next_stays_at_eos() {
        let data = b"x";
        let cursor: AtomicCursor<u8> = AtomicCursor::new(data);

        let cursor = cursor.next();
        assert!(matches!(cursor, AtomicCursor::EndOfInput { .. }));

        let cursor = cursor.next();
        assert!(matches!(cursor, AtomicCursor::EndOfInput { .. }));
    }

    #[test]
    fn test_copy_independence() {
        let data = b"abcd";
        let cursor: AtomicCursor<u8> = AtomicCursor::new(data);

        let saved_at_a = cursor;

        let cursor = cursor.next();
        assert_eq!(cursor.value().unwrap(), b'b');

        // The saved copy is a restore point, unaffected by the advance
        assert_eq!(saved_at_a.value().unwrap(), b'a');
        assert_eq!(saved_at_a.position(), 0);
    }

    #[test]
    fn test_remaining() {
        let data = b"abc";
        let cursor: AtomicCursor<u8> = AtomicCursor::new(data);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.next().remaining(), 2);
        assert_eq!(cursor.next().next().next().remaining(), 0);
    }
}
