use crate::atomic::Atomic;

/// A restore point into a [`PrintCursor`], taken before a speculative print
/// attempt and handed back to [`PrintCursor::restore`] if the attempt fails.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Mark(usize);

/// The print-direction counterpart of a parse cursor.
///
/// Printing assembles the final sequence back-to-front: each printer prepends
/// its own elements in front of whatever later printers already emitted.
/// Internally the elements are stored in reverse so that a prepend is a push
/// and a failed branch is a truncate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintCursor<T: Atomic = u8> {
    reversed: Vec<T>,
}

impl<T: Atomic> PrintCursor<T> {
    pub fn new() -> Self {
        Self { reversed: Vec::new() }
    }

    /// Start from an already-assembled suffix, for printing a value in front
    /// of existing content.
    pub fn from_suffix(suffix: &[T]) -> Self {
        Self {
            reversed: suffix.iter().rev().copied().collect(),
        }
    }

    /// Insert the given elements at the front of the assembled sequence.
    pub fn prepend(&mut self, elements: &[T]) {
        self.reversed.extend(elements.iter().rev().copied());
    }

    pub fn prepend_one(&mut self, element: T) {
        self.reversed.push(element);
    }

    /// Number of elements assembled so far.
    pub fn len(&self) -> usize {
        self.reversed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reversed.is_empty()
    }

    pub fn mark(&self) -> Mark {
        Mark(self.reversed.len())
    }

    /// Discard everything prepended since the mark was taken.
    pub fn restore(&mut self, mark: Mark) {
        self.reversed.truncate(mark.0);
    }

    /// Consume the cursor and return the assembled sequence in forward order.
    pub fn into_vec(mut self) -> Vec<T> {
        self.reversed.reverse();
        self.reversed
    }

    /// The assembled sequence in forward order, without consuming the cursor.
    pub fn to_vec(&self) -> Vec<T> {
        self.reversed.iter().rev().copied().collect()
    }
}

impl<T: Atomic> Default for PrintCursor<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_assembles_back_to_front() {
        let mut cursor = PrintCursor::new();
        cursor.prepend(b"world");
        cursor.prepend(b"hello ");
        assert_eq!(cursor.into_vec(), b"hello world".to_vec());
    }

    #[test]
    fn test_prepend_one() {
        let mut cursor = PrintCursor::new();
        cursor.prepend_one(b'b');
        cursor.prepend_one(b'a');
        assert_eq!(cursor.into_vec(), b"ab".to_vec());
    }

    #[test]
    fn test_from_suffix_keeps_existing_content_behind() {
        let mut cursor = PrintCursor::from_suffix(b", world!");
        cursor.prepend(b"hello");
        assert_eq!(cursor.into_vec(), b"hello, world!".to_vec());
    }

    #[test]
    fn test_mark_restore_discards_speculative_output() {
        let mut cursor = PrintCursor::new();
        cursor.prepend(b"kept");
        let mark = cursor.mark();
        cursor.prepend(b"discarded");
        cursor.restore(mark);
        assert_eq!(cursor.into_vec(), b"kept".to_vec());
    }

    #[test]
    fn test_to_vec_does_not_consume() {
        let mut cursor = PrintCursor::new();
        cursor.prepend(b"abc");
        assert_eq!(cursor.to_vec(), b"abc".to_vec());
        assert_eq!(cursor.len(), 3);
    }
}
