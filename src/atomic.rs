/// Trait for atomic elements that cursors iterate over
/// This enables generic error formatting and position calculation
pub trait Atomic: Copy + Clone + PartialEq + std::fmt::Debug + 'static {
    /// The newline element for this atomic type, used for line/offset reporting
    const NEWLINE: Self;

    /// Convert a slice of elements to a displayable string for error reporting
    fn format_slice(slice: &[Self]) -> String;
}

impl Atomic for u8 {
    const NEWLINE: Self = b'\n';

    fn format_slice(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).to_string()
    }
}
