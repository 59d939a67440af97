pub mod atomic;
pub mod byte;

pub use atomic::AtomicCursor;
pub use byte::ByteCursor;
