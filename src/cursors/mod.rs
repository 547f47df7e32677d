pub mod slice;

pub use slice::{ByteCursor, CharCursor, SliceCursor};
