use crate::ConstructionError;
use crate::atomic::Atomic;
use crate::cursor::Cursor;

/// Cursor over a borrowed slice of atomic elements
#[derive(Debug, Copy, Clone)]
pub struct SliceCursor<'code, T: Atomic> {
    data: &'code [T],
    /// Element offset into `data`, `data.len()` once the input is exhausted
    position: usize,
}

/// Cursor over raw bytes; windows and offsets count bytes
pub type ByteCursor<'code> = SliceCursor<'code, u8>;

/// Cursor over decoded characters; windows and offsets count characters
pub type CharCursor<'code> = SliceCursor<'code, char>;

impl<'code, T: Atomic> SliceCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        SliceCursor { data, position: 0 }
    }

    /// Create a cursor at an arbitrary offset, rejecting offsets past the end
    pub fn at(data: &'code [T], position: usize) -> Result<Self, ConstructionError> {
        if position > data.len() {
            return Err(ConstructionError::PositionOutOfBounds {
                position,
                len: data.len(),
            });
        }
        Ok(SliceCursor { data, position })
    }
}

impl<'code, T: Atomic + 'code> Cursor<'code> for SliceCursor<'code, T> {
    type Element = T;

    fn source(&self) -> &'code [Self::Element] {
        self.data
    }

    fn position(&self) -> usize {
        self.position
    }

    fn advance(self, count: usize) -> Self {
        SliceCursor {
            data: self.data,
            position: self.position.saturating_add(count).min(self.data.len()),
        }
    }
}

/// Two cursors are equal when they view the same source at the same offset
impl<'code, T: Atomic> PartialEq for SliceCursor<'code, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.data, other.data) && self.position == other.position
    }
}

impl<'code, T: Atomic> Eq for SliceCursor<'code, T> {}
