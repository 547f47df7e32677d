use crate::atomic::Atomic;

/// Position-tracking view over a source
///
/// A cursor is an immutable pair of a source and an offset into it. Advancing
/// yields a new cursor and leaves the old one untouched, so a saved copy can
/// always be used to retry from the same point.
pub trait Cursor<'code>: Copy + Sized {
    /// The type of elements this cursor iterates over
    type Element: Atomic + 'code;

    /// The whole source this cursor walks over
    fn source(&self) -> &'code [Self::Element];

    /// Current offset into the source, always within `0..=source().len()`
    fn position(&self) -> usize;

    /// Move `count` elements forward, stopping at the end of the source
    fn advance(self, count: usize) -> Self;

    /// Move one element forward, stopping at the end of the source
    fn next(self) -> Self {
        self.advance(1)
    }

    /// Get the element at the current position, `None` at the end of the source
    fn value(&self) -> Option<Self::Element> {
        self.source().get(self.position()).copied()
    }

    /// Check if the cursor is at the end of the source
    fn eos(&self) -> bool {
        self.position() >= self.source().len()
    }

    /// Slice the source over `[start, end)`, clamped to the source bounds
    fn slice(&self, start: usize, end: usize) -> &'code [Self::Element] {
        let source = self.source();
        let end = end.min(source.len());
        let start = start.min(end);
        &source[start..end]
    }
}
