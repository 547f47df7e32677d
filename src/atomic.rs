use std::fmt::Debug;

/// Trait for atomic elements a source is made of
/// This enables generic diagnostic rendering and line calculation
pub trait Atomic: Copy + PartialEq + Debug {
    /// The newline element for this atomic type
    const NEWLINE: Self;

    fn is_newline(&self) -> bool {
        *self == Self::NEWLINE
    }

    /// Convert a slice of elements to a displayable string for diagnostics
    fn format_slice(slice: &[Self]) -> String;
}

impl Atomic for u8 {
    const NEWLINE: Self = b'\n';

    fn format_slice(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).into_owned()
    }
}

impl Atomic for char {
    const NEWLINE: Self = '\n';

    fn format_slice(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}

/// Token ids, rendered space separated
impl Atomic for u32 {
    const NEWLINE: Self = u32::MAX;

    fn format_slice(slice: &[Self]) -> String {
        slice
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
