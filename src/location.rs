use crate::atomic::Atomic;
use std::fmt;

/// Human readable position of an offset in a source
///
/// Note: We return an element offset instead of a column number because column
/// calculation depends on encoding, tab width and rendering context. The element
/// offset within the line is unambiguous and useful for debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number
    pub line: usize,
    /// Elements between the start of the line and the offset
    pub offset: usize,
}

impl Location {
    /// Locate `position` in `source`; positions past the end are clamped to it
    pub fn of<T: Atomic>(source: &[T], position: usize) -> Self {
        let position = position.min(source.len());
        let mut line = 1;
        let mut line_start = 0;

        for (i, element) in source[..position].iter().enumerate() {
            if element.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }

        Location {
            line,
            offset: position - line_start,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, offset {}", self.line, self.offset)
    }
}

/// Render up to 2 lines of context before and after the line holding `position`,
/// with a `^--- here` marker under the offending element
pub fn context_lines<T: Atomic>(source: &[T], position: usize) -> Vec<String> {
    let location = Location::of(source, position);
    let first = location.line.saturating_sub(2);
    let last = location.line + 2;
    let mut lines = Vec::new();

    for (index, line) in source.split(|element| element.is_newline()).enumerate() {
        let number = index + 1;
        if number < first {
            continue;
        }
        if number > last {
            break;
        }

        let prefix = if number == location.line {
            format!("  > {} | ", number)
        } else {
            format!("    {} | ", number)
        };
        lines.push(format!("{}{}", prefix, T::format_slice(line)));

        if number == location.line {
            let pointer_offset = prefix.len() + location.offset;
            lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
        }
    }

    lines
}
