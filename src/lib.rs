//! # ParsiCore - Outcome model for parser combinators
//!
//! The value every elementary parsing step returns, and the two primitives used to
//! chain steps without panics or early returns.
//!
//! A parsing step takes a [`Cursor`] and returns an [`Outcome`]: either a value plus
//! the advanced cursor, or no value plus the cursor at the failure point. Both carry
//! [`Observation`]s explaining what happened. Grammar level combinators (sequence,
//! repetition, alternation) are built on top of:
//!
//! - [`Outcome::succeed`] and [`Outcome::fail`] to construct results
//! - [`on_success`] to continue only after a successful step
//! - [`on_failure`] to give an alternative a chance to recover
//!
//! ```
//! use parsicore::{ByteCursor, Cursor, Observation, Outcome, on_failure, on_success};
//!
//! fn digit(cursor: ByteCursor) -> Outcome<ByteCursor, u8> {
//!     match cursor.value() {
//!         Some(byte) if byte.is_ascii_digit() => Outcome::succeed(byte - b'0', cursor.next(), []),
//!         _ => Outcome::fail(cursor, [Observation::new("unexpected character", ["digit"]).unwrap()]),
//!     }
//! }
//!
//! let data = b"4x";
//! let cursor = ByteCursor::new(data);
//!
//! let pair = on_success(digit(cursor), |first| {
//!     digit(first.remainder()).map(|second| *first.value() * 10 + second)
//! });
//! assert!(!pair.has_value());
//! assert_eq!(pair.remainder().position(), 1);
//! assert_eq!(pair.to_string(), "Parsing failure. Recently consumed: '4'.\nunexpected character");
//!
//! let recovered = on_failure(digit(cursor.next()), |failed| Outcome::succeed(0, failed.remainder(), []));
//! assert_eq!(*recovered.value(), 0);
//! ```

pub mod atomic;
pub mod chain;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod location;
pub mod observation;
pub mod outcome;

pub use atomic::Atomic;
pub use chain::{on_failure, on_success};
pub use cursor::Cursor;
pub use cursors::{ByteCursor, CharCursor, SliceCursor};
pub use error::ConstructionError;
pub use location::{Location, context_lines};
pub use observation::{IntoExpectation, Observation, Severity, furthest};
pub use outcome::{Outcome, RECENTLY_CONSUMED_WINDOW};
