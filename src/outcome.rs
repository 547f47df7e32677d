use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::location::{Location, context_lines};
use crate::observation::Observation;
use std::fmt;

/// Number of elements shown before a failure point in the rendered diagnostic
pub const RECENTLY_CONSUMED_WINDOW: usize = 10;

const NO_VALUE: &str = "No value can be computed.";

/// The result of one parsing step
///
/// Either a produced value together with the advanced cursor, or no value and
/// the cursor at the point of failure. Both variants carry observations: on
/// success they are advisory notices, on failure they explain what went wrong.
///
/// Failing to parse is not an error in the Rust sense. Callers branch on
/// [`Outcome::has_value`] or chain steps with [`on_success`](crate::on_success)
/// and [`on_failure`](crate::on_failure).
///
/// ```
/// use parsicore::{ByteCursor, Cursor, Observation, Outcome};
///
/// let source = b"abcdefghijklmno";
/// let failed: Outcome<ByteCursor, u32> = Outcome::fail(
///     ByteCursor::new(source).advance(12),
///     [Observation::new("expected a digit", ["digit"]).unwrap()],
/// );
/// assert_eq!(
///     failed.to_string(),
///     "Parsing failure. Recently consumed: 'cdefghijkl'.\nexpected a digit"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<C, T> {
    Succeeded {
        value: T,
        remainder: C,
        observations: Vec<Observation>,
    },
    Failed {
        remainder: C,
        observations: Vec<Observation>,
    },
}

impl<C: Copy, T> Outcome<C, T> {
    pub fn succeed<I>(value: T, remainder: C, observations: I) -> Self
    where
        I: IntoIterator<Item = Observation>,
    {
        Outcome::Succeeded {
            value,
            remainder,
            observations: observations.into_iter().collect(),
        }
    }

    /// Construct a value-less outcome
    ///
    /// Callers are expected to supply at least one observation explaining the
    /// failure; this is not checked.
    pub fn fail<I>(remainder: C, observations: I) -> Self
    where
        I: IntoIterator<Item = Observation>,
    {
        Outcome::Failed {
            remainder,
            observations: observations.into_iter().collect(),
        }
    }

    pub fn has_value(&self) -> bool {
        matches!(self, Outcome::Succeeded { .. })
    }

    /// The parsed value
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Failed`. Reading a value that was never produced
    /// is a bug in the caller, check [`Outcome::has_value`] or use
    /// [`Outcome::as_value`] instead.
    pub fn value(&self) -> &T {
        match self {
            Outcome::Succeeded { value, .. } => value,
            Outcome::Failed { .. } => panic!("{}", NO_VALUE),
        }
    }

    /// Consuming form of [`Outcome::value`], with the same panic
    pub fn into_value(self) -> T {
        match self {
            Outcome::Succeeded { value, .. } => value,
            Outcome::Failed { .. } => panic!("{}", NO_VALUE),
        }
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Outcome::Succeeded { value, .. } => Some(value),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Succeeded { value, .. } => Some(value),
            Outcome::Failed { .. } => None,
        }
    }

    /// Cursor just past whatever was consumed, or at the failure point
    pub fn remainder(&self) -> C {
        match self {
            Outcome::Succeeded { remainder, .. } | Outcome::Failed { remainder, .. } => *remainder,
        }
    }

    pub fn observations(&self) -> &[Observation] {
        match self {
            Outcome::Succeeded { observations, .. } | Outcome::Failed { observations, .. } => {
                observations
            }
        }
    }

    /// Observations with `Severity::Error`
    pub fn errors(&self) -> impl Iterator<Item = &Observation> {
        self.observations()
            .iter()
            .filter(|observation| observation.is_error())
    }
}

impl<'code, C: Cursor<'code>, T> Outcome<C, T> {
    /// At most the last [`RECENTLY_CONSUMED_WINDOW`] elements before the remainder
    pub fn recently_consumed(&self) -> String {
        let remainder = self.remainder();
        let end = remainder.position();
        let start = end.saturating_sub(RECENTLY_CONSUMED_WINDOW);
        <C::Element as Atomic>::format_slice(remainder.slice(start, end))
    }

    /// Line and offset of the remainder
    pub fn location(&self) -> Location {
        let remainder = self.remainder();
        Location::of(remainder.source(), remainder.position())
    }
}

impl<'code, C: Cursor<'code>, T: fmt::Display> Outcome<C, T> {
    /// Long form diagnostic: the short rendering followed by the source lines
    /// around the remainder
    pub fn report(&self) -> String {
        let remainder = self.remainder();
        let mut report = format!("{}\n\nat {}:\n", self, self.location());
        report.push_str(&context_lines(remainder.source(), remainder.position()).join("\n"));
        report
    }
}

impl<'code, C: Cursor<'code>, T: fmt::Display> fmt::Display for Outcome<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Succeeded { value, .. } => {
                write!(f, "Successfully parsed value: {}.", value)?;
            }
            Outcome::Failed { .. } => {
                write!(
                    f,
                    "Parsing failure. Recently consumed: '{}'.",
                    self.recently_consumed()
                )?;
            }
        }
        for observation in self.observations() {
            write!(f, "\n{}", observation.message())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ByteCursor, CharCursor, Severity};
    use proptest::prelude::*;

    const SOURCE: &[u8] = b"abcdefghijklmno";

    fn observation(message: &str) -> Observation {
        Observation::new(message, [None::<&str>]).unwrap()
    }

    fn failed_at(position: usize) -> Outcome<ByteCursor<'static>, i32> {
        Outcome::fail(
            ByteCursor::at(SOURCE, position).unwrap(),
            [observation("expected digit")],
        )
    }

    #[test]
    fn test_succeed() {
        let remainder = ByteCursor::new(SOURCE).advance(3);
        let outcome = Outcome::succeed(3, remainder, []);

        assert!(outcome.has_value());
        assert_eq!(*outcome.value(), 3);
        assert_eq!(outcome.as_value(), Some(&3));
        assert_eq!(outcome.remainder(), remainder);
        assert!(outcome.observations().is_empty());
        assert_eq!(outcome.ok(), Some(3));
    }

    #[test]
    fn test_succeed_with_advisory_observations() {
        let remainder = ByteCursor::new(SOURCE);
        let notice = Observation::warning("trailing whitespace", [None::<&str>]).unwrap();
        let outcome = Outcome::succeed("abc", remainder, [notice.clone()]);

        assert!(outcome.has_value());
        assert_eq!(outcome.observations(), [notice]);
        assert_eq!(outcome.errors().count(), 0);
    }

    #[test]
    fn test_fail() {
        let outcome = failed_at(4);

        assert!(!outcome.has_value());
        assert_eq!(outcome.as_value(), None);
        assert_eq!(outcome.remainder().position(), 4);
        assert_eq!(outcome.observations(), [observation("expected digit")]);
        assert_eq!(outcome.errors().count(), 1);
        assert_eq!(outcome.ok(), None);
    }

    #[test]
    #[should_panic(expected = "No value can be computed.")]
    fn test_value_of_failure_panics() {
        failed_at(4).value();
    }

    #[test]
    #[should_panic(expected = "No value can be computed.")]
    fn test_into_value_of_failure_panics() {
        failed_at(4).into_value();
    }

    #[test]
    fn test_window_full() {
        assert_eq!(failed_at(12).recently_consumed(), "cdefghijkl");
    }

    #[test]
    fn test_window_clamped_at_start() {
        assert_eq!(failed_at(5).recently_consumed(), "abcde");
        assert_eq!(failed_at(0).recently_consumed(), "");
    }

    #[test]
    fn test_window_exactly_ten() {
        assert_eq!(failed_at(10).recently_consumed(), "abcdefghij");
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(failed_at(15).recently_consumed(), "fghijklmno");
    }

    #[test]
    fn test_window_counts_characters() {
        let data: Vec<char> = "ąęćźżółńśąęć".chars().collect();
        let outcome: Outcome<CharCursor, ()> =
            Outcome::fail(CharCursor::at(&data, 12).unwrap(), [observation("boom")]);
        assert_eq!(outcome.recently_consumed(), "ćźżółńśąęć");
    }

    #[test]
    fn test_display_failure() {
        assert_eq!(
            failed_at(12).to_string(),
            "Parsing failure. Recently consumed: 'cdefghijkl'.\nexpected digit"
        );
    }

    #[test]
    fn test_display_failure_multiple_observations() {
        let outcome: Outcome<ByteCursor, i32> = Outcome::fail(
            ByteCursor::at(SOURCE, 5).unwrap(),
            [observation("expected digit"), observation("expected ')'")],
        );
        assert_eq!(
            outcome.to_string(),
            "Parsing failure. Recently consumed: 'abcde'.\nexpected digit\nexpected ')'"
        );
    }

    #[test]
    fn test_display_failure_without_observations() {
        let outcome: Outcome<ByteCursor, i32> = Outcome::fail(ByteCursor::new(SOURCE), []);
        assert_eq!(outcome.to_string(), "Parsing failure. Recently consumed: ''.");
    }

    #[test]
    fn test_display_success() {
        let outcome = Outcome::succeed(42, ByteCursor::new(SOURCE), []);
        assert_eq!(outcome.to_string(), "Successfully parsed value: 42.");
    }

    #[test]
    fn test_display_success_with_notice() {
        let notice = Observation::info("used default radix", [None::<&str>]).unwrap();
        let outcome = Outcome::succeed(42, ByteCursor::new(SOURCE), [notice]);
        assert_eq!(
            outcome.to_string(),
            "Successfully parsed value: 42.\nused default radix"
        );
    }

    #[test]
    fn test_errors_filters_severity() {
        let outcome: Outcome<ByteCursor, i32> = Outcome::fail(
            ByteCursor::new(SOURCE),
            [
                observation("broken"),
                observation("hint").with_severity(Severity::Info),
            ],
        );
        let errors: Vec<_> = outcome.errors().map(Observation::message).collect();
        assert_eq!(errors, vec!["broken"]);
    }

    #[test]
    fn test_location() {
        let data = b"let x =\n  1 +";
        let outcome: Outcome<ByteCursor, i32> =
            Outcome::fail(ByteCursor::at(data, 13).unwrap(), [observation("expected term")]);
        assert_eq!(outcome.location(), Location { line: 2, offset: 5 });
    }

    #[test]
    fn test_report() {
        let data = b"let x =\n  1 +";
        let outcome: Outcome<ByteCursor, i32> =
            Outcome::fail(ByteCursor::at(data, 13).unwrap(), [observation("expected term")]);
        assert_eq!(
            outcome.report(),
            "Parsing failure. Recently consumed: ' x =\n  1 +'.\nexpected term\n\n\
             at line 2, offset 5:\n    \
             1 | let x =\n  \
             > 2 |   1 +\n             \
             ^--- here"
        );
    }

    proptest! {
        #[test]
        fn succeed_keeps_value_and_remainder(value in any::<i64>(), text in ".{0,40}", cut in 0usize..=40) {
            let data: Vec<char> = text.chars().collect();
            let remainder = CharCursor::at(&data, cut.min(data.len())).unwrap();
            let outcome = Outcome::succeed(value, remainder, []);

            prop_assert!(outcome.has_value());
            prop_assert_eq!(*outcome.value(), value);
            prop_assert_eq!(outcome.remainder(), remainder);
        }

        #[test]
        fn fail_never_has_value(text in ".{0,40}", cut in 0usize..=40, message in "[a-z]{1,12}") {
            let data: Vec<char> = text.chars().collect();
            let remainder = CharCursor::at(&data, cut.min(data.len())).unwrap();
            let outcome: Outcome<CharCursor, i64> = Outcome::fail(remainder, [observation(&message)]);

            prop_assert!(!outcome.has_value());
            prop_assert_eq!(outcome.remainder(), remainder);
            prop_assert_eq!(outcome.observations().len(), 1);
        }

        #[test]
        fn window_is_the_last_ten_consumed(text in ".{0,40}", cut in 0usize..=40) {
            let data: Vec<char> = text.chars().collect();
            let position = cut.min(data.len());
            let outcome: Outcome<CharCursor, ()> =
                Outcome::fail(CharCursor::at(&data, position).unwrap(), []);

            let expected: String = data[position.saturating_sub(RECENTLY_CONSUMED_WINDOW)..position]
                .iter()
                .collect();
            prop_assert_eq!(outcome.recently_consumed(), expected);
        }
    }
}
