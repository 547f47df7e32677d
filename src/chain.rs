use crate::observation::Observation;
use crate::outcome::Outcome;

/// Continue with `next` only if `outcome` produced a value
///
/// On failure `next` is never invoked: the failure is re-typed with its
/// remainder and observations untouched, so later steps stop the instant an
/// earlier one fails without losing where and why it failed.
///
/// ```
/// use parsicore::{ByteCursor, Cursor, Outcome, on_success};
///
/// let data = b"12";
/// let first = Outcome::succeed(1u8, ByteCursor::new(data).next(), []);
/// let both = on_success(first, |first| {
///     Outcome::succeed((*first.value(), 2u8), first.remainder().next(), [])
/// });
/// assert_eq!(*both.value(), (1, 2));
/// ```
pub fn on_success<C, T, U, F>(outcome: Outcome<C, T>, next: F) -> Outcome<C, U>
where
    C: Copy,
    F: FnOnce(Outcome<C, T>) -> Outcome<C, U>,
{
    match outcome {
        succeeded @ Outcome::Succeeded { .. } => next(succeeded),
        Outcome::Failed {
            remainder,
            observations,
        } => Outcome::Failed {
            remainder,
            observations,
        },
    }
}

/// Give `next` a chance to recover if `outcome` failed
///
/// `next` receives the failed outcome, whose remainder can be used to retry
/// from the same cursor. A successful outcome is returned unchanged.
pub fn on_failure<C, T, F>(outcome: Outcome<C, T>, next: F) -> Outcome<C, T>
where
    C: Copy,
    F: FnOnce(Outcome<C, T>) -> Outcome<C, T>,
{
    if outcome.has_value() {
        outcome
    } else {
        next(outcome)
    }
}

impl<C: Copy, T> Outcome<C, T> {
    /// Method form of [`on_success`]
    pub fn on_success<U, F>(self, next: F) -> Outcome<C, U>
    where
        F: FnOnce(Self) -> Outcome<C, U>,
    {
        on_success(self, next)
    }

    /// Method form of [`on_failure`]
    pub fn on_failure<F>(self, next: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        on_failure(self, next)
    }

    /// Transform the value, keeping remainder and observations
    pub fn map<U, F>(self, f: F) -> Outcome<C, U>
    where
        F: FnOnce(T) -> U,
    {
        on_success(self, |succeeded| match succeeded {
            Outcome::Succeeded {
                value,
                remainder,
                observations,
            } => Outcome::Succeeded {
                value: f(value),
                remainder,
                observations,
            },
            Outcome::Failed {
                remainder,
                observations,
            } => Outcome::Failed {
                remainder,
                observations,
            },
        })
    }

    /// Derive an outcome carrying one more observation
    pub fn with_observation(self, observation: Observation) -> Self {
        match self {
            Outcome::Succeeded {
                value,
                remainder,
                mut observations,
            } => {
                observations.push(observation);
                Outcome::Succeeded {
                    value,
                    remainder,
                    observations,
                }
            }
            Outcome::Failed {
                remainder,
                mut observations,
            } => {
                observations.push(observation);
                Outcome::Failed {
                    remainder,
                    observations,
                }
            }
        }
    }
}
