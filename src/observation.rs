use crate::ConstructionError;
use crate::cursor::Cursor;
use std::fmt;

/// How serious an observation is
///
/// Only `Error` changes behaviour (see `Outcome::errors`); the other levels are
/// carried along for whoever renders the diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Anything that may name an expectation; `None` entries are dropped
pub trait IntoExpectation {
    fn into_expectation(self) -> Option<String>;
}

impl IntoExpectation for &str {
    fn into_expectation(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoExpectation for String {
    fn into_expectation(self) -> Option<String> {
        Some(self)
    }
}

impl IntoExpectation for &String {
    fn into_expectation(self) -> Option<String> {
        Some(self.clone())
    }
}

impl<E: IntoExpectation> IntoExpectation for Option<E> {
    fn into_expectation(self) -> Option<String> {
        self.and_then(IntoExpectation::into_expectation)
    }
}

/// One diagnostic record attached to a parse attempt
///
/// By default an observation has no position of its own and is reported at the
/// remainder of the outcome carrying it. A positioned observation (see
/// [`Observation::at`] and [`Observation::detach`]) can be compared and reported
/// on its own, e.g. to pick the deepest failure among alternatives.
#[derive(Debug, Clone, Eq)]
pub struct Observation {
    severity: Severity,
    message: String,
    /// Labels of what was expected, first occurrence order, no duplicates
    expectations: Vec<String>,
    position: Option<usize>,
}

impl Observation {
    /// Create an error observation
    ///
    /// Fails if `message` is empty or whitespace only.
    ///
    /// ```
    /// use parsicore::Observation;
    ///
    /// let observation = Observation::new("unexpected 'x'", [None, Some("digit"), None, Some("')'")]).unwrap();
    /// assert_eq!(observation.expectations(), ["digit", "')'"]);
    /// assert!(Observation::new("  ", ["digit"]).is_err());
    /// ```
    pub fn new<M, I>(message: M, expectations: I) -> Result<Self, ConstructionError>
    where
        M: Into<String>,
        I: IntoIterator,
        I::Item: IntoExpectation,
    {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ConstructionError::EmptyMessage);
        }

        let mut labels: Vec<String> = Vec::new();
        for label in expectations
            .into_iter()
            .filter_map(IntoExpectation::into_expectation)
        {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }

        Ok(Observation {
            severity: Severity::Error,
            message,
            expectations: labels,
            position: None,
        })
    }

    pub fn warning<M, I>(message: M, expectations: I) -> Result<Self, ConstructionError>
    where
        M: Into<String>,
        I: IntoIterator,
        I::Item: IntoExpectation,
    {
        Ok(Self::new(message, expectations)?.with_severity(Severity::Warning))
    }

    pub fn info<M, I>(message: M, expectations: I) -> Result<Self, ConstructionError>
    where
        M: Into<String>,
        I: IntoIterator,
        I::Item: IntoExpectation,
    {
        Ok(Self::new(message, expectations)?.with_severity(Severity::Info))
    }

    pub fn with_severity(self, severity: Severity) -> Self {
        Observation { severity, ..self }
    }

    /// Pin this observation to an offset in the source
    pub fn at(self, position: usize) -> Self {
        Observation {
            position: Some(position),
            ..self
        }
    }

    /// Pin this observation to the offset of `remainder`, unless it already has one
    pub fn detach<'code, C: Cursor<'code>>(self, remainder: &C) -> Self {
        match self.position {
            Some(_) => self,
            None => self.at(remainder.position()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expectations(&self) -> &[String] {
        &self.expectations
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Expectations compare as a set, their order only matters for display
impl PartialEq for Observation {
    fn eq(&self, other: &Self) -> bool {
        self.severity == other.severity
            && self.message == other.message
            && self.position == other.position
            && self.expectations.len() == other.expectations.len()
            && self
                .expectations
                .iter()
                .all(|label| other.expectations.contains(label))
    }
}

/// Prints the message; the alternate form `{:#}` appends the expectations
impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if f.alternate() {
            if let Some((last, rest)) = self.expectations.split_last() {
                write!(f, " (expected ")?;
                if !rest.is_empty() {
                    write!(f, "{} or ", rest.join(", "))?;
                }
                write!(f, "{})", last)?;
            }
        }
        Ok(())
    }
}

/// Pick the positioned observation that made it furthest into the input
///
/// Unpositioned observations are ignored; on a tie the first one wins.
pub fn furthest<'a, I>(observations: I) -> Option<&'a Observation>
where
    I: IntoIterator<Item = &'a Observation>,
{
    observations
        .into_iter()
        .filter(|observation| observation.position.is_some())
        .fold(None, |best: Option<&'a Observation>, candidate| match best {
            Some(best) if best.position >= candidate.position => Some(best),
            _ => Some(candidate),
        })
}
