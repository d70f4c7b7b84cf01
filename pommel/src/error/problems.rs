//! Non-fatal problem accumulation for best-effort interpolation.

use std::fmt;

/// Severity of a recorded problem.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    /// Informational; the value was handled but worth surfacing.
    Notice,
    /// The source failed and the literal value was kept.
    Warning,
}

/// A single recoverable problem encountered during transformation.
#[derive(Clone, Debug)]
pub struct Problem {
    severity: Severity,
    message: String,
    uri: Option<String>,
}

impl Problem {
    /// Severity of the problem.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// URI of the property the problem relates to, when known.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.uri {
            Some(uri) => write!(f, "{:?} at '{uri}': {}", self.severity, self.message),
            None => write!(f, "{:?}: {}", self.severity, self.message),
        }
    }
}

/// Accumulator for problems raised during a single build.
///
/// Returned alongside the best-effort result rather than aborting it.
#[derive(Debug, Default)]
pub struct Problems(Vec<Problem>);

impl Problems {
    /// Create an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a warning, also emitting it through `tracing`.
    pub fn warn(&mut self, message: impl Into<String>, uri: Option<&str>) {
        let message = message.into();
        tracing::warn!(uri, %message, "model problem");
        self.0.push(Problem {
            severity: Severity::Warning,
            message,
            uri: uri.map(str::to_owned),
        });
    }

    /// Record a notice.
    pub fn notice(&mut self, message: impl Into<String>, uri: Option<&str>) {
        self.0.push(Problem {
            severity: Severity::Notice,
            message: message.into(),
            uri: uri.map(str::to_owned),
        });
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded problems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the recorded problems in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Problems {
    type Item = &'a Problem;
    type IntoIter = std::slice::Iter<'a, Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
