//! Scalar triage signals emitted alongside a department.

use super::ClassificationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level severity estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    /// Can wait for routine scheduling.
    Low,
    /// Should be handled in the current work cycle.
    Medium,
    /// Needs prompt attention.
    High,
}

impl Urgency {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse tone of the complaint text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Appreciative or satisfied.
    Positive,
    /// Factual or mixed.
    Neutral,
    /// Distressed or dissatisfied.
    Negative,
}

/// Static confidence attached to a classification, within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceScore(f64);

impl ConfidenceScore {
    /// Confidence reported when no rule matched.
    pub const FALLBACK: Self = Self(0.60);

    /// Creates a validated confidence score.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationDomainError::ConfidenceOutOfRange`] when the
    /// value is NaN or lies outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, ClassificationDomainError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ClassificationDomainError::ConfidenceOutOfRange(value))
        }
    }

    /// Creates a score from a literal, for use in `const` items where an
    /// out-of-range value fails compilation.
    ///
    /// # Panics
    ///
    /// Panics when evaluated at run time with a value outside `[0, 1]`.
    #[must_use]
    pub const fn from_literal(value: f64) -> Self {
        assert!(
            value >= 0.0 && value <= 1.0,
            "confidence literal outside [0, 1]"
        );
        Self(value)
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ConfidenceScore {
    type Error = ClassificationDomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConfidenceScore> for f64 {
    fn from(score: ConfidenceScore) -> Self {
        score.0
    }
}

impl fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
