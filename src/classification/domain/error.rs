//! Error types for classification domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing classification values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClassificationDomainError {
    /// The confidence score lies outside the closed unit interval.
    #[error("confidence score {0} must lie within [0, 1]")]
    ConfidenceOutOfRange(f64),

    /// A rule was declared without any usable trigger keyword.
    #[error("classification rule for {0} has no trigger keywords")]
    RuleWithoutTriggers(String),
}

/// Error returned while parsing departments from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown department: {0}")]
pub struct ParseDepartmentError(pub String);
