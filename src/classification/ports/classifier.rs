//! Classifier port.

use crate::classification::domain::ClassificationResult;

/// Infers routing signals from complaint text.
///
/// Implementations must be total, deterministic and free of side effects:
/// the same text always yields the same result and no input is an error.
pub trait ComplaintClassifier: Send + Sync {
    /// Classifies free text, degrading to a default result when nothing
    /// matches.
    fn classify(&self, text: &str) -> ClassificationResult;
}
