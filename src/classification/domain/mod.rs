//! Domain model for complaint classification.
//!
//! These types carry no state beyond their values and perform no I/O; the
//! rule records are plain data evaluated by the adapters.

mod department;
mod error;
mod result;
mod rule;
mod signal;

pub use department::Department;
pub use error::{ClassificationDomainError, ParseDepartmentError};
pub use result::ClassificationResult;
pub use rule::ClassificationRule;
pub use signal::{ConfidenceScore, Sentiment, Urgency};
