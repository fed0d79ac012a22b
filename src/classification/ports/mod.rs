//! Port contracts for complaint classification.

pub mod classifier;

pub use classifier::ComplaintClassifier;
