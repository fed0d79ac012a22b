//! Classifier implementations.

pub mod keyword;

pub use keyword::{KeywordRuleClassifier, canonical_rules};
