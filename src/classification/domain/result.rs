//! Structured classifier output.

use super::{ConfidenceScore, Department, Sentiment, Urgency};
use serde::{Deserialize, Serialize};

/// Department, urgency and supporting signals inferred from complaint text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    predicted_department: Department,
    confidence_score: ConfidenceScore,
    urgency: Urgency,
    keywords: Vec<String>,
    sentiment: Sentiment,
}

impl ClassificationResult {
    /// Creates a classification result.
    #[must_use]
    pub const fn new(
        predicted_department: Department,
        confidence_score: ConfidenceScore,
        urgency: Urgency,
        keywords: Vec<String>,
        sentiment: Sentiment,
    ) -> Self {
        Self {
            predicted_department,
            confidence_score,
            urgency,
            keywords,
            sentiment,
        }
    }

    /// Returns the default classification used when no rule matches.
    #[must_use]
    pub const fn fallback() -> Self {
        Self::new(
            Department::Other,
            ConfidenceScore::FALLBACK,
            Urgency::Low,
            Vec::new(),
            Sentiment::Neutral,
        )
    }

    /// Returns the department the complaint is routed to.
    #[must_use]
    pub const fn predicted_department(&self) -> Department {
        self.predicted_department
    }

    /// Returns the static confidence of the matching rule.
    #[must_use]
    pub const fn confidence_score(&self) -> ConfidenceScore {
        self.confidence_score
    }

    /// Returns the urgency estimate.
    #[must_use]
    pub const fn urgency(&self) -> Urgency {
        self.urgency
    }

    /// Returns the keywords emitted by the matching rule, in rule order.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns the sentiment estimate.
    #[must_use]
    pub const fn sentiment(&self) -> Sentiment {
        self.sentiment
    }
}
