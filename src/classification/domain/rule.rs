//! Keyword rule records.

use super::{
    ClassificationDomainError, ClassificationResult, ConfidenceScore, Department, Sentiment,
    Urgency,
};

/// One entry of an ordered keyword routing table.
///
/// A rule matches when the lowercased text contains any trigger as a
/// substring. Its output is fixed: confidence does not depend on how many
/// triggers matched.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationRule {
    triggers: Vec<String>,
    outcome: ClassificationResult,
}

impl ClassificationRule {
    /// Creates a rule from its triggers and fixed outcome.
    ///
    /// Triggers are trimmed and lowercased; blank triggers are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationDomainError::RuleWithoutTriggers`] when no
    /// usable trigger remains, since such a rule could never fire.
    pub fn new<I, S>(triggers: I, outcome: ClassificationResult) -> Result<Self, ClassificationDomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = normalize_triggers(triggers);
        if normalized.is_empty() {
            return Err(ClassificationDomainError::RuleWithoutTriggers(
                outcome.predicted_department().to_string(),
            ));
        }
        Ok(Self {
            triggers: normalized,
            outcome,
        })
    }

    /// Creates a rule for a built-in table whose outcome is already valid.
    ///
    /// Blank triggers are discarded as in [`ClassificationRule::new`]; a rule
    /// left without triggers never fires.
    #[must_use]
    pub fn fixed(triggers: &[&str], outcome: ClassificationResult) -> Self {
        Self {
            triggers: normalize_triggers(triggers),
            outcome,
        }
    }

    /// Convenience constructor for rule tables read from literals.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationDomainError`] when the confidence is out of
    /// range or no trigger is usable.
    pub fn keyword(
        triggers: &[&str],
        department: Department,
        confidence: f64,
        urgency: Urgency,
        keywords: &[&str],
        sentiment: Sentiment,
    ) -> Result<Self, ClassificationDomainError> {
        let outcome = ClassificationResult::new(
            department,
            ConfidenceScore::new(confidence)?,
            urgency,
            keywords.iter().map(|keyword| (*keyword).to_owned()).collect(),
            sentiment,
        );
        Self::new(triggers, outcome)
    }

    /// Returns the normalised trigger keywords.
    #[must_use]
    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// Returns the result emitted when this rule fires.
    #[must_use]
    pub const fn outcome(&self) -> &ClassificationResult {
        &self.outcome
    }

    /// Returns whether already-lowercased text fires this rule.
    #[must_use]
    pub fn matches(&self, lowercased_text: &str) -> bool {
        self.triggers
            .iter()
            .any(|trigger| lowercased_text.contains(trigger.as_str()))
    }
}

fn normalize_triggers<I, S>(triggers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    triggers
        .into_iter()
        .map(|trigger| trigger.as_ref().trim().to_lowercase())
        .filter(|trigger| !trigger.is_empty())
        .collect()
}
