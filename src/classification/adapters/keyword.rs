//! First-match keyword rule classifier.

use crate::classification::{
    domain::{
        ClassificationResult, ClassificationRule, ConfidenceScore, Department, Sentiment,
        Urgency,
    },
    ports::ComplaintClassifier,
};

/// Evaluates an ordered rule table against lowercased text.
///
/// The first rule with a matching trigger wins, so table order encodes topic
/// priority: water triggers are checked before general infrastructure ones.
///
/// # Examples
///
/// ```
/// use grievance::classification::adapters::KeywordRuleClassifier;
/// use grievance::classification::domain::{Department, Urgency};
/// use grievance::classification::ports::ComplaintClassifier;
///
/// let classifier = KeywordRuleClassifier::default();
/// let result = classifier.classify("No water supply for 2 days in our sector");
/// assert_eq!(result.predicted_department(), Department::WaterSupply);
/// assert_eq!(result.urgency(), Urgency::High);
/// ```
#[derive(Debug, Clone)]
pub struct KeywordRuleClassifier {
    rules: Vec<ClassificationRule>,
    fallback: ClassificationResult,
}

impl KeywordRuleClassifier {
    /// Creates a classifier over a caller-supplied rule table.
    #[must_use]
    pub const fn with_rules(rules: Vec<ClassificationRule>) -> Self {
        Self {
            rules,
            fallback: ClassificationResult::fallback(),
        }
    }

    /// Returns the rule table in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }
}

impl Default for KeywordRuleClassifier {
    fn default() -> Self {
        Self::with_rules(canonical_rules())
    }
}

impl ComplaintClassifier for KeywordRuleClassifier {
    fn classify(&self, text: &str) -> ClassificationResult {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or_else(|| self.fallback.clone(), |rule| rule.outcome().clone())
    }
}

const WATER_CONFIDENCE: ConfidenceScore = ConfidenceScore::from_literal(0.89);
const ROADS_CONFIDENCE: ConfidenceScore = ConfidenceScore::from_literal(0.94);
const POWER_CONFIDENCE: ConfidenceScore = ConfidenceScore::from_literal(0.91);
const WASTE_CONFIDENCE: ConfidenceScore = ConfidenceScore::from_literal(0.85);

fn outcome(
    department: Department,
    confidence: ConfidenceScore,
    urgency: Urgency,
    keywords: &[&str],
    sentiment: Sentiment,
) -> ClassificationResult {
    ClassificationResult::new(
        department,
        confidence,
        urgency,
        keywords.iter().map(|keyword| (*keyword).to_owned()).collect(),
        sentiment,
    )
}

/// Builds the canonical civic routing table, in evaluation order.
#[must_use]
pub fn canonical_rules() -> Vec<ClassificationRule> {
    vec![
        ClassificationRule::fixed(
            &["water", "leak", "pipe"],
            outcome(
                Department::WaterSupply,
                WATER_CONFIDENCE,
                Urgency::High,
                &["water", "pipe", "leak"],
                Sentiment::Negative,
            ),
        ),
        ClassificationRule::fixed(
            &["road", "pothole", "bridge"],
            outcome(
                Department::PublicWorks,
                ROADS_CONFIDENCE,
                Urgency::High,
                &["pothole", "road"],
                Sentiment::Negative,
            ),
        ),
        ClassificationRule::fixed(
            &["electric", "power", "light"],
            outcome(
                Department::Electricity,
                POWER_CONFIDENCE,
                Urgency::Medium,
                &["power", "light"],
                Sentiment::Neutral,
            ),
        ),
        ClassificationRule::fixed(
            &["garbage", "waste", "smell"],
            outcome(
                Department::Environment,
                WASTE_CONFIDENCE,
                Urgency::Medium,
                &["garbage", "waste"],
                Sentiment::Negative,
            ),
        ),
    ]
}
