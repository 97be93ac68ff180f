//! Rule engine for exam ordering.
//!
//! Rules are applied in sequence: the next rule is consulted only when
//! the previous one ties. When every rule ties, input position decides,
//! so the resulting order is always deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, ExamRule, RuleScore};
use crate::models::Exam;

/// A composable rule engine for exam prioritization.
///
/// An engine without rules keeps input order.
///
/// # Example
/// ```
/// use u_studyplan::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::EarliestExam)
///     .with_rule(rules::Hardest);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn ExamRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// The planner's default order: earliest exam first.
    pub fn earliest_first() -> Self {
        Self::new().with_rule(rules::EarliestExam)
    }

    /// Appends a rule; later rules only break ties of earlier ones.
    pub fn with_rule<R: ExamRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Number of configured rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Sorts exams by priority (highest priority first).
    ///
    /// Returns indices into `exams`. Full ties keep input order.
    pub fn sort_indices(&self, exams: &[Exam]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..exams.len()).collect();
        // stable sort: equal exams stay in input order
        indices.sort_by(|&a, &b| self.compare(&exams[a], &exams[b]));
        indices
    }

    /// Evaluates a single exam and returns the score of each rule.
    pub fn evaluate(&self, exam: &Exam) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(exam)).collect()
    }

    fn compare(&self, a: &Exam, b: &Exam) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a);
            let score_b = rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::earliest_first()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
