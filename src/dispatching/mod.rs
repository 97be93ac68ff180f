//! Exam prioritization and study demand.
//!
//! Two questions are answered here before any time is packed:
//!
//! - **How much** to study per day for each exam ([`DemandProfile`]):
//!   exam urgency is normalized into a share of the average free day.
//! - **In which order** exams compete for a day's free time
//!   ([`RuleEngine`] over [`ExamRule`]s). The default order is
//!   earliest exam first, ties by input position.
//!
//! # Usage
//!
//! ```
//! use u_studyplan::dispatching::{rules, RuleEngine};
//! use u_studyplan::models::Exam;
//!
//! let exams = vec![Exam::new(1, 9), Exam::new(3, 2), Exam::new(2, 2)];
//! let order = RuleEngine::new().with_rule(rules::EarliestExam).sort_indices(&exams);
//! assert_eq!(order, vec![1, 2, 0]);
//! ```

mod demand;
mod engine;
pub mod rules;

pub use demand::DemandProfile;
pub use engine::RuleEngine;

use crate::models::Exam;
use std::fmt::Debug;

/// Score returned by an exam rule.
///
/// Lower scores = higher priority (packed first).
pub type RuleScore = f64;

/// A rule that ranks exams competing for the same day.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait ExamRule: Send + Sync + Debug {
    /// Rule name (e.g., "EARLIEST").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of an exam.
    fn evaluate(&self, exam: &Exam) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
