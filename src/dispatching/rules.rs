//! Built-in exam rules.
//!
//! # Score Convention
//! All rules return lower scores for exams that should be packed first.

use super::{ExamRule, RuleScore};
use crate::models::Exam;

/// Earliest exam first.
///
/// Ranks by days remaining. This is the planner's default order: the
/// exam closest in time gets first pick of each day's free blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarliestExam;

impl ExamRule for EarliestExam {
    fn name(&self) -> &'static str {
        "EARLIEST"
    }

    fn evaluate(&self, exam: &Exam) -> RuleScore {
        f64::from(exam.days_until)
    }

    fn description(&self) -> &'static str {
        "Earliest Exam First"
    }
}

/// Most urgent first.
///
/// Ranks by `difficulty / effective_days_until`, highest first, so a hard
/// exam a few days out can precede an easy one due tomorrow.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostUrgent;

impl ExamRule for MostUrgent {
    fn name(&self) -> &'static str {
        "URGENCY"
    }

    fn evaluate(&self, exam: &Exam) -> RuleScore {
        -exam.urgency()
    }

    fn description(&self) -> &'static str {
        "Most Urgent First"
    }
}

/// Hardest exam first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hardest;

impl ExamRule for Hardest {
    fn name(&self) -> &'static str {
        "HARDEST"
    }

    fn evaluate(&self, exam: &Exam) -> RuleScore {
        -f64::from(exam.difficulty)
    }

    fn description(&self) -> &'static str {
        "Hardest Exam First"
    }
}
