//! Planner error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by [`StudyPlanner::try_plan`](crate::scheduler::StudyPlanner::try_plan).
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid planning request: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),
}

pub type PlanResult<T> = Result<T, PlanError>;

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exam, TimeInterval, WeeklyCalendar};
    use crate::scheduler::{PlanRequest, StudyPlanner};

    #[test]
    fn test_error_message_lists_problems() {
        let mut calendar = WeeklyCalendar::new(TimeInterval::new(8.0, 22.0));
        calendar.break_hours = -2.0;
        let request = PlanRequest::new(vec![Exam::new(5, 1)], calendar);

        let err = StudyPlanner::new().try_plan(&request).unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("invalid planning request: "));
        assert!(text.contains("Break length -2"));
        assert!(text.contains("Exam 1 has difficulty 5"));

        let PlanError::Invalid(errors) = err;
        assert_eq!(errors.len(), 2);
    }
}
