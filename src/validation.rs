//! Input validation for planning requests.
//!
//! The planner is total over well-formed input; this module defines what
//! well-formed means and reports every violation at once. Detects:
//! - Inverted or non-finite day window
//! - Negative or non-finite break length
//! - Inverted or non-finite class / daily blocked intervals
//! - Overlapping classes on the same weekday
//! - Exam difficulty outside `1..=MAX_DIFFICULTY`

use std::fmt;

use crate::models::{TimeInterval, WeekDay, MAX_DIFFICULTY};
use crate::scheduler::PlanRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The day window is empty, inverted or non-finite.
    InvalidWindow,
    /// The break length is negative or non-finite.
    InvalidBreak,
    /// A class or blocked interval is empty, inverted or non-finite.
    InvalidInterval,
    /// Two classes on the same weekday overlap.
    OverlappingClasses,
    /// An exam difficulty is outside the accepted range.
    DifficultyOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a planning request.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(request: &PlanRequest) -> ValidationResult {
    let mut errors = Vec::new();
    let calendar = &request.calendar;

    if !calendar.window.is_well_formed() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWindow,
            format!(
                "Day window [{}, {}) must have a finite start before its end",
                calendar.window.start, calendar.window.end
            ),
        ));
    }

    if !calendar.break_hours.is_finite() || calendar.break_hours < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBreak,
            format!("Break length {} must be a non-negative number", calendar.break_hours),
        ));
    }

    for slot in &calendar.daily_blocked {
        if !slot.is_well_formed() {
            errors.push(invalid_interval("Daily blocked slot", slot));
        }
    }

    for day in WeekDay::ALL {
        let classes = calendar.classes.classes(day);
        let mut valid: Vec<&TimeInterval> = Vec::with_capacity(classes.len());
        for class in classes {
            if class.is_well_formed() {
                valid.push(class);
            } else {
                errors.push(invalid_interval(&format!("Class on {day}"), class));
            }
        }
        valid.sort_by(|a, b| a.start.total_cmp(&b.start));
        for pair in valid.windows(2) {
            if pair[0].overlaps(pair[1]) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingClasses,
                    format!("Classes {} and {} overlap on {day}", pair[0], pair[1]),
                ));
            }
        }
    }

    for (index, exam) in request.exams.iter().enumerate() {
        if !(1..=MAX_DIFFICULTY).contains(&exam.difficulty) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DifficultyOutOfRange,
                format!(
                    "{} has difficulty {}, expected 1..={MAX_DIFFICULTY}",
                    exam.label(index),
                    exam.difficulty
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        log::debug!("planning request rejected with {} problem(s)", errors.len());
        Err(errors)
    }
}

fn invalid_interval(what: &str, interval: &TimeInterval) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::InvalidInterval,
        format!(
            "{what} [{}, {}) must have a finite start before its end",
            interval.start, interval.end
        ),
    )
}
