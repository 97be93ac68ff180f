//! Exam model.
//!
//! An exam is the unit of study demand. Its identity is its position in
//! the input list; every downstream reference (quotas, slots, KPIs) uses
//! that index.

use serde::{Deserialize, Serialize};

use super::WeekDay;

/// Highest difficulty accepted by input validation.
pub const MAX_DIFFICULTY: u32 = 3;

/// An upcoming exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    /// Display name. Empty = unnamed.
    #[serde(default)]
    pub name: String,
    /// Difficulty (1 = easy .. [`MAX_DIFFICULTY`] = hard).
    pub difficulty: u32,
    /// Days until the exam; 0 means the exam is today.
    pub days_until: u32,
}

impl Exam {
    /// Creates an unnamed exam.
    pub fn new(difficulty: u32, days_until: u32) -> Self {
        Self {
            name: String::new(),
            difficulty,
            days_until,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Display label: the name, or `"Exam N"` (1-based) when unnamed.
    pub fn label(&self, index: usize) -> String {
        if self.name.is_empty() {
            format!("Exam {}", index + 1)
        } else {
            self.name.clone()
        }
    }

    /// Days used as the urgency denominator.
    ///
    /// An exam due today counts as half a day away, which keeps its
    /// urgency large but finite.
    #[inline]
    pub fn effective_days_until(&self) -> f64 {
        if self.days_until > 0 {
            f64::from(self.days_until)
        } else {
            0.5
        }
    }

    /// Urgency score: `difficulty / effective_days_until`.
    #[inline]
    pub fn urgency(&self) -> f64 {
        f64::from(self.difficulty) / self.effective_days_until()
    }

    /// Whether study can still be scheduled `offset` days from today.
    ///
    /// The exam day itself is included.
    #[inline]
    pub fn is_pending_at(&self, offset: u32) -> bool {
        offset <= self.days_until
    }

    /// Weekday on which the exam falls, counted from `current`.
    pub fn weekday(&self, current: WeekDay) -> WeekDay {
        current.after(self.days_until as usize)
    }
}
