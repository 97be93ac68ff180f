//! Six-day cyclic week.
//!
//! Study plans only distinguish weekdays, not dates. The week is a fixed
//! cycle of six teaching days (Monday through Saturday) and every offset
//! is reduced modulo six, so offsets six days apart share a label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of days in the planning cycle.
pub const DAYS_IN_CYCLE: usize = 6;

/// A day in the six-day teaching week.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum WeekDay {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekDay {
    /// All days in cycle order.
    pub const ALL: [WeekDay; DAYS_IN_CYCLE] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
    ];

    /// Zero-based position in the cycle.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day at `index`, reduced modulo the cycle length.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % DAYS_IN_CYCLE]
    }

    /// Day reached `offset` days after this one.
    ///
    /// ```
    /// use u_studyplan::models::WeekDay;
    ///
    /// assert_eq!(WeekDay::Friday.after(2), WeekDay::Monday);
    /// assert_eq!(WeekDay::Monday.after(6), WeekDay::Monday);
    /// ```
    #[inline]
    pub fn after(self, offset: usize) -> Self {
        Self::from_index(self.index() + offset % DAYS_IN_CYCLE)
    }

    /// Next day in the cycle (Saturday wraps to Monday).
    pub fn succ(self) -> Self {
        self.after(1)
    }

    /// Three-letter label.
    pub fn short_name(self) -> &'static str {
        match self {
            WeekDay::Monday => "Mon",
            WeekDay::Tuesday => "Tue",
            WeekDay::Wednesday => "Wed",
            WeekDay::Thursday => "Thu",
            WeekDay::Friday => "Fri",
            WeekDay::Saturday => "Sat",
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
