//! Study-planning domain models.
//!
//! Provides the data types for a planning run: the inputs (exams,
//! weekly calendar) and the solution (study plan).
//!
//! # Domain Mappings
//!
//! | u-studyplan | Scheduling analogue |
//! |-------------|---------------------|
//! | Exam | Task with a due date |
//! | WeeklyCalendar | Resource calendar |
//! | FreeTimeTemplates | Availability windows |
//! | StudySlot | Assignment |
//! | StudyPlan | Schedule |

mod calendar;
mod exam;
mod interval;
mod plan;
mod weekday;

pub use calendar::{BreakRange, ClassSchedule, FreeTimeTemplates, WeeklyCalendar};
pub use exam::{Exam, MAX_DIFFICULTY};
pub use interval::{clamp, subtract_intervals, total_hours, ClockTime, TimeInterval};
pub use plan::{DayPlan, StudyPlan, StudySlot};
pub use weekday::{WeekDay, DAYS_IN_CYCLE};
