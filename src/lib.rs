//! Weekly study-plan allocation.
//!
//! Turns a recurring class timetable and a list of upcoming exams into a
//! day-by-day study plan. The computation is a pure function of one
//! [`PlanRequest`](scheduler::PlanRequest): no I/O, no clock reads, no
//! randomness.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeInterval`, `WeekDay`, `Exam`,
//!   `WeeklyCalendar`, `FreeTimeTemplates`, `StudyPlan`, plus the
//!   interval algebra (`subtract_intervals`)
//! - **`dispatching`**: Urgency-based daily quotas (`DemandProfile`) and
//!   exam ordering rules (`RuleEngine`)
//! - **`scheduler`**: The greedy planner (`StudyPlanner`) and plan KPIs
//! - **`validation`**: Input integrity checks (window, break, classes,
//!   difficulty)
//!
//! # Pipeline
//!
//! ```text
//! WeeklyCalendar ──templates()──▶ FreeTimeTemplates ─┐
//!                                                    ├─▶ StudyPlanner ──▶ StudyPlan
//! Exams ──────────DemandProfile──▶ daily quotas ─────┘
//! ```

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{PlanError, PlanResult};
