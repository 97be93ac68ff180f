//! Greedy study planner and KPI evaluation.
//!
//! # Algorithm
//!
//! `StudyPlanner` packs each exam's fixed daily quota into the free time
//! of every day up to the exam, in priority order, first-fit. It is not
//! optimal, but it is fast, deterministic and easy to explain.
//!
//! # KPI
//!
//! `PlanKpi` reports assigned vs. target hours per exam, shortfall,
//! fill rate and per-day utilization.

mod kpi;
mod planner;

pub use kpi::PlanKpi;
pub use planner::{PlanRequest, StudyPlanner, MIN_SLOT_HOURS};
