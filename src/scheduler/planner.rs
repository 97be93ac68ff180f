//! Greedy day-by-day study planner.
//!
//! # Algorithm
//!
//! 1. Derive the free-time template of each weekday (once).
//! 2. Derive each exam's daily quota (once).
//! 3. Order exams with the rule engine (default: earliest exam first,
//!    ties by input position).
//! 4. For each day offset `0..=max(days_until)`:
//!    - clone the template of that offset's weekday into a fresh pool,
//!    - for each exam still pending that day, first-fit its quota into
//!      the pool in ascending time order, then remove the taken time so
//!      later exams see only what is left,
//!    - sort the day's slots by start.
//!
//! Unused capacity is not carried over to later days, and an exam that
//! finds the pool empty is skipped for that day.
//!
//! # Complexity
//! O(d * n * b) where d = horizon days, n = exams, b = free blocks/day.

use serde::{Deserialize, Serialize};

use crate::dispatching::{DemandProfile, ExamRule, RuleEngine};
use crate::error::{PlanError, PlanResult};
use crate::models::{
    subtract_intervals, total_hours, DayPlan, Exam, FreeTimeTemplates, StudyPlan, StudySlot,
    TimeInterval, WeekDay, WeeklyCalendar,
};
use crate::validation::validate_input;

/// Shortest slot the planner will emit: one minute.
pub const MIN_SLOT_HOURS: f64 = 1.0 / 60.0;

/// Input bundle for one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Exams to prepare for. Position = exam identity.
    pub exams: Vec<Exam>,
    /// Recurring weekly calendar.
    pub calendar: WeeklyCalendar,
    /// Weekday of offset 0.
    #[serde(default)]
    pub current_day: WeekDay,
}

impl PlanRequest {
    /// Creates a request starting on Monday.
    pub fn new(exams: Vec<Exam>, calendar: WeeklyCalendar) -> Self {
        Self {
            exams,
            calendar,
            current_day: WeekDay::Monday,
        }
    }

    /// Sets the weekday of offset 0.
    pub fn with_current_day(mut self, day: WeekDay) -> Self {
        self.current_day = day;
        self
    }

    /// Last day offset of the horizon, `None` without exams.
    pub fn last_offset(&self) -> Option<u32> {
        self.exams.iter().map(|e| e.days_until).max()
    }
}

/// Greedy, priority-ordered study planner.
///
/// # Example
///
/// ```
/// use u_studyplan::models::{Exam, TimeInterval, WeekDay, WeeklyCalendar};
/// use u_studyplan::scheduler::{PlanRequest, StudyPlanner};
///
/// let calendar = WeeklyCalendar::new(TimeInterval::new(8.0, 22.0)).with_break(1.0);
/// let request = PlanRequest::new(vec![Exam::new(3, 1), Exam::new(1, 10)], calendar)
///     .with_current_day(WeekDay::Wednesday);
///
/// let plan = StudyPlanner::new().plan(&request);
/// assert_eq!(plan.horizon(), 11);
/// assert_eq!(plan.exam_weekdays[0], WeekDay::Thursday);
/// ```
#[derive(Debug, Clone)]
pub struct StudyPlanner {
    rule_engine: RuleEngine,
    min_slot_hours: f64,
}

impl StudyPlanner {
    /// Creates a planner with the default order and a one-minute
    /// minimum slot.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::earliest_first(),
            min_slot_hours: MIN_SLOT_HOURS,
        }
    }

    /// Replaces the exam order with a single rule (ties by position).
    pub fn with_rule<R: ExamRule + 'static>(mut self, rule: R) -> Self {
        self.rule_engine = RuleEngine::new().with_rule(rule);
        self
    }

    /// Replaces the exam order with a rule engine.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Sets the shortest slot worth emitting (hours, floored at 0).
    pub fn with_min_slot_hours(mut self, hours: f64) -> Self {
        self.min_slot_hours = hours.max(0.0);
        self
    }

    /// Validates the request, then plans it.
    pub fn try_plan(&self, request: &PlanRequest) -> PlanResult<StudyPlan> {
        validate_input(request).map_err(PlanError::Invalid)?;
        Ok(self.plan(request))
    }

    /// Plans a request. Total over well-formed input.
    ///
    /// # Panics
    /// Panics if the calendar's day window is empty, inverted or
    /// non-finite; use [`StudyPlanner::try_plan`] for untrusted input.
    pub fn plan(&self, request: &PlanRequest) -> StudyPlan {
        let templates = request.calendar.templates();
        let demand = DemandProfile::calculate(&request.exams, &templates);
        self.plan_with_demand(request, templates, &demand)
    }

    /// Plans a request against precomputed templates and demand.
    pub fn plan_with_demand(
        &self,
        request: &PlanRequest,
        templates: FreeTimeTemplates,
        demand: &DemandProfile,
    ) -> StudyPlan {
        let exams = &request.exams;
        let order = self.rule_engine.sort_indices(exams);

        let days: Vec<DayPlan> = match request.last_offset() {
            Some(last) => (0..=last)
                .map(|offset| {
                    let weekday = request.current_day.after(offset as usize);
                    self.plan_day(offset, weekday, templates.blocks(weekday), exams, &order, demand)
                })
                .collect(),
            None => Vec::new(),
        };

        let plan = StudyPlan {
            current_day: request.current_day,
            quotas: demand.quotas.clone(),
            exam_weekdays: exams.iter().map(|e| e.weekday(request.current_day)).collect(),
            templates,
            days,
        };

        log::info!(
            "study plan: {} exams over {} days, {} slots, {:.2} h assigned",
            exams.len(),
            plan.horizon(),
            plan.slot_count(),
            plan.total_assigned_hours()
        );
        plan
    }

    /// Packs one day offset.
    fn plan_day(
        &self,
        offset: u32,
        weekday: WeekDay,
        template: &[TimeInterval],
        exams: &[Exam],
        order: &[usize],
        demand: &DemandProfile,
    ) -> DayPlan {
        let mut pool = template.to_vec();
        let mut day = DayPlan::new(offset, weekday);

        for &exam_index in order {
            if !exams[exam_index].is_pending_at(offset) {
                continue;
            }
            let quota = demand.quota(exam_index);
            let taken = self.first_fit(&pool, quota);
            let assigned = total_hours(&taken);
            log::trace!(
                "day +{offset} ({weekday}): exam {exam_index} took {assigned:.2}/{quota:.2} h"
            );
            if assigned + 1e-9 < quota {
                log::debug!(
                    "day +{offset} ({weekday}): exam {exam_index} short by {:.2} h",
                    quota - assigned
                );
            }
            if taken.is_empty() {
                continue;
            }

            pool = pool
                .iter()
                .flat_map(|block| subtract_intervals(*block, &taken))
                .collect();
            day.slots
                .extend(taken.into_iter().map(|iv| StudySlot::new(iv, exam_index)));
        }

        day.slots
            .sort_by(|a, b| a.interval.start.total_cmp(&b.interval.start));
        log::debug!(
            "day +{offset} ({weekday}): {} slots, {:.2}/{:.2} h used",
            day.slots.len(),
            day.assigned_hours(),
            total_hours(template)
        );
        day
    }

    /// Takes up to `hours` from the front of each block in order.
    ///
    /// Segments shorter than the minimum slot are neither emitted nor
    /// counted against the need.
    fn first_fit(&self, pool: &[TimeInterval], hours: f64) -> Vec<TimeInterval> {
        let mut needs = hours;
        let mut taken = Vec::new();

        for block in pool {
            if needs <= 0.0 {
                break;
            }
            let avail = block.duration();
            let take = avail.min(needs);
            if take < self.min_slot_hours {
                continue;
            }
            let end = if needs >= avail {
                block.end
            } else {
                block.start + take
            };
            if let Some(segment) = TimeInterval::try_new(block.start, end) {
                taken.push(segment);
                needs -= take;
            }
        }
        taken
    }
}

impl Default for StudyPlanner {
    fn default() -> Self {
        Self::new()
    }
}
