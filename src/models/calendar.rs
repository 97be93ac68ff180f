//! Weekly calendar and free-time templates.
//!
//! A [`WeeklyCalendar`] describes what a recurring week looks like: one
//! day window shared by all days, a per-weekday class schedule, a daily
//! break and optional fixed daily commitments (commute, meals). From it
//! the free time of each weekday is derived once, as a
//! [`FreeTimeTemplates`] set, and reused for every occurrence of that
//! weekday in the planning horizon.
//!
//! # Precedence
//! A time point is free iff it lies in the day window AND is not covered
//! by a class, the placed break, or a daily blocked slot.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::interval::{clamp, subtract_intervals, total_hours};
use super::weekday::DAYS_IN_CYCLE;
use super::{TimeInterval, WeekDay};

/// Class intervals for each weekday.
///
/// Intervals of a day are expected to be disjoint; see
/// [`validate_input`](crate::validation::validate_input).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassSchedule {
    days: [Vec<TimeInterval>; DAYS_IN_CYCLE],
}

impl ClassSchedule {
    /// Creates a schedule with no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the classes of `day` (sorted by start).
    pub fn with_classes(mut self, day: WeekDay, classes: Vec<TimeInterval>) -> Self {
        self.set_classes(day, classes);
        self
    }

    /// Replaces the classes of `day` (sorted by start).
    pub fn set_classes(&mut self, day: WeekDay, mut classes: Vec<TimeInterval>) {
        classes.sort_by(|a, b| a.start.total_cmp(&b.start));
        self.days[day.index()] = classes;
    }

    /// Classes on `day`.
    pub fn classes(&self, day: WeekDay) -> &[TimeInterval] {
        &self.days[day.index()]
    }

    /// Total class hours over the week.
    pub fn weekly_hours(&self) -> f64 {
        self.days.iter().map(|d| total_hours(d)).sum()
    }
}

/// Recurring weekly calendar.
///
/// # Example
///
/// ```
/// use u_studyplan::models::{TimeInterval, WeekDay, WeeklyCalendar};
///
/// let calendar = WeeklyCalendar::new(TimeInterval::new(8.0, 22.0))
///     .with_break(1.0)
///     .with_classes(WeekDay::Monday, vec![TimeInterval::new(9.0, 11.0)]);
///
/// let monday = calendar.free_blocks(WeekDay::Monday);
/// assert_eq!(monday.len(), 3); // 8-9, 11-14.5, 15.5-22
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyCalendar {
    /// Usable clock range on every day.
    pub window: TimeInterval,
    /// Daily break length (hours). Clamped to the window length on use.
    #[serde(default)]
    pub break_hours: f64,
    /// Per-weekday classes.
    #[serde(default)]
    pub classes: ClassSchedule,
    /// Commitments repeated on every weekday (commute, meals).
    #[serde(default)]
    pub daily_blocked: Vec<TimeInterval>,
}

impl WeeklyCalendar {
    /// Creates a calendar with no classes and no break.
    pub fn new(window: TimeInterval) -> Self {
        Self {
            window,
            break_hours: 0.0,
            classes: ClassSchedule::new(),
            daily_blocked: Vec::new(),
        }
    }

    /// Sets the daily break length (hours).
    pub fn with_break(mut self, hours: f64) -> Self {
        self.break_hours = hours;
        self
    }

    /// Sets the classes of one weekday.
    pub fn with_classes(mut self, day: WeekDay, classes: Vec<TimeInterval>) -> Self {
        self.classes.set_classes(day, classes);
        self
    }

    /// Replaces the whole class schedule.
    pub fn with_schedule(mut self, classes: ClassSchedule) -> Self {
        self.classes = classes;
        self
    }

    /// Adds a commitment repeated every day.
    pub fn with_daily_blocked(mut self, slot: TimeInterval) -> Self {
        self.daily_blocked.push(slot);
        self
    }

    /// Break length clamped to `[0, window length]`.
    pub fn effective_break_hours(&self) -> f64 {
        let hours = if self.break_hours.is_finite() {
            self.break_hours
        } else {
            0.0
        };
        clamp(hours, 0.0, self.window.duration())
    }

    /// Places the daily break.
    ///
    /// The break is centered on the window midpoint, then shifted (never
    /// shortened) to stay inside the window. Returns `None` for a zero
    /// break.
    pub fn placed_break(&self) -> Option<TimeInterval> {
        let len = self.effective_break_hours();
        let mut start = self.window.midpoint() - len / 2.0;
        let mut end = start + len;
        if start < self.window.start {
            start = self.window.start;
            end = start + len;
        }
        if end > self.window.end {
            end = self.window.end;
            start = end - len;
        }
        TimeInterval::try_new(start, end)
    }

    /// Free blocks of `day`: window minus classes, break and daily
    /// blocked slots.
    pub fn free_blocks(&self, day: WeekDay) -> Vec<TimeInterval> {
        let classes = self.classes.classes(day);
        let mut busy = Vec::with_capacity(classes.len() + self.daily_blocked.len() + 1);
        busy.extend_from_slice(classes);
        busy.extend_from_slice(&self.daily_blocked);
        busy.extend(self.placed_break());
        subtract_intervals(self.window, &busy)
    }

    /// Computes the free-block template of every weekday.
    ///
    /// # Panics
    /// Panics if the day window is empty, inverted or non-finite, which
    /// can only happen when the calendar was deserialized or built field
    /// by field; run [`crate::validation::validate_input`] first to get
    /// an error instead.
    pub fn templates(&self) -> FreeTimeTemplates {
        assert!(
            self.window.is_well_formed(),
            "day window [{}, {}) must have a finite start before its end",
            self.window.start,
            self.window.end
        );
        let templates = FreeTimeTemplates {
            blocks: WeekDay::ALL.map(|day| self.free_blocks(day)),
        };
        log::debug!(
            "free-time templates computed: {:.2} h/day on average",
            templates.average_daily_free()
        );
        templates
    }
}

/// Free blocks per weekday, computed once per planning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreeTimeTemplates {
    blocks: [Vec<TimeInterval>; DAYS_IN_CYCLE],
}

impl FreeTimeTemplates {
    /// Builds templates from precomputed blocks (in [`WeekDay::ALL`] order).
    pub fn from_blocks(blocks: [Vec<TimeInterval>; DAYS_IN_CYCLE]) -> Self {
        Self { blocks }
    }

    /// Free blocks of `day`, sorted and disjoint.
    pub fn blocks(&self, day: WeekDay) -> &[TimeInterval] {
        &self.blocks[day.index()]
    }

    /// Free hours on `day`.
    pub fn free_hours(&self, day: WeekDay) -> f64 {
        total_hours(self.blocks(day))
    }

    /// Mean free hours over the six weekdays.
    pub fn average_daily_free(&self) -> f64 {
        let total: f64 = WeekDay::ALL.iter().map(|&d| self.free_hours(d)).sum();
        total / DAYS_IN_CYCLE as f64
    }
}

/// A break length given as a range, resolved by seeded sampling.
///
/// The collaborator may know only a range for the daily break (e.g. 1-2 h).
/// Sampling happens before planning so the planner stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakRange {
    /// Lower bound (hours).
    pub min: f64,
    /// Upper bound (hours).
    pub max: f64,
}

impl BreakRange {
    /// Creates a range; bounds are reordered if given backwards.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Single-valued range.
    pub fn fixed(hours: f64) -> Self {
        Self::new(hours, hours)
    }

    /// Draws a value uniformly from `[min, max)`, reproducible per seed.
    ///
    /// Degenerate ranges return `min` without drawing.
    pub fn sample(&self, seed: u64) -> f64 {
        if (self.max - self.min).abs() < 1e-9 {
            return self.min;
        }
        let mut rng = StdRng::seed_from_u64(seed);
        self.min + rng.random::<f64>() * (self.max - self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: f64, end: f64) -> TimeInterval {
        TimeInterval::new(start, end)
    }

    #[test]
    fn test_break_centered() {
        let cal = WeeklyCalendar::new(iv(8.0, 22.0)).with_break(1.0);
        assert_eq!(cal.placed_break(), Some(iv(14.5, 15.5)));

        let free = cal.free_blocks(WeekDay::Monday);
        assert_eq!(free, vec![iv(8.0, 14.5), iv(15.5, 22.0)]);
        assert!((total_hours(&free) - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_break_zero_omitted() {
        let cal = WeeklyCalendar::new(iv(8.0, 22.0));
        assert!(cal.placed_break().is_none());
        assert_eq!(cal.free_blocks(WeekDay::Friday), vec![iv(8.0, 22.0)]);
    }

    #[test]
    fn test_break_clamped_to_window() {
        let cal = WeeklyCalendar::new(iv(8.0, 12.0)).with_break(10.0);
        assert!((cal.effective_break_hours() - 4.0).abs() < 1e-12);
        assert_eq!(cal.placed_break(), Some(iv(8.0, 12.0)));
        assert!(cal.free_blocks(WeekDay::Tuesday).is_empty());

        let negative = WeeklyCalendar::new(iv(8.0, 12.0)).with_break(-2.0);
        assert!(negative.placed_break().is_none());
    }

    #[test]
    fn test_classes_and_break() {
        let cal = WeeklyCalendar::new(iv(8.0, 22.0))
            .with_break(1.0)
            .with_classes(WeekDay::Wednesday, vec![iv(14.0, 16.0), iv(8.0, 10.0)]);

        // class 14-16 swallows the 14.5-15.5 break
        assert_eq!(
            cal.free_blocks(WeekDay::Wednesday),
            vec![iv(10.0, 14.0), iv(16.0, 22.0)]
        );
        // other days only lose the break
        assert_eq!(
            cal.free_blocks(WeekDay::Thursday),
            vec![iv(8.0, 14.5), iv(15.5, 22.0)]
        );
    }

    #[test]
    fn test_daily_blocked_applies_every_day() {
        let cal = WeeklyCalendar::new(iv(7.0, 21.0))
            .with_daily_blocked(iv(7.0, 8.0))
            .with_daily_blocked(iv(20.0, 21.0));
        for day in WeekDay::ALL {
            assert_eq!(cal.free_blocks(day), vec![iv(8.0, 20.0)]);
        }
    }

    #[test]
    fn test_templates_average() {
        let cal = WeeklyCalendar::new(iv(8.0, 20.0))
            .with_classes(WeekDay::Monday, vec![iv(8.0, 14.0)])
            .with_classes(WeekDay::Saturday, vec![iv(8.0, 20.0)]);
        let t = cal.templates();

        assert!((t.free_hours(WeekDay::Monday) - 6.0).abs() < 1e-12);
        assert!(t.blocks(WeekDay::Saturday).is_empty());
        // (6 + 12*4 + 0) / 6 = 9
        assert!((t.average_daily_free() - 9.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "day window")]
    fn test_templates_reject_inverted_window() {
        let json = r#"{"window":{"start":22.0,"end":8.0},"break_hours":1.0}"#;
        let cal: WeeklyCalendar = serde_json::from_str(json).unwrap();
        let _ = cal.templates();
    }

    #[test]
    fn test_class_schedule_sorted() {
        let schedule = ClassSchedule::new()
            .with_classes(WeekDay::Friday, vec![iv(15.0, 16.0), iv(9.0, 10.5)]);
        assert_eq!(schedule.classes(WeekDay::Friday)[0], iv(9.0, 10.5));
        assert!((schedule.weekly_hours() - 2.5).abs() < 1e-12);
        assert!(schedule.classes(WeekDay::Monday).is_empty());
    }

    #[test]
    fn test_break_range_sampling() {
        let range = BreakRange::new(2.0, 1.0);
        assert_eq!(range.min, 1.0);
        assert_eq!(range.max, 2.0);

        let a = range.sample(42);
        let b = range.sample(42);
        assert_eq!(a, b); // reproducible
        assert!((1.0..2.0).contains(&a));

        assert_eq!(BreakRange::fixed(1.5).sample(7), 1.5);
    }

    #[test]
    fn test_calendar_json() {
        let json = r#"{"window":{"start":8.0,"end":22.0},"break_hours":1.0}"#;
        let cal: WeeklyCalendar = serde_json::from_str(json).unwrap();
        assert_eq!(cal, WeeklyCalendar::new(iv(8.0, 22.0)).with_break(1.0));
    }
}
