//! Study plan (solution) model.
//!
//! A plan lists, for each day offset of the horizon, the study slots
//! assigned to exams. It also carries the inputs that produced it
//! (free-time templates, quotas, exam weekdays) so a renderer needs
//! nothing else.

use serde::{Deserialize, Serialize};

use super::{FreeTimeTemplates, TimeInterval, WeekDay};

/// One study slot: an interval reserved for one exam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudySlot {
    /// Reserved clock interval.
    pub interval: TimeInterval,
    /// Index of the exam in the input list.
    pub exam_index: usize,
}

impl StudySlot {
    /// Creates a new slot.
    pub fn new(interval: TimeInterval, exam_index: usize) -> Self {
        Self {
            interval,
            exam_index,
        }
    }

    /// Slot length (hours).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.interval.duration()
    }
}

/// Slots for one day offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Days from today (0 = today).
    pub offset: u32,
    /// Weekday of this offset.
    pub weekday: WeekDay,
    /// Slots sorted by start time.
    pub slots: Vec<StudySlot>,
}

impl DayPlan {
    /// Creates an empty day.
    pub fn new(offset: u32, weekday: WeekDay) -> Self {
        Self {
            offset,
            weekday,
            slots: Vec::new(),
        }
    }

    /// Hours assigned to `exam_index` on this day.
    pub fn hours_for_exam(&self, exam_index: usize) -> f64 {
        self.slots
            .iter()
            .filter(|s| s.exam_index == exam_index)
            .map(StudySlot::duration)
            .sum()
    }

    /// Hours assigned to all exams on this day.
    pub fn assigned_hours(&self) -> f64 {
        self.slots.iter().map(StudySlot::duration).sum()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots with back-to-back slots of the same exam joined.
    ///
    /// A presentation view; `slots` itself is left as produced.
    pub fn merged_slots(&self) -> Vec<StudySlot> {
        let mut merged: Vec<StudySlot> = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            if let Some(last) = merged.last_mut() {
                if last.exam_index == slot.exam_index
                    && (last.interval.end - slot.interval.start).abs() < 1e-6
                {
                    last.interval.end = slot.interval.end;
                    continue;
                }
            }
            merged.push(*slot);
        }
        merged
    }
}

/// A complete study plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Weekday the plan starts on (offset 0).
    pub current_day: WeekDay,
    /// Free blocks per weekday.
    pub templates: FreeTimeTemplates,
    /// Daily study target per exam (hours), by exam index.
    pub quotas: Vec<f64>,
    /// Weekday each exam falls on, by exam index.
    pub exam_weekdays: Vec<WeekDay>,
    /// Day plans for offsets `0..=max(days_until)`.
    pub days: Vec<DayPlan>,
}

impl StudyPlan {
    /// Day plan at `offset`.
    pub fn day(&self, offset: u32) -> Option<&DayPlan> {
        self.days.get(offset as usize)
    }

    /// Number of planned days.
    pub fn horizon(&self) -> usize {
        self.days.len()
    }

    /// Total hours assigned to `exam_index` across the horizon.
    pub fn total_hours_for_exam(&self, exam_index: usize) -> f64 {
        self.days.iter().map(|d| d.hours_for_exam(exam_index)).sum()
    }

    /// Total hours assigned across the horizon.
    pub fn total_assigned_hours(&self) -> f64 {
        self.days.iter().map(DayPlan::assigned_hours).sum()
    }

    /// Number of slots across the horizon.
    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|d| d.slots.len()).sum()
    }

    /// All slots of `exam_index`, paired with their day offset.
    pub fn slots_for_exam(&self, exam_index: usize) -> Vec<(u32, &StudySlot)> {
        self.days
            .iter()
            .flat_map(|d| {
                d.slots
                    .iter()
                    .filter(move |s| s.exam_index == exam_index)
                    .map(move |s| (d.offset, s))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(start: f64, end: f64, exam: usize) -> StudySlot {
        StudySlot::new(TimeInterval::new(start, end), exam)
    }

    fn sample_plan() -> StudyPlan {
        let mut d0 = DayPlan::new(0, WeekDay::Friday);
        d0.slots = vec![slot(8.0, 10.0, 0), slot(10.0, 11.0, 0), slot(11.0, 12.5, 1)];
        let mut d1 = DayPlan::new(1, WeekDay::Saturday);
        d1.slots = vec![slot(9.0, 11.0, 1)];
        StudyPlan {
            current_day: WeekDay::Friday,
            quotas: vec![3.0, 1.5],
            exam_weekdays: vec![WeekDay::Friday, WeekDay::Saturday],
            days: vec![d0, d1],
            ..Default::default()
        }
    }

    #[test]
    fn test_day_hours() {
        let plan = sample_plan();
        let d0 = plan.day(0).unwrap();
        assert!((d0.hours_for_exam(0) - 3.0).abs() < 1e-12);
        assert!((d0.hours_for_exam(1) - 1.5).abs() < 1e-12);
        assert!((d0.assigned_hours() - 4.5).abs() < 1e-12);
        assert!(plan.day(5).is_none());
    }

    #[test]
    fn test_plan_totals() {
        let plan = sample_plan();
        assert_eq!(plan.horizon(), 2);
        assert_eq!(plan.slot_count(), 4);
        assert!((plan.total_hours_for_exam(1) - 3.5).abs() < 1e-12);
        assert!((plan.total_assigned_hours() - 6.5).abs() < 1e-12);
    }

    #[test]
    fn test_slots_for_exam() {
        let plan = sample_plan();
        let slots = plan.slots_for_exam(1);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].0, 0);
        assert_eq!(slots[1].0, 1);
    }

    #[test]
    fn test_merged_slots() {
        let plan = sample_plan();
        let merged = plan.day(0).unwrap().merged_slots();
        assert_eq!(merged, vec![slot(8.0, 11.0, 0), slot(11.0, 12.5, 1)]);
        // stored slots untouched
        assert_eq!(plan.day(0).unwrap().slots.len(), 3);
    }

    #[test]
    fn test_empty_day() {
        let day = DayPlan::new(3, WeekDay::Monday);
        assert!(day.is_empty());
        assert_eq!(day.assigned_hours(), 0.0);
        assert!(day.merged_slots().is_empty());
    }
}
