//! Study plan quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned hours | Σ slot hours per exam over the horizon |
//! | Target hours | quota × days the exam is pending |
//! | Shortfall | max(0, target − assigned) per exam |
//! | Fill rate | Σ assigned / Σ target |
//! | Day utilization | assigned / free hours, per day offset |

use crate::models::{Exam, StudyPlan};

/// Study plan performance indicators. All durations in hours.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Hours assigned per exam (by exam index).
    pub assigned_by_exam: Vec<f64>,
    /// Hours the quotas asked for per exam (by exam index).
    pub target_by_exam: Vec<f64>,
    /// Unmet target per exam (by exam index).
    pub shortfall_by_exam: Vec<f64>,
    /// Fraction of the total target that was assigned (0.0..=1.0).
    pub fill_rate: f64,
    /// Utilization per day offset (0.0..=1.0); 0 for days without free time.
    pub utilization_by_day: Vec<f64>,
    /// Mean of `utilization_by_day`.
    pub avg_utilization: f64,
}

impl PlanKpi {
    /// Computes KPIs from a plan and the exams it was built for.
    pub fn calculate(plan: &StudyPlan, exams: &[Exam]) -> Self {
        let horizon = u32::try_from(plan.horizon()).unwrap_or(u32::MAX);
        let mut assigned_by_exam = Vec::with_capacity(exams.len());
        let mut target_by_exam = Vec::with_capacity(exams.len());
        let mut shortfall_by_exam = Vec::with_capacity(exams.len());

        for (index, exam) in exams.iter().enumerate() {
            let assigned = plan.total_hours_for_exam(index);
            let quota = plan.quotas.get(index).copied().unwrap_or(0.0);
            // offsets 0..=days_until, capped by the planned horizon
            let active_days = exam.days_until.saturating_add(1).min(horizon);
            let target = quota * f64::from(active_days);

            assigned_by_exam.push(assigned);
            target_by_exam.push(target);
            shortfall_by_exam.push((target - assigned).max(0.0));
        }

        let total_target: f64 = target_by_exam.iter().sum();
        let total_assigned: f64 = assigned_by_exam.iter().sum();
        let fill_rate = if total_target <= 0.0 {
            1.0
        } else {
            (total_assigned / total_target).min(1.0)
        };

        let utilization_by_day: Vec<f64> = plan
            .days
            .iter()
            .map(|day| {
                let free = plan.templates.free_hours(day.weekday);
                if free <= 0.0 {
                    0.0
                } else {
                    day.assigned_hours() / free
                }
            })
            .collect();
        let avg_utilization = if utilization_by_day.is_empty() {
            0.0
        } else {
            utilization_by_day.iter().sum::<f64>() / utilization_by_day.len() as f64
        };

        Self {
            assigned_by_exam,
            target_by_exam,
            shortfall_by_exam,
            fill_rate,
            utilization_by_day,
            avg_utilization,
        }
    }

    /// Largest shortfall of any single exam.
    pub fn max_shortfall(&self) -> f64 {
        self.shortfall_by_exam.iter().copied().fold(0.0, f64::max)
    }

    /// Whether the plan meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_shortfall: f64, min_fill_rate: f64) -> bool {
        self.max_shortfall() <= max_shortfall && self.fill_rate >= min_fill_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayPlan, StudySlot, TimeInterval, WeekDay, WeeklyCalendar};
    use crate::scheduler::{PlanRequest, StudyPlanner};

    fn iv(start: f64, end: f64) -> TimeInterval {
        TimeInterval::new(start, end)
    }

    #[test]
    fn test_kpi_full_fill() {
        let cal = WeeklyCalendar::new(iv(8.0, 22.0)).with_break(1.0);
        let exams = vec![Exam::new(2, 2), Exam::new(2, 2)];
        let plan = StudyPlanner::new().plan(&PlanRequest::new(exams.clone(), cal));

        let kpi = PlanKpi::calculate(&plan, &exams);
        // quotas 6.5h each over 3 days
        assert!((kpi.target_by_exam[0] - 19.5).abs() < 1e-9);
        assert!((kpi.assigned_by_exam[1] - 19.5).abs() < 1e-9);
        assert!(kpi.max_shortfall() < 1e-9);
        assert!((kpi.fill_rate - 1.0).abs() < 1e-9);
        assert!((kpi.avg_utilization - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_kpi_shortfall() {
        let mut day = DayPlan::new(0, WeekDay::Monday);
        day.slots = vec![StudySlot::new(iv(8.0, 10.0), 0)];
        let plan = StudyPlan {
            templates: WeeklyCalendar::new(iv(8.0, 12.0)).templates(),
            quotas: vec![3.0],
            exam_weekdays: vec![WeekDay::Monday],
            days: vec![day],
            ..Default::default()
        };

        let kpi = PlanKpi::calculate(&plan, &[Exam::new(1, 0)]);
        assert!((kpi.shortfall_by_exam[0] - 1.0).abs() < 1e-12);
        assert!((kpi.fill_rate - 2.0 / 3.0).abs() < 1e-12);
        assert!((kpi.utilization_by_day[0] - 0.5).abs() < 1e-12);
        assert!(kpi.meets_thresholds(1.0, 0.6));
        assert!(!kpi.meets_thresholds(0.5, 0.0));
        assert!(!kpi.meets_thresholds(1.0, 0.9));
    }

    #[test]
    fn test_kpi_day_without_free_time() {
        let plan = StudyPlan {
            templates: WeeklyCalendar::new(iv(8.0, 12.0))
                .with_classes(WeekDay::Monday, vec![iv(8.0, 12.0)])
                .templates(),
            quotas: vec![1.0],
            exam_weekdays: vec![WeekDay::Monday],
            days: vec![DayPlan::new(0, WeekDay::Monday)],
            ..Default::default()
        };
        let kpi = PlanKpi::calculate(&plan, &[Exam::new(1, 0)]);
        assert_eq!(kpi.utilization_by_day, vec![0.0]);
        assert!((kpi.fill_rate - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_kpi_far_exam_capped_by_horizon() {
        let mut day = DayPlan::new(0, WeekDay::Monday);
        day.slots = vec![StudySlot::new(iv(8.0, 9.0), 0)];
        let plan = StudyPlan {
            templates: WeeklyCalendar::new(iv(8.0, 12.0)).templates(),
            quotas: vec![2.0],
            exam_weekdays: vec![WeekDay::Monday],
            days: vec![day],
            ..Default::default()
        };
        // hand-built plan: days_until far beyond the horizon
        let kpi = PlanKpi::calculate(&plan, &[Exam::new(1, u32::MAX)]);
        assert!((kpi.target_by_exam[0] - 2.0).abs() < 1e-12);
        assert!((kpi.shortfall_by_exam[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = PlanKpi::calculate(&StudyPlan::default(), &[]);
        assert!(kpi.assigned_by_exam.is_empty());
        assert!((kpi.fill_rate - 1.0).abs() < 1e-12);
        assert!((kpi.avg_utilization - 0.0).abs() < 1e-12);
        assert_eq!(kpi.max_shortfall(), 0.0);
    }
}
