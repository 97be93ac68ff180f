//! Study demand: urgency shares and daily quotas.
//!
//! # Model
//!
//! ```text
//! urgency(e) = difficulty(e) / effective_days_until(e)
//! share(e)   = urgency(e) / Σ urgency        (Σ := 1 when it is 0)
//! quota(e)   = share(e) * average_daily_free
//! ```
//!
//! Quotas are computed once and stay fixed over the horizon. A day with
//! less free time than the quotas ask for simply truncates them while
//! packing; nothing is re-normalized.

use serde::{Deserialize, Serialize};

use crate::models::{Exam, FreeTimeTemplates};

/// Per-exam urgency, share and daily quota, indexed like the exam list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemandProfile {
    /// Raw urgency per exam.
    pub urgencies: Vec<f64>,
    /// Normalized share per exam (sums to 1, or all 0).
    pub shares: Vec<f64>,
    /// Target study hours per day per exam.
    pub quotas: Vec<f64>,
    /// Mean free hours per weekday the quotas were scaled by.
    pub average_daily_free: f64,
}

impl DemandProfile {
    /// Computes the profile from exams and free-time templates.
    pub fn calculate(exams: &[Exam], templates: &FreeTimeTemplates) -> Self {
        Self::with_capacity(exams, templates.average_daily_free())
    }

    /// Computes the profile for a given average daily free time (hours).
    pub fn with_capacity(exams: &[Exam], average_daily_free: f64) -> Self {
        let urgencies: Vec<f64> = exams.iter().map(Exam::urgency).collect();
        let sum: f64 = urgencies.iter().sum();
        let total = if sum == 0.0 { 1.0 } else { sum };

        let shares: Vec<f64> = urgencies.iter().map(|u| u / total).collect();
        let quotas: Vec<f64> = shares.iter().map(|s| s * average_daily_free).collect();

        log::debug!(
            "demand for {} exams: total urgency {:.3}, {:.2} h/day to share",
            exams.len(),
            sum,
            average_daily_free
        );

        Self {
            urgencies,
            shares,
            quotas,
            average_daily_free,
        }
    }

    /// Daily quota of `exam_index` (0 if out of range).
    pub fn quota(&self, exam_index: usize) -> f64 {
        self.quotas.get(exam_index).copied().unwrap_or(0.0)
    }

    /// Sum of all daily quotas (hours).
    pub fn total_quota(&self) -> f64 {
        self.quotas.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimeInterval, WeeklyCalendar};

    #[test]
    fn test_shares_example() {
        let exams = vec![Exam::new(3, 1), Exam::new(1, 10)];
        let profile = DemandProfile::with_capacity(&exams, 10.0);

        assert!((profile.urgencies[0] - 3.0).abs() < 1e-12);
        assert!((profile.urgencies[1] - 0.1).abs() < 1e-12);
        assert!((profile.shares[0] - 0.9677).abs() < 1e-4);
        assert!((profile.shares[1] - 0.0323).abs() < 1e-4);
        assert!((profile.shares.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((profile.quota(0) - 9.677).abs() < 1e-3);
    }

    #[test]
    fn test_zero_urgency_yields_zero_shares() {
        let exams = vec![Exam::new(0, 3), Exam::new(0, 0)];
        let profile = DemandProfile::with_capacity(&exams, 12.0);
        assert!(profile.shares.iter().all(|&s| s == 0.0));
        assert_eq!(profile.total_quota(), 0.0);
    }

    #[test]
    fn test_due_today_dominates() {
        let exams = vec![Exam::new(1, 0), Exam::new(1, 4)];
        let profile = DemandProfile::with_capacity(&exams, 9.0);
        // urgencies 2.0 and 0.25
        assert!((profile.shares[0] - 2.0 / 2.25).abs() < 1e-12);
        assert!((profile.total_quota() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_templates() {
        let cal = WeeklyCalendar::new(TimeInterval::new(8.0, 22.0)).with_break(1.0);
        let exams = vec![Exam::new(2, 2), Exam::new(2, 2)];
        let profile = DemandProfile::calculate(&exams, &cal.templates());
        assert!((profile.average_daily_free - 13.0).abs() < 1e-12);
        assert!((profile.quota(0) - 6.5).abs() < 1e-12);
        assert!((profile.quota(1) - 6.5).abs() < 1e-12);
        assert_eq!(profile.quota(7), 0.0);
    }

    #[test]
    fn test_no_exams() {
        let profile = DemandProfile::with_capacity(&[], 10.0);
        assert!(profile.quotas.is_empty());
        assert_eq!(profile.total_quota(), 0.0);
    }
}
