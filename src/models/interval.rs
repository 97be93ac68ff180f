//! Clock-time intervals and interval algebra.
//!
//! # Time Model
//! All times are real-valued hours on a single day's clock (e.g. `14.5`
//! is 14:30). There is no date component; weekday identity lives in
//! [`WeekDay`](super::WeekDay).
//!
//! # Interval Semantics
//! Half-open `[start, end)`. A constructed interval is always non-empty
//! (`start < end`) and finite.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty clock interval `[start, end)` in hours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeInterval {
    /// Interval start (hours, inclusive).
    pub start: f64,
    /// Interval end (hours, exclusive).
    pub end: f64,
}

impl TimeInterval {
    /// Creates a new interval.
    ///
    /// # Panics
    /// Panics if either bound is non-finite or `start >= end`.
    pub fn new(start: f64, end: f64) -> Self {
        assert!(
            start.is_finite() && end.is_finite() && start < end,
            "TimeInterval requires finite start < end, got [{start}, {end})"
        );
        Self { start, end }
    }

    /// Creates a new interval, returning `None` for inverted, empty or
    /// non-finite bounds.
    pub fn try_new(start: f64, end: f64) -> Option<Self> {
        if start.is_finite() && end.is_finite() && start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Duration in hours.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Midpoint in hours.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Whether a time point falls within this interval.
    #[inline]
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether `other` lies entirely inside this interval.
    pub fn contains_interval(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Whether two intervals overlap (touching endpoints do not count).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether the bounds satisfy the interval invariant.
    ///
    /// Intervals built through [`new`](Self::new) always do; deserialized
    /// ones may not.
    pub fn is_well_formed(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start < self.end
    }

    /// Clips this interval to `bounds`. `None` when nothing remains.
    pub fn clip_to(&self, bounds: &Self) -> Option<Self> {
        let start = clamp(self.start, bounds.start, bounds.end);
        let end = clamp(self.end, bounds.start, bounds.end);
        Self::try_new(start, end)
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", ClockTime(self.start), ClockTime(self.end))
    }
}

/// `HH:MM` rendering of an hour value.
///
/// Minutes are rounded; a rounded 60 rolls into the next hour. Hours
/// wrap modulo 24.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTime(pub f64);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0.trunc();
        let mut hours = (whole as i64).rem_euclid(24);
        let mut minutes = ((self.0 - whole) * 60.0).round() as i64;
        if minutes == 60 {
            hours = (hours + 1) % 24;
            minutes = 0;
        }
        write!(f, "{hours:02}:{minutes:02}")
    }
}

/// Bounds `value` to `[lo, hi]`.
#[inline]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

/// Subtracts a set of intervals from `base`.
///
/// # Algorithm
/// 1. Clip every subtract interval to `base`; drop the ones that vanish.
/// 2. Sort the remainder by start.
/// 3. Sweep with a cursor starting at `base.start`: a subtract starting
///    after the cursor exposes the gap `[cursor, start)`; the cursor then
///    advances to `max(cursor, end)`, which merges overlapping and
///    adjacent subtracts.
/// 4. Emit the trailing gap `[cursor, base.end)` if any remains.
///
/// The result is sorted, pairwise disjoint and contained in `base`.
///
/// # Example
/// ```
/// use u_studyplan::models::{subtract_intervals, TimeInterval};
///
/// let free = subtract_intervals(
///     TimeInterval::new(8.0, 22.0),
///     &[TimeInterval::new(10.0, 12.0), TimeInterval::new(11.0, 13.0)],
/// );
/// assert_eq!(free, vec![TimeInterval::new(8.0, 10.0), TimeInterval::new(13.0, 22.0)]);
/// ```
pub fn subtract_intervals(base: TimeInterval, subtracts: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut clipped: Vec<TimeInterval> = subtracts
        .iter()
        .filter_map(|s| s.clip_to(&base))
        .collect();
    clipped.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut free = Vec::with_capacity(clipped.len() + 1);
    let mut cursor = base.start;
    for s in &clipped {
        if s.start > cursor {
            free.push(TimeInterval {
                start: cursor,
                end: s.start,
            });
        }
        cursor = cursor.max(s.end);
    }
    if cursor < base.end {
        free.push(TimeInterval {
            start: cursor,
            end: base.end,
        });
    }
    free
}

/// Sum of interval durations (hours).
pub fn total_hours(intervals: &[TimeInterval]) -> f64 {
    intervals.iter().map(TimeInterval::duration).sum()
}
