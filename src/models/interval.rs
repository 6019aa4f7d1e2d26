//! Plain time intervals used for overlap computation.
//!
//! # Time Model
//! All times are in milliseconds relative to an epoch chosen by the consumer.
//! The layout configuration names the instant of local midnight of the
//! laid-out day (`day_origin_ms`).
//!
//! # Semantics
//! Intervals are half-open: `[start, end)`. Two intervals that merely touch
//! (`a.end == b.start`) do not overlap.

use serde::{Deserialize, Serialize};

/// Milliseconds in one minute.
pub const MS_PER_MINUTE: i64 = 60_000;

/// Milliseconds in one hour.
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Length given to an item that has no usable end instant (one hour).
pub const DEFAULT_DURATION_MS: i64 = MS_PER_HOUR;

/// A scheduled item's time span, normalized for layout.
///
/// Produced by the interval extractor; `end_ms > start_ms` always holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Identity of the source item.
    pub item_id: String,
    /// Position of the source item in the caller's input slice.
    pub source_index: usize,
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
    /// Whether `end_ms` was synthesized from the default duration.
    pub end_synthesized: bool,
}

impl Interval {
    /// Creates a new interval with an explicit end.
    pub fn new(item_id: impl Into<String>, start_ms: i64, end_ms: i64) -> Self {
        Self {
            item_id: item_id.into(),
            source_index: 0,
            start_ms,
            end_ms,
            end_synthesized: false,
        }
    }

    /// Sets the source position.
    pub fn with_source_index(mut self, source_index: usize) -> Self {
        self.source_index = source_index;
        self
    }

    /// Marks the end as synthesized.
    pub fn synthesized(mut self) -> Self {
        self.end_synthesized = true;
        self
    }

    /// Duration of this interval (ms), saturating at `i64::MAX`.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// Whether two intervals overlap (half-open).
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_basics() {
        let iv = Interval::new("A", 1000, 5000);
        assert_eq!(iv.duration_ms(), 4000);
        assert!(!iv.end_synthesized);
    }

    #[test]
    fn test_duration_saturates_on_wide_span() {
        let iv = Interval::new("wide", -5_000_000_000_000_000_000, 5_000_000_000_000_000_000);
        assert_eq!(iv.duration_ms(), i64::MAX);
    }

    #[test]
    fn test_interval_overlap() {
        let a = Interval::new("A", 0, 5000);
        let b = Interval::new("B", 3000, 8000);
        let c = Interval::new("C", 5000, 10000);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c)); // touching, half-open
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_interval_builders() {
        let iv = Interval::new("A", 0, MS_PER_HOUR)
            .with_source_index(3)
            .synthesized();
        assert_eq!(iv.source_index, 3);
        assert!(iv.end_synthesized);
        assert_eq!(iv.duration_ms(), DEFAULT_DURATION_MS);
    }
}
