//! Interval extraction.
//!
//! # Algorithm
//!
//! 1. Drop items without a start instant (reported as unscheduled).
//! 2. Use the explicit end when it lies after the start; otherwise synthesize
//!    `start + default_duration`. A start too close to `i64::MAX` is pulled
//!    back so the synthesized span still fits.
//! 3. Stable sort by start ascending, longer duration first on equal starts.
//!
//! The ordering decides which item claims the lowest column of its cluster,
//! so larger blocks get placement priority.
//!
//! # Complexity
//! O(n log n).

use std::cmp::Reverse;

use log::trace;

use crate::models::{Interval, ScheduledEntry, DEFAULT_DURATION_MS};

/// Intervals ready for grouping, plus the items that were left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Sorted intervals.
    pub intervals: Vec<Interval>,
    /// IDs of items without a start instant, in input order.
    pub unscheduled: Vec<String>,
}

/// Normalizes scheduled items into sorted intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalExtractor {
    default_duration_ms: i64,
}

impl IntervalExtractor {
    /// Creates an extractor with the one-hour default duration.
    pub fn new() -> Self {
        Self {
            default_duration_ms: DEFAULT_DURATION_MS,
        }
    }

    /// Sets the default duration. Values below 1 ms are raised to 1 ms.
    pub fn with_default_duration(mut self, duration_ms: i64) -> Self {
        self.default_duration_ms = duration_ms.max(1);
        self
    }

    /// Default duration applied to open-ended items (ms).
    pub fn default_duration_ms(&self) -> i64 {
        self.default_duration_ms
    }

    /// Extracts sorted intervals from `items`.
    pub fn extract<T: ScheduledEntry>(&self, items: &[T]) -> Extraction {
        let mut extraction = Extraction::default();

        for (index, item) in items.iter().enumerate() {
            let Some(start_ms) = item.start_ms() else {
                extraction.unscheduled.push(item.id().to_string());
                continue;
            };

            let interval = match item.end_ms() {
                Some(end_ms) if end_ms > start_ms => Interval::new(item.id(), start_ms, end_ms),
                explicit_end => {
                    // Near the top of the time range, shift back so end > start holds.
                    let (start_ms, end_ms) = match start_ms.checked_add(self.default_duration_ms) {
                        Some(end_ms) => (start_ms, end_ms),
                        None => (i64::MAX - self.default_duration_ms, i64::MAX),
                    };
                    trace!(
                        item_id = item.id(),
                        start_ms,
                        explicit_end:?;
                        "synthesized end for open-ended item"
                    );
                    Interval::new(item.id(), start_ms, end_ms).synthesized()
                }
            };

            extraction.intervals.push(interval.with_source_index(index));
        }

        extraction
            .intervals
            .sort_by_key(|iv| (iv.start_ms, Reverse(iv.duration_ms())));

        extraction
    }
}

impl Default for IntervalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScheduledItem, MS_PER_HOUR, MS_PER_MINUTE};

    fn ids(extraction: &Extraction) -> Vec<&str> {
        extraction
            .intervals
            .iter()
            .map(|iv| iv.item_id.as_str())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<ScheduledItem> = Vec::new();
        let extraction = IntervalExtractor::new().extract(&items);
        assert!(extraction.intervals.is_empty());
        assert!(extraction.unscheduled.is_empty());
    }

    #[test]
    fn test_unscheduled_dropped() {
        let items = vec![
            ScheduledItem::new("todo"),
            ScheduledItem::new("A").with_span(0, 1000),
            ScheduledItem::new("todo2").with_end(5000),
        ];
        let extraction = IntervalExtractor::new().extract(&items);
        assert_eq!(ids(&extraction), vec!["A"]);
        assert_eq!(extraction.unscheduled, vec!["todo", "todo2"]);
    }

    #[test]
    fn test_missing_end_defaults_to_one_hour() {
        let items = vec![ScheduledItem::new("A").with_start(9 * MS_PER_HOUR)];
        let extraction = IntervalExtractor::new().extract(&items);
        let iv = &extraction.intervals[0];
        assert_eq!(iv.end_ms, 10 * MS_PER_HOUR);
        assert_eq!(iv.duration_ms(), 60 * MS_PER_MINUTE);
        assert!(iv.end_synthesized);
    }

    #[test]
    fn test_inverted_and_zero_ranges_defaulted() {
        let items = vec![
            ScheduledItem::new("zero").with_span(1000, 1000),
            ScheduledItem::new("inverted").with_span(5000, 2000),
        ];
        let extraction = IntervalExtractor::new()
            .with_default_duration(30 * MS_PER_MINUTE)
            .extract(&items);
        for iv in &extraction.intervals {
            assert!(iv.end_synthesized);
            assert_eq!(iv.duration_ms(), 30 * MS_PER_MINUTE);
        }
    }

    #[test]
    fn test_sorted_by_start_then_longer_first() {
        let items = vec![
            ScheduledItem::new("late").with_span(5000, 6000),
            ScheduledItem::new("short").with_span(1000, 2000),
            ScheduledItem::new("long").with_span(1000, 4000),
        ];
        let extraction = IntervalExtractor::new().extract(&items);
        assert_eq!(ids(&extraction), vec!["long", "short", "late"]);
        assert_eq!(extraction.intervals[0].source_index, 2);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let items = vec![
            ScheduledItem::new("b").with_span(0, 1000),
            ScheduledItem::new("a").with_span(0, 1000),
            ScheduledItem::new("c").with_span(0, 1000),
        ];
        let extraction = IntervalExtractor::new().extract(&items);
        assert_eq!(ids(&extraction), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_wide_explicit_span_sorts_without_overflow() {
        let items = vec![
            ScheduledItem::new("short").with_span(0, 10),
            ScheduledItem::new("wide").with_span(-5_000_000_000_000_000_000, 5_000_000_000_000_000_000),
        ];
        let extraction = IntervalExtractor::new().extract(&items);
        assert_eq!(ids(&extraction), vec!["wide", "short"]);
        assert_eq!(extraction.intervals[0].duration_ms(), i64::MAX);
    }

    #[test]
    fn test_open_ended_item_at_time_limit_keeps_positive_span() {
        let items = vec![
            ScheduledItem::new("edge").with_start(i64::MAX),
            ScheduledItem::new("inverted").with_span(i64::MAX - 10, 0),
        ];
        let extraction = IntervalExtractor::new().extract(&items);
        for iv in &extraction.intervals {
            assert!(iv.end_synthesized);
            assert!(iv.end_ms > iv.start_ms);
            assert_eq!(iv.end_ms, i64::MAX);
            assert_eq!(iv.duration_ms(), DEFAULT_DURATION_MS);
        }
    }

    #[test]
    fn test_default_duration_floor() {
        let extractor = IntervalExtractor::new().with_default_duration(-5);
        assert_eq!(extractor.default_duration_ms(), 1);
    }
}
