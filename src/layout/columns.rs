//! Column assignment within a cluster.
//!
//! Each cluster keeps an ordered list of columns. Intervals are visited in
//! extractor order; a column accepts an interval when the column's most
//! recently placed interval ends at or before the new start. When no column
//! accepts, a new one opens at the right.
//!
//! # Strategies
//!
//! | Strategy | Choice among accepting columns | Property |
//! |----------|-------------------------------|----------|
//! | [`FirstFit`] | lowest index | left-aligned, stable under edits |
//! | [`BestFit`] | latest free time, then lowest index | tightest packing |
//!
//! Both open a new column only when every existing column is busy at the new
//! start, so the column count never exceeds [`peak_overlap`].
//!
//! # Reference
//! Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

use std::fmt::Debug;

use crate::models::Interval;

/// Columns chosen for one cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnAssignment {
    /// Column per member interval, parallel to the cluster slice.
    pub columns: Vec<usize>,
    /// Number of columns opened (>= 1 for a non-empty cluster).
    pub total_columns: usize,
}

/// A column-packing heuristic.
///
/// Implementations must give distinct columns to any two overlapping
/// intervals and must return `total_columns == max(column) + 1`.
pub trait ColumnStrategy: Send + Sync + Debug {
    /// Strategy name (e.g., "first-fit").
    fn name(&self) -> &'static str;

    /// Picks a column for the next interval.
    ///
    /// `column_ends[c]` is the end of the interval last placed in column `c`.
    /// Returns `None` to open a new column.
    fn choose(&self, column_ends: &[i64], interval: &Interval) -> Option<usize>;

    /// Assigns columns to a cluster's intervals, in slice order.
    fn assign(&self, intervals: &[Interval]) -> ColumnAssignment {
        let mut column_ends: Vec<i64> = Vec::new();
        let mut columns = Vec::with_capacity(intervals.len());

        for iv in intervals {
            let column = match self.choose(&column_ends, iv) {
                Some(c) if c < column_ends.len() && column_ends[c] <= iv.start_ms => c,
                _ => {
                    column_ends.push(iv.start_ms);
                    column_ends.len() - 1
                }
            };
            column_ends[column] = iv.end_ms;
            columns.push(column);
        }

        ColumnAssignment {
            columns,
            total_columns: column_ends.len(),
        }
    }
}

/// Lowest-index column that is free.
///
/// Keeps arrangements left-aligned; an item tends to keep its column across
/// small edits to its neighbors.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl ColumnStrategy for FirstFit {
    fn name(&self) -> &'static str {
        "first-fit"
    }

    fn choose(&self, column_ends: &[i64], interval: &Interval) -> Option<usize> {
        column_ends
            .iter()
            .position(|&end| end <= interval.start_ms)
    }
}

/// Free column that became free most recently.
///
/// Leaves long-idle columns open for later items. Ties go to the lowest index.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFit;

impl ColumnStrategy for BestFit {
    fn name(&self) -> &'static str {
        "best-fit"
    }

    fn choose(&self, column_ends: &[i64], interval: &Interval) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (column, &end) in column_ends.iter().enumerate() {
            if end > interval.start_ms {
                continue;
            }
            match best {
                Some((_, best_end)) if end <= best_end => {}
                _ => best = Some((column, end)),
            }
        }
        best.map(|(column, _)| column)
    }
}

/// Maximum number of simultaneously overlapping intervals (half-open).
///
/// This is the lower bound on columns for any valid assignment.
pub fn peak_overlap(intervals: &[Interval]) -> usize {
    let mut events: Vec<(i64, i32)> = Vec::with_capacity(intervals.len() * 2);
    for iv in intervals {
        events.push((iv.start_ms, 1));
        events.push((iv.end_ms, -1));
    }
    // Ends sort before starts at the same instant.
    events.sort_unstable();

    let mut active: i32 = 0;
    let mut peak: i32 = 0;
    for (_, delta) in events {
        active += delta;
        peak = peak.max(active);
    }
    peak as usize
}
