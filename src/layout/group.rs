//! Overlap grouping.
//!
//! # Algorithm
//!
//! Single left-to-right sweep over intervals sorted by start. `reach` is the
//! latest end seen in the open cluster. An interval with `start < reach`
//! joins the open cluster and extends `reach`; any other interval closes it
//! and opens a new one.
//!
//! Overlap is transitive here: A and C land in the same cluster when B
//! overlaps both, even if A and C never overlap each other.
//!
//! # Complexity
//! O(n) over sorted input.

use crate::models::Interval;

/// A maximal run of transitively overlapping intervals.
///
/// Borrows a contiguous slice of the sorted interval list. Clusters are only
/// built by [`group_overlapping`] and always hold at least one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster<'a> {
    intervals: &'a [Interval],
    reach_ms: i64,
}

impl<'a> Cluster<'a> {
    /// Member intervals, in sorted order.
    pub fn intervals(&self) -> &'a [Interval] {
        self.intervals
    }

    /// Earliest start (ms).
    pub fn start_ms(&self) -> i64 {
        self.intervals[0].start_ms
    }

    /// Latest end (ms).
    pub fn reach_ms(&self) -> i64 {
        self.reach_ms
    }

    /// Number of member intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

/// Partitions sorted intervals into maximal overlap clusters.
///
/// `intervals` must be sorted by start ascending, as produced by the
/// interval extractor.
pub fn group_overlapping(intervals: &[Interval]) -> Vec<Cluster<'_>> {
    let mut clusters = Vec::new();
    let Some(first) = intervals.first() else {
        return clusters;
    };

    let mut open_from = 0;
    let mut reach = first.end_ms;

    for (idx, iv) in intervals.iter().enumerate().skip(1) {
        if iv.start_ms < reach {
            reach = reach.max(iv.end_ms);
        } else {
            clusters.push(Cluster {
                intervals: &intervals[open_from..idx],
                reach_ms: reach,
            });
            open_from = idx;
            reach = iv.end_ms;
        }
    }

    clusters.push(Cluster {
        intervals: &intervals[open_from..],
        reach_ms: reach,
    });

    clusters
}
