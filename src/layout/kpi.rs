//! Layout quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placed | Items with a start instant |
//! | Unscheduled | Items dropped for lacking a start |
//! | Clusters | Maximal overlap groups |
//! | Max columns | Widest cluster's column count |
//! | Peak overlap | Most items active at one instant |
//! | Synthesized ends | Items given the default duration |
//! | Avg width share | Mean of 1 / total_columns over placed items |

use crate::models::{DayLayout, Interval};

use super::columns::peak_overlap;

/// Summary indicators for one computed layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutKpi {
    /// Number of placed items.
    pub placed: usize,
    /// Number of items without a start instant.
    pub unscheduled: usize,
    /// Number of clusters.
    pub clusters: usize,
    /// Widest cluster's column count.
    pub max_total_columns: usize,
    /// Maximum number of simultaneously active items.
    pub peak_overlap: usize,
    /// Items whose end was synthesized.
    pub synthesized_ends: usize,
    /// Mean share of the container width per item (0.0..=1.0).
    pub avg_width_share: f64,
}

impl LayoutKpi {
    /// Computes KPIs from a layout.
    pub fn calculate(layout: &DayLayout) -> Self {
        let intervals: Vec<Interval> = layout
            .results
            .iter()
            .map(|r| Interval::new(r.item_id.as_str(), r.start_ms, r.end_ms))
            .collect();

        let avg_width_share = if layout.is_empty() {
            0.0
        } else {
            let sum: f64 = layout
                .results
                .iter()
                .map(|r| 1.0 / r.total_columns.max(1) as f64)
                .sum();
            sum / layout.len() as f64
        };

        Self {
            placed: layout.len(),
            unscheduled: layout.unscheduled.len(),
            clusters: layout.cluster_count(),
            max_total_columns: layout.max_total_columns(),
            peak_overlap: peak_overlap(&intervals),
            synthesized_ends: layout.results.iter().filter(|r| r.end_synthesized).count(),
            avg_width_share,
        }
    }

    /// Whether the widest cluster uses no more columns than the peak overlap.
    pub fn is_column_minimal(&self) -> bool {
        self.max_total_columns == self.peak_overlap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutEngine;
    use crate::models::{ScheduledItem, MS_PER_MINUTE};

    fn item(id: &str, start_min: i64, end_min: i64) -> ScheduledItem {
        ScheduledItem::new(id).with_span(start_min * MS_PER_MINUTE, end_min * MS_PER_MINUTE)
    }

    #[test]
    fn test_kpi_calculation() {
        let items = vec![
            item("A", 540, 600),
            item("B", 570, 630),
            item("C", 660, 720),
            ScheduledItem::new("open").with_start(800 * MS_PER_MINUTE),
            ScheduledItem::new("todo"),
        ];
        let layout = LayoutEngine::default().layout(&items);
        let kpi = LayoutKpi::calculate(&layout);

        assert_eq!(kpi.placed, 4);
        assert_eq!(kpi.unscheduled, 1);
        assert_eq!(kpi.clusters, 3);
        assert_eq!(kpi.max_total_columns, 2);
        assert_eq!(kpi.peak_overlap, 2);
        assert_eq!(kpi.synthesized_ends, 1);
        // (0.5 + 0.5 + 1 + 1) / 4
        assert!((kpi.avg_width_share - 0.75).abs() < 1e-10);
        assert!(kpi.is_column_minimal());
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = LayoutKpi::calculate(&DayLayout::new());
        assert_eq!(kpi.placed, 0);
        assert_eq!(kpi.clusters, 0);
        assert_eq!(kpi.peak_overlap, 0);
        assert_eq!(kpi.avg_width_share, 0.0);
        assert!(kpi.is_column_minimal());
    }
}
