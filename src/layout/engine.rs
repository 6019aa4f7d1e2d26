//! Layout facade.
//!
//! # Algorithm
//!
//! 1. Extract sorted intervals (default duration for open-ended items).
//! 2. Sweep them into maximal overlap clusters.
//! 3. Assign columns per cluster with the configured [`ColumnStrategy`].
//! 4. Map every placement to a frame.
//!
//! # Complexity
//! O(n log n + n·c) where c = columns of the widest cluster.

use std::sync::Arc;

use log::{debug, trace};

use super::columns::{ColumnStrategy, FirstFit};
use super::extract::IntervalExtractor;
use super::geometry::GeometryMapper;
use super::group::group_overlapping;
use crate::config::LayoutConfig;
use crate::error::ConfigError;
use crate::models::{DayLayout, LayoutResult, ScheduledEntry};

/// Stateless day-layout engine.
///
/// Holds only its configuration and column strategy; every call to
/// [`layout`](Self::layout) is a pure function of its input, so one engine
/// can be shared across threads.
///
/// # Example
///
/// ```
/// use u_calendar_layout::config::LayoutConfig;
/// use u_calendar_layout::layout::LayoutEngine;
/// use u_calendar_layout::models::{ScheduledItem, MS_PER_HOUR, MS_PER_MINUTE};
///
/// let items = vec![
///     ScheduledItem::new("A").with_span(9 * MS_PER_HOUR, 10 * MS_PER_HOUR),
///     ScheduledItem::new("B").with_span(9 * MS_PER_HOUR + 30 * MS_PER_MINUTE, 10 * MS_PER_HOUR + 30 * MS_PER_MINUTE),
///     ScheduledItem::new("C").with_start(11 * MS_PER_HOUR),
/// ];
///
/// let engine = LayoutEngine::new(LayoutConfig::default());
/// let layout = engine.layout(&items);
///
/// assert_eq!(layout.result_for_item("B").unwrap().column, 1);
/// assert_eq!(layout.result_for_item("C").unwrap().total_columns, 1);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    strategy: Arc<dyn ColumnStrategy>,
}

impl LayoutEngine {
    /// Creates an engine, clamping out-of-range configuration values.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config: config.sanitized(),
            strategy: Arc::new(FirstFit),
        }
    }

    /// Creates an engine, rejecting out-of-range configuration values.
    pub fn try_new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Replaces the column strategy.
    pub fn with_strategy<S: ColumnStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Arc::new(strategy);
        self
    }

    /// Effective (sanitized) configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Name of the active column strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Lays out one day of items.
    ///
    /// Never fails: items without a start are reported in
    /// [`DayLayout::unscheduled`], open-ended or inverted items get the
    /// default duration.
    pub fn layout<T: ScheduledEntry>(&self, items: &[T]) -> DayLayout {
        let extraction = IntervalExtractor::new()
            .with_default_duration(self.config.default_duration_ms)
            .extract(items);
        let clusters = group_overlapping(&extraction.intervals);
        let mapper = GeometryMapper::new(&self.config);

        let mut results = Vec::with_capacity(extraction.intervals.len());
        for (cluster_idx, cluster) in clusters.iter().enumerate() {
            let assignment = self.strategy.assign(cluster.intervals());
            trace!(
                cluster = cluster_idx,
                members = cluster.len(),
                total_columns = assignment.total_columns;
                "assigned cluster columns"
            );

            for (iv, &column) in cluster.intervals().iter().zip(&assignment.columns) {
                results.push(LayoutResult {
                    item_id: iv.item_id.clone(),
                    cluster: cluster_idx,
                    column,
                    total_columns: assignment.total_columns,
                    start_ms: iv.start_ms,
                    end_ms: iv.end_ms,
                    end_synthesized: iv.end_synthesized,
                    frame: mapper.frame(
                        self.config.frame_mode,
                        iv.start_ms,
                        iv.end_ms,
                        column,
                        assignment.total_columns,
                    ),
                });
            }
        }

        debug!(
            items = items.len(),
            placed = results.len(),
            clusters = clusters.len(),
            strategy = self.strategy.name();
            "computed day layout"
        );

        DayLayout {
            results,
            unscheduled: extraction.unscheduled,
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
