//! Day layout pipeline.
//!
//! Turns one day's scheduled items into side-by-side frames, the way
//! consumer calendars arrange overlapping appointments.
//!
//! # Stages
//!
//! - **Extraction** ([`IntervalExtractor`]): items → sorted intervals.
//! - **Grouping** ([`group_overlapping`]): intervals → maximal overlap clusters.
//! - **Columns** ([`ColumnStrategy`]): cluster → column per interval.
//! - **Geometry** ([`GeometryMapper`]): column + interval → frame.
//! - **Facade** ([`LayoutEngine`], [`layout`]): all of the above.
//!
//! # Usage
//!
//! ```
//! use u_calendar_layout::config::LayoutConfig;
//! use u_calendar_layout::models::{ScheduledItem, MS_PER_HOUR};
//!
//! let items = vec![
//!     ScheduledItem::new("A").with_span(9 * MS_PER_HOUR, 10 * MS_PER_HOUR),
//!     ScheduledItem::new("B").with_span(9 * MS_PER_HOUR, 10 * MS_PER_HOUR),
//! ];
//! let results = u_calendar_layout::layout(&items, &LayoutConfig::default());
//! assert!(results.iter().all(|r| r.total_columns == 2));
//! ```

mod columns;
mod engine;
mod extract;
mod geometry;
mod group;
mod kpi;

pub use columns::{peak_overlap, BestFit, ColumnAssignment, ColumnStrategy, FirstFit};
pub use engine::LayoutEngine;
pub use extract::{Extraction, IntervalExtractor};
pub use geometry::GeometryMapper;
pub use group::{group_overlapping, Cluster};
pub use kpi::LayoutKpi;

use crate::config::LayoutConfig;
use crate::models::{LayoutResult, ScheduledEntry};

/// Lays out one day of items with the default column strategy.
///
/// Pure and deterministic: identical arguments always yield identical
/// results. Items without a start instant are omitted.
pub fn layout<T: ScheduledEntry>(items: &[T], config: &LayoutConfig) -> Vec<LayoutResult> {
    LayoutEngine::new(config.clone()).layout(items).into_results()
}
