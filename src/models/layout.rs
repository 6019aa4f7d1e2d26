//! Day layout (output) model.
//!
//! A day layout is the placement of every scheduled item of one day into a
//! cluster, a column within that cluster, and a frame on the timeline.

use serde::{Deserialize, Serialize};

/// Coordinate convention for emitted frames.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FrameMode {
    /// Absolute pixels on both axes.
    #[default]
    Absolute,
    /// Horizontal axis as fractions of the container width, vertical in pixels.
    Fractional,
}

/// An absolute pixel rectangle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PixelFrame {
    /// Left edge (px).
    pub x: f64,
    /// Top edge (px), measured from the timeline start.
    pub y: f64,
    /// Width (px).
    pub width: f64,
    /// Height (px).
    pub height: f64,
}

/// A frame whose horizontal extent is normalized to the container width.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FractionalFrame {
    /// Left edge as a fraction of the container width.
    pub x: f64,
    /// Width as a fraction of the container width.
    pub width: f64,
    /// Top edge (px), measured from the timeline start.
    pub y: f64,
    /// Height (px).
    pub height: f64,
}

/// The rectangle computed for one item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Frame {
    /// Absolute pixel frame.
    Absolute(PixelFrame),
    /// Fractional horizontal frame.
    Fractional(FractionalFrame),
}

impl Frame {
    /// Top edge (px).
    pub fn y(&self) -> f64 {
        match self {
            Frame::Absolute(f) => f.y,
            Frame::Fractional(f) => f.y,
        }
    }

    /// Height (px).
    pub fn height(&self) -> f64 {
        match self {
            Frame::Absolute(f) => f.height,
            Frame::Fractional(f) => f.height,
        }
    }
}

/// Placement of a single item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutResult {
    /// Identity of the placed item.
    pub item_id: String,
    /// Index of the cluster the item belongs to, in timeline order.
    pub cluster: usize,
    /// Assigned column within the cluster (0-based).
    pub column: usize,
    /// Number of columns opened by the cluster (>= 1).
    pub total_columns: usize,
    /// Effective start (ms).
    pub start_ms: i64,
    /// Effective end (ms). Synthesized if the item had no usable end.
    pub end_ms: i64,
    /// Whether `end_ms` came from the default duration.
    pub end_synthesized: bool,
    /// Frame on the timeline.
    pub frame: Frame,
}

impl LayoutResult {
    /// Effective duration (ms), saturating at `i64::MAX`.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// Whether two placements overlap in time (half-open).
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }
}

/// A computed day layout.
///
/// Results are ordered by start ascending, longer items first on equal
/// starts. Items without a start instant are listed in `unscheduled`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DayLayout {
    /// One placement per scheduled item.
    pub results: Vec<LayoutResult>,
    /// IDs of items dropped for lacking a start instant, in input order.
    pub unscheduled: Vec<String>,
}

impl DayLayout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Finds the placement for a given item.
    pub fn result_for_item(&self, item_id: &str) -> Option<&LayoutResult> {
        self.results.iter().find(|r| r.item_id == item_id)
    }

    /// Returns all placements of a given cluster.
    pub fn results_in_cluster(&self, cluster: usize) -> Vec<&LayoutResult> {
        self.results.iter().filter(|r| r.cluster == cluster).collect()
    }

    /// Number of clusters.
    pub fn cluster_count(&self) -> usize {
        self.results.iter().map(|r| r.cluster + 1).max().unwrap_or(0)
    }

    /// Widest cluster's column count (0 when empty).
    pub fn max_total_columns(&self) -> usize {
        self.results.iter().map(|r| r.total_columns).max().unwrap_or(0)
    }

    /// Consumes the layout, returning its placements.
    pub fn into_results(self) -> Vec<LayoutResult> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, cluster: usize, column: usize, total: usize, start: i64, end: i64) -> LayoutResult {
        LayoutResult {
            item_id: id.into(),
            cluster,
            column,
            total_columns: total,
            start_ms: start,
            end_ms: end,
            end_synthesized: false,
            frame: Frame::Absolute(PixelFrame::default()),
        }
    }

    fn sample_layout() -> DayLayout {
        DayLayout {
            results: vec![
                result("A", 0, 0, 2, 0, 5000),
                result("B", 0, 1, 2, 3000, 8000),
                result("C", 1, 0, 1, 9000, 10000),
            ],
            unscheduled: vec!["X".into()],
        }
    }

    #[test]
    fn test_layout_lookup() {
        let layout = sample_layout();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.result_for_item("B").unwrap().column, 1);
        assert!(layout.result_for_item("Z").is_none());
        assert_eq!(layout.results_in_cluster(0).len(), 2);
        assert_eq!(layout.results_in_cluster(1).len(), 1);
    }

    #[test]
    fn test_layout_aggregates() {
        let layout = sample_layout();
        assert_eq!(layout.cluster_count(), 2);
        assert_eq!(layout.max_total_columns(), 2);
    }

    #[test]
    fn test_empty_layout() {
        let layout = DayLayout::new();
        assert!(layout.is_empty());
        assert_eq!(layout.cluster_count(), 0);
        assert_eq!(layout.max_total_columns(), 0);
    }

    #[test]
    fn test_result_overlap() {
        let layout = sample_layout();
        let a = layout.result_for_item("A").unwrap();
        let b = layout.result_for_item("B").unwrap();
        let c = layout.result_for_item("C").unwrap();
        assert!(a.overlaps(b));
        assert!(!b.overlaps(c));
        assert_eq!(a.duration_ms(), 5000);
    }

    #[test]
    fn test_result_duration_saturates() {
        let wide = result("W", 0, 0, 1, i64::MIN, i64::MAX);
        assert_eq!(wide.duration_ms(), i64::MAX);
    }

    #[test]
    fn test_frame_serialization_tagged() {
        let frame = Frame::Fractional(FractionalFrame {
            x: 0.5,
            width: 0.5,
            y: 10.0,
            height: 20.0,
        });
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains(r#""kind":"fractional""#));
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
        assert_eq!(back.y(), 10.0);
        assert_eq!(back.height(), 20.0);
    }
}
