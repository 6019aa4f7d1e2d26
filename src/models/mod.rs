//! Calendar layout domain models.
//!
//! Provides the input records, the normalized intervals the algorithm works
//! on, and the layout output consumed by a renderer.
//!
//! # Pipeline Mapping
//!
//! | Stage | Input | Output |
//! |-------|-------|--------|
//! | Extraction | [`ScheduledEntry`] | [`Interval`] |
//! | Grouping / columns | [`Interval`] | cluster, column |
//! | Geometry | column, interval | [`Frame`] |
//! | Facade | [`ScheduledEntry`] | [`DayLayout`] of [`LayoutResult`] |

mod interval;
mod item;
mod layout;

pub use interval::{Interval, DEFAULT_DURATION_MS, MS_PER_HOUR, MS_PER_MINUTE};
pub use item::{ScheduledEntry, ScheduledItem};
pub use layout::{DayLayout, FractionalFrame, Frame, FrameMode, LayoutResult, PixelFrame};
