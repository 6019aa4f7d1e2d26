//! Time-to-pixel geometry.
//!
//! # Formulas
//!
//! | Quantity | Definition |
//! |----------|-----------|
//! | y | minutes since timeline start × px/hour ÷ 60 |
//! | height | max(min height, duration minutes × px/hour ÷ 60) |
//! | column width | container width ÷ total columns |
//! | x | column × column width + padding |
//! | width | max(min width, column width − 2 × padding) |
//!
//! Fractional frames divide the horizontal quantities by the container
//! width; the vertical axis stays in pixels.

use crate::config::LayoutConfig;
use crate::models::{FractionalFrame, Frame, FrameMode, PixelFrame, MS_PER_HOUR};

/// Maps intervals and columns to frames.
///
/// Built from a sanitized configuration, so every emitted frame has finite,
/// non-negative width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryMapper {
    timeline_origin_ms: i64,
    pixels_per_hour: f64,
    container_width: f64,
    item_padding_px: f64,
    minimum_block_height_px: f64,
    minimum_block_width_px: f64,
}

impl GeometryMapper {
    /// Creates a mapper, clamping out-of-range configuration values.
    pub fn new(config: &LayoutConfig) -> Self {
        let config = config.sanitized();
        Self {
            timeline_origin_ms: config.timeline_origin_ms(),
            pixels_per_hour: config.pixels_per_hour,
            container_width: config.container_width,
            item_padding_px: config.item_padding_px,
            minimum_block_height_px: config.minimum_block_height_px,
            minimum_block_width_px: config.minimum_block_width_px,
        }
    }

    /// Container width the mapper divides into columns (px).
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Top edge and height (px) for a time span.
    ///
    /// Items starting before the timeline start get a negative `y`.
    pub fn vertical(&self, start_ms: i64, end_ms: i64) -> (f64, f64) {
        let y = self.ms_to_px(start_ms.saturating_sub(self.timeline_origin_ms));
        let span = self.ms_to_px(end_ms.saturating_sub(start_ms).max(0));
        (y, span.max(self.minimum_block_height_px))
    }

    /// Left edge and width (px) for a column.
    ///
    /// A `total_columns` of zero is treated as one.
    pub fn horizontal(&self, column: usize, total_columns: usize) -> (f64, f64) {
        let column_width = self.container_width / total_columns.max(1) as f64;
        let x = column as f64 * column_width + self.item_padding_px;
        let width = (column_width - 2.0 * self.item_padding_px).max(self.minimum_block_width_px);
        (x, width)
    }

    /// Absolute pixel frame.
    pub fn pixel_frame(
        &self,
        start_ms: i64,
        end_ms: i64,
        column: usize,
        total_columns: usize,
    ) -> PixelFrame {
        let (y, height) = self.vertical(start_ms, end_ms);
        let (x, width) = self.horizontal(column, total_columns);
        PixelFrame {
            x,
            y,
            width,
            height,
        }
    }

    /// Frame with horizontal extent as fractions of the container width.
    pub fn fractional_frame(
        &self,
        start_ms: i64,
        end_ms: i64,
        column: usize,
        total_columns: usize,
    ) -> FractionalFrame {
        let px = self.pixel_frame(start_ms, end_ms, column, total_columns);
        FractionalFrame {
            x: px.x / self.container_width,
            width: px.width / self.container_width,
            y: px.y,
            height: px.height,
        }
    }

    /// Frame in the requested coordinate convention.
    pub fn frame(
        &self,
        mode: FrameMode,
        start_ms: i64,
        end_ms: i64,
        column: usize,
        total_columns: usize,
    ) -> Frame {
        match mode {
            FrameMode::Absolute => {
                Frame::Absolute(self.pixel_frame(start_ms, end_ms, column, total_columns))
            }
            FrameMode::Fractional => {
                Frame::Fractional(self.fractional_frame(start_ms, end_ms, column, total_columns))
            }
        }
    }

    fn ms_to_px(&self, ms: i64) -> f64 {
        ms as f64 * self.pixels_per_hour / MS_PER_HOUR as f64
    }
}

impl Default for GeometryMapper {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}
