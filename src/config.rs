//! Layout configuration.
//!
//! [`LayoutConfig`] carries the timeline scale, container geometry and
//! defaulting policy. It is passed per call and implements
//! [`serde::Deserialize`] so callers can load it from any serde format.
//!
//! # Robustness
//! Non-positive or non-finite values are a caller precondition violation.
//! [`LayoutConfig::sanitized`] clamps them to safe minimums so the engine can
//! always render; [`LayoutConfig::validate`] reports them instead.
//!
//! # Example
//!
//! ```
//! use u_calendar_layout::config::LayoutConfig;
//!
//! let config = LayoutConfig::default()
//!     .with_timeline_start_hour(7)
//!     .with_pixels_per_hour(48.0)
//!     .with_container_width(360.0);
//! assert!(config.validate().is_ok());
//! ```

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{FrameMode, DEFAULT_DURATION_MS};

/// Smallest scale or width the sanitizer clamps to.
const MIN_POSITIVE: f64 = 1.0;

/// Geometry and defaulting parameters for one layout computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Instant of local midnight of the laid-out day (ms).
    pub day_origin_ms: i64,
    /// Hour of day at which the timeline's `y = 0` sits.
    pub timeline_start_hour: u32,
    /// Vertical scale (px per hour).
    pub pixels_per_hour: f64,
    /// Width available to all columns (px).
    pub container_width: f64,
    /// Horizontal inset applied on each side of a block (px).
    pub item_padding_px: f64,
    /// Floor for block height so short items stay legible (px).
    pub minimum_block_height_px: f64,
    /// Floor for block width in narrow columns (px).
    pub minimum_block_width_px: f64,
    /// Length given to items without a usable end (ms).
    pub default_duration_ms: i64,
    /// Coordinate convention for emitted frames.
    pub frame_mode: FrameMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            day_origin_ms: 0,
            timeline_start_hour: 0,
            pixels_per_hour: 60.0,
            container_width: 320.0,
            item_padding_px: 1.0,
            minimum_block_height_px: 20.0,
            minimum_block_width_px: 4.0,
            default_duration_ms: DEFAULT_DURATION_MS,
            frame_mode: FrameMode::Absolute,
        }
    }
}

impl LayoutConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the instant of local midnight.
    pub fn with_day_origin(mut self, day_origin_ms: i64) -> Self {
        self.day_origin_ms = day_origin_ms;
        self
    }

    /// Sets the hour at which the timeline starts.
    pub fn with_timeline_start_hour(mut self, hour: u32) -> Self {
        self.timeline_start_hour = hour;
        self
    }

    /// Sets the vertical scale.
    pub fn with_pixels_per_hour(mut self, pixels_per_hour: f64) -> Self {
        self.pixels_per_hour = pixels_per_hour;
        self
    }

    /// Sets the container width.
    pub fn with_container_width(mut self, container_width: f64) -> Self {
        self.container_width = container_width;
        self
    }

    /// Sets the horizontal item padding.
    pub fn with_item_padding(mut self, padding_px: f64) -> Self {
        self.item_padding_px = padding_px;
        self
    }

    /// Sets the minimum block height.
    pub fn with_minimum_block_height(mut self, height_px: f64) -> Self {
        self.minimum_block_height_px = height_px;
        self
    }

    /// Sets the minimum block width.
    pub fn with_minimum_block_width(mut self, width_px: f64) -> Self {
        self.minimum_block_width_px = width_px;
        self
    }

    /// Sets the default duration for open-ended items.
    pub fn with_default_duration(mut self, duration_ms: i64) -> Self {
        self.default_duration_ms = duration_ms;
        self
    }

    /// Sets the frame coordinate convention.
    pub fn with_frame_mode(mut self, frame_mode: FrameMode) -> Self {
        self.frame_mode = frame_mode;
        self
    }

    /// Instant at which the timeline's `y = 0` sits (ms).
    pub fn timeline_origin_ms(&self) -> i64 {
        self.day_origin_ms
            .saturating_add(i64::from(self.timeline_start_hour) * crate::models::MS_PER_HOUR)
    }

    /// Checks every field, returning the first rejected value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pixels_per_hour.is_finite() && self.pixels_per_hour > 0.0) {
            return Err(ConfigError::InvalidScale(self.pixels_per_hour));
        }
        if !(self.container_width.is_finite() && self.container_width > 0.0) {
            return Err(ConfigError::InvalidContainerWidth(self.container_width));
        }
        for (field, value) in [
            ("item_padding_px", self.item_padding_px),
            ("minimum_block_height_px", self.minimum_block_height_px),
            ("minimum_block_width_px", self.minimum_block_width_px),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidLength { field, value });
            }
        }
        if self.timeline_start_hour > 23 {
            return Err(ConfigError::InvalidStartHour(self.timeline_start_hour));
        }
        if self.default_duration_ms <= 0 {
            return Err(ConfigError::InvalidDefaultDuration(self.default_duration_ms));
        }
        Ok(())
    }

    /// Returns a copy with every out-of-range value clamped.
    ///
    /// A valid configuration is returned unchanged.
    pub fn sanitized(&self) -> Self {
        Self {
            day_origin_ms: self.day_origin_ms,
            timeline_start_hour: self.timeline_start_hour.min(23),
            pixels_per_hour: positive_or(self.pixels_per_hour, MIN_POSITIVE),
            container_width: positive_or(self.container_width, MIN_POSITIVE),
            item_padding_px: non_negative(self.item_padding_px),
            minimum_block_height_px: non_negative(self.minimum_block_height_px),
            minimum_block_width_px: non_negative(self.minimum_block_width_px),
            default_duration_ms: self.default_duration_ms.max(1),
            frame_mode: self.frame_mode,
        }
    }

    /// Feeds the configuration into a hasher (floats by bit pattern).
    pub(crate) fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.day_origin_ms.hash(state);
        self.timeline_start_hour.hash(state);
        self.pixels_per_hour.to_bits().hash(state);
        self.container_width.to_bits().hash(state);
        self.item_padding_px.to_bits().hash(state);
        self.minimum_block_height_px.to_bits().hash(state);
        self.minimum_block_width_px.to_bits().hash(state);
        self.default_duration_ms.hash(state);
        self.frame_mode.hash(state);
    }
}

fn positive_or(value: f64, floor: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        floor
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
