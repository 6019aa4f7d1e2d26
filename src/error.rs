//! Error types for layout configuration.
//!
//! The layout algorithm itself has no failure paths. Errors only arise when a
//! caller asks for strict configuration checking.

use thiserror::Error;

/// A rejected layout configuration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("pixels_per_hour must be positive and finite, got {0}")]
    InvalidScale(f64),

    #[error("container_width must be positive and finite, got {0}")]
    InvalidContainerWidth(f64),

    #[error("{field} must be non-negative and finite, got {value}")]
    InvalidLength { field: &'static str, value: f64 },

    #[error("timeline_start_hour must be within 0..=23, got {0}")]
    InvalidStartHour(u32),

    #[error("default_duration_ms must be positive, got {0}")]
    InvalidDefaultDuration(i64),
}
