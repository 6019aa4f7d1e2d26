//! Day-view calendar layout for the U-Engine ecosystem.
//!
//! Given the time-boxed items of one calendar day, computes a non-overlapping
//! arrangement on a time axis × column axis so concurrent items render
//! side-by-side, the way consumer calendars lay out overlapping appointments.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ScheduledItem`, `ScheduledEntry`, `Interval`,
//!   `LayoutResult`, `Frame`, `DayLayout`
//! - **`layout`**: Pipeline: extraction, overlap grouping, column strategies,
//!   geometry, and the `LayoutEngine` facade
//! - **`config`**: `LayoutConfig` (scale, container, padding, floors)
//! - **`validation`**: Input diagnostics and layout invariant checks
//! - **`cache`**: Optional content-hash memo table for repeated layouts
//!
//! # Architecture
//!
//! The engine is a pure function of its input snapshot: no I/O, no global
//! state, no failure paths. Degenerate input is absorbed by defaulting
//! (missing ends get one hour) rather than reported.
//!
//! # References
//!
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8
//! - Kleinberg & Tardos (2005), "Algorithm Design", §4.1 (Interval Partitioning)

pub mod cache;
pub mod config;
mod error;
pub mod layout;
pub mod models;
pub mod validation;

pub use error::ConfigError;
pub use layout::layout;
