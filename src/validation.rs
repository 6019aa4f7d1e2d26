//! Input and output checks for day layouts.
//!
//! The engine itself never rejects input. These checks are for callers that
//! want diagnostics about their data, and for asserting the layout
//! invariants:
//! - Overlapping items of one cluster never share a column
//! - Every member of a cluster reports the same `total_columns`
//! - `total_columns == max(column) + 1`
//! - Items of different clusters never overlap

use std::collections::{BTreeMap, HashSet};

use crate::models::{DayLayout, LayoutResult, ScheduledEntry};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two items share the same ID.
    DuplicateId,
    /// An item has no start instant and will not be laid out.
    MissingStart,
    /// An item's explicit end is not after its start.
    InvalidRange,
    /// Two overlapping items of one cluster share a column.
    ColumnConflict,
    /// A cluster's `total_columns` disagrees with its columns.
    ColumnCountMismatch,
    /// Items of different clusters overlap.
    ClusterOverlap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks scheduled items before layout.
///
/// Checks:
/// 1. No duplicate item IDs
/// 2. Every item has a start instant
/// 3. Explicit ends lie after their starts
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_items<T: ScheduledEntry>(items: &[T]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for item in items {
        if !ids.insert(item.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate item ID: {}", item.id()),
            ));
        }

        match (item.start_ms(), item.end_ms()) {
            (None, _) => errors.push(ValidationError::new(
                ValidationErrorKind::MissingStart,
                format!("Item '{}' has no start instant", item.id()),
            )),
            (Some(start), Some(end)) if end <= start => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRange,
                format!(
                    "Item '{}' ends at {} which is not after its start {}",
                    item.id(),
                    end,
                    start
                ),
            )),
            _ => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks the invariants of a computed layout.
pub fn validate_layout(layout: &DayLayout) -> ValidationResult {
    let mut errors = Vec::new();

    let mut clusters: BTreeMap<usize, Vec<&LayoutResult>> = BTreeMap::new();
    for r in &layout.results {
        clusters.entry(r.cluster).or_default().push(r);
    }

    for (&cluster, members) in &clusters {
        let max_column = members.iter().map(|r| r.column).max().unwrap_or(0);
        for r in members {
            if r.total_columns != max_column + 1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ColumnCountMismatch,
                    format!(
                        "Item '{}' in cluster {} reports {} columns, expected {}",
                        r.item_id,
                        cluster,
                        r.total_columns,
                        max_column + 1
                    ),
                ));
            }
        }

        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                if a.column == b.column && a.overlaps(b) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ColumnConflict,
                        format!(
                            "Items '{}' and '{}' overlap in column {} of cluster {}",
                            a.item_id, b.item_id, a.column, cluster
                        ),
                    ));
                }
            }
        }
    }

    for (i, a) in layout.results.iter().enumerate() {
        for b in &layout.results[i + 1..] {
            if a.cluster != b.cluster && a.overlaps(b) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ClusterOverlap,
                    format!(
                        "Items '{}' (cluster {}) and '{}' (cluster {}) overlap",
                        a.item_id, a.cluster, b.item_id, b.cluster
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
