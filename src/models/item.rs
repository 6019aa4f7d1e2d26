//! Scheduled item records consumed by the layout engine.
//!
//! The engine never binds to a storage or UI record type. It reads items
//! through [`ScheduledEntry`], a read-only view of the three fields it
//! needs. [`ScheduledItem`] is a ready-made owned implementation.

use serde::{Deserialize, Serialize};

/// Read-only view of a scheduled item.
///
/// Implement this for the caller's own record type to lay it out without
/// copying. Instants are milliseconds relative to the consumer's epoch.
pub trait ScheduledEntry {
    /// Stable item identity.
    fn id(&self) -> &str;

    /// Start instant (ms). `None` = unscheduled.
    fn start_ms(&self) -> Option<i64>;

    /// End instant (ms). `None` = open-ended.
    fn end_ms(&self) -> Option<i64>;
}

impl<T: ScheduledEntry + ?Sized> ScheduledEntry for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn start_ms(&self) -> Option<i64> {
        (**self).start_ms()
    }

    fn end_ms(&self) -> Option<i64> {
        (**self).end_ms()
    }
}

/// An owned scheduled item.
///
/// # Example
/// ```
/// use u_calendar_layout::models::{ScheduledItem, MS_PER_HOUR};
///
/// let standup = ScheduledItem::new("standup").with_span(9 * MS_PER_HOUR, 10 * MS_PER_HOUR);
/// let todo = ScheduledItem::new("todo"); // no start, not laid out
/// assert!(standup.is_scheduled());
/// assert!(!todo.is_scheduled());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ScheduledItem {
    /// Unique item identifier.
    pub id: String,
    /// Start instant (ms). `None` = unscheduled.
    pub start_ms: Option<i64>,
    /// End instant (ms). `None` = open-ended.
    pub end_ms: Option<i64>,
}

impl ScheduledItem {
    /// Creates an unscheduled item with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            start_ms: None,
            end_ms: None,
        }
    }

    /// Sets the start instant.
    pub fn with_start(mut self, start_ms: i64) -> Self {
        self.start_ms = Some(start_ms);
        self
    }

    /// Sets the end instant.
    pub fn with_end(mut self, end_ms: i64) -> Self {
        self.end_ms = Some(end_ms);
        self
    }

    /// Sets both start and end.
    pub fn with_span(self, start_ms: i64, end_ms: i64) -> Self {
        self.with_start(start_ms).with_end(end_ms)
    }

    /// Whether the item has a start instant.
    pub fn is_scheduled(&self) -> bool {
        self.start_ms.is_some()
    }
}

impl ScheduledEntry for ScheduledItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn start_ms(&self) -> Option<i64> {
        self.start_ms
    }

    fn end_ms(&self) -> Option<i64> {
        self.end_ms
    }
}
