//! Memoized layouts keyed by content hash.
//!
//! UI layers often recompute the same day on every refresh. [`LayoutCache`]
//! is an optional, caller-owned memo table: the key is a hash of the item
//! snapshot, the engine configuration and the strategy name. A changed
//! snapshot hashes to a different key, so stale entries are never served.
//!
//! Collisions are caught by comparing the stored snapshot before a hit is
//! returned. The table is bounded; the oldest entry is evicted first.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};

use log::trace;

use crate::config::LayoutConfig;
use crate::layout::LayoutEngine;
use crate::models::{DayLayout, ScheduledEntry, ScheduledItem};

/// Default number of cached layouts.
pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
struct CacheEntry {
    snapshot: Vec<ScheduledItem>,
    config: LayoutConfig,
    strategy: &'static str,
    layout: DayLayout,
}

/// Bounded memo table of computed layouts.
///
/// # Example
///
/// ```
/// use u_calendar_layout::cache::LayoutCache;
/// use u_calendar_layout::layout::LayoutEngine;
/// use u_calendar_layout::models::ScheduledItem;
///
/// let engine = LayoutEngine::default();
/// let items = vec![ScheduledItem::new("A").with_span(0, 1000)];
///
/// let mut cache = LayoutCache::new();
/// cache.layout(&engine, &items);
/// cache.layout(&engine, &items);
/// assert_eq!(cache.hits(), 1);
/// assert_eq!(cache.misses(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutCache {
    entries: HashMap<u64, CacheEntry>,
    order: VecDeque<u64>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    /// Creates a cache with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a cache holding at most `capacity` layouts (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the cached layout for `items`, computing it on a miss.
    pub fn layout<T: ScheduledEntry>(&mut self, engine: &LayoutEngine, items: &[T]) -> &DayLayout {
        let snapshot: Vec<ScheduledItem> = items.iter().map(snapshot_of).collect();
        let key = content_key(&snapshot, engine);

        let fresh = self.entries.get(&key).is_some_and(|entry| {
            entry.strategy == engine.strategy_name()
                && entry.config == *engine.config()
                && entry.snapshot == snapshot
        });

        if fresh {
            self.hits += 1;
            trace!(key; "layout cache hit");
        } else {
            self.misses += 1;
            trace!(key; "layout cache miss");
            let entry = CacheEntry {
                layout: engine.layout(items),
                snapshot,
                config: engine.config().clone(),
                strategy: engine.strategy_name(),
            };
            if self.entries.insert(key, entry).is_none() {
                self.order.push_back(key);
            }
            self.evict();
        }

        &self.entries[&key].layout
    }

    /// Number of cached layouts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that required a computation.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drops every cached layout. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn evict(&mut self) {
        while self.entries.len() > self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
    }
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

fn snapshot_of<T: ScheduledEntry>(item: &T) -> ScheduledItem {
    ScheduledItem {
        id: item.id().to_string(),
        start_ms: item.start_ms(),
        end_ms: item.end_ms(),
    }
}

fn content_key(snapshot: &[ScheduledItem], engine: &LayoutEngine) -> u64 {
    let mut hasher = DefaultHasher::new();
    snapshot.hash(&mut hasher);
    engine.config().hash_into(&mut hasher);
    engine.strategy_name().hash(&mut hasher);
    hasher.finish()
}
