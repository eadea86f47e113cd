//! Bounded, insertion-ordered history of computed results.
//!
//! Entries are keyed by `"{type}_{timestamp}"`. When the store grows past its
//! capacity the single oldest entry is evicted, regardless of type. Two
//! stores of the same type within one millisecond share a key: the later
//! result replaces the earlier one in place and keeps its position.
//!
//! [`ResultStore`] is a plain owned value; wrap it in [`SharedResultStore`]
//! when several callers write to one history.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::record::ComputationRecord;
use crate::timestamp::format_iso8601_millis;

/// Capacity used by [`ResultStore::default`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Time source for entry timestamps.
pub trait Clock: Send + Sync {
    /// Time since the Unix epoch.
    fn now(&self) -> Duration;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}

/// One stored result.
#[derive(Debug, Clone, Serialize)]
pub struct StoredResult<T> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub result: T,
    /// ISO-8601, millisecond resolution.
    pub timestamp: String,
}

/// FIFO-bounded result history.
pub struct ResultStore<T = ComputationRecord> {
    entries: VecDeque<StoredResult<T>>,
    capacity: usize,
    clock: Box<dyn Clock>,
}

impl<T> Default for ResultStore<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T> ResultStore<T> {
    /// Empty store holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self::with_clock(capacity, SystemClock)
    }

    /// Empty store stamping entries with `clock`.
    pub fn with_clock(capacity: usize, clock: impl Clock + 'static) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            clock: Box::new(clock),
        }
    }

    /// Record `result` under `kind` and return its identifier.
    pub fn store(&mut self, kind: &str, result: T) -> String {
        let timestamp = format_iso8601_millis(self.clock.now());
        let id = format!("{kind}_{timestamp}");

        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == id) {
            log::warn!("result id collision on {id}; replacing earlier entry");
            existing.kind = kind.to_string();
            existing.result = result;
            existing.timestamp = timestamp;
            return id;
        }

        self.entries.push_back(StoredResult {
            id: id.clone(),
            kind: kind.to_string(),
            result,
            timestamp,
        });
        if self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                log::debug!("store full ({}), evicted {}", self.capacity, evicted.id);
            }
        }
        id
    }

    /// Entry with identifier `id`.
    pub fn get(&self, id: &str) -> Option<&StoredResult<T>> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Clone> ResultStore<T> {
    /// All entries in insertion order, optionally only those of `kind`.
    pub fn query(&self, kind: Option<&str>) -> Vec<(String, StoredResult<T>)> {
        self.entries
            .iter()
            .filter(|e| kind.is_none_or(|k| e.kind == k))
            .map(|e| (e.id.clone(), e.clone()))
            .collect()
    }
}

/// [`ResultStore`] behind a mutex, so store and eviction are serialized.
pub struct SharedResultStore<T = ComputationRecord> {
    inner: Mutex<ResultStore<T>>,
}

impl<T> Default for SharedResultStore<T> {
    fn default() -> Self {
        Self::new(ResultStore::default())
    }
}

impl<T> SharedResultStore<T> {
    pub fn new(store: ResultStore<T>) -> Self {
        Self {
            inner: Mutex::new(store),
        }
    }

    pub fn store(&self, kind: &str, result: T) -> String {
        self.lock().store(kind, result)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Unwrap into the plain store.
    pub fn into_inner(self) -> ResultStore<T> {
        self.inner.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ResultStore<T>> {
        // A panic while holding the lock leaves at most one extra entry.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T: Clone> SharedResultStore<T> {
    pub fn query(&self, kind: Option<&str>) -> Vec<(String, StoredResult<T>)> {
        self.lock().query(kind)
    }

    pub fn get(&self, id: &str) -> Option<StoredResult<T>> {
        self.lock().get(id).cloned()
    }
}
