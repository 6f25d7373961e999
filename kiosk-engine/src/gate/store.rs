//! Counter Store
//!
//! Key-value backing for the rate/quota gate: timestamp lists for
//! sliding windows and plain integers for daily quotas. The gate only
//! talks to the trait, so the store can be swapped (in-memory,
//! persistent, distributed) without touching gate logic. Keys are
//! never deleted; lists shrink only through lazy pruning on check.

use parking_lot::Mutex;
use std::collections::HashMap;

/// Storage abstraction for gate counters
pub trait CounterStore: Send + Sync {
    fn get_timestamps(&self, key: &str) -> Vec<i64>;
    fn put_timestamps(&self, key: &str, timestamps: Vec<i64>);
    fn get_count(&self, key: &str) -> u32;
    fn put_count(&self, key: &str, count: u32);
}

/// In-memory store scoped to one kiosk session/device
///
/// Read-modify-write races between concurrent callers of the same
/// session are accepted; the worst case is a slightly generous limit.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    timestamps: Mutex<HashMap<String, Vec<i64>>>,
    counts: Mutex<HashMap<String, u32>>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterStore for MemoryCounterStore {
    fn get_timestamps(&self, key: &str) -> Vec<i64> {
        self.timestamps.lock().get(key).cloned().unwrap_or_default()
    }

    fn put_timestamps(&self, key: &str, timestamps: Vec<i64>) {
        self.timestamps.lock().insert(key.to_string(), timestamps);
    }

    fn get_count(&self, key: &str) -> u32 {
        self.counts.lock().get(key).copied().unwrap_or(0)
    }

    fn put_count(&self, key: &str, count: u32) {
        self.counts.lock().insert(key.to_string(), count);
    }
}
