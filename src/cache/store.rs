//! Cache Store Module
//!
//! Main cache engine combining the key/value table with byte-capacity
//! accounting and pluggable eviction.

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::cache::{CacheStats, CacheValue, Evictor};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded-memory key/value store.
///
/// Capacity is measured in bytes of stored values (keys are not
/// counted); the invariant `space_used() <= maxmem` holds after every
/// successful operation. When an insert would exceed `maxmem`, the
/// configured evictor proposes victims until the new value fits. A
/// store built without an evictor performs no evictions and rejects
/// inserts that would exceed capacity.
///
/// The key-hashing strategy is a type parameter on the table,
/// defaulting to the standard string hash.
#[derive(Debug)]
pub struct CacheStore<S: BuildHasher = RandomState> {
    /// Key-value storage
    entries: HashMap<String, CacheValue, S>,
    /// Eviction policy; None disables eviction entirely
    evictor: Option<Box<dyn Evictor>>,
    /// Get/hit/eviction counters
    stats: CacheStats,
    /// Byte ceiling on the sum of stored value sizes
    maxmem: usize,
    /// Running total of stored value sizes, kept in lockstep with `entries`
    mem_used: usize,
}

impl CacheStore<RandomState> {
    // == Constructor ==
    /// Creates a new CacheStore with the given byte capacity and
    /// optional eviction policy, using the default key hasher.
    pub fn new(maxmem: usize, evictor: Option<Box<dyn Evictor>>) -> Self {
        Self::with_hasher(maxmem, evictor, RandomState::new())
    }
}

impl<S: BuildHasher> CacheStore<S> {
    // == Constructor With Hasher ==
    /// Creates a new CacheStore with a custom key-hashing strategy.
    pub fn with_hasher(maxmem: usize, evictor: Option<Box<dyn Evictor>>, hasher: S) -> Self {
        Self {
            entries: HashMap::with_hasher(hasher),
            evictor,
            stats: CacheStats::new(),
            maxmem,
            mem_used: 0,
        }
    }

    // == Set ==
    /// Stores a deep copy of `value` under `key`.
    ///
    /// If the key already exists, the old value is freed and replaced.
    /// If the insert would push `space_used()` past `maxmem`, the
    /// evictor is asked for victims until the value fits; candidates no
    /// longer present in the table (deleted, overwritten, or the
    /// inserting key itself) are skipped.
    ///
    /// Evictions performed while making room are committed even when
    /// the overall set ultimately fails (evictor exhausted): freed
    /// capacity is kept rather than rolled back. The new value is
    /// inserted all-or-nothing.
    ///
    /// # Errors
    /// - `ValueTooLarge` if `value.size() > maxmem` (rejected before
    ///   any mutation, including the evictor notification)
    /// - `NoEvictionPolicy` if room is needed and no evictor is set
    /// - `EvictionExhausted` if the evictor runs out of candidates
    pub fn set(&mut self, key: String, value: CacheValue) -> Result<()> {
        let size = value.size();

        // No eviction sequence can ever make this fit
        if size > self.maxmem {
            return Err(CacheError::ValueTooLarge {
                size,
                maxmem: self.maxmem,
            });
        }

        // Register the key before the capacity check; it may surface as
        // its own (stale) candidate below
        if let Some(evictor) = self.evictor.as_mut() {
            evictor.touch_key(&key);
        }

        // An overwrite replaces the existing entry, so its size is
        // credited up front rather than double-counted
        let replaced = self.entries.get(&key).map_or(0, CacheValue::size);
        let mut projected = self.mem_used + size - replaced;

        while projected > self.maxmem {
            let evictor = self
                .evictor
                .as_mut()
                .ok_or(CacheError::NoEvictionPolicy)?;
            let candidate = evictor.evict().ok_or(CacheError::EvictionExhausted)?;

            match self.entries.remove(&candidate) {
                Some(victim) => {
                    self.mem_used -= victim.size();
                    self.stats.record_eviction();
                    // Evicting the key being overwritten: its size was
                    // already credited via `replaced`
                    if candidate != key {
                        projected -= victim.size();
                    }
                }
                // Stale candidate: deleted, already evicted, or the
                // not-yet-inserted key itself
                None => continue,
            }
        }

        // Free-and-replace for overwrites that survived the loop
        if let Some(previous) = self.entries.remove(&key) {
            self.mem_used -= previous.size();
        }

        self.mem_used += size;
        self.entries.insert(key, value);

        debug_assert_eq!(
            self.mem_used,
            self.entries.values().map(CacheValue::size).sum::<usize>()
        );
        debug_assert!(self.mem_used <= self.maxmem);
        Ok(())
    }

    // == Get ==
    /// Retrieves a deep copy of the value stored under `key`.
    ///
    /// Every call counts toward the get statistics; a found value also
    /// counts as a hit. A get is not a "touch": it never refreshes the
    /// evictor's ordering (FIFO stays FIFO, not LRU).
    pub fn get(&mut self, key: &str) -> Option<CacheValue> {
        self.stats.record_get();

        let value = self.entries.get(key)?;
        self.stats.record_hit();
        Some(value.clone())
    }

    // == Delete ==
    /// Removes and frees the entry under `key`.
    ///
    /// Returns false if the key was absent. The evictor is not told;
    /// any candidate it still holds for this key is skipped as stale by
    /// the next eviction loop.
    pub fn del(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(value) => {
                self.mem_used -= value.size();
                true
            }
            None => false,
        }
    }

    // == Reset ==
    /// Frees every stored value, empties the table, and zeroes the
    /// statistics.
    ///
    /// The evictor's bookkeeping is left alone; residual candidates are
    /// skipped as stale later. Returns whether the table ended empty.
    pub fn reset(&mut self) -> bool {
        self.entries.clear();
        self.mem_used = 0;
        self.stats.reset();

        self.entries.is_empty()
    }

    // == Space Used ==
    /// Returns the total bytes used by stored values (not keys).
    ///
    /// O(1): maintained incrementally on insert, evict, delete and
    /// reset instead of recomputed by traversal.
    pub fn space_used(&self) -> usize {
        self.mem_used
    }

    // == Hit Rate ==
    /// Returns the fraction of gets that found a value (0.0 when no
    /// gets have been made).
    pub fn hit_rate(&self) -> f64 {
        self.stats.hit_rate()
    }

    // == Max Mem ==
    /// Returns the byte capacity fixed at construction.
    pub fn maxmem(&self) -> usize {
        self.maxmem
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
