//! Eviction Policy Module
//!
//! Defines the capability interface an eviction policy must implement.

use std::fmt::Debug;

// == Evictor Trait ==
/// An eviction policy: tracks candidate keys and proposes victims.
///
/// The policy never owns values and never touches the cache table; it
/// only records which keys have been touched and answers "who to evict
/// next". Its candidates are a hint, not a source of truth: a proposed
/// key may already have been deleted from the table (stale), and a key
/// may be recorded more than once. The engine resolves both cases by
/// skipping candidates that are no longer present.
pub trait Evictor: Debug + Send + Sync {
    /// Records that `key` is now a live candidate for future eviction.
    ///
    /// Called whenever a key is inserted or re-inserted. Side effect
    /// only; never fails.
    fn touch_key(&mut self, key: &str);

    /// Returns the next candidate key in policy order, removing it from
    /// the policy's own bookkeeping, or `None` when no candidates
    /// remain.
    ///
    /// `None` is the only "no candidate" signal. The empty string is a
    /// legal key and must never be used as a sentinel.
    fn evict(&mut self) -> Option<String>;
}
