//! FIFO Evictor Module
//!
//! First-in-first-out eviction: the longest-resident touched key is
//! proposed first.

use std::collections::VecDeque;

use crate::cache::Evictor;

// == FIFO Evictor ==
/// FIFO eviction policy backed by an append-only queue.
///
/// `touch_key` appends to the back; `evict` pops from the front.
/// Re-touching a key that is already queued appends a duplicate entry
/// rather than reordering; the engine's stale-candidate skip resolves
/// the duplicates, not the policy.
#[derive(Debug, Default)]
pub struct FifoEvictor {
    /// Keys in touch order, oldest at the front
    queue: VecDeque<String>,
}

impl FifoEvictor {
    // == Constructor ==
    /// Creates a new empty FIFO evictor.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    // == Length ==
    /// Returns the number of queued candidates, duplicates included.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Evictor for FifoEvictor {
    fn touch_key(&mut self, key: &str) {
        self.queue.push_back(key.to_string());
    }

    fn evict(&mut self) -> Option<String> {
        self.queue.pop_front()
    }
}
