//! # Task Management
//!
//! Budgeted, single-threaded work scheduling for the chunk pipeline.
//!
//! ## Task Lifecycle
//! 1. Work items are published with `GenerationQueue::push()` when a chunk is first created
//! 2. Each tick drains at most a fixed number of items in FIFO order
//! 3. Items whose chunk was evicted in the meantime are cancelled and skipped
//!
//! Waiting is expressed purely as queue residency: nothing blocks, and a tick never
//! does more than its budget allows. Cancellation is lazy: a cancelled item stays in
//! the deque but is dropped when it reaches the front, so eviction stays O(1).
//! Every push is stamped with a sequence number, so a key cancelled and pushed
//! again waits behind everything queued before the second push.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::engine_state::voxels::chunk::ChunkCoord;

/// FIFO queue of pending work keyed by `K`, with each key present at most once.
#[derive(Debug)]
pub struct BudgetedQueue<K> {
    queued_tasks: VecDeque<(K, u64)>,
    /// Live keys and the sequence number of their current entry.
    live: HashMap<K, u64>,
    next_sequence: u64,
}

/// The queue of chunks awaiting terrain generation.
pub type GenerationQueue = BudgetedQueue<ChunkCoord>;

impl<K: Copy + Eq + Hash> Default for BudgetedQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> BudgetedQueue<K> {
    pub fn new() -> Self {
        BudgetedQueue {
            queued_tasks: VecDeque::new(),
            live: HashMap::new(),
            next_sequence: 0,
        }
    }

    /// Publishes a key at the back of the queue.
    ///
    /// # Returns
    /// `false` if the key was already pending.
    pub fn push(&mut self, key: K) -> bool {
        if self.live.contains_key(&key) {
            return false;
        }
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.live.insert(key, sequence);
        self.queued_tasks.push_back((key, sequence));
        true
    }

    /// Withdraws a pending key. Its stale entry is skipped when popped.
    pub fn cancel(&mut self, key: &K) -> bool {
        self.live.remove(key).is_some()
    }

    /// Pops the oldest live key.
    pub fn pop(&mut self) -> Option<K> {
        while let Some((key, sequence)) = self.queued_tasks.pop_front() {
            if self.live.get(&key) == Some(&sequence) {
                self.live.remove(&key);
                return Some(key);
            }
        }
        None
    }

    /// Pops live keys in order, handing each to `process`, until `budget` of them
    /// report that they did work or the queue is exhausted.
    ///
    /// # Returns
    /// The number of keys for which `process` returned `true`.
    pub fn drain_budget(&mut self, budget: usize, mut process: impl FnMut(K) -> bool) -> usize {
        let mut processed = 0;
        while processed < budget {
            let Some(key) = self.pop() else {
                break;
            };
            if process(key) {
                processed += 1;
            }
        }
        processed
    }

    pub fn contains(&self, key: &K) -> bool {
        self.live.contains_key(key)
    }

    /// Number of live pending keys.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.queued_tasks.clear();
        self.live.clear();
    }
}
