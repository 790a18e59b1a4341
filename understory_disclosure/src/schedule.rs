// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred work on a virtual millisecond clock.
//!
//! The queue stands in for the platform's task queue: work that must wait for the next
//! tick (view mounting, item registration) and debounce timers are explicit entries here
//! instead of nested callbacks. Entries are ordered by due time and then by insertion, so
//! same-time work runs first-in first-out.
//!
//! A *tick* runs only the entries that were ready when it started. Anything scheduled while
//! a tick runs waits for the next one, which is what gives multi-step sequences such as
//! "mount, then focus" their ordering.
//!
//! ```rust
//! use understory_disclosure::schedule::TaskQueue;
//!
//! let mut queue = TaskQueue::new();
//! queue.defer("mount");
//! let timer = queue.schedule_after(350, "clear search");
//!
//! let barrier = queue.barrier();
//! assert_eq!(queue.pop_ready(barrier), Some("mount"));
//! assert_eq!(queue.pop_ready(barrier), None);
//!
//! queue.set_now(400);
//! assert_eq!(queue.cancel(timer), Some("clear search"));
//! assert!(queue.is_empty());
//! ```

use alloc::collections::BTreeMap;

/// Handle to a queued entry, usable with [`TaskQueue::cancel`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskKey {
    due: u64,
    seq: u64,
}

impl TaskKey {
    /// The time (in milliseconds) at which the entry becomes ready.
    pub fn due(self) -> u64 {
        self.due
    }
}

/// Time-ordered queue of pending work.
#[derive(Clone, Debug)]
pub struct TaskQueue<T> {
    now: u64,
    next_seq: u64,
    tasks: BTreeMap<TaskKey, T>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            tasks: BTreeMap::new(),
        }
    }
}

impl<T> TaskQueue<T> {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Move the clock forward. Time never goes backwards; earlier values are ignored.
    pub fn set_now(&mut self, now: u64) {
        self.now = self.now.max(now);
    }

    /// Queue `task` for the next tick.
    pub fn defer(&mut self, task: T) -> TaskKey {
        self.schedule_after(0, task)
    }

    /// Queue `task` to run once `delay_ms` have passed.
    pub fn schedule_after(&mut self, delay_ms: u64, task: T) -> TaskKey {
        let key = TaskKey {
            due: self.now.saturating_add(delay_ms),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.tasks.insert(key, task);
        key
    }

    /// Remove a queued entry. Returns `None` if it already ran or was cancelled.
    pub fn cancel(&mut self, key: TaskKey) -> Option<T> {
        self.tasks.remove(&key)
    }

    /// A marker separating entries queued so far from entries queued later.
    ///
    /// Pass it to [`TaskQueue::pop_ready`] to run one tick's worth of work.
    pub fn barrier(&self) -> u64 {
        self.next_seq
    }

    /// Take the earliest entry that is due and was queued before `barrier`.
    pub fn pop_ready(&mut self, barrier: u64) -> Option<T> {
        let now = self.now;
        let key = self
            .tasks
            .keys()
            .take_while(|key| key.due <= now)
            .find(|key| key.seq < barrier)
            .copied()?;
        self.tasks.remove(&key)
    }

    /// Due time of the earliest entry, ready or not.
    pub fn next_deadline(&self) -> Option<u64> {
        self.tasks.keys().next().map(|key| key.due)
    }

    /// Due time of the earliest entry queued before `barrier`, ready or not.
    pub fn next_deadline_before(&self, barrier: u64) -> Option<u64> {
        self.tasks
            .keys()
            .find(|key| key.seq < barrier)
            .map(|key| key.due)
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop every entry for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.tasks.retain(|_, task| keep(task));
    }
}
