// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typeahead: a debounced, lowercase prefix query over item text.

use alloc::string::String;

use crate::schedule::TaskKey;

/// Idle time after which a typeahead query is forgotten.
pub const DEFAULT_IDLE_MS: u64 = 350;

/// Accumulated query plus the idle timer that will clear it.
#[derive(Clone, Debug, Default)]
pub struct Typeahead {
    query: String,
    idle_timer: Option<TaskKey>,
}

impl Typeahead {
    /// An empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// The query typed so far, lowercase.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether nothing has been typed since the last clear.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Append a keystroke and remember its idle timer.
    ///
    /// Returns the previous timer, which the caller must cancel.
    pub fn push(&mut self, ch: char, idle_timer: TaskKey) -> Option<TaskKey> {
        self.query.extend(ch.to_lowercase());
        self.idle_timer.replace(idle_timer)
    }

    /// Forget the query. Returns the pending idle timer, if any.
    pub fn clear(&mut self) -> Option<TaskKey> {
        self.query.clear();
        self.idle_timer.take()
    }
}

/// Whether `text`, trimmed and lowercased, starts with `query`.
pub fn matches(text: &str, query: &str) -> bool {
    text.trim().to_lowercase().starts_with(query)
}

/// First enabled candidate whose text matches `query`, in iteration order.
///
/// Candidates are `(key, text, enabled)`; text is only requested until a match is found.
pub fn find_match<K, S, I>(query: &str, candidates: I) -> Option<K>
where
    S: AsRef<str>,
    I: IntoIterator<Item = (K, S, bool)>,
{
    candidates
        .into_iter()
        .find(|(_, text, enabled)| *enabled && matches(text.as_ref(), query))
        .map(|(key, _, _)| key)
}
