// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving focus resolution.
//!
//! [`resolve`] maps a navigation [`Intent`], the registered items (in document order) and
//! the currently active item to the next active item. It has no side effects.
//!
//! - Ordinal intents ([`Intent::First`], [`Intent::Last`], [`Intent::Next`],
//!   [`Intent::Previous`]) only consider enabled items.
//! - [`Intent::Specific`], [`Intent::ValueMatch`] and [`Intent::Nothing`] ignore the
//!   disabled flag.
//! - With no active item, `Next` yields the first enabled item and `Previous` the last one.
//! - `Next` on the last enabled item and `Previous` on the first one stay put. Navigation
//!   never wraps.
//! - From a disabled active item (reached by pointer or [`Intent::Specific`]) both `Next`
//!   and `Previous` go to the first enabled item.
//!
//! ```rust
//! use understory_disclosure::focus::{resolve, FocusEntry, Intent};
//!
//! let items = [
//!     FocusEntry::<u32, ()>::new(1),
//!     FocusEntry::new(2).disabled(true),
//!     FocusEntry::new(3),
//! ];
//!
//! assert_eq!(resolve(&Intent::Next, &items, None), Some(1));
//! // The disabled item is skipped…
//! assert_eq!(resolve(&Intent::Next, &items, Some(1)), Some(3));
//! // …and the end of the list is sticky.
//! assert_eq!(resolve(&Intent::Next, &items, Some(3)), Some(3));
//! // `Previous` from nothing starts at the end.
//! assert_eq!(resolve(&Intent::Previous, &items, None), Some(3));
//! ```

use smallvec::SmallVec;

/// A navigation intent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intent<K, V> {
    /// The first enabled item.
    First,
    /// The last enabled item.
    Last,
    /// The enabled item after the active one.
    Next,
    /// The enabled item before the active one.
    Previous,
    /// A particular item, enabled or not.
    Specific(K),
    /// The first item carrying an equal value, enabled or not.
    ValueMatch(V),
    /// Clear the active item.
    Nothing,
}

/// The ordinal subset of [`Intent`], used by key maps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ordinal {
    /// See [`Intent::First`].
    First,
    /// See [`Intent::Last`].
    Last,
    /// See [`Intent::Next`].
    Next,
    /// See [`Intent::Previous`].
    Previous,
}

impl<K, V> From<Ordinal> for Intent<K, V> {
    fn from(ordinal: Ordinal) -> Self {
        match ordinal {
            Ordinal::First => Self::First,
            Ordinal::Last => Self::Last,
            Ordinal::Next => Self::Next,
            Ordinal::Previous => Self::Previous,
        }
    }
}

/// Read access to an item for focus resolution.
pub trait Candidate {
    /// Item identifier.
    type Key: Copy + Eq;
    /// Item payload compared by [`Intent::ValueMatch`].
    type Value: PartialEq;

    /// This item's identifier.
    fn key(&self) -> Self::Key;
    /// Whether ordinal navigation skips this item.
    fn is_disabled(&self) -> bool;
    /// This item's value, if any.
    fn value(&self) -> Option<&Self::Value>;
}

/// A plain [`Candidate`] for callers that keep their own item storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusEntry<K, V> {
    /// Identifier.
    pub key: K,
    /// Whether ordinal navigation skips this entry.
    pub disabled: bool,
    /// Optional payload.
    pub value: Option<V>,
}

impl<K, V> FocusEntry<K, V> {
    /// An enabled entry without a value.
    pub fn new(key: K) -> Self {
        Self {
            key,
            disabled: false,
            value: None,
        }
    }

    /// Set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attach a value.
    pub fn with_value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }
}

impl<K: Copy + Eq, V: PartialEq> Candidate for FocusEntry<K, V> {
    type Key = K;
    type Value = V;

    fn key(&self) -> K {
        self.key
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }
}

/// Compute the item that should become active.
///
/// `items` must be in document order. `active` that does not name an item in `items` is
/// treated as no active item.
pub fn resolve<C: Candidate>(
    intent: &Intent<C::Key, C::Value>,
    items: &[C],
    active: Option<C::Key>,
) -> Option<C::Key> {
    match intent {
        Intent::Nothing => None,
        Intent::Specific(key) => items.iter().any(|c| c.key() == *key).then_some(*key),
        Intent::ValueMatch(value) => items
            .iter()
            .find(|c| c.value() == Some(value))
            .map(Candidate::key),
        Intent::First => items.iter().find(|c| !c.is_disabled()).map(Candidate::key),
        Intent::Last => items
            .iter()
            .rev()
            .find(|c| !c.is_disabled())
            .map(Candidate::key),
        Intent::Next => step(items, active, Step::Forward),
        Intent::Previous => step(items, active, Step::Backward),
    }
}

#[derive(Copy, Clone)]
enum Step {
    Forward,
    Backward,
}

fn step<C: Candidate>(items: &[C], active: Option<C::Key>, step: Step) -> Option<C::Key> {
    // Positions of enabled items, ascending.
    let enabled: SmallVec<[usize; 16]> = items
        .iter()
        .enumerate()
        .filter_map(|(i, c)| (!c.is_disabled()).then_some(i))
        .collect();
    let last = enabled.len().checked_sub(1)?;

    let origin = active.and_then(|key| items.iter().position(|c| c.key() == key));
    let pos = match (origin, step) {
        (None, Step::Forward) => 0,
        (None, Step::Backward) => last,
        (Some(origin), step) => match enabled.binary_search(&origin) {
            Ok(pos) => match step {
                Step::Forward => (pos + 1).min(last),
                Step::Backward => pos.saturating_sub(1),
            },
            // A disabled active item has no place among the enabled ones; both
            // directions restart from the first enabled item.
            Err(_) => 0,
        },
    };
    Some(items[enabled[pos]].key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn entries(disabled: &[bool]) -> Vec<FocusEntry<u32, &'static str>> {
        disabled
            .iter()
            .zip(1_u32..)
            .map(|(&d, key)| FocusEntry::new(key).disabled(d))
            .collect()
    }

    #[test]
    fn next_and_previous_start_from_opposite_ends() {
        let items = entries(&[false, false, false]);
        assert_eq!(resolve(&Intent::Next, &items, None), Some(1));
        assert_eq!(resolve(&Intent::Previous, &items, None), Some(3));
    }

    #[test]
    fn next_and_previous_clamp_at_edges() {
        let items = entries(&[false, false, false]);
        assert_eq!(resolve(&Intent::Next, &items, Some(3)), Some(3));
        assert_eq!(resolve(&Intent::Previous, &items, Some(1)), Some(1));
    }

    #[test]
    fn repeated_next_stabilizes_on_last() {
        let items = entries(&[false, false, false, false]);
        let mut active = None;
        let mut seen = vec![];
        for _ in 0..6 {
            active = resolve(&Intent::Next, &items, active);
            seen.push(active);
        }
        assert_eq!(
            seen,
            vec![Some(1), Some(2), Some(3), Some(4), Some(4), Some(4)]
        );
    }

    #[test]
    fn ordinal_intents_skip_disabled_items() {
        let items = entries(&[true, false, true, false, true]);
        assert_eq!(resolve(&Intent::First, &items, None), Some(2));
        assert_eq!(resolve(&Intent::Last, &items, None), Some(4));
        assert_eq!(resolve(&Intent::Next, &items, Some(2)), Some(4));
        assert_eq!(resolve(&Intent::Previous, &items, Some(4)), Some(2));
        assert_eq!(resolve(&Intent::Next, &items, None), Some(2));
        assert_eq!(resolve(&Intent::Previous, &items, None), Some(4));
    }

    #[test]
    fn stepping_off_a_disabled_active_item_restarts_at_the_first_enabled() {
        let items = entries(&[false, true, false]);
        assert_eq!(resolve(&Intent::Next, &items, Some(2)), Some(1));
        assert_eq!(resolve(&Intent::Previous, &items, Some(2)), Some(1));

        let items = entries(&[true, false, true, false]);
        assert_eq!(resolve(&Intent::Next, &items, Some(3)), Some(2));
        assert_eq!(resolve(&Intent::Previous, &items, Some(1)), Some(2));
    }

    #[test]
    fn all_disabled_or_empty_resolves_to_nothing() {
        let items = entries(&[true, true]);
        assert_eq!(resolve(&Intent::Next, &items, None), None);
        assert_eq!(resolve(&Intent::Previous, &items, Some(1)), None);
        assert_eq!(resolve(&Intent::First, &items, None), None);
        assert_eq!(resolve(&Intent::Last, &items, None), None);

        let empty: Vec<FocusEntry<u32, ()>> = Vec::new();
        assert_eq!(resolve(&Intent::Next, &empty, None), None);
    }

    #[test]
    fn specific_and_value_match_bypass_the_disabled_filter() {
        let items = vec![
            FocusEntry::new(1_u32).with_value("a"),
            FocusEntry::new(2).with_value("b").disabled(true),
        ];
        assert_eq!(resolve(&Intent::Specific(2), &items, None), Some(2));
        assert_eq!(resolve(&Intent::ValueMatch("b"), &items, None), Some(2));
        assert_eq!(resolve(&Intent::ValueMatch("z"), &items, Some(1)), None);
        // Unknown items never become active.
        assert_eq!(resolve(&Intent::Specific(9), &items, Some(1)), None);
        assert_eq!(resolve(&Intent::Nothing, &items, Some(1)), None);
    }

    #[test]
    fn unknown_active_item_counts_as_none() {
        let items = entries(&[false, false]);
        assert_eq!(resolve(&Intent::Next, &items, Some(42)), Some(1));
        assert_eq!(resolve(&Intent::Previous, &items, Some(42)), Some(2));
    }
}
