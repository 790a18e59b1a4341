// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared by the controller, the bindings and hosts: identifiers,
//! item presentation flags, configuration and emitted events.

/// Identifier for a widget instance in a [`Disclosures`](crate::Disclosures) arena (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct WidgetId(pub(crate) u32, pub(crate) u32);

impl WidgetId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Identifier for a registered item.
///
/// Item ids are never reused within one arena, so a stale id simply stops
/// resolving once its panel collapses.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ItemId(pub(crate) u64);

bitflags::bitflags! {
    /// Presentation state of an item, handed to the host whenever it changes.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemState: u8 {
        /// The item is the roving-focus target.
        const ACTIVE   = 0b0000_0001;
        /// The item's value equals the widget's current value (listbox only).
        const SELECTED = 0b0000_0010;
        /// The item cannot be reached by ordinal navigation or activated.
        const DISABLED = 0b0000_0100;
    }
}

/// Options passed along with a focus request.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusOptions {
    /// Do not scroll the element into view.
    pub prevent_scroll: bool,
}

/// Per-widget configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisclosureConfig {
    /// Keep the panel mounted at all times.
    ///
    /// Opening and closing then only affect attributes, focus and the
    /// outside-click listener; the host decides visibility on its own.
    pub is_static: bool,
    /// Idle time in milliseconds after which the typeahead query is cleared.
    pub search_idle_ms: u64,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            is_static: false,
            search_idle_ms: crate::search::DEFAULT_IDLE_MS,
        }
    }
}

impl DisclosureConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the panel stays mounted while collapsed.
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Set the typeahead idle timeout in milliseconds.
    pub fn with_search_idle_ms(mut self, ms: u64) -> Self {
        self.search_idle_ms = ms;
        self
    }
}

/// Configuration of a single item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemConfig<V> {
    /// Whether the item is disabled.
    pub disabled: bool,
    /// The value this item represents (listbox only).
    pub value: Option<V>,
}

impl<V> Default for ItemConfig<V> {
    fn default() -> Self {
        Self {
            disabled: false,
            value: None,
        }
    }
}

impl<V> ItemConfig<V> {
    /// An enabled item without a value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attach a value.
    pub fn value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }
}

/// Something the application may want to react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisclosureEvent<V> {
    /// The widget started opening; the panel mounts on the next tick.
    Opened(WidgetId),
    /// The widget closed.
    Closed(WidgetId),
    /// A listbox option was chosen.
    ValueChanged {
        /// The listbox.
        widget: WidgetId,
        /// The option's value.
        value: Option<V>,
    },
    /// An enabled item was activated by click, Enter or Space.
    Activated {
        /// The widget owning the item.
        widget: WidgetId,
        /// The activated item.
        item: ItemId,
    },
}

/// Whether a key event was consumed.
///
/// Hosts should prevent the platform default action for [`KeyOutcome::Consumed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was handled; suppress the default action.
    Consumed,
    /// The key was either ignored or only observed (typeahead); let it through.
    Passed,
}

/// Result of an item activation request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The item was activated and the widget closed.
    Activated,
    /// The item is disabled; the host should prevent the click's default action.
    Prevented,
    /// Nothing to activate (unknown widget or item, or no active item).
    Ignored,
}
