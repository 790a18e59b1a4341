// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listbox: pick one value from a list of options.
//!
//! Every option carries a value of type `V`. The widget remembers the value of the last
//! activated option, marks the option holding an equal value as selected, and opens from
//! the keyboard onto that option instead of the first or last one. Without a current
//! value nothing is selected, including options that carry no value themselves.

use core::fmt;
use core::marker::PhantomData;

use crate::binding::{Binding, PanelCommand, common_button_command, common_panel_command};
use crate::controller::Disclosures;
use crate::focus::Ordinal;
use crate::host::Host;
use crate::keys::Key;
use crate::types::WidgetId;

/// [`Binding`] for listboxes over values of type `V`.
pub struct Listbox<V>(PhantomData<fn() -> V>);

/// Arena of listboxes.
pub type ListboxSet<V, H> = Disclosures<Listbox<V>, H>;

impl<V> fmt::Debug for Listbox<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Listbox")
    }
}

impl<V> Default for Listbox<V> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<V> Clone for Listbox<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Listbox<V> {}

impl<V> Binding for Listbox<V>
where
    V: Clone + PartialEq + fmt::Debug + 'static,
{
    type Value = V;

    const TRACKS_VALUE: bool = true;
    const WIDGET: &'static str = "listbox";
    const PANEL_PART: &'static str = "options";
    const ITEM_PART: &'static str = "option";
    const PANEL_ROLE: &'static str = "listbox";
    const ITEM_ROLE: &'static str = "listboxoption";

    fn button_command(key: Key) -> Option<Ordinal> {
        common_button_command(key)
    }

    fn panel_command(key: Key) -> Option<PanelCommand> {
        common_panel_command(key)
    }
}

impl<V, H> Disclosures<Listbox<V>, H>
where
    V: Clone + PartialEq + fmt::Debug + 'static,
    H: Host,
{
    /// The listbox's current value.
    pub fn value(&self, widget: WidgetId) -> Option<&V> {
        self.widgets.get(widget)?.value.as_ref()
    }

    /// Replace the current value, as a controlled component would.
    ///
    /// Mounted options are refreshed so the selected flag follows the new value.
    /// No [`DisclosureEvent::ValueChanged`](crate::DisclosureEvent::ValueChanged) is
    /// emitted for a value the application set itself. Returns `false` if the widget is gone.
    pub fn set_value(&mut self, host: &mut H, widget: WidgetId, value: Option<V>) -> bool {
        let Some(ctrl) = self.widgets.get_mut(widget) else {
            return false;
        };
        ctrl.value = value;
        ctrl.refresh_items(host);
        true
    }
}
