// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What distinguishes one disclosure widget from another.
//!
//! The controller is shared; a [`Binding`] supplies the item payload type, whether the
//! widget tracks a current value, the ARIA roles and id segments it emits, and its key
//! maps. See [`Listbox`](crate::Listbox) and [`Menu`](crate::Menu).

use crate::focus::Ordinal;
use crate::keys::Key;

/// What a key pressed on the focused panel should do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PanelCommand {
    /// Move the active item.
    Focus(Ordinal),
    /// Activate the active item.
    Activate,
    /// Continue a pending typeahead query with a space, or activate the active item when
    /// no query is pending.
    SearchOrActivate(char),
    /// Close and return focus to the button.
    Close,
    /// Swallow the key (keeps Tab from leaving the panel).
    Suppress,
    /// Feed a character to typeahead.
    Search(char),
}

/// Static description of a disclosure widget kind.
pub trait Binding: 'static {
    /// Payload carried by items (`()` when the widget has no values).
    type Value: Clone + PartialEq + core::fmt::Debug;

    /// Whether the widget keeps a current value and marks the matching item selected.
    const TRACKS_VALUE: bool;
    /// Widget segment of generated ids (`headlessui-{WIDGET}-…`).
    const WIDGET: &'static str;
    /// Id segment of the panel element.
    const PANEL_PART: &'static str;
    /// Id segment of item elements.
    const ITEM_PART: &'static str;
    /// `role` of the panel element.
    const PANEL_ROLE: &'static str;
    /// `role` of item elements.
    const ITEM_ROLE: &'static str;

    /// Keys on the button that open the widget, with the item to focus once it is open.
    ///
    /// Value-tracking widgets focus the current value's item instead when they have a value.
    fn button_command(key: Key) -> Option<Ordinal>;

    /// Keys on the open panel.
    fn panel_command(key: Key) -> Option<PanelCommand>;
}

/// Key handling shared by every binding for the panel.
pub(crate) fn common_panel_command(key: Key) -> Option<PanelCommand> {
    match key {
        Key::SPACE => Some(PanelCommand::SearchOrActivate(' ')),
        Key::Enter => Some(PanelCommand::Activate),
        Key::ArrowDown => Some(PanelCommand::Focus(Ordinal::Next)),
        Key::ArrowUp => Some(PanelCommand::Focus(Ordinal::Previous)),
        Key::Tab => Some(PanelCommand::Suppress),
        Key::Escape => Some(PanelCommand::Close),
        Key::Char(ch) => Some(PanelCommand::Search(ch)),
        _ => None,
    }
}

/// Key handling shared by every binding for the button.
pub(crate) fn common_button_command(key: Key) -> Option<Ordinal> {
    match key {
        Key::SPACE | Key::Enter | Key::ArrowDown => Some(Ordinal::First),
        Key::ArrowUp => Some(Ordinal::Last),
        _ => None,
    }
}
