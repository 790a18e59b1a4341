// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu button: a list of actions.
//!
//! Items carry no value; activating one emits
//! [`DisclosureEvent::Activated`](crate::DisclosureEvent::Activated) and closes the menu.
//! Besides the shared keys, the panel understands Home/PageUp and End/PageDown.

use crate::binding::{Binding, PanelCommand, common_button_command, common_panel_command};
use crate::controller::Disclosures;
use crate::focus::Ordinal;
use crate::keys::Key;

/// [`Binding`] for menus.
#[derive(Copy, Clone, Debug, Default)]
pub struct Menu;

/// Arena of menus.
pub type MenuSet<H> = Disclosures<Menu, H>;

impl Binding for Menu {
    type Value = ();

    const TRACKS_VALUE: bool = false;
    const WIDGET: &'static str = "menu";
    const PANEL_PART: &'static str = "items";
    const ITEM_PART: &'static str = "item";
    const PANEL_ROLE: &'static str = "menu";
    const ITEM_ROLE: &'static str = "menuitem";

    fn button_command(key: Key) -> Option<Ordinal> {
        common_button_command(key)
    }

    fn panel_command(key: Key) -> Option<PanelCommand> {
        match key {
            Key::Home | Key::PageUp => Some(PanelCommand::Focus(Ordinal::First)),
            Key::End | Key::PageDown => Some(PanelCommand::Focus(Ordinal::Last)),
            key => common_panel_command(key),
        }
    }
}
