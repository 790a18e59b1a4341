// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Disclosure: headless listbox and menu controllers.
//!
//! A disclosure widget is a button that opens a panel of items. This crate owns the
//! behaviour and leaves rendering to the caller:
//!
//! - **Open/close sequencing** that defers panel mounting, focus and listener setup to the
//!   next turn of the host's event loop, and drops those steps if the widget closed in
//!   the meantime.
//! - **Roving focus** over items ([`focus::resolve`]): first, last, next and previous
//!   skip disabled items; a specific item or the item holding a value is taken as given,
//!   disabled or not.
//! - **Typeahead** ([`search`]) that accumulates keystrokes until the user pauses.
//! - **Outside-click dismissal** through one window click listener per open widget.
//! - **ARIA attributes** on the button, panel and items, with generated ids of the form
//!   `headlessui-{widget}-{part}-{n}`.
//!
//! The widget kinds are [`Listbox`] (items carry values; one is selected) and [`Menu`]
//! (items are actions). Both run on the same [`Disclosures`] arena, parameterized by a
//! [`Binding`] and by a [`Host`] that provides elements and platform services.
//!
//! ## Driving a menu
//!
//! ```rust
//! use understory_disclosure::{
//!     DisclosureConfig, FocusOptions, Host, IdSource, ItemConfig, ItemState, Key, MenuSet,
//!     WidgetId,
//! };
//!
//! /// Elements are numbers; the panel is always element 100 with items 101 and 102.
//! #[derive(Default)]
//! struct Page {
//!     focused: Option<u32>,
//!     mounted: bool,
//! }
//!
//! impl Host for Page {
//!     type Element = u32;
//!     type Listener = ();
//!
//!     fn mount_panel(&mut self, _: WidgetId) -> Option<u32> {
//!         self.mounted = true;
//!         Some(100)
//!     }
//!     fn unmount_panel(&mut self, _: WidgetId) {
//!         self.mounted = false;
//!     }
//!     fn set_attribute(&mut self, _: &u32, _: &str, _: &str) {}
//!     fn remove_attribute(&mut self, _: &u32, _: &str) {}
//!     fn focus(&mut self, el: &u32, _: FocusOptions) {
//!         self.focused = Some(*el);
//!     }
//!     fn contains(&self, ancestor: &u32, target: &u32) -> bool {
//!         ancestor == target || (*ancestor == 100 && *target > 100)
//!     }
//!     fn active_element(&self) -> Option<u32> {
//!         self.focused
//!     }
//!     fn text_content(&self, el: &u32) -> String {
//!         if *el == 101 { "Copy".into() } else { "Paste".into() }
//!     }
//!     fn refresh_item(&mut self, _: &u32, _: ItemState) {}
//!     fn add_window_click_listener(&mut self, _: WidgetId) {}
//!     fn remove_window_click_listener(&mut self, _: ()) {}
//! }
//!
//! let mut page = Page::default();
//! let mut menus: MenuSet<Page> = MenuSet::with_id_source(IdSource::Local);
//! let menu = menus.create(&mut page, 1, DisclosureConfig::default());
//! menus.register_panel(&mut page, menu).unwrap();
//!
//! // ArrowDown on the button opens the menu and asks for the first item.
//! menus.button_keydown(&mut page, menu, Key::ArrowDown);
//! menus.tick(&mut page);
//! assert!(page.mounted);
//! for el in [101, 102] {
//!     menus.register_item(&mut page, menu, el, ItemConfig::new()).unwrap();
//! }
//! menus.tick(&mut page);
//! let first = menus.items(menu).next();
//! assert_eq!(menus.active_item(menu), first);
//!
//! // Typing jumps to the matching item.
//! menus.panel_keydown(&mut page, menu, Key::Char('p'));
//! assert_eq!(menus.active_item(menu), menus.items(menu).nth(1));
//!
//! // Escape closes; focus returns to the button on the next tick.
//! menus.panel_keydown(&mut page, menu, Key::Escape);
//! menus.tick(&mut page);
//! assert!(!page.mounted);
//! assert_eq!(page.focused, Some(1));
//! ```
//!
//! ## Time
//!
//! Nothing here reads a clock or spawns work. Deferred steps and the typeahead idle
//! timeout live on a virtual millisecond clock ([`schedule::TaskQueue`]) that the host
//! drives with [`Disclosures::tick`] and [`Disclosures::advance`].
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for state transitions and for operations that were
//!   dropped or misused (opening a widget without a panel, acting on a destroyed widget).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arena;
mod binding;
mod controller;
mod error;
mod host;
mod id;
mod keys;
mod listbox;
mod logging;
mod menu;
mod types;

pub mod focus;
pub mod schedule;
pub mod search;

#[cfg(test)]
mod testing;

pub use binding::{Binding, PanelCommand};
pub use controller::Disclosures;
pub use error::RegistrationError;
pub use focus::{Intent, Ordinal};
pub use host::Host;
pub use id::{IdGenerator, IdSource};
pub use keys::Key;
pub use listbox::{Listbox, ListboxSet};
pub use menu::{Menu, MenuSet};
pub use types::{
    Activation, DisclosureConfig, DisclosureEvent, FocusOptions, ItemConfig, ItemId, ItemState,
    KeyOutcome, WidgetId,
};
