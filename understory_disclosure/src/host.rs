// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host interface: rendering and platform services the controller relies on.
//!
//! A host owns the view tree. The controller never creates or destroys elements on its
//! own; it asks the host to mount or unmount a widget's panel view and otherwise only
//! reads and writes attributes, moves focus and subscribes to window clicks.
//!
//! Hosts are expected to:
//!
//! - forward button clicks and key presses, panel key presses, item pointer enter/leave
//!   and clicks, and window clicks to the matching [`Disclosures`](crate::Disclosures)
//!   methods;
//! - call [`Disclosures::tick`](crate::Disclosures::tick) once per turn of their event loop
//!   and [`Disclosures::advance`](crate::Disclosures::advance) as time passes;
//! - register the items of a freshly mounted panel (in document order) with
//!   [`Disclosures::register_item`](crate::Disclosures::register_item) once their views
//!   exist, typically between two ticks.

use alloc::string::String;

use crate::types::{FocusOptions, ItemState, WidgetId};

/// Rendering and platform services.
pub trait Host {
    /// Handle to a mounted element.
    type Element: Clone + PartialEq + core::fmt::Debug;
    /// A live window click subscription, returned to the host when released.
    type Listener: core::fmt::Debug;

    /// Mount the panel view of `widget` and return its root element.
    fn mount_panel(&mut self, widget: WidgetId) -> Option<Self::Element>;

    /// Unmount the panel view of `widget`, destroying its items.
    fn unmount_panel(&mut self, widget: WidgetId);

    /// Set an attribute.
    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);

    /// Remove an attribute. Removing an absent attribute is not an error.
    fn remove_attribute(&mut self, element: &Self::Element, name: &str);

    /// Move keyboard focus to `element`.
    fn focus(&mut self, element: &Self::Element, options: FocusOptions);

    /// Whether `target` is `ancestor` or inside its subtree.
    fn contains(&self, ancestor: &Self::Element, target: &Self::Element) -> bool;

    /// The element that currently has keyboard focus, or `None` for the document body.
    fn active_element(&self) -> Option<Self::Element>;

    /// The element's text content.
    fn text_content(&self, element: &Self::Element) -> String;

    /// Presentation state of an item changed; re-render it.
    fn refresh_item(&mut self, element: &Self::Element, state: ItemState);

    /// Start delivering window clicks to `widget`.
    fn add_window_click_listener(&mut self, widget: WidgetId) -> Self::Listener;

    /// Stop delivering window clicks for a subscription.
    fn remove_window_click_listener(&mut self, listener: Self::Listener);
}
