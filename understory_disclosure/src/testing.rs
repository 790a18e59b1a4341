// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host and a small driver for controller tests.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::binding::Binding;
use crate::controller::Disclosures;
use crate::host::Host;
use crate::id::IdSource;
use crate::types::{DisclosureConfig, FocusOptions, ItemConfig, ItemId, ItemState, WidgetId};

/// Window click subscription handed out by [`TestHost`]. Deliberately not `Clone`.
#[derive(Debug)]
pub(crate) struct TestListener {
    widget: WidgetId,
}

/// A tiny element tree with attributes, focus and text.
#[derive(Debug, Default)]
pub(crate) struct TestHost {
    next_element: u32,
    parents: HashMap<u32, u32>,
    texts: HashMap<u32, String>,
    attrs: HashMap<u32, HashMap<String, String>>,
    pub(crate) focused: Option<u32>,
    pub(crate) focus_log: Vec<(u32, FocusOptions)>,
    /// Item texts rendered when a widget's panel mounts.
    pub(crate) templates: HashMap<WidgetId, Vec<&'static str>>,
    pub(crate) mounted: HashMap<WidgetId, u32>,
    pub(crate) mount_count: usize,
    /// Item views that still have to register: (widget, element, template index).
    pub(crate) pending_items: Vec<(WidgetId, u32, usize)>,
    listeners: HashMap<WidgetId, usize>,
    pub(crate) max_listeners: usize,
    pub(crate) refreshed: HashMap<u32, ItemState>,
}

impl TestHost {
    pub(crate) fn element(&mut self, parent: Option<u32>, text: &str) -> u32 {
        self.next_element += 1;
        let el = self.next_element;
        if let Some(parent) = parent {
            self.parents.insert(el, parent);
        }
        self.texts.insert(el, text.to_string());
        el
    }

    pub(crate) fn attr(&self, el: u32, name: &str) -> Option<&str> {
        self.attrs.get(&el)?.get(name).map(String::as_str)
    }

    pub(crate) fn live_listeners(&self, widget: WidgetId) -> usize {
        self.listeners.get(&widget).copied().unwrap_or(0)
    }

    fn remove_subtree(&mut self, root: u32) {
        let doomed: Vec<u32> = self
            .texts
            .keys()
            .copied()
            .filter(|&el| self.contains(&root, &el))
            .collect();
        for el in doomed {
            self.parents.remove(&el);
            self.texts.remove(&el);
            self.attrs.remove(&el);
            self.refreshed.remove(&el);
            if self.focused == Some(el) {
                self.focused = None;
            }
        }
    }
}

impl Host for TestHost {
    type Element = u32;
    type Listener = TestListener;

    fn mount_panel(&mut self, widget: WidgetId) -> Option<u32> {
        let panel = self.element(None, "");
        let texts = self.templates.get(&widget).cloned().unwrap_or_default();
        for (index, text) in texts.into_iter().enumerate() {
            let item = self.element(Some(panel), text);
            self.pending_items.push((widget, item, index));
        }
        self.mounted.insert(widget, panel);
        self.mount_count += 1;
        Some(panel)
    }

    fn unmount_panel(&mut self, widget: WidgetId) {
        if let Some(panel) = self.mounted.remove(&widget) {
            self.remove_subtree(panel);
        }
        self.pending_items.retain(|(w, _, _)| *w != widget);
    }

    fn set_attribute(&mut self, element: &u32, name: &str, value: &str) {
        self.attrs
            .entry(*element)
            .or_default()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, element: &u32, name: &str) {
        if let Some(attrs) = self.attrs.get_mut(element) {
            attrs.remove(name);
        }
    }

    fn focus(&mut self, element: &u32, options: FocusOptions) {
        self.focused = Some(*element);
        self.focus_log.push((*element, options));
    }

    fn contains(&self, ancestor: &u32, target: &u32) -> bool {
        let mut cursor = Some(*target);
        while let Some(el) = cursor {
            if el == *ancestor {
                return true;
            }
            cursor = self.parents.get(&el).copied();
        }
        false
    }

    fn active_element(&self) -> Option<u32> {
        self.focused
    }

    fn text_content(&self, element: &u32) -> String {
        self.texts.get(element).cloned().unwrap_or_default()
    }

    fn refresh_item(&mut self, element: &u32, state: ItemState) {
        self.refreshed.insert(*element, state);
    }

    fn add_window_click_listener(&mut self, widget: WidgetId) -> TestListener {
        let live = self.listeners.entry(widget).or_default();
        *live += 1;
        self.max_listeners = self.max_listeners.max(*live);
        TestListener { widget }
    }

    fn remove_window_click_listener(&mut self, listener: TestListener) {
        let live = self
            .listeners
            .get_mut(&listener.widget)
            .expect("released a listener that was never acquired");
        *live -= 1;
    }
}

/// One widget on a [`TestHost`], with item registration between ticks.
pub(crate) struct Harness<B: Binding> {
    pub(crate) host: TestHost,
    pub(crate) set: Disclosures<B, TestHost>,
    pub(crate) widget: WidgetId,
    pub(crate) button: u32,
    /// A focusable element outside the widget.
    pub(crate) outside: u32,
    configs: Vec<ItemConfig<B::Value>>,
}

impl<B: Binding> Harness<B> {
    pub(crate) fn new(
        items: Vec<(&'static str, ItemConfig<B::Value>)>,
        config: DisclosureConfig,
    ) -> Self {
        let mut host = TestHost::default();
        let root = host.element(None, "");
        let button = host.element(Some(root), "Trigger");
        let outside = host.element(Some(root), "Elsewhere");
        let mut set = Disclosures::with_id_source(IdSource::Local);
        let widget = set.create(&mut host, button, config);
        let (texts, configs): (Vec<_>, Vec<_>) = items.into_iter().unzip();
        host.templates.insert(widget, texts);
        set.register_panel(&mut host, widget)
            .expect("panel registers once");
        let mut harness = Self {
            host,
            set,
            widget,
            button,
            outside,
            configs,
        };
        harness.register_pending();
        harness
    }

    pub(crate) fn plain(texts: &[&'static str]) -> Self {
        Self::new(
            texts.iter().map(|&t| (t, ItemConfig::default())).collect(),
            DisclosureConfig::default(),
        )
    }

    /// One event-loop turn: run ready tasks, then let freshly mounted item views register.
    pub(crate) fn tick(&mut self) -> usize {
        let ran = self.set.tick(&mut self.host);
        self.register_pending();
        ran
    }

    /// Tick until no work is left.
    pub(crate) fn settle(&mut self) {
        while self.tick() > 0 {}
    }

    /// Let time pass, registering items whenever a mount happens along the way.
    pub(crate) fn advance(&mut self, ms: u64) {
        self.set.advance(&mut self.host, ms);
        self.register_pending();
    }

    fn register_pending(&mut self) {
        for (widget, el, index) in core::mem::take(&mut self.host.pending_items) {
            self.set
                .register_item(&mut self.host, widget, el, self.configs[index].clone())
                .expect("items register while the panel is mounted");
        }
    }

    pub(crate) fn items(&self) -> Vec<ItemId> {
        self.set.items(self.widget).collect()
    }

    pub(crate) fn item_element(&self, index: usize) -> u32 {
        let item = self.items()[index];
        *self
            .set
            .item_element(self.widget, item)
            .expect("item is registered")
    }

    pub(crate) fn panel(&self) -> Option<u32> {
        self.set.panel_element(self.widget).copied()
    }

    pub(crate) fn panel_attr(&self, name: &str) -> Option<&str> {
        self.host.attr(self.panel()?, name)
    }

    pub(crate) fn button_attr(&self, name: &str) -> Option<&str> {
        self.host.attr(self.button, name)
    }

    /// Active flag of every item as last refreshed on the host.
    pub(crate) fn active_states(&self) -> Vec<bool> {
        (0..self.items().len())
            .map(|i| {
                self.host
                    .refreshed
                    .get(&self.item_element(i))
                    .is_some_and(|s| s.contains(ItemState::ACTIVE))
            })
            .collect()
    }
}
