// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The disclosure controller and the arena that owns every widget of one kind.
//!
//! ## Lifecycle
//!
//! ```text
//! Collapsed --toggle--> Opening --(expand step)--> Expanded
//! Expanded  --toggle / Escape / outside click / item activation--> Collapsed
//! ```
//!
//! Opening is split across ticks. [`Disclosures::toggle`] flips `expanded` at once and
//! queues the expand step; on the next [`Disclosures::tick`] the panel mounts, gets its
//! attributes and focus, and the window click listener is acquired. Item views register
//! after their panel mounts, so an initial focus request is applied one tick later still.
//! Every open bumps a generation counter carried by the queued steps, which is how a
//! close (or a close and re-open) that happens before the steps run makes them inert.
//! An expand step that finds no panel to mount abandons the open and emits `Closed`.
//!
//! Closing is synchronous apart from returning focus to the button, which waits a tick.

use alloc::string::String;
use alloc::vec::{Drain, Vec};
use core::fmt;

use crate::arena::Arena;
use crate::binding::{Binding, PanelCommand};
use crate::error::RegistrationError;
use crate::focus::{self, Candidate, Intent};
use crate::host::Host;
use crate::id::{IdGenerator, IdSource};
use crate::keys::Key;
use crate::logging::{debug, trace, warn};
use crate::schedule::TaskQueue;
use crate::search::{self, Typeahead};
use crate::types::{
    Activation, DisclosureConfig, DisclosureEvent, FocusOptions, ItemConfig, ItemId, ItemState,
    KeyOutcome, WidgetId,
};

/// Deferred steps.
enum Task<V> {
    Expand {
        widget: WidgetId,
        generation: u64,
        focus_after: Option<Intent<ItemId, V>>,
    },
    ApplyFocus {
        widget: WidgetId,
        generation: u64,
        intent: Intent<ItemId, V>,
    },
    FocusButton {
        widget: WidgetId,
    },
    ClearSearch {
        widget: WidgetId,
    },
}

impl<V> Task<V> {
    fn widget(&self) -> WidgetId {
        match self {
            Self::Expand { widget, .. }
            | Self::ApplyFocus { widget, .. }
            | Self::FocusButton { widget }
            | Self::ClearSearch { widget } => *widget,
        }
    }
}

/// A mounted element together with the id the controller gave it.
struct Mounted<E> {
    element: E,
    dom_id: String,
}

pub(crate) struct Item<E, V> {
    id: ItemId,
    element: E,
    dom_id: String,
    disabled: bool,
    value: Option<V>,
}

impl<E, V: PartialEq> Candidate for Item<E, V> {
    type Key = ItemId;
    type Value = V;

    fn key(&self) -> ItemId {
        self.id
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }
}

/// State of one widget.
pub(crate) struct Controller<B: Binding, H: Host> {
    config: DisclosureConfig,
    expanded: bool,
    generation: u64,
    button: Mounted<H::Element>,
    panel_registered: bool,
    panel: Option<Mounted<H::Element>>,
    items: Vec<Item<H::Element, B::Value>>,
    active: Option<ItemId>,
    search: Typeahead,
    outside_click: Option<H::Listener>,
    pub(crate) value: Option<B::Value>,
}

impl<B: Binding, H: Host> Controller<B, H> {
    fn new(config: DisclosureConfig, button: Mounted<H::Element>) -> Self {
        Self {
            config,
            expanded: false,
            generation: 0,
            button,
            panel_registered: false,
            panel: None,
            items: Vec::new(),
            active: None,
            search: Typeahead::new(),
            outside_click: None,
            value: None,
        }
    }

    fn item(&self, id: ItemId) -> Option<&Item<H::Element, B::Value>> {
        self.items.iter().find(|item| item.id == id)
    }

    fn state_of(&self, item: &Item<H::Element, B::Value>) -> ItemState {
        let mut state = ItemState::empty();
        state.set(ItemState::ACTIVE, self.active == Some(item.id));
        state.set(
            ItemState::SELECTED,
            B::TRACKS_VALUE && self.value.is_some() && item.value == self.value,
        );
        state.set(ItemState::DISABLED, item.disabled);
        state
    }

    pub(crate) fn refresh_items(&self, host: &mut H) {
        for item in &self.items {
            host.refresh_item(&item.element, self.state_of(item));
        }
    }

    fn mount_panel(&mut self, host: &mut H, ids: &mut IdGenerator, widget: WidgetId) {
        let Some(element) = host.mount_panel(widget) else {
            warn!(?widget, "host mounted no panel element");
            return;
        };
        let dom_id = ids.element_id(B::WIDGET, B::PANEL_PART);
        host.set_attribute(&element, "tabindex", "-1");
        host.set_attribute(&element, "id", &dom_id);
        host.set_attribute(&element, "role", B::PANEL_ROLE);
        host.set_attribute(&element, "aria-labelledby", &self.button.dom_id);
        self.panel = Some(Mounted { element, dom_id });
    }

    /// Resolve `intent` and apply it. Returns whether the active item changed.
    fn focus(&mut self, host: &mut H, intent: &Intent<ItemId, B::Value>) -> bool {
        let next = focus::resolve(intent, &self.items, self.active);
        if next == self.active {
            return false;
        }
        self.set_active(host, next);
        true
    }

    fn set_active(&mut self, host: &mut H, next: Option<ItemId>) {
        self.active = next;
        if let Some(panel) = &self.panel {
            match next.and_then(|id| self.item(id)) {
                Some(item) => {
                    host.set_attribute(&panel.element, "aria-activedescendant", &item.dom_id);
                }
                None => host.remove_attribute(&panel.element, "aria-activedescendant"),
            }
        }
        self.refresh_items(host);
        trace!(active = ?next, "active item changed");
    }
}

/// Every widget of one [`Binding`] kind, plus the task queue driving them.
///
/// All widgets share one virtual clock. Hosts call [`Disclosures::tick`] once per turn of
/// their event loop and [`Disclosures::advance`] as time passes.
pub struct Disclosures<B: Binding, H: Host> {
    pub(crate) widgets: Arena<Controller<B, H>>,
    queue: TaskQueue<Task<B::Value>>,
    ids: IdGenerator,
    next_item: u64,
    events: Vec<DisclosureEvent<B::Value>>,
}

impl<B: Binding, H: Host> fmt::Debug for Disclosures<B, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disclosures")
            .field("kind", &B::WIDGET)
            .field("widgets", &self.widgets.len())
            .field("pending_tasks", &self.queue.len())
            .field("now", &self.queue.now())
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl<B: Binding, H: Host> Default for Disclosures<B, H> {
    fn default() -> Self {
        Self::with_id_source(IdSource::Shared)
    }
}

impl<B: Binding, H: Host> Disclosures<B, H> {
    /// Create an empty arena drawing element ids from the process-wide counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty arena with an explicit id source.
    pub fn with_id_source(source: IdSource) -> Self {
        Self {
            widgets: Arena::default(),
            queue: TaskQueue::new(),
            ids: IdGenerator::new(source),
            next_item: 0,
            events: Vec::new(),
        }
    }

    // --- lifecycle -------------------------------------------------------------------

    /// Create a widget around its trigger button.
    ///
    /// The button gets `id`, `type="button"` and `aria-haspopup="true"`.
    pub fn create(
        &mut self,
        host: &mut H,
        button: H::Element,
        config: DisclosureConfig,
    ) -> WidgetId {
        let dom_id = self.ids.element_id(B::WIDGET, "button");
        host.set_attribute(&button, "id", &dom_id);
        host.set_attribute(&button, "type", "button");
        host.set_attribute(&button, "aria-haspopup", "true");
        let widget = self.widgets.insert(Controller::new(
            config,
            Mounted {
                element: button,
                dom_id,
            },
        ));
        debug!(?widget, kind = B::WIDGET, "created widget");
        widget
    }

    /// Tear a widget down, releasing its listener and unmounting its panel.
    ///
    /// Returns `false` if the widget was already gone.
    pub fn destroy(&mut self, host: &mut H, widget: WidgetId) -> bool {
        let Some(mut ctrl) = self.widgets.remove(widget) else {
            return false;
        };
        if let Some(listener) = ctrl.outside_click.take() {
            host.remove_window_click_listener(listener);
        }
        if ctrl.panel.take().is_some() {
            host.unmount_panel(widget);
        }
        self.queue.retain(|task| task.widget() != widget);
        debug!(?widget, "destroyed widget");
        true
    }

    /// Attach the panel template to a widget.
    ///
    /// Static widgets mount the panel right away; others mount it on every open.
    pub fn register_panel(
        &mut self,
        host: &mut H,
        widget: WidgetId,
    ) -> Result<(), RegistrationError> {
        let ctrl = self
            .widgets
            .get_mut(widget)
            .ok_or(RegistrationError::UnknownWidget(widget))?;
        if ctrl.panel_registered {
            return Err(RegistrationError::PanelAlreadyRegistered(widget));
        }
        ctrl.panel_registered = true;
        if ctrl.config.is_static {
            ctrl.mount_panel(host, &mut self.ids, widget);
        }
        Ok(())
    }

    /// Register an item whose view was just mounted inside the widget's panel.
    ///
    /// Items must be registered in document order. The element gets `id`,
    /// `tabindex="-1"`, its `role` and `aria-disabled`.
    pub fn register_item(
        &mut self,
        host: &mut H,
        widget: WidgetId,
        element: H::Element,
        config: ItemConfig<B::Value>,
    ) -> Result<ItemId, RegistrationError> {
        let ctrl = self
            .widgets
            .get_mut(widget)
            .ok_or(RegistrationError::UnknownWidget(widget))?;
        if ctrl.panel.is_none() {
            return Err(RegistrationError::PanelNotMounted(widget));
        }
        let id = ItemId(self.next_item);
        self.next_item += 1;
        let dom_id = self.ids.element_id(B::WIDGET, B::ITEM_PART);
        host.set_attribute(&element, "id", &dom_id);
        host.set_attribute(&element, "tabindex", "-1");
        host.set_attribute(&element, "role", B::ITEM_ROLE);
        if config.disabled {
            host.set_attribute(&element, "aria-disabled", "true");
        } else {
            host.remove_attribute(&element, "aria-disabled");
        }
        let item = Item {
            id,
            element,
            dom_id,
            disabled: config.disabled,
            value: config.value,
        };
        host.refresh_item(&item.element, ctrl.state_of(&item));
        ctrl.items.push(item);
        trace!(?widget, item = ?id, "registered item");
        Ok(id)
    }

    // --- open / close ----------------------------------------------------------------

    /// Open a collapsed widget or close an expanded one.
    ///
    /// `focus_after_expand` is applied once the items exist; `focus_button_on_close`
    /// decides whether focus returns to the button when this call closes the widget.
    pub fn toggle(
        &mut self,
        host: &mut H,
        widget: WidgetId,
        focus_after_expand: Option<Intent<ItemId, B::Value>>,
        focus_button_on_close: bool,
    ) {
        let Some(ctrl) = self.widgets.get(widget) else {
            warn!(?widget, "toggle on unknown widget");
            return;
        };
        if ctrl.expanded {
            self.collapse(host, widget, focus_button_on_close);
        } else {
            self.expand(widget, focus_after_expand);
        }
    }

    /// Open the widget if it is collapsed.
    pub fn open(&mut self, widget: WidgetId, focus_after_expand: Option<Intent<ItemId, B::Value>>) {
        if self.widgets.get(widget).is_some_and(|ctrl| !ctrl.expanded) {
            self.expand(widget, focus_after_expand);
        }
    }

    /// Close the widget if it is expanded.
    pub fn close(&mut self, host: &mut H, widget: WidgetId, focus_button: bool) {
        if self.is_expanded(widget) {
            self.collapse(host, widget, focus_button);
        }
    }

    fn expand(&mut self, widget: WidgetId, focus_after: Option<Intent<ItemId, B::Value>>) {
        let Some(ctrl) = self.widgets.get_mut(widget) else {
            return;
        };
        ctrl.expanded = true;
        ctrl.generation += 1;
        let generation = ctrl.generation;
        self.queue.defer(Task::Expand {
            widget,
            generation,
            focus_after,
        });
        self.events.push(DisclosureEvent::Opened(widget));
        debug!(?widget, generation, "opening");
    }

    fn finish_expand(
        &mut self,
        host: &mut H,
        widget: WidgetId,
        generation: u64,
        focus_after: Option<Intent<ItemId, B::Value>>,
    ) {
        let Some(ctrl) = self.widgets.get_mut(widget) else {
            return;
        };
        if !ctrl.expanded || ctrl.generation != generation {
            trace!(?widget, generation, "dropping stale expand step");
            return;
        }
        if ctrl.panel_registered && ctrl.panel.is_none() {
            ctrl.mount_panel(host, &mut self.ids, widget);
        }
        let Some(panel) = &ctrl.panel else {
            // No panel to show; the open is abandoned.
            warn!(?widget, "opening a widget that has no panel");
            ctrl.expanded = false;
            self.events.push(DisclosureEvent::Closed(widget));
            return;
        };
        host.focus(
            &panel.element,
            FocusOptions {
                prevent_scroll: true,
            },
        );
        host.set_attribute(&ctrl.button.element, "aria-controls", &panel.dom_id);
        host.set_attribute(&ctrl.button.element, "expanded", "true");

        debug_assert!(
            ctrl.outside_click.is_none(),
            "window click listener acquired twice"
        );
        if ctrl.outside_click.is_none() {
            ctrl.outside_click = Some(host.add_window_click_listener(widget));
        }

        if let Some(intent) = focus_after {
            self.queue.defer(Task::ApplyFocus {
                widget,
                generation,
                intent,
            });
        }
        debug!(?widget, generation, "expanded");
    }

    fn collapse(&mut self, host: &mut H, widget: WidgetId, focus_button: bool) {
        let Some(ctrl) = self.widgets.get_mut(widget) else {
            return;
        };
        ctrl.expanded = false;
        if !ctrl.config.is_static && ctrl.panel.take().is_some() {
            host.unmount_panel(widget);
        }
        host.remove_attribute(&ctrl.button.element, "aria-controls");
        host.remove_attribute(&ctrl.button.element, "expanded");
        if ctrl.config.is_static {
            // The item views survive; only the roving focus is reset.
            if ctrl.active.is_some() {
                ctrl.set_active(host, None);
            }
        } else {
            ctrl.items.clear();
            ctrl.active = None;
        }
        if let Some(listener) = ctrl.outside_click.take() {
            host.remove_window_click_listener(listener);
        }
        if let Some(timer) = ctrl.search.clear() {
            self.queue.cancel(timer);
        }
        if focus_button {
            self.queue.defer(Task::FocusButton { widget });
        }
        self.events.push(DisclosureEvent::Closed(widget));
        debug!(?widget, focus_button, "collapsed");
    }

    // --- focus and search ------------------------------------------------------------

    /// Move the active item.
    pub fn focus_item(&mut self, host: &mut H, widget: WidgetId, intent: Intent<ItemId, B::Value>) {
        match self.widgets.get_mut(widget) {
            Some(ctrl) => {
                ctrl.focus(host, &intent);
            }
            None => warn!(?widget, "focus on unknown widget"),
        }
    }

    /// Feed one character to typeahead and focus the first enabled item it matches.
    pub fn search(&mut self, host: &mut H, widget: WidgetId, ch: char) {
        let Some(ctrl) = self.widgets.get_mut(widget) else {
            warn!(?widget, "search on unknown widget");
            return;
        };
        let timer = self
            .queue
            .schedule_after(ctrl.config.search_idle_ms, Task::ClearSearch { widget });
        if let Some(previous) = ctrl.search.push(ch, timer) {
            self.queue.cancel(previous);
        }

        let found = search::find_match(
            ctrl.search.query(),
            ctrl.items
                .iter()
                .map(|item| (item.id, host.text_content(&item.element), !item.disabled)),
        );
        trace!(?widget, query = ctrl.search.query(), matched = ?found, "typeahead");
        if let Some(item) = found
            && Some(item) != ctrl.active
        {
            ctrl.focus(host, &Intent::Specific(item));
        }
    }

    /// Forget the typeahead query now instead of waiting for the idle timeout.
    pub fn clear_search(&mut self, widget: WidgetId) {
        if let Some(ctrl) = self.widgets.get_mut(widget)
            && let Some(timer) = ctrl.search.clear()
        {
            self.queue.cancel(timer);
        }
    }

    // --- activation ------------------------------------------------------------------

    /// Activate an item as if it was clicked.
    ///
    /// Disabled items are not activated and report [`Activation::Prevented`]. A listbox
    /// takes the item's value and emits [`DisclosureEvent::ValueChanged`]; every widget
    /// emits [`DisclosureEvent::Activated`] and closes, returning focus to the button.
    pub fn click_item(&mut self, host: &mut H, widget: WidgetId, item: ItemId) -> Activation {
        let Some(ctrl) = self.widgets.get_mut(widget) else {
            warn!(?widget, "click on unknown widget");
            return Activation::Ignored;
        };
        let Some(entry) = ctrl.item(item) else {
            warn!(?widget, ?item, "click on unknown item");
            return Activation::Ignored;
        };
        if entry.disabled {
            return Activation::Prevented;
        }
        if B::TRACKS_VALUE {
            let value = entry.value.clone();
            ctrl.value = value.clone();
            ctrl.refresh_items(host);
            self.events
                .push(DisclosureEvent::ValueChanged { widget, value });
        }
        self.events.push(DisclosureEvent::Activated { widget, item });
        let expanded = ctrl.expanded;
        if expanded {
            self.collapse(host, widget, true);
        }
        Activation::Activated
    }

    /// Activate the active item, if there is one.
    pub fn click_active(&mut self, host: &mut H, widget: WidgetId) -> Activation {
        match self.active_item(widget) {
            Some(item) => self.click_item(host, widget, item),
            None => Activation::Ignored,
        }
    }

    // --- input from the host ---------------------------------------------------------

    /// The button was clicked.
    pub fn click_button(&mut self, host: &mut H, widget: WidgetId) {
        self.toggle(host, widget, None, true);
    }

    /// A key was pressed while the button had focus.
    pub fn button_keydown(&mut self, host: &mut H, widget: WidgetId, key: Key) -> KeyOutcome {
        let Some(ordinal) = B::button_command(key) else {
            return KeyOutcome::Passed;
        };
        let Some(ctrl) = self.widgets.get(widget) else {
            warn!(?widget, "key on unknown widget");
            return KeyOutcome::Passed;
        };
        let intent = match &ctrl.value {
            Some(value) if B::TRACKS_VALUE => Intent::ValueMatch(value.clone()),
            _ => ordinal.into(),
        };
        self.toggle(host, widget, Some(intent), true);
        KeyOutcome::Consumed
    }

    /// A key was pressed while the panel had focus.
    pub fn panel_keydown(&mut self, host: &mut H, widget: WidgetId, key: Key) -> KeyOutcome {
        let Some(command) = B::panel_command(key) else {
            return KeyOutcome::Passed;
        };
        let Some(ctrl) = self.widgets.get(widget) else {
            warn!(?widget, "key on unknown widget");
            return KeyOutcome::Passed;
        };
        let query_pending = !ctrl.search.is_empty();
        match command {
            PanelCommand::Focus(ordinal) => self.focus_item(host, widget, ordinal.into()),
            PanelCommand::Activate => {
                self.click_active(host, widget);
            }
            PanelCommand::SearchOrActivate(ch) => {
                if query_pending {
                    self.search(host, widget, ch);
                } else {
                    self.click_active(host, widget);
                }
            }
            PanelCommand::Close => self.close(host, widget, true),
            PanelCommand::Suppress => {}
            PanelCommand::Search(ch) => {
                self.search(host, widget, ch);
                return KeyOutcome::Passed;
            }
        }
        KeyOutcome::Consumed
    }

    /// The pointer moved onto an item.
    pub fn pointer_enter_item(&mut self, host: &mut H, widget: WidgetId, item: ItemId) {
        self.focus_item(host, widget, Intent::Specific(item));
    }

    /// The pointer left an item.
    pub fn pointer_leave_item(&mut self, host: &mut H, widget: WidgetId) {
        self.focus_item(host, widget, Intent::Nothing);
    }

    /// A click reached the window listener acquired for `widget`.
    ///
    /// Clicks inside the button or panel are ignored. Any other click closes the widget;
    /// focus returns to the button unless the click landed inside the element that had
    /// focus, which keeps the user's own focus choice.
    pub fn window_click(&mut self, host: &mut H, widget: WidgetId, target: &H::Element) {
        let Some(ctrl) = self.widgets.get(widget) else {
            return;
        };
        if !ctrl.expanded || ctrl.outside_click.is_none() {
            return;
        }
        let inside = host.contains(&ctrl.button.element, target)
            || ctrl
                .panel
                .as_ref()
                .is_some_and(|panel| host.contains(&panel.element, target));
        if inside {
            return;
        }
        let keep_focus = host
            .active_element()
            .is_some_and(|active| host.contains(&active, target));
        debug!(?widget, keep_focus, "outside click");
        self.collapse(host, widget, !keep_focus);
    }

    // --- time ------------------------------------------------------------------------

    /// Run one turn: every task that was ready when this call started.
    ///
    /// Tasks queued while the turn runs wait for the next call. Returns how many ran.
    pub fn tick(&mut self, host: &mut H) -> usize {
        let barrier = self.queue.barrier();
        let mut ran = 0;
        while let Some(task) = self.queue.pop_ready(barrier) {
            self.run_task(host, task);
            ran += 1;
        }
        ran
    }

    /// Run ready tasks, including ones queued along the way, without moving the clock.
    pub fn run_until_idle(&mut self, host: &mut H) -> usize {
        let mut ran = 0;
        while let Some(task) = self.queue.pop_ready(u64::MAX) {
            self.run_task(host, task);
            ran += 1;
        }
        ran
    }

    /// Let `ms` milliseconds pass, firing timers in deadline order.
    ///
    /// Only work queued before the call runs, each entry at its own deadline. Anything the
    /// fired work queues in turn waits for the next [`Disclosures::tick`], so the host
    /// still gets a turn between the expand step and the focus step that follows it.
    pub fn advance(&mut self, host: &mut H, ms: u64) -> usize {
        let target = self.queue.now().saturating_add(ms);
        let barrier = self.queue.barrier();
        let mut ran = 0;
        while let Some(due) = self
            .queue
            .next_deadline_before(barrier)
            .filter(|&due| due <= target)
        {
            self.queue.set_now(due);
            while let Some(task) = self.queue.pop_ready(barrier) {
                self.run_task(host, task);
                ran += 1;
            }
        }
        self.queue.set_now(target);
        ran
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.queue.now()
    }

    /// Number of queued tasks and timers.
    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    fn run_task(&mut self, host: &mut H, task: Task<B::Value>) {
        match task {
            Task::Expand {
                widget,
                generation,
                focus_after,
            } => self.finish_expand(host, widget, generation, focus_after),
            Task::ApplyFocus {
                widget,
                generation,
                intent,
            } => {
                if let Some(ctrl) = self.widgets.get_mut(widget)
                    && ctrl.expanded
                    && ctrl.generation == generation
                {
                    ctrl.focus(host, &intent);
                }
            }
            Task::FocusButton { widget } => {
                if let Some(ctrl) = self.widgets.get(widget) {
                    host.focus(&ctrl.button.element, FocusOptions::default());
                }
            }
            Task::ClearSearch { widget } => {
                if let Some(ctrl) = self.widgets.get_mut(widget) {
                    ctrl.search.clear();
                    trace!(?widget, "typeahead idle");
                }
            }
        }
    }

    // --- inspection ------------------------------------------------------------------

    /// Take the events emitted since the last call.
    pub fn drain_events(&mut self) -> Drain<'_, DisclosureEvent<B::Value>> {
        self.events.drain(..)
    }

    /// Whether `widget` names a live widget.
    pub fn contains(&self, widget: WidgetId) -> bool {
        self.widgets.is_alive(widget)
    }

    /// Number of live widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether there are no live widgets.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the widget is open (or opening).
    pub fn is_expanded(&self, widget: WidgetId) -> bool {
        self.widgets.get(widget).is_some_and(|ctrl| ctrl.expanded)
    }

    /// The active item.
    pub fn active_item(&self, widget: WidgetId) -> Option<ItemId> {
        self.widgets.get(widget)?.active
    }

    /// Registered items in document order.
    pub fn items(&self, widget: WidgetId) -> impl Iterator<Item = ItemId> + '_ {
        self.widgets
            .get(widget)
            .into_iter()
            .flat_map(|ctrl| ctrl.items.iter().map(|item| item.id))
    }

    /// Presentation state of an item.
    pub fn item_state(&self, widget: WidgetId, item: ItemId) -> Option<ItemState> {
        let ctrl = self.widgets.get(widget)?;
        Some(ctrl.state_of(ctrl.item(item)?))
    }

    /// The element an item was registered with.
    pub fn item_element(&self, widget: WidgetId, item: ItemId) -> Option<&H::Element> {
        Some(&self.widgets.get(widget)?.item(item)?.element)
    }

    /// The widget's button element.
    pub fn button_element(&self, widget: WidgetId) -> Option<&H::Element> {
        Some(&self.widgets.get(widget)?.button.element)
    }

    /// The mounted panel element.
    pub fn panel_element(&self, widget: WidgetId) -> Option<&H::Element> {
        Some(&self.widgets.get(widget)?.panel.as_ref()?.element)
    }

    /// The pending typeahead query.
    pub fn search_query(&self, widget: WidgetId) -> Option<&str> {
        Some(self.widgets.get(widget)?.search.query())
    }

    /// Whether the widget currently holds a window click listener.
    pub fn is_listening(&self, widget: WidgetId) -> bool {
        self.widgets
            .get(widget)
            .is_some_and(|ctrl| ctrl.outside_click.is_some())
    }
}
