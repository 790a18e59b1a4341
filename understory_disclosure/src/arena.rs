// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational slot storage for widget controllers.

use alloc::vec::Vec;

use crate::types::WidgetId;

/// Slots addressed by [`WidgetId`]; a freed slot bumps its generation so old ids stop resolving.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }
}

impl<T> Arena<T> {
    pub(crate) fn insert(&mut self, value: T) -> WidgetId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(value);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "WidgetId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(value));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "WidgetId uses 32-bit indices by design."
            )]
            ((self.slots.len() - 1) as u32, generation)
        };
        WidgetId::new(idx, generation)
    }

    pub(crate) fn remove(&mut self, id: WidgetId) -> Option<T> {
        if !self.is_alive(id) {
            return None;
        }
        let value = self.slots[id.idx()].take();
        self.free_list.push(id.idx());
        value
    }

    pub(crate) fn is_alive(&self, id: WidgetId) -> bool {
        self.slots.get(id.idx()).is_some_and(Option::is_some)
            && self.generations.get(id.idx()) == Some(&id.generation())
    }

    pub(crate) fn get(&self, id: WidgetId) -> Option<&T> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: WidgetId) -> Option<&mut T> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].as_mut()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }
}
