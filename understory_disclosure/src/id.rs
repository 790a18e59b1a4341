// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element id generation for ARIA wiring.
//!
//! Ids have the form `headlessui-{widget}-{part}-{n}` where `n` increases by one for every
//! id handed out. By default all generators draw from one process-wide counter so two
//! arenas never produce the same id; a [`IdSource::Local`] counter starts at 1 and is
//! private to its generator, which keeps ids stable in tests.

use alloc::format;
use alloc::string::String;
use core::sync::atomic::{AtomicU32, Ordering};

static NEXT_SHARED: AtomicU32 = AtomicU32::new(1);

/// Where an [`IdGenerator`] draws its numbers from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum IdSource {
    /// The process-wide counter.
    #[default]
    Shared,
    /// A counter private to one generator, starting at 1.
    Local,
}

/// Monotonic id generator.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    source: IdSource,
    next_local: u32,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdSource::Shared)
    }
}

impl IdGenerator {
    /// Create a generator over the given source.
    pub fn new(source: IdSource) -> Self {
        Self {
            source,
            next_local: 1,
        }
    }

    /// The next number.
    pub fn next_number(&mut self) -> u32 {
        match self.source {
            IdSource::Shared => NEXT_SHARED.fetch_add(1, Ordering::Relaxed),
            IdSource::Local => {
                let n = self.next_local;
                self.next_local = n.wrapping_add(1);
                n
            }
        }
    }

    /// The next element id for `part` of a `widget`, e.g. `headlessui-menu-button-1`.
    pub fn element_id(&mut self, widget: &str, part: &str) -> String {
        format!("headlessui-{widget}-{part}-{}", self.next_number())
    }
}
