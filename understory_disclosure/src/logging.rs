// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logging macros.
//!
//! With the `tracing` feature these are the `tracing` macros; without it they expand to an
//! empty block, so they stay valid in both statement and expression position.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop {
    // Distinct names keep the imports below clear of the built-in `warn` attribute.
    macro_rules! noop_debug {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! noop_trace {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! noop_warn {
        ($($arg:tt)*) => {{}};
    }

    pub(crate) use {noop_debug, noop_trace, noop_warn};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop::{noop_debug as debug, noop_trace as trace, noop_warn as warn};
