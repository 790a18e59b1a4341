// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration errors.

use core::fmt;

use crate::types::WidgetId;

/// A panel or item could not be registered. These indicate a misconfigured template.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegistrationError {
    /// The widget id does not name a live widget.
    UnknownWidget(WidgetId),
    /// The widget already has a panel.
    PanelAlreadyRegistered(WidgetId),
    /// Items can only be registered while the widget's panel is mounted.
    PanelNotMounted(WidgetId),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWidget(id) => write!(f, "no live widget with id {id:?}"),
            Self::PanelAlreadyRegistered(id) => {
                write!(f, "widget {id:?} already has a panel")
            }
            Self::PanelNotMounted(id) => {
                write!(f, "widget {id:?} has no mounted panel to hold items")
            }
        }
    }
}

impl core::error::Error for RegistrationError {}
