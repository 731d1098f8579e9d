// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Common label constants used by the console operator's watch filters.
//!
//! Resources belonging to the console carry the `app` and `component` labels below;
//! the operator's label filters admit events only for objects carrying them.

use std::collections::BTreeMap;

// ============================================================================
// Console Labels
// ============================================================================

/// Label naming the application a resource belongs to
pub const LABEL_APP: &str = "app";

/// Label naming the component within the application
pub const LABEL_COMPONENT: &str = "component";

/// Value of [`LABEL_APP`] for console resources
pub const APP_CONSOLE: &str = "console";

/// Value of [`LABEL_COMPONENT`] for the console UI server
pub const COMPONENT_UI: &str = "ui";

/// Labels every console UI resource is expected to carry.
#[must_use]
pub fn console_ui_labels() -> BTreeMap<String, String> {
    BTreeMap::from([
        (LABEL_APP.to_string(), APP_CONSOLE.to_string()),
        (LABEL_COMPONENT.to_string(), COMPONENT_UI.to_string()),
    ])
}
