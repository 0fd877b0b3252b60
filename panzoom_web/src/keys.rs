// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM keyboard details.

use ui_events::keyboard::{Key, NamedKey};

/// Maps a DOM `KeyboardEvent.key` value to a [`Key`].
///
/// Printable keys (a single character) become [`Key::Character`]. Named keys
/// the controller never reacts to collapse to [`NamedKey::Unidentified`].
#[must_use]
pub fn dom_key(key: &str) -> Key {
    match key {
        // Legacy spelling still produced by some engines.
        "Spacebar" => Key::Character(" ".into()),
        _ if key.chars().count() == 1 => Key::Character(key.into()),
        _ => Key::Named(NamedKey::Unidentified),
    }
}

/// Whether `user_agent` belongs to a macOS/iOS browser, where the primary
/// modifier is meta instead of ctrl.
#[must_use]
pub fn is_mac_user_agent(user_agent: &str) -> bool {
    user_agent.contains("Mac")
}

/// Resolves the primary modifier from the event's modifier state.
#[must_use]
pub fn primary_modifier(mac: bool, meta: bool, ctrl: bool) -> bool {
    if mac { meta } else { ctrl }
}
