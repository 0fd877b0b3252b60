// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON configuration and change payloads for the JavaScript entry point.

use panzoom_controller::{Change, PanZoomOptions};
use serde_json::{Value, json};

use crate::error::MountError;

/// Reads options from a JSON object such as
/// `{"scaleSize": 0.05, "allowOverflow": false}`.
///
/// Missing fields take their defaults; `null` or an empty string means all
/// defaults. Unknown fields (like `onChange`) are ignored.
///
/// # Errors
///
/// [`MountError::InvalidOptions`] if the text is not a JSON object with
/// fields of the right types.
pub fn options_from_json(json: &str) -> Result<PanZoomOptions, MountError> {
    let json = json.trim();
    if json.is_empty() || json == "null" {
        return Ok(PanZoomOptions::default());
    }
    serde_json::from_str(json).map_err(|err| MountError::InvalidOptions(err.to_string()))
}

/// Splits a change into the `(kind, value)` pair passed to `onChange`.
///
/// Scale changes carry the new scale; position changes carry
/// `{"left": x, "top": y}`.
#[must_use]
pub fn change_payload(change: Change) -> (&'static str, Value) {
    match change {
        Change::Scale(scale) => ("scale", json!(scale)),
        Change::Position(position) => (
            "position",
            json!({ "left": position.x, "top": position.y }),
        ),
    }
}
