// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline styles written onto the container, the content and the toolbar.

use cursor_icon::CursorIcon;

/// Inline style for the container: clip the content and become its
/// positioning and compositing root.
pub const CONTAINER_CSS: &str = "overflow: hidden; transform: translateZ(0); \
    position: relative; width: 100%; height: 100%;";

/// Scaling is anchored at the content's center.
pub const CONTENT_TRANSFORM_ORIGIN: &str = "center center";

/// Toolbar root, pinned to the bottom center of the container.
///
/// The custom properties can be overridden by page CSS to theme the toolbar.
pub const TOOLBAR_CSS: &str = "--color: #333; --border-color: #f1f1f1; --size: 32px; \
    --border-radius: 4px; --background-color: #fff; \
    display: inline-flex; align-items: center; gap: 16px; position: absolute; \
    left: 50%; bottom: 16px; color: var(--color); transform: translateX(-50%);";

/// Group holding the minus button, the label and the plus button.
pub const SCALE_CONTROL_CSS: &str = "display: inline-flex; align-items: center; gap: 8px; \
    border: 1px solid var(--border-color); border-radius: var(--border-radius); \
    background-color: var(--background-color);";

/// Zoom step buttons.
pub const STEP_BUTTON_CSS: &str = "width: var(--size); height: var(--size); \
    text-align: center; line-height: var(--size); font-size: 1em; cursor: pointer;";

/// Percentage label.
pub const SCALE_LABEL_CSS: &str =
    "min-width: 60px; text-align: center; white-space: nowrap; cursor: pointer;";

/// "Back to content" button; hidden until the content leaves the view.
pub const RECENTER_CSS: &str = "display: none; padding: 0 8px; line-height: var(--size); \
    border: 1px solid var(--border-color); border-radius: var(--border-radius); \
    background-color: var(--background-color); cursor: pointer;";

/// Text of the "back to content" button.
pub const RECENTER_TEXT: &str = "Back to content";

/// `display` value for the recenter button.
#[must_use]
pub fn recenter_display(visible: bool) -> &'static str {
    if visible { "" } else { "none" }
}

/// CSS `cursor` value for `cursor`; empty to remove the inline override.
#[must_use]
pub fn cursor_value(cursor: Option<CursorIcon>) -> &'static str {
    cursor.map_or("", |icon| icon.name())
}

/// Formats a CSS pixel length.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}
