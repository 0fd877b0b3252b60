// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use ui_events::keyboard::Key;

/// One of the on-screen controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Affordance {
    /// Zoom out by one step.
    ZoomOut,
    /// Zoom in by one step.
    ZoomIn,
    /// The percentage label; resets the scale to 100%.
    ScaleLabel,
    /// The "return to content" button.
    Recenter,
}

/// Host-neutral input delivered to [`InteractionController::handle`].
///
/// Positions are client coordinates in device-independent pixels. The host
/// resolves the platform's primary modifier (meta on macOS, ctrl elsewhere)
/// into `primary_modifier`.
///
/// [`InteractionController::handle`]: crate::InteractionController::handle
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The pointer entered the container.
    PointerEnter,
    /// The pointer left the container.
    PointerLeave,
    /// A wheel event anywhere in the document.
    Wheel {
        /// Vertical wheel delta; positive when scrolling down.
        delta_y: f64,
        /// Whether the primary modifier was held.
        primary_modifier: bool,
    },
    /// A key was pressed.
    KeyDown {
        /// The logical key.
        key: Key,
        /// Whether the primary modifier was held.
        primary_modifier: bool,
    },
    /// A key was released.
    KeyUp {
        /// The logical key.
        key: Key,
    },
    /// A pointer button was pressed anywhere in the document.
    PointerDown {
        /// Pointer position.
        position: Point,
    },
    /// The pointer moved during a drag.
    PointerMove {
        /// Pointer position.
        position: Point,
    },
    /// The pointer button was released during a drag.
    PointerUp {
        /// Pointer position.
        position: Point,
    },
    /// The platform cancelled the pointer stream.
    PointerCancel,
    /// The document or window lost focus.
    FocusLost,
    /// One of the affordances was clicked.
    Click(Affordance),
    /// The visible fraction of the content changed.
    Intersection {
        /// Visible fraction in `[0, 1]`.
        ratio: f64,
    },
    /// The container was resized; the controller re-measures it.
    Resize,
}

/// What a call to [`InteractionController::handle`] did.
///
/// [`InteractionController::handle`]: crate::InteractionController::handle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The event did not apply in the current state.
    Ignored,
    /// Pointer presence over the container was updated.
    Hover,
    /// The scale changed.
    Zoomed,
    /// Panning was armed.
    PanArmed,
    /// Panning was disarmed.
    PanDisarmed,
    /// A drag started.
    DragStarted,
    /// The content moved during a drag.
    Dragged,
    /// A drag finished, with or without a final move.
    DragEnded,
    /// The content returned to its origin position.
    Recentered,
    /// The "return to content" affordance visibility was updated.
    RecenterVisibility,
    /// The container size was re-measured.
    Resized,
}

/// Result of handling one [`InputEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Response {
    /// What happened.
    pub outcome: Outcome,
    /// Whether the host should cancel the platform's default action (page
    /// zoom, scrolling, text selection).
    pub suppress_default: bool,
}

impl Response {
    pub(crate) const IGNORED: Self = Self {
        outcome: Outcome::Ignored,
        suppress_default: false,
    };

    pub(crate) fn passive(outcome: Outcome) -> Self {
        Self {
            outcome,
            suppress_default: false,
        }
    }

    pub(crate) fn consumed(outcome: Outcome) -> Self {
        Self {
            outcome,
            suppress_default: true,
        }
    }

    /// Returns `true` unless the event was ignored.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        self.outcome != Outcome::Ignored
    }
}

/// Returns the text of a character key, if `key` is one.
pub(crate) fn key_text(key: &Key) -> Option<&str> {
    match key {
        Key::Character(text) => Some(text.as_str()),
        _ => None,
    }
}
