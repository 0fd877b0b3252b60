// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::drag::DragSession;

/// Transient gesture flags owned by a controller.
///
/// The three flags are independent: the pointer can leave the container in
/// the middle of a drag, and panning can be disarmed (space released) while
/// the drag keeps going until the pointer is released.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    pub(crate) inside_viewport: bool,
    pub(crate) pan_armed: bool,
    pub(crate) drag: Option<DragSession>,
}

impl GestureState {
    /// Whether the pointer is over the container.
    #[must_use]
    pub fn is_inside_viewport(&self) -> bool {
        self.inside_viewport
    }

    /// Whether the pan key is held, priming the next pointer down.
    #[must_use]
    pub fn is_pan_armed(&self) -> bool {
        self.pan_armed
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The active drag session, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
