// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: the lifetime of one pan gesture.
//!
//! The pointer anchor and the matrix snapshot live in
//! [`TransformState`](panzoom_transform::TransformState); a session only marks
//! that a drag is in progress and counts the moves it has applied.
//!
//! ## Usage
//!
//! 1) Begin a session with [`DragSession::begin`] on pointer down; the
//!    controller subscribes to [`Listeners::DRAG_TRACKING`] at the same time.
//! 2) Call [`DragSession::record_move`] for every move or release that
//!    translated the content.
//! 3) End it on pointer up, pointer cancel or focus loss. Dropping the session
//!    is the end; the controller releases the drag listeners unconditionally.
//!
//! ## Minimal example
//!
//! ```
//! use panzoom_controller::DragSession;
//!
//! let mut drag = DragSession::begin();
//! assert_eq!(drag.moves(), 0);
//!
//! drag.record_move();
//! drag.record_move();
//! assert_eq!(drag.moves(), 2);
//! ```
//!
//! [`Listeners::DRAG_TRACKING`]: crate::Listeners::DRAG_TRACKING

/// Marker for an in-progress drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragSession {
    moves: u32,
}

impl DragSession {
    /// Starts a session on pointer down.
    #[must_use]
    pub fn begin() -> Self {
        Self::default()
    }

    /// Counts one applied move.
    pub fn record_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }

    /// Moves applied since [`begin`](Self::begin).
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }
}
