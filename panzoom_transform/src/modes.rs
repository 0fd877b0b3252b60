// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How far the scaled content may be dragged relative to the container.
///
/// Consulted by [`crate::TransformState::drag_translation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OverflowMode {
    /// Do not clamp; the content may be dragged anywhere, including fully out
    /// of the container.
    #[default]
    Allow,
    /// Clamp each axis independently with
    /// `min(0, max(container - effective, proposed))`.
    ///
    /// Content larger than the container can never expose a gap on its
    /// top/left edge or leave its bottom/right edge short of the container.
    /// On an axis where the content is smaller than the container the
    /// translation collapses to zero.
    Contain,
}

impl OverflowMode {
    /// Maps the `allowOverflow` flag onto a mode.
    #[must_use]
    pub fn from_allow_overflow(allow: bool) -> Self {
        if allow { Self::Allow } else { Self::Contain }
    }
}
