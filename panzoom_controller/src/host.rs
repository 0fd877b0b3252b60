// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host surface a controller drives.

use alloc::string::String;

use cursor_icon::CursorIcon;
use kurbo::Size;

bitflags::bitflags! {
    /// Groups of input sources a controller subscribes to.
    ///
    /// The host decides how each group maps onto concrete listeners; the
    /// controller only promises to [`listen`](HostSurface::listen) to a group
    /// before it relies on its events and to
    /// [`unlisten`](HostSurface::unlisten) it when done.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Pointer enter/leave on the container.
        const VIEWPORT_HOVER = 0b0000_0001;
        /// Document-wide wheel, key down, key up and pointer down.
        const DOCUMENT_INPUT = 0b0000_0010;
        /// Clicks on the zoom-out, zoom-in, percentage label and recenter
        /// affordances.
        const AFFORDANCES    = 0b0000_0100;
        /// Visibility of the content inside the container.
        const INTERSECTION   = 0b0000_1000;
        /// Document-wide pointer move/up/cancel and focus loss, held only
        /// while a drag is in progress.
        const DRAG_TRACKING  = 0b0001_0000;
    }
}

impl Listeners {
    /// Groups held for the whole time a controller is attached.
    pub const ATTACHED: Self = Self::VIEWPORT_HOVER
        .union(Self::DOCUMENT_INPUT)
        .union(Self::AFFORDANCES)
        .union(Self::INTERSECTION);
}

/// Geometry, mutators and subscriptions of the element pair being controlled.
///
/// A host owns (or references) a container element that clips exactly one
/// content element. Implementations are expected to be cheap to call; every
/// method is invoked synchronously from [`InteractionController::handle`].
///
/// [`InteractionController::handle`]: crate::InteractionController::handle
pub trait HostSurface {
    /// Current size of the container's bounding box.
    fn container_size(&self) -> Size;

    /// Current size of the content's bounding box.
    fn content_size(&self) -> Size;

    /// Number of content elements inside the container.
    fn content_count(&self) -> usize;

    /// The content's computed transform, e.g. `"matrix(1, 0, 0, 1, 0, 0)"` or
    /// `"none"`.
    fn content_transform(&self) -> String;

    /// Sets the content's transform to a CSS `matrix(...)` value.
    fn set_content_transform(&mut self, matrix: &str);

    /// Sets the content's box size in pixels.
    fn set_content_size(&mut self, size: Size);

    /// Sets the cursor shown over the container; `None` restores the default.
    fn set_cursor(&mut self, cursor: Option<CursorIcon>);

    /// Updates the zoom percentage label.
    fn set_scale_label(&mut self, label: &str);

    /// Shows or hides the "return to content" affordance.
    fn set_recenter_visible(&mut self, visible: bool);

    /// Starts delivering events for `listeners`.
    fn listen(&mut self, listeners: Listeners);

    /// Stops delivering events for `listeners`.
    fn unlisten(&mut self, listeners: Listeners);
}
