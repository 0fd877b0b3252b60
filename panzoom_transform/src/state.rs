// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::{format, string::String};

use kurbo::{Affine, Point, Size, Vec2};

use crate::matrix::with_translation;
use crate::modes::OverflowMode;

/// Default floor for [`TransformState::scale`].
pub const DEFAULT_MIN_SCALE: f64 = 0.01;

/// A change notification emitted after the transform was updated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Change {
    /// The scale changed; carries the new (clamped) scale.
    Scale(f64),
    /// The content was translated; `x` is the left offset, `y` the top offset.
    Position(Point),
}

/// Receiver for the side effects of [`TransformState`] mutations.
///
/// The state never holds on to its host. Each mutating call takes a sink and
/// pushes the new content transform, the new content box size, the percentage
/// label and a [`Change`] notification into it.
pub trait TransformSink {
    /// Apply `matrix` as the content transform.
    fn apply_transform(&mut self, matrix: Affine);

    /// Resize the content box to `size` (the effective, scaled size).
    fn resize_content(&mut self, size: Size);

    /// Update a displayed zoom percentage, such as `"125%"`.
    fn show_scale_label(&mut self, label: &str) {
        let _ = label;
    }

    /// Observe a change notification.
    fn notify(&mut self, change: Change) {
        let _ = change;
    }
}

/// Scale and translation model for one container/content pair.
///
/// `TransformState` stores the container size, the unscaled content size, the
/// current scale and two matrices:
/// - the *origin* matrix, captured once when the state is created and used as
///   the recenter target;
/// - the *current* matrix, snapshotted from the live transform at the start of
///   every drag and used as the base for drag translation.
///
/// Derived quantities ([`effective_size`](Self::effective_size),
/// [`fill_ratio_x`](Self::fill_ratio_x), [`fill_ratio_y`](Self::fill_ratio_y))
/// are computed on demand from the stored fields and are therefore never stale.
#[derive(Clone, Debug)]
pub struct TransformState {
    container_size: Size,
    content_size: Size,
    scale: f64,
    min_scale: f64,
    origin_matrix: Affine,
    current_matrix: Affine,
    default_position: Point,
}

impl TransformState {
    /// Creates a state at scale `1.0` from measured geometry and the content's
    /// transform at attach time.
    ///
    /// `min_scale` is the floor enforced by [`set_scale`](Self::set_scale).
    #[must_use]
    pub fn new(container_size: Size, content_size: Size, origin: Affine, min_scale: f64) -> Self {
        Self {
            container_size,
            content_size,
            scale: 1.0,
            min_scale,
            origin_matrix: origin,
            current_matrix: origin,
            default_position: Point::ZERO,
        }
    }

    /// Returns the container (viewport) size.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Returns the unscaled content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Returns the current scale; always `>= min_scale`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the scale floor.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the matrix captured when the state was created.
    #[must_use]
    pub fn origin_matrix(&self) -> Affine {
        self.origin_matrix
    }

    /// Returns the matrix snapshotted at the start of the latest drag.
    #[must_use]
    pub fn current_matrix(&self) -> Affine {
        self.current_matrix
    }

    /// Returns the pointer position recorded at the start of the latest drag.
    #[must_use]
    pub fn default_position(&self) -> Point {
        self.default_position
    }

    /// Returns the content size multiplied by the current scale.
    #[must_use]
    pub fn effective_size(&self) -> Size {
        self.content_size * self.scale
    }

    /// Returns how much of the container width the scaled content covers.
    ///
    /// Values above `1.0` mean the content overflows horizontally.
    #[must_use]
    pub fn fill_ratio_x(&self) -> f64 {
        self.effective_size().width / self.container_size.width
    }

    /// Returns how much of the container height the scaled content covers.
    #[must_use]
    pub fn fill_ratio_y(&self) -> f64 {
        self.effective_size().height / self.container_size.height
    }

    /// Returns whether panning is permitted.
    ///
    /// Panning is always allowed; the fill ratios are kept available for hosts
    /// that want to gate it on overflow.
    #[must_use]
    pub fn is_movable(&self) -> bool {
        true
    }

    /// Returns the percentage label for the current scale, e.g. `"100%"`.
    ///
    /// The percentage is rounded down.
    #[must_use]
    pub fn scale_label(&self) -> String {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Scale is positive and a percentage label only needs the integer part."
        )]
        let percent = (self.scale * 100.0) as u64;
        format!("{percent}%")
    }

    /// Sets the scale, clamping it to `max(min_scale, scale)`.
    ///
    /// Pushes the new effective size, the percentage label and a
    /// [`Change::Scale`] into `sink`. Setting the same value twice is harmless.
    pub fn set_scale(&mut self, scale: f64, sink: &mut impl TransformSink) {
        self.scale = self.min_scale.max(scale);
        sink.resize_content(self.effective_size());
        sink.show_scale_label(&self.scale_label());
        sink.notify(Change::Scale(self.scale));
    }

    /// Multiplies the scale by `factor`.
    pub fn zoom_by(&mut self, factor: f64, sink: &mut impl TransformSink) {
        self.set_scale(self.scale * factor, sink);
    }

    /// Applies a wheel delta: `scale - sensitivity * delta_y`.
    ///
    /// A positive `delta_y` (wheel down) shrinks the content when the
    /// sensitivity is positive.
    pub fn zoom_by_wheel_delta(
        &mut self,
        delta_y: f64,
        sensitivity: f64,
        sink: &mut impl TransformSink,
    ) {
        self.set_scale(self.scale - sensitivity * delta_y, sink);
    }

    /// Resets the scale to `1.0`.
    pub fn reset_scale(&mut self, sink: &mut impl TransformSink) {
        self.set_scale(1.0, sink);
    }

    /// Applies `translation` on top of the scale/skew part of the current
    /// matrix and emits a [`Change::Position`].
    pub fn translate(&self, translation: Vec2, sink: &mut impl TransformSink) {
        sink.apply_transform(with_translation(self.current_matrix, translation));
        sink.notify(Change::Position(translation.to_point()));
    }

    /// Moves the content back to its origin translation, scaled by the
    /// current zoom level. Returns the applied translation.
    pub fn recenter(&self, sink: &mut impl TransformSink) -> Vec2 {
        let target = self.origin_matrix.translation() * self.scale;
        self.translate(target, sink);
        target
    }

    /// Adopts a new container size, rescaling the content size by the same
    /// per-axis ratios so the relative fill stays unchanged.
    ///
    /// The current scale is re-applied afterwards, so the effective size and
    /// label are republished. An axis whose previous container extent was not
    /// positive keeps its content extent.
    pub fn resize(&mut self, container_size: Size, sink: &mut impl TransformSink) {
        let old = self.container_size;
        if old.width > 0.0 {
            self.content_size.width *= container_size.width / old.width;
        }
        if old.height > 0.0 {
            self.content_size.height *= container_size.height / old.height;
        }
        self.container_size = container_size;
        self.set_scale(self.scale, sink);
    }

    /// Records the start of a drag: the pointer position and a snapshot of the
    /// transform currently applied to the content.
    pub fn begin_drag(&mut self, pointer: Point, live_matrix: Affine) {
        self.default_position = pointer;
        self.current_matrix = live_matrix;
    }

    /// Computes the translation for a drag that has moved to `pointer`.
    ///
    /// The result is the snapshotted translation plus the pointer delta since
    /// [`begin_drag`](Self::begin_drag), clamped when `overflow` is
    /// [`OverflowMode::Contain`].
    #[must_use]
    pub fn drag_translation(&self, pointer: Point, overflow: OverflowMode) -> Vec2 {
        let proposed = self.current_matrix.translation() + (pointer - self.default_position);
        match overflow {
            OverflowMode::Allow => proposed,
            OverflowMode::Contain => self.clamp_translation(proposed),
        }
    }

    /// Clamps a translation so the effective content box covers the container.
    ///
    /// Each axis is clamped independently to
    /// `min(0, max(container - effective, proposed))`.
    #[must_use]
    pub fn clamp_translation(&self, proposed: Vec2) -> Vec2 {
        let effective = self.effective_size();
        let clamp_axis = |container: f64, effective: f64, value: f64| {
            (container - effective).max(value).min(0.0)
        };
        Vec2::new(
            clamp_axis(self.container_size.width, effective.width, proposed.x),
            clamp_axis(self.container_size.height, effective.height, proposed.y),
        )
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TransformStateDebugInfo {
        TransformStateDebugInfo {
            container_size: self.container_size,
            content_size: self.content_size,
            effective_size: self.effective_size(),
            fill_ratio: Vec2::new(self.fill_ratio_x(), self.fill_ratio_y()),
            scale: self.scale,
            min_scale: self.min_scale,
            origin_matrix: self.origin_matrix,
            current_matrix: self.current_matrix,
            default_position: self.default_position,
        }
    }
}

/// Debug snapshot of a [`TransformState`].
#[derive(Clone, Copy, Debug)]
pub struct TransformStateDebugInfo {
    /// Container (viewport) size.
    pub container_size: Size,
    /// Unscaled content size.
    pub content_size: Size,
    /// Content size multiplied by the scale.
    pub effective_size: Size,
    /// Horizontal and vertical fill ratios.
    pub fill_ratio: Vec2,
    /// Current scale.
    pub scale: f64,
    /// Scale floor.
    pub min_scale: f64,
    /// Matrix captured at creation.
    pub origin_matrix: Affine,
    /// Matrix snapshotted at the latest drag start.
    pub current_matrix: Affine,
    /// Pointer position at the latest drag start.
    pub default_position: Point,
}
