// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use panzoom_transform::{DEFAULT_MIN_SCALE, OverflowMode};

use crate::error::AttachError;

/// Default wheel zoom step multiplier.
pub const DEFAULT_SCALE_SIZE: f64 = 0.025;

/// Scale factor applied by the zoom-in button and shortcut.
pub const ZOOM_IN_FACTOR: f64 = 1.1;

/// Scale factor applied by the zoom-out button and shortcut.
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// User-facing configuration for a pan/zoom controller.
///
/// With the `serde` feature the struct (de)serializes with camelCase names
/// (`scaleSize`, `allowOverflow`, `minScale`) and every field is optional.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PanZoomOptions {
    /// Wheel sensitivity: each wheel event changes the scale by
    /// `-scale_size * delta_y`.
    pub scale_size: f64,
    /// Whether the content may be dragged past the container edges.
    pub allow_overflow: bool,
    /// Floor for the scale.
    pub min_scale: f64,
}

impl Default for PanZoomOptions {
    fn default() -> Self {
        Self {
            scale_size: DEFAULT_SCALE_SIZE,
            allow_overflow: true,
            min_scale: DEFAULT_MIN_SCALE,
        }
    }
}

impl PanZoomOptions {
    /// Returns the clamping mode implied by [`allow_overflow`](Self::allow_overflow).
    #[must_use]
    pub fn overflow_mode(&self) -> OverflowMode {
        OverflowMode::from_allow_overflow(self.allow_overflow)
    }

    /// Checks that the numeric options are usable.
    ///
    /// # Errors
    ///
    /// - [`AttachError::InvalidMinScale`] if `min_scale` is not a positive
    ///   finite number.
    /// - [`AttachError::InvalidScaleSize`] if `scale_size` is not finite.
    pub fn validate(&self) -> Result<(), AttachError> {
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(AttachError::InvalidMinScale(self.min_scale));
        }
        if !self.scale_size.is_finite() {
            return Err(AttachError::InvalidScaleSize(self.scale_size));
        }
        Ok(())
    }
}
