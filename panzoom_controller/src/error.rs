// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Error returned when a controller cannot be attached to a host.
///
/// These are setup mistakes. Once attached, gesture handling never fails.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AttachError {
    /// The container must hold exactly one content element.
    #[error("container should have exactly one content element, found {0}")]
    ContentCount(usize),
    /// `minScale` was zero, negative or not finite.
    #[error("`minScale` must be a positive finite number, got {0}")]
    InvalidMinScale(f64),
    /// `scaleSize` was not finite.
    #[error("`scaleSize` must be a finite number, got {0}")]
    InvalidScaleSize(f64),
}
