// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use panzoom_controller::AttachError;
use thiserror::Error;

/// Error returned when a pan/zoom view cannot be mounted.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MountError {
    /// No `window`/`document` is available.
    #[error("no browser document is available")]
    NoDocument,
    /// The container selector matched nothing.
    #[error("no element matches selector `{0}`")]
    SelectorNotFound(String),
    /// The options object could not be read.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    /// The content element (tag name given) has no inline style to drive,
    /// i.e. it is neither an HTML nor an SVG element.
    #[error("content element `<{0}>` cannot be styled")]
    UnsupportedContent(String),
    /// The controller rejected the container or options.
    #[error(transparent)]
    Attach(#[from] AttachError),
    /// A DOM call threw.
    #[error("DOM error: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for MountError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
