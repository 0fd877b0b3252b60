// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panzoom_web --heading-base-level=0

//! Panzoom Web: pan-and-zoom for a DOM element.
//!
//! This crate mounts a [`panzoom_controller`] state machine on a browser
//! container holding exactly one child. Mounting:
//! - Styles the container to clip its content and anchors scaling at the
//!   content's center.
//! - Appends a toolbar with zoom-out, percentage, zoom-in and a "back to
//!   content" button that appears when the content scrolls out of view.
//! - Wires pointer, wheel, keyboard and visibility events, holding the
//!   document-wide drag listeners only while a drag is in progress.
//!
//! Zoom with ctrl (meta on macOS) plus the wheel or `=`/`-`; hold space and
//! drag to pan.
//!
//! # Usage
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn mount() -> Result<panzoom_web::PanZoom, panzoom_web::MountError> {
//!     use panzoom_web::{PanZoom, PanZoomOptions};
//!
//!     let view = PanZoom::mount_selector("#viewer", PanZoomOptions::default())?;
//!     view.set_on_change(|change| log::info!("{change:?}"));
//!     Ok(view)
//! }
//! ```
//!
//! From JavaScript the same is available as
//! `createPanZoom(el, { scaleSize, allowOverflow, minScale, onChange })`.
//!
//! The style and keyboard helpers compile on every target; the DOM glue only
//! exists on `wasm32`.

mod config;
mod error;
mod keys;
pub mod style;

#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
#[allow(unsafe_code, reason = "`#[wasm_bindgen]` exports expand to unsafe glue")]
mod mount;
#[cfg(target_arch = "wasm32")]
mod toolbar;

pub use config::{change_payload, options_from_json};
pub use error::MountError;
pub use keys::{dom_key, is_mac_user_agent, primary_modifier};
pub use panzoom_controller::{Change, PanZoomOptions};

#[cfg(target_arch = "wasm32")]
pub use host::WebHost;
#[cfg(target_arch = "wasm32")]
pub use mount::{PanZoom, create_pan_zoom};
