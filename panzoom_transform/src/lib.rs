// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panzoom_transform --heading-base-level=0

//! Panzoom Transform: the scale/translation model behind a pan-and-zoom view.
//!
//! This crate provides a small, headless model of a *container* (the clipping
//! viewport) and a *content* element scaled and translated inside it. It
//! focuses on:
//! - Scale state with a configurable floor.
//! - Derived quantities: effective (scaled) content size and fill ratios.
//! - Translation on top of the content's own scale/skew matrix.
//! - Optional clamping so the content keeps covering the container.
//! - Parsing and serializing CSS `matrix(...)` values.
//!
//! It does **not** own any element or listen to input. Callers are expected
//! to:
//! - Measure the container and content and capture the content's transform.
//! - Implement [`TransformSink`] to apply the resulting transforms and sizes.
//! - Decide which input gestures map onto [`TransformState`] operations (see
//!   the `panzoom_controller` crate).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Size, Vec2};
//! use panzoom_transform::{OverflowMode, TransformSink, TransformState, format_matrix};
//!
//! #[derive(Default)]
//! struct Css {
//!     transform: String,
//!     size: Size,
//! }
//!
//! impl TransformSink for Css {
//!     fn apply_transform(&mut self, matrix: Affine) {
//!         self.transform = format_matrix(matrix);
//!     }
//!     fn resize_content(&mut self, size: Size) {
//!         self.size = size;
//!     }
//! }
//!
//! let mut css = Css::default();
//! let mut state = TransformState::new(
//!     Size::new(800.0, 600.0),
//!     Size::new(400.0, 300.0),
//!     Affine::IDENTITY,
//!     0.01,
//! );
//!
//! state.zoom_by(1.1, &mut css);
//! assert_eq!(state.scale_label(), "110%");
//!
//! // Drag from (10, 10) to (60, 30).
//! state.begin_drag(Point::new(10.0, 10.0), Affine::IDENTITY);
//! let t = state.drag_translation(Point::new(60.0, 30.0), OverflowMode::Allow);
//! state.translate(t, &mut css);
//! assert_eq!(t, Vec2::new(50.0, 20.0));
//! assert!(css.transform.ends_with(",50,20)"));
//! ```
//!
//! ## Design notes
//!
//! - Scaling is uniform and does not move the translation; the content box
//!   itself is resized to the effective size.
//! - Side effects go through a sink argument instead of stored callbacks, so
//!   one state can be driven by any host and tested without one.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod matrix;
mod modes;
mod state;

pub use matrix::{format_matrix, parse_matrix, try_parse_matrix, with_translation};
pub use modes::OverflowMode;
pub use state::{Change, DEFAULT_MIN_SCALE, TransformSink, TransformState, TransformStateDebugInfo};
