// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panzoom_controller --heading-base-level=0

//! Panzoom Controller: input state machine for pan-and-zoom views.
//!
//! This crate turns host-neutral input events into operations on a
//! [`TransformState`]. It focuses on:
//! - Modifier + wheel and modifier + `=`/`-` zoom.
//! - Space-armed drag panning, optionally clamped to the container.
//! - The zoom-out, zoom-in, percentage and "return to content" affordances.
//! - Listener lifetimes: document-wide drag tracking only exists for the span
//!   of a drag, and detaching releases everything.
//!
//! It does **not** touch a real UI toolkit. Callers are expected to:
//! - Implement [`HostSurface`] for their container/content pair.
//! - Translate platform events into [`InputEvent`]s while the matching
//!   [`Listeners`] groups are subscribed.
//! - Honor [`Response::suppress_default`] by cancelling the platform default.
//!
//! ## Minimal example
//!
//! ```rust
//! use cursor_icon::CursorIcon;
//! use kurbo::{Point, Size};
//! use panzoom_controller::{
//!     HostSurface, InputEvent, InteractionController, Listeners, Outcome, PanZoomOptions,
//! };
//! use ui_events::keyboard::Key;
//!
//! #[derive(Default)]
//! struct Host {
//!     transform: String,
//!     label: String,
//! }
//!
//! impl HostSurface for Host {
//!     fn container_size(&self) -> Size { Size::new(800.0, 600.0) }
//!     fn content_size(&self) -> Size { Size::new(400.0, 300.0) }
//!     fn content_count(&self) -> usize { 1 }
//!     fn content_transform(&self) -> String { self.transform.clone() }
//!     fn set_content_transform(&mut self, matrix: &str) { self.transform = matrix.into(); }
//!     fn set_content_size(&mut self, _: Size) {}
//!     fn set_cursor(&mut self, _: Option<CursorIcon>) {}
//!     fn set_scale_label(&mut self, label: &str) { self.label = label.into(); }
//!     fn set_recenter_visible(&mut self, _: bool) {}
//!     fn listen(&mut self, _: Listeners) {}
//!     fn unlisten(&mut self, _: Listeners) {}
//! }
//!
//! let mut pz = InteractionController::attach(Host::default(), PanZoomOptions::default()).unwrap();
//! assert_eq!(pz.host().label, "100%");
//!
//! pz.handle(&InputEvent::PointerEnter);
//! let response = pz.handle(&InputEvent::Wheel { delta_y: -4.0, primary_modifier: true });
//! assert_eq!(response.outcome, Outcome::Zoomed);
//! assert!(response.suppress_default);
//! assert_eq!(pz.host().label, "110%");
//!
//! // Hold space and drag by (30, 15).
//! pz.handle(&InputEvent::KeyDown { key: Key::Character(" ".into()), primary_modifier: false });
//! pz.handle(&InputEvent::PointerDown { position: Point::new(100.0, 100.0) });
//! pz.handle(&InputEvent::PointerUp { position: Point::new(130.0, 115.0) });
//! assert_eq!(pz.host().transform, "matrix(1,0,0,1,30,15)");
//! ```
//!
//! ## Event routing
//!
//! - Wheel and key zoom only apply while the pointer is over the container.
//! - Pointer down only starts a drag while panning is armed; a second pointer
//!   down during a drag is ignored.
//! - Drag moves translate to the snapshot taken at pointer down plus the
//!   pointer offset, so a zoom in the middle of a drag does not disturb it.
//! - Pointer cancel and focus loss end a drag without a final move.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod controller;
mod drag;
mod error;
mod event;
mod gesture;
mod host;
mod options;

pub use controller::{InteractionController, OnChange};
pub use drag::DragSession;
pub use error::AttachError;
pub use event::{Affordance, InputEvent, Outcome, Response};
pub use gesture::GestureState;
pub use host::{HostSurface, Listeners};
pub use options::{DEFAULT_SCALE_SIZE, PanZoomOptions, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

pub use panzoom_transform::{Change, OverflowMode, TransformState};
