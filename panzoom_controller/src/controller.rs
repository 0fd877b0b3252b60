// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use cursor_icon::CursorIcon;
use kurbo::{Affine, Point, Size};
use panzoom_transform::{
    Change, OverflowMode, TransformSink, TransformState, format_matrix, parse_matrix,
};
use ui_events::keyboard::Key;

use crate::drag::DragSession;
use crate::error::AttachError;
use crate::event::{Affordance, InputEvent, Outcome, Response, key_text};
use crate::gesture::GestureState;
use crate::host::{HostSurface, Listeners};
use crate::options::{PanZoomOptions, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

/// Change observer installed with [`InteractionController::with_on_change`].
pub type OnChange = dyn FnMut(Change);

/// Routes input events into transform updates for one container/content pair.
///
/// The controller owns the host, a [`TransformState`] measured from it at
/// attach time, and the transient [`GestureState`]. Every event goes through
/// [`handle`](Self::handle), which classifies it against the current flags and
/// applies at most one transform operation.
///
/// Subscriptions follow the controller's lifetime: [`Listeners::ATTACHED`] is
/// acquired in [`attach`](Self::attach), [`Listeners::DRAG_TRACKING`] only for
/// the span of a drag, and everything still held is released by
/// [`detach`](Self::detach) (also run on drop).
pub struct InteractionController<H: HostSurface> {
    host: H,
    state: TransformState,
    gesture: GestureState,
    options: PanZoomOptions,
    on_change: Option<Box<OnChange>>,
    listening: Listeners,
    attached: bool,
}

impl<H: HostSurface + fmt::Debug> fmt::Debug for InteractionController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionController")
            .field("host", &self.host)
            .field("state", &self.state)
            .field("gesture", &self.gesture)
            .field("options", &self.options)
            .field("on_change", &self.on_change.as_ref().map(|_| "<function>"))
            .field("listening", &self.listening)
            .field("attached", &self.attached)
            .finish()
    }
}

impl<H: HostSurface> InteractionController<H> {
    /// Measures `host`, captures the content's transform as the origin and
    /// subscribes to [`Listeners::ATTACHED`].
    ///
    /// # Errors
    ///
    /// - [`AttachError::ContentCount`] unless the container holds exactly one
    ///   content element.
    /// - [`AttachError::InvalidMinScale`] / [`AttachError::InvalidScaleSize`]
    ///   for unusable options.
    pub fn attach(mut host: H, options: PanZoomOptions) -> Result<Self, AttachError> {
        options.validate()?;
        let count = host.content_count();
        if count != 1 {
            return Err(AttachError::ContentCount(count));
        }

        let origin = parse_matrix(&host.content_transform());
        let state = TransformState::new(
            host.container_size(),
            host.content_size(),
            origin,
            options.min_scale,
        );
        host.set_scale_label(&state.scale_label());

        let mut controller = Self {
            host,
            state,
            gesture: GestureState::default(),
            options,
            on_change: None,
            listening: Listeners::empty(),
            attached: true,
        };
        controller.acquire(Listeners::ATTACHED);
        log::debug!(
            "pan/zoom attached: container={:?} content={:?} origin={:?}",
            controller.state.container_size(),
            controller.state.content_size(),
            origin.as_coeffs()
        );
        Ok(controller)
    }

    /// Installs a change observer, replacing any previous one.
    #[must_use]
    pub fn with_on_change(mut self, on_change: impl FnMut(Change) + 'static) -> Self {
        self.set_on_change(on_change);
        self
    }

    /// Installs a change observer, replacing any previous one.
    pub fn set_on_change(&mut self, on_change: impl FnMut(Change) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// The transform model.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// The transient gesture flags.
    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// The options the controller was attached with.
    #[must_use]
    pub fn options(&self) -> &PanZoomOptions {
        &self.options
    }

    /// The listener groups currently held.
    #[must_use]
    pub fn listeners(&self) -> Listeners {
        self.listening
    }

    /// Whether [`detach`](Self::detach) has not run yet.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The host surface.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host surface, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Handles one input event.
    ///
    /// Events that do not apply in the current state are ignored; nothing in
    /// here fails. After [`detach`](Self::detach) every event is ignored.
    pub fn handle(&mut self, event: &InputEvent) -> Response {
        if !self.attached {
            return Response::IGNORED;
        }
        match event {
            InputEvent::PointerEnter => {
                self.gesture.inside_viewport = true;
                Response::passive(Outcome::Hover)
            }
            InputEvent::PointerLeave => {
                self.gesture.inside_viewport = false;
                Response::passive(Outcome::Hover)
            }
            InputEvent::Wheel {
                delta_y,
                primary_modifier,
            } => self.on_wheel(*delta_y, *primary_modifier),
            InputEvent::KeyDown {
                key,
                primary_modifier,
            } => self.on_key_down(key, *primary_modifier),
            InputEvent::KeyUp { key } => self.on_key_up(key),
            InputEvent::PointerDown { position } => self.on_pointer_down(*position),
            InputEvent::PointerMove { position } => self.on_drag_to(*position, false),
            InputEvent::PointerUp { position } => self.on_drag_to(*position, true),
            InputEvent::PointerCancel => {
                if self.end_drag() {
                    Response::passive(Outcome::DragEnded)
                } else {
                    Response::IGNORED
                }
            }
            InputEvent::FocusLost => self.on_focus_lost(),
            InputEvent::Click(affordance) => self.on_click(*affordance),
            InputEvent::Intersection { ratio } => {
                self.host.set_recenter_visible(*ratio <= 0.0);
                Response::passive(Outcome::RecenterVisibility)
            }
            InputEvent::Resize => {
                let size = self.host.container_size();
                let (state, mut sink) = self.split();
                state.resize(size, &mut sink);
                Response::passive(Outcome::Resized)
            }
        }
    }

    /// Releases every listener group and clears the gesture flags.
    ///
    /// Idempotent; also runs when the controller is dropped.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.release(self.listening);
        if self.gesture.pan_armed || self.gesture.is_dragging() {
            self.host.set_cursor(None);
        }
        self.gesture.reset();
        self.attached = false;
        log::debug!("pan/zoom detached");
    }

    fn on_wheel(&mut self, delta_y: f64, primary_modifier: bool) -> Response {
        if !self.gesture.inside_viewport {
            return Response::IGNORED;
        }
        if !primary_modifier || delta_y == 0.0 {
            // A contained view must not scroll the page underneath it.
            return Response {
                outcome: Outcome::Ignored,
                suppress_default: self.options.overflow_mode() == OverflowMode::Contain,
            };
        }
        let sensitivity = self.options.scale_size;
        let (state, mut sink) = self.split();
        state.zoom_by_wheel_delta(delta_y, sensitivity, &mut sink);
        Response::consumed(Outcome::Zoomed)
    }

    fn on_key_down(&mut self, key: &Key, primary_modifier: bool) -> Response {
        if !self.gesture.inside_viewport {
            return Response::IGNORED;
        }
        match key_text(key) {
            Some("=") if primary_modifier => {
                self.zoom_by(ZOOM_IN_FACTOR);
                Response::consumed(Outcome::Zoomed)
            }
            Some("-") if primary_modifier => {
                self.zoom_by(ZOOM_OUT_FACTOR);
                Response::consumed(Outcome::Zoomed)
            }
            Some(" ") if self.state.is_movable() => {
                self.gesture.pan_armed = true;
                if !self.gesture.is_dragging() {
                    self.host.set_cursor(Some(CursorIcon::Grab));
                }
                Response::consumed(Outcome::PanArmed)
            }
            _ => Response::IGNORED,
        }
    }

    fn on_key_up(&mut self, key: &Key) -> Response {
        if key_text(key) != Some(" ") || !self.gesture.pan_armed {
            return Response::IGNORED;
        }
        self.gesture.pan_armed = false;
        // Mid-drag the grabbing cursor stays until the pointer is released.
        if !self.gesture.is_dragging() {
            self.host.set_cursor(None);
        }
        Response::passive(Outcome::PanDisarmed)
    }

    fn on_pointer_down(&mut self, position: Point) -> Response {
        if !self.gesture.pan_armed || self.gesture.is_dragging() {
            return Response::IGNORED;
        }
        let live = parse_matrix(&self.host.content_transform());
        self.state.begin_drag(position, live);
        self.gesture.drag = Some(DragSession::begin());
        self.acquire(Listeners::DRAG_TRACKING);
        self.host.set_cursor(Some(CursorIcon::Grabbing));
        log::debug!(
            "pan/zoom drag started at {position:?} from translation {:?}",
            live.translation()
        );
        Response::consumed(Outcome::DragStarted)
    }

    fn on_drag_to(&mut self, position: Point, finish: bool) -> Response {
        let Some(session) = self.gesture.drag.as_mut() else {
            return Response::IGNORED;
        };
        session.record_move();

        let translation = self
            .state
            .drag_translation(position, self.options.overflow_mode());
        let (state, mut sink) = self.split();
        state.translate(translation, &mut sink);

        if finish {
            self.end_drag();
            Response::passive(Outcome::DragEnded)
        } else {
            Response::passive(Outcome::Dragged)
        }
    }

    fn on_focus_lost(&mut self) -> Response {
        let was_dragging = self.end_drag();
        let was_armed = core::mem::take(&mut self.gesture.pan_armed);
        if was_armed {
            self.host.set_cursor(None);
        }
        match (was_dragging, was_armed) {
            (true, _) => Response::passive(Outcome::DragEnded),
            (false, true) => Response::passive(Outcome::PanDisarmed),
            (false, false) => Response::IGNORED,
        }
    }

    fn on_click(&mut self, affordance: Affordance) -> Response {
        match affordance {
            Affordance::ZoomOut => self.zoom_by(ZOOM_OUT_FACTOR),
            Affordance::ZoomIn => self.zoom_by(ZOOM_IN_FACTOR),
            Affordance::ScaleLabel => {
                let (state, mut sink) = self.split();
                state.reset_scale(&mut sink);
            }
            Affordance::Recenter => {
                let (state, mut sink) = self.split();
                let target = state.recenter(&mut sink);
                log::debug!("pan/zoom recentered to {target:?}");
                return Response::passive(Outcome::Recentered);
            }
        }
        Response::passive(Outcome::Zoomed)
    }

    fn zoom_by(&mut self, factor: f64) {
        let (state, mut sink) = self.split();
        state.zoom_by(factor, &mut sink);
    }

    /// Ends the active drag, if any, and releases the drag listeners.
    ///
    /// Returns whether a drag was active.
    fn end_drag(&mut self) -> bool {
        let Some(session) = self.gesture.drag.take() else {
            return false;
        };
        self.release(Listeners::DRAG_TRACKING);
        let cursor = self.gesture.pan_armed.then_some(CursorIcon::Grab);
        self.host.set_cursor(cursor);
        log::debug!("pan/zoom drag ended after {} moves", session.moves());
        true
    }

    fn acquire(&mut self, listeners: Listeners) {
        let missing = listeners.difference(self.listening);
        if !missing.is_empty() {
            self.host.listen(missing);
            self.listening.insert(missing);
        }
    }

    fn release(&mut self, listeners: Listeners) {
        let held = listeners.intersection(self.listening);
        if !held.is_empty() {
            self.host.unlisten(held);
            self.listening.remove(held);
        }
    }

    fn split(&mut self) -> (&mut TransformState, Publisher<'_, H>) {
        (
            &mut self.state,
            Publisher {
                host: &mut self.host,
                on_change: self.on_change.as_deref_mut(),
            },
        )
    }
}

impl<H: HostSurface> Drop for InteractionController<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Forwards transform side effects to the host and the change observer.
struct Publisher<'a, H> {
    host: &'a mut H,
    on_change: Option<&'a mut OnChange>,
}

impl<H: HostSurface> TransformSink for Publisher<'_, H> {
    fn apply_transform(&mut self, matrix: Affine) {
        self.host.set_content_transform(&format_matrix(matrix));
    }

    fn resize_content(&mut self, size: Size) {
        self.host.set_content_size(size);
    }

    fn show_scale_label(&mut self, label: &str) {
        self.host.set_scale_label(label);
    }

    fn notify(&mut self, change: Change) {
        log::trace!("pan/zoom change {change:?}");
        if let Some(on_change) = self.on_change.as_deref_mut() {
            on_change(change);
        }
    }
}
