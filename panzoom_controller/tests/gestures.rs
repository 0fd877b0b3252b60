// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `panzoom_controller` crate.
//!
//! These drive an `InteractionController` over a recording host and check the
//! transforms, labels, cursors and subscriptions it produces for each gesture.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cursor_icon::CursorIcon;
use kurbo::{Point, Size};
use panzoom_controller::{
    Affordance, AttachError, Change, DragSession, HostSurface, InputEvent, InteractionController,
    Listeners, Outcome, PanZoomOptions,
};
use ui_events::keyboard::Key;

#[derive(Debug)]
struct RecordingHost {
    container: Size,
    content: Size,
    count: usize,
    transform: String,
    content_box: Option<Size>,
    cursor: Option<CursorIcon>,
    label: String,
    recenter_visible: bool,
    listening: Rc<Cell<Listeners>>,
    transform_writes: usize,
}

impl RecordingHost {
    fn new(container: Size, content: Size) -> Self {
        Self {
            container,
            content,
            count: 1,
            transform: "none".into(),
            content_box: None,
            cursor: None,
            label: String::new(),
            recenter_visible: false,
            listening: Rc::new(Cell::new(Listeners::empty())),
            transform_writes: 0,
        }
    }

    fn with_transform(mut self, transform: &str) -> Self {
        self.transform = transform.into();
        self
    }
}

impl HostSurface for RecordingHost {
    fn container_size(&self) -> Size {
        self.container
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn content_count(&self) -> usize {
        self.count
    }

    fn content_transform(&self) -> String {
        self.transform.clone()
    }

    fn set_content_transform(&mut self, matrix: &str) {
        self.transform = matrix.into();
        self.transform_writes += 1;
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_box = Some(size);
    }

    fn set_cursor(&mut self, cursor: Option<CursorIcon>) {
        self.cursor = cursor;
    }

    fn set_scale_label(&mut self, label: &str) {
        self.label = label.into();
    }

    fn set_recenter_visible(&mut self, visible: bool) {
        self.recenter_visible = visible;
    }

    fn listen(&mut self, listeners: Listeners) {
        let held = self.listening.get();
        assert!(
            !held.intersects(listeners),
            "{listeners:?} subscribed twice"
        );
        self.listening.set(held | listeners);
    }

    fn unlisten(&mut self, listeners: Listeners) {
        let held = self.listening.get();
        assert!(held.contains(listeners), "{listeners:?} was not subscribed");
        self.listening.set(held.difference(listeners));
    }
}

fn space() -> Key {
    Key::Character(" ".into())
}

fn key_down(text: &str, primary_modifier: bool) -> InputEvent {
    InputEvent::KeyDown {
        key: Key::Character(text.into()),
        primary_modifier,
    }
}

fn wheel(delta_y: f64) -> InputEvent {
    InputEvent::Wheel {
        delta_y,
        primary_modifier: true,
    }
}

fn down(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerDown {
        position: Point::new(x, y),
    }
}

fn move_to(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMove {
        position: Point::new(x, y),
    }
}

fn up(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerUp {
        position: Point::new(x, y),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// An 800x600 container around 400x300 content, pointer inside.
fn hovered(options: PanZoomOptions) -> InteractionController<RecordingHost> {
    let host = RecordingHost::new(Size::new(800.0, 600.0), Size::new(400.0, 300.0));
    let mut pz = InteractionController::attach(host, options).unwrap();
    pz.handle(&InputEvent::PointerEnter);
    pz
}

/// Arms panning and presses the pointer at `(x, y)`.
fn start_drag(pz: &mut InteractionController<RecordingHost>, x: f64, y: f64) {
    pz.handle(&InputEvent::KeyDown {
        key: space(),
        primary_modifier: false,
    });
    let response = pz.handle(&down(x, y));
    assert_eq!(response.outcome, Outcome::DragStarted);
}

#[test]
fn attach_requires_exactly_one_content_element() {
    for count in [0, 2] {
        let mut host = RecordingHost::new(Size::new(100.0, 100.0), Size::new(50.0, 50.0));
        host.count = count;
        let err = InteractionController::attach(host, PanZoomOptions::default()).unwrap_err();
        assert_eq!(err, AttachError::ContentCount(count));
    }
}

#[test]
fn attach_rejects_unusable_options() {
    let host = RecordingHost::new(Size::new(100.0, 100.0), Size::new(50.0, 50.0));
    let options = PanZoomOptions {
        min_scale: 0.0,
        ..PanZoomOptions::default()
    };
    let err = InteractionController::attach(host, options).unwrap_err();
    assert_eq!(err, AttachError::InvalidMinScale(0.0));
}

#[test]
fn attach_subscribes_and_publishes_the_label() {
    let pz = hovered(PanZoomOptions::default());
    assert!(pz.is_attached());
    assert_eq!(pz.listeners(), Listeners::ATTACHED);
    assert_eq!(pz.host().listening.get(), Listeners::ATTACHED);
    assert_eq!(pz.host().label, "100%");
    assert_eq!(pz.state().scale(), 1.0);
    assert_eq!(pz.host().transform_writes, 0);
}

#[test]
fn wheel_outside_the_container_is_ignored() {
    let mut pz = hovered(PanZoomOptions::default());
    pz.handle(&InputEvent::PointerLeave);

    let response = pz.handle(&wheel(-4.0));
    assert_eq!(response.outcome, Outcome::Ignored);
    assert!(!response.suppress_default);
    assert_eq!(pz.state().scale(), 1.0);
}

#[test]
fn modifier_wheel_zooms_and_resizes_content() {
    let mut pz = hovered(PanZoomOptions::default());

    let response = pz.handle(&wheel(-4.0));
    assert_eq!(response.outcome, Outcome::Zoomed);
    assert!(response.suppress_default);
    assert_close(pz.state().scale(), 1.1);
    assert_eq!(pz.host().label, "110%");
    let size = pz.host().content_box.unwrap();
    assert_close(size.width, 440.0);
    assert_close(size.height, 330.0);

    pz.handle(&wheel(8.0));
    assert_close(pz.state().scale(), 0.9);
    assert_eq!(pz.host().label, "90%");
}

#[test]
fn plain_or_flat_wheel_does_not_zoom() {
    let mut pz = hovered(PanZoomOptions::default());

    let response = pz.handle(&InputEvent::Wheel {
        delta_y: -4.0,
        primary_modifier: false,
    });
    assert_eq!(response.outcome, Outcome::Ignored);
    assert!(!response.suppress_default);

    let response = pz.handle(&wheel(0.0));
    assert_eq!(response.outcome, Outcome::Ignored);
    assert_eq!(pz.state().scale(), 1.0);
    assert_eq!(pz.host().content_box, None);
}

#[test]
fn contained_view_swallows_plain_scrolling() {
    let mut pz = hovered(PanZoomOptions {
        allow_overflow: false,
        ..PanZoomOptions::default()
    });

    let response = pz.handle(&InputEvent::Wheel {
        delta_y: 10.0,
        primary_modifier: false,
    });
    assert_eq!(response.outcome, Outcome::Ignored);
    assert!(response.suppress_default);
}

#[test]
fn keyboard_shortcuts_zoom_in_steps() {
    let mut pz = hovered(PanZoomOptions::default());

    let response = pz.handle(&key_down("=", true));
    assert_eq!(response.outcome, Outcome::Zoomed);
    assert!(response.suppress_default);
    assert_close(pz.state().scale(), 1.1);

    pz.handle(&key_down("-", true));
    assert_close(pz.state().scale(), 0.99);
    assert_eq!(pz.host().label, "99%");

    // Without the modifier the keys are left to the page.
    let response = pz.handle(&key_down("=", false));
    assert_eq!(response.outcome, Outcome::Ignored);
    assert!(!response.suppress_default);
    assert_close(pz.state().scale(), 0.99);

    let response = pz.handle(&key_down("a", true));
    assert_eq!(response.outcome, Outcome::Ignored);
}

#[test]
fn keys_outside_the_container_are_ignored() {
    let mut pz = hovered(PanZoomOptions::default());
    pz.handle(&InputEvent::PointerLeave);

    assert_eq!(pz.handle(&key_down("=", true)).outcome, Outcome::Ignored);
    assert_eq!(pz.handle(&key_down(" ", false)).outcome, Outcome::Ignored);
    assert!(!pz.gesture().is_pan_armed());
}

#[test]
fn scale_never_drops_below_the_floor() {
    let mut pz = hovered(PanZoomOptions {
        min_scale: 0.5,
        ..PanZoomOptions::default()
    });

    for _ in 0..20 {
        pz.handle(&InputEvent::Click(Affordance::ZoomOut));
    }
    assert_eq!(pz.state().scale(), 0.5);
    assert_eq!(pz.host().label, "50%");

    pz.handle(&wheel(1000.0));
    assert_eq!(pz.state().scale(), 0.5);
}

#[test]
fn space_arms_and_disarms_panning() {
    let mut pz = hovered(PanZoomOptions::default());

    let response = pz.handle(&InputEvent::KeyDown {
        key: space(),
        primary_modifier: false,
    });
    assert_eq!(response.outcome, Outcome::PanArmed);
    assert!(response.suppress_default);
    assert!(pz.gesture().is_pan_armed());
    assert_eq!(pz.host().cursor, Some(CursorIcon::Grab));

    let response = pz.handle(&InputEvent::KeyUp { key: space() });
    assert_eq!(response.outcome, Outcome::PanDisarmed);
    assert!(!pz.gesture().is_pan_armed());
    assert_eq!(pz.host().cursor, None);

    // A second release has nothing to disarm.
    let response = pz.handle(&InputEvent::KeyUp { key: space() });
    assert_eq!(response.outcome, Outcome::Ignored);
}

#[test]
fn pointer_down_without_arming_does_not_drag() {
    let mut pz = hovered(PanZoomOptions::default());

    let response = pz.handle(&down(10.0, 10.0));
    assert_eq!(response.outcome, Outcome::Ignored);
    assert!(!pz.gesture().is_dragging());
    assert!(!pz.listeners().contains(Listeners::DRAG_TRACKING));

    assert_eq!(pz.handle(&move_to(50.0, 50.0)).outcome, Outcome::Ignored);
    assert_eq!(pz.host().transform_writes, 0);
}

#[test]
fn drag_translates_and_holds_tracking_only_while_dragging() {
    let mut pz = hovered(PanZoomOptions::default());
    start_drag(&mut pz, 100.0, 100.0);

    assert!(pz.gesture().is_dragging());
    assert!(pz.host().listening.get().contains(Listeners::DRAG_TRACKING));
    assert_eq!(pz.host().cursor, Some(CursorIcon::Grabbing));

    assert_eq!(pz.handle(&move_to(120.0, 90.0)).outcome, Outcome::Dragged);
    assert_eq!(pz.host().transform, "matrix(1,0,0,1,20,-10)");
    assert_eq!(pz.gesture().drag().map(DragSession::moves), Some(1));

    assert_eq!(pz.handle(&up(150.0, 130.0)).outcome, Outcome::DragEnded);
    assert_eq!(pz.host().transform, "matrix(1,0,0,1,50,30)");
    assert!(!pz.gesture().is_dragging());
    assert_eq!(pz.host().listening.get(), Listeners::ATTACHED);
    // Space is still held.
    assert_eq!(pz.host().cursor, Some(CursorIcon::Grab));

    let writes = pz.host().transform_writes;
    assert_eq!(pz.handle(&move_to(400.0, 400.0)).outcome, Outcome::Ignored);
    assert_eq!(pz.host().transform_writes, writes);
}

#[test]
fn second_drag_continues_from_the_live_transform() {
    let mut pz = hovered(PanZoomOptions::default());
    start_drag(&mut pz, 0.0, 0.0);
    pz.handle(&up(30.0, 40.0));

    let response = pz.handle(&down(200.0, 200.0));
    assert_eq!(response.outcome, Outcome::DragStarted);
    pz.handle(&up(190.0, 210.0));
    assert_eq!(pz.host().transform, "matrix(1,0,0,1,20,50)");
}

#[test]
fn drag_keeps_the_content_scale_and_skew() {
    let host = RecordingHost::new(Size::new(800.0, 600.0), Size::new(400.0, 300.0))
        .with_transform("matrix(2, 0, 0.5, 2, 10, 20)");
    let mut pz = InteractionController::attach(host, PanZoomOptions::default()).unwrap();
    pz.handle(&InputEvent::PointerEnter);

    start_drag(&mut pz, 0.0, 0.0);
    pz.handle(&up(5.0, 5.0));
    assert_eq!(pz.host().transform, "matrix(2,0,0.5,2,15,25)");
}

#[test]
fn second_pointer_down_during_a_drag_is_ignored() {
    let mut pz = hovered(PanZoomOptions::default());
    start_drag(&mut pz, 0.0, 0.0);

    let response = pz.handle(&down(300.0, 300.0));
    assert_eq!(response.outcome, Outcome::Ignored);
    assert_eq!(pz.state().default_position(), Point::ZERO);

    pz.handle(&up(10.0, 10.0));
    assert_eq!(pz.host().transform, "matrix(1,0,0,1,10,10)");
}

#[test]
fn contained_drag_keeps_large_content_covering_the_container() {
    let host = RecordingHost::new(Size::new(400.0, 300.0), Size::new(800.0, 600.0));
    let options = PanZoomOptions {
        allow_overflow: false,
        ..PanZoomOptions::default()
    };
    let mut pz = InteractionController::attach(host, options).unwrap();
    pz.handle(&InputEvent::PointerEnter);

    start_drag(&mut pz, 500.0, 500.0);
    pz.handle(&move_to(-1000.0, -1000.0));
    assert_eq!(pz.host().transform, "matrix(1,0,0,1,-400,-300)");

    pz.handle(&move_to(600.0, 520.0));
    assert_eq!(pz.host().transform, "matrix(1,0,0,1,0,0)");

    pz.handle(&up(450.0, 400.0));
    assert_eq!(pz.host().transform, "matrix(1,0,0,1,-50,-100)");
}

#[test]
fn contained_drag_pins_small_content() {
    let mut pz = hovered(PanZoomOptions {
        allow_overflow: false,
        ..PanZoomOptions::default()
    });

    start_drag(&mut pz, 0.0, 0.0);
    pz.handle(&up(120.0, -80.0));
    assert_eq!(pz.host().transform, "matrix(1,0,0,1,0,0)");
}

#[test]
fn zoom_during_a_drag_does_not_disturb_it() {
    let mut pz = hovered(PanZoomOptions::default());
    start_drag(&mut pz, 100.0, 100.0);
    pz.handle(&move_to(110.0, 110.0));

    assert_eq!(pz.handle(&wheel(-4.0)).outcome, Outcome::Zoomed);
    assert_eq!(pz.state().current_matrix().translation().x, 0.0);

    pz.handle(&up(130.0, 125.0));
    assert_eq!(pz.host().transform, "matrix(1,0,0,1,30,25)");
    assert_close(pz.state().scale(), 1.1);
}

#[test]
fn releasing_space_mid_drag_keeps_dragging() {
    let mut pz = hovered(PanZoomOptions::default());
    start_drag(&mut pz, 0.0, 0.0);

    let response = pz.handle(&InputEvent::KeyUp { key: space() });
    assert_eq!(response.outcome, Outcome::PanDisarmed);
    assert!(pz.gesture().is_dragging());
    assert_eq!(pz.host().cursor, Some(CursorIcon::Grabbing));

    pz.handle(&up(40.0, 0.0));
    assert_eq!(pz.host().transform, "matrix(1,0,0,1,40,0)");
    assert_eq!(pz.host().cursor, None);

    // Disarmed now, so the next press is ignored.
    assert_eq!(pz.handle(&down(0.0, 0.0)).outcome, Outcome::Ignored);
}

#[test]
fn pointer_cancel_ends_the_drag_without_moving() {
    let mut pz = hovered(PanZoomOptions::default());
    start_drag(&mut pz, 0.0, 0.0);
    pz.handle(&move_to(25.0, 5.0));
    let writes = pz.host().transform_writes;

    let response = pz.handle(&InputEvent::PointerCancel);
    assert_eq!(response.outcome, Outcome::DragEnded);
    assert_eq!(pz.host().transform_writes, writes);
    assert_eq!(pz.host().transform, "matrix(1,0,0,1,25,5)");
    assert!(!pz.gesture().is_dragging());
    assert_eq!(pz.host().listening.get(), Listeners::ATTACHED);
    assert!(pz.gesture().is_pan_armed());

    assert_eq!(
        pz.handle(&InputEvent::PointerCancel).outcome,
        Outcome::Ignored
    );
}

#[test]
fn focus_loss_ends_the_drag_and_disarms() {
    let mut pz = hovered(PanZoomOptions::default());
    start_drag(&mut pz, 0.0, 0.0);

    let response = pz.handle(&InputEvent::FocusLost);
    assert_eq!(response.outcome, Outcome::DragEnded);
    assert!(!pz.gesture().is_dragging());
    assert!(!pz.gesture().is_pan_armed());
    assert_eq!(pz.host().cursor, None);
    assert_eq!(pz.host().listening.get(), Listeners::ATTACHED);

    pz.handle(&InputEvent::KeyDown {
        key: space(),
        primary_modifier: false,
    });
    assert_eq!(
        pz.handle(&InputEvent::FocusLost).outcome,
        Outcome::PanDisarmed
    );
    assert_eq!(pz.handle(&InputEvent::FocusLost).outcome, Outcome::Ignored);
}

#[test]
fn affordance_clicks() {
    let mut pz = hovered(PanZoomOptions::default());

    pz.handle(&InputEvent::Click(Affordance::ZoomIn));
    assert_close(pz.state().scale(), 1.1);

    pz.handle(&InputEvent::Click(Affordance::ZoomOut));
    assert_close(pz.state().scale(), 0.99);

    let response = pz.handle(&InputEvent::Click(Affordance::ScaleLabel));
    assert_eq!(response.outcome, Outcome::Zoomed);
    assert_eq!(pz.state().scale(), 1.0);
    assert_eq!(pz.host().label, "100%");
    assert_eq!(pz.host().content_box, Some(Size::new(400.0, 300.0)));
}

#[test]
fn recenter_scales_the_origin_translation() {
    let host = RecordingHost::new(Size::new(800.0, 600.0), Size::new(400.0, 300.0))
        .with_transform("matrix(1, 0, 0, 1, 10, 20)");
    let mut pz = InteractionController::attach(host, PanZoomOptions::default()).unwrap();
    pz.handle(&InputEvent::PointerEnter);

    pz.handle(&wheel(-40.0));
    assert_close(pz.state().scale(), 2.0);

    start_drag(&mut pz, 0.0, 0.0);
    pz.handle(&up(300.0, 300.0));

    let response = pz.handle(&InputEvent::Click(Affordance::Recenter));
    assert_eq!(response.outcome, Outcome::Recentered);
    assert_eq!(pz.host().transform, "matrix(1,0,0,1,20,40)");
}

#[test]
fn intersection_toggles_the_recenter_affordance() {
    let mut pz = hovered(PanZoomOptions::default());

    pz.handle(&InputEvent::Intersection { ratio: 0.0 });
    assert!(pz.host().recenter_visible);

    pz.handle(&InputEvent::Intersection { ratio: 0.25 });
    assert!(!pz.host().recenter_visible);
}

#[test]
fn resize_preserves_the_fill_ratio() {
    let mut pz = hovered(PanZoomOptions::default());
    pz.handle(&wheel(-4.0));

    pz.host_mut().container = Size::new(400.0, 300.0);
    let response = pz.handle(&InputEvent::Resize);
    assert_eq!(response.outcome, Outcome::Resized);

    assert_eq!(pz.state().container_size(), Size::new(400.0, 300.0));
    assert_eq!(pz.state().content_size(), Size::new(200.0, 150.0));
    assert_close(pz.state().scale(), 1.1);
    let size = pz.host().content_box.unwrap();
    assert_close(size.width, 220.0);
    assert_close(size.height, 165.0);
}

#[test]
fn observer_sees_scale_and_position_changes() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&changes);
    let mut pz =
        hovered(PanZoomOptions::default()).with_on_change(move |c| seen.borrow_mut().push(c));

    pz.handle(&InputEvent::Click(Affordance::ScaleLabel));
    start_drag(&mut pz, 0.0, 0.0);
    pz.handle(&up(7.0, 8.0));

    assert_eq!(
        *changes.borrow(),
        [Change::Scale(1.0), Change::Position(Point::new(7.0, 8.0))]
    );
}

#[test]
fn detach_releases_everything_and_ignores_later_input() {
    let mut pz = hovered(PanZoomOptions::default());
    start_drag(&mut pz, 0.0, 0.0);

    pz.detach();
    assert!(!pz.is_attached());
    assert_eq!(pz.listeners(), Listeners::empty());
    assert_eq!(pz.host().listening.get(), Listeners::empty());
    assert_eq!(pz.host().cursor, None);
    assert!(!pz.gesture().is_dragging());

    let writes = pz.host().transform_writes;
    let late = [
        InputEvent::PointerEnter,
        wheel(-4.0),
        key_down("=", true),
        key_down(" ", false),
        down(10.0, 10.0),
        move_to(50.0, 50.0),
        up(60.0, 60.0),
        InputEvent::Click(Affordance::ZoomIn),
    ];
    for event in late {
        let response = pz.handle(&event);
        assert_eq!(response.outcome, Outcome::Ignored, "{event:?}");
        assert!(!response.suppress_default, "{event:?}");
    }
    assert_eq!(pz.host().transform_writes, writes);
    assert_eq!(pz.state().scale(), 1.0);
    assert!(!pz.gesture().is_inside_viewport());
    assert!(!pz.gesture().is_pan_armed());
    assert!(!pz.gesture().is_dragging());
    assert_eq!(pz.listeners(), Listeners::empty());
    assert_eq!(pz.host().listening.get(), Listeners::empty());
    assert_eq!(pz.host().cursor, None);

    // Idempotent: unlisten would panic on a second release.
    pz.detach();
}

#[test]
fn dropping_the_controller_detaches() {
    let pz = hovered(PanZoomOptions::default());
    let listening = Rc::clone(&pz.host().listening);
    assert_eq!(listening.get(), Listeners::ATTACHED);

    drop(pz);
    assert_eq!(listening.get(), Listeners::empty());
}
