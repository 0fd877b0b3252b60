// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`HostSurface`] over a DOM container/content pair.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use cursor_icon::CursorIcon;
use js_sys::Array;
use kurbo::{Point, Size};
use panzoom_controller::{Affordance, HostSurface, InputEvent, InteractionController, Listeners};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, CssStyleDeclaration, Document, Element, Event, EventTarget,
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, KeyboardEvent, MouseEvent, Node,
    SvgElement, WheelEvent, Window,
};

use crate::keys::{dom_key, primary_modifier};
use crate::style::{cursor_value, px, recenter_display};
use crate::toolbar::Toolbar;

/// Slot holding the controller that DOM callbacks dispatch into.
pub(crate) type Shared = Rc<RefCell<Option<InteractionController<WebHost>>>>;

type Translate = fn(&Event, bool) -> Option<InputEvent>;

/// A DOM container, its single content element and the toolbar.
///
/// Listener groups map onto DOM listeners as follows:
/// - [`Listeners::VIEWPORT_HOVER`]: `pointerenter`/`pointerleave` on the
///   container.
/// - [`Listeners::DOCUMENT_INPUT`]: `wheel`, `keydown`, `keyup` and
///   `pointerdown` on the document.
/// - [`Listeners::AFFORDANCES`]: `click` on the toolbar buttons.
/// - [`Listeners::INTERSECTION`]: an `IntersectionObserver` on the content.
/// - [`Listeners::DRAG_TRACKING`]: `pointermove`/`pointerup`/`pointercancel`
///   on the document and `blur` on the window.
#[derive(Debug)]
pub struct WebHost {
    window: Window,
    document: Document,
    container: HtmlElement,
    content: Element,
    content_style: CssStyleDeclaration,
    toolbar: Toolbar,
    mac: bool,
    controller: Weak<RefCell<Option<InteractionController<WebHost>>>>,
    bindings: Vec<Binding>,
    observer: Option<Observer>,
}

impl WebHost {
    pub(crate) fn new(
        window: Window,
        container: HtmlElement,
        content: Element,
        toolbar: Toolbar,
        mac: bool,
        controller: &Shared,
    ) -> Option<Self> {
        let document = window.document()?;
        let content_style = inline_style(&content)?;
        Some(Self {
            window,
            document,
            container,
            content,
            content_style,
            toolbar,
            mac,
            controller: Rc::downgrade(controller),
            bindings: Vec::new(),
            observer: None,
        })
    }

    /// The container element.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// The content element, HTML or SVG.
    #[must_use]
    pub fn content(&self) -> &Element {
        &self.content
    }

    fn bind(
        &mut self,
        group: Listeners,
        target: &EventTarget,
        kind: &'static str,
        translate: Translate,
    ) {
        let controller = self.controller.clone();
        let mac = self.mac;
        let callback = Closure::wrap(Box::new(move |event: Event| {
            if let Some(input) = translate(&event, mac) {
                dispatch(&controller, Some(&event), &input);
            }
        }) as Box<dyn FnMut(Event)>);

        // Wheel listeners on the document default to passive, which would
        // make `preventDefault` a no-op.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        let added = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        );
        match added {
            Ok(()) => self.bindings.push(Binding {
                group,
                target: target.clone(),
                kind,
                callback,
            }),
            Err(err) => log::warn!("pan/zoom could not listen to `{kind}`: {err:?}"),
        }
    }

    fn observe(&mut self) {
        let controller = self.controller.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let ratio = entry.intersection_ratio();
                dispatch(&controller, None, &InputEvent::Intersection { ratio });
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&self.content);
                self.observer = Some(Observer {
                    observer,
                    _callback: callback,
                });
            }
            Err(err) => log::warn!("pan/zoom could not observe content visibility: {err:?}"),
        }
    }

    fn set_style(style: &CssStyleDeclaration, property: &str, value: &str) {
        let result = if value.is_empty() {
            style.remove_property(property).map(drop)
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            log::warn!("pan/zoom could not set `{property}: {value}`: {err:?}");
        }
    }
}

impl HostSurface for WebHost {
    fn container_size(&self) -> Size {
        let rect = self.container.get_bounding_client_rect();
        Size::new(rect.width(), rect.height())
    }

    fn content_size(&self) -> Size {
        let rect = self.content.get_bounding_client_rect();
        Size::new(rect.width(), rect.height())
    }

    fn content_count(&self) -> usize {
        let toolbar: &Node = &self.toolbar.root;
        let children = self.container.children();
        (0..children.length())
            .filter_map(|index| children.item(index))
            .filter(|child| !child.is_same_node(Some(toolbar)))
            .count()
    }

    fn content_transform(&self) -> String {
        match self.window.get_computed_style(&self.content) {
            Ok(Some(style)) => style
                .get_property_value("transform")
                .unwrap_or_else(|_| "none".into()),
            _ => "none".into(),
        }
    }

    fn set_content_transform(&mut self, matrix: &str) {
        Self::set_style(&self.content_style, "transform", matrix);
    }

    fn set_content_size(&mut self, size: Size) {
        Self::set_style(&self.content_style, "width", &px(size.width));
        Self::set_style(&self.content_style, "height", &px(size.height));
    }

    fn set_cursor(&mut self, cursor: Option<CursorIcon>) {
        Self::set_style(&self.container.style(), "cursor", cursor_value(cursor));
    }

    fn set_scale_label(&mut self, label: &str) {
        self.toolbar.label.set_text_content(Some(label));
    }

    fn set_recenter_visible(&mut self, visible: bool) {
        Self::set_style(
            &self.toolbar.recenter.style(),
            "display",
            recenter_display(visible),
        );
    }

    fn listen(&mut self, listeners: Listeners) {
        if listeners.contains(Listeners::VIEWPORT_HOVER) {
            let group = Listeners::VIEWPORT_HOVER;
            let container: EventTarget = self.container.clone().into();
            self.bind(group, &container, "pointerenter", |_, _| {
                Some(InputEvent::PointerEnter)
            });
            self.bind(group, &container, "pointerleave", |_, _| {
                Some(InputEvent::PointerLeave)
            });
        }
        if listeners.contains(Listeners::DOCUMENT_INPUT) {
            let group = Listeners::DOCUMENT_INPUT;
            let document: EventTarget = self.document.clone().into();
            self.bind(group, &document, "wheel", wheel);
            self.bind(group, &document, "keydown", key_down);
            self.bind(group, &document, "keyup", key_up);
            self.bind(group, &document, "pointerdown", |event, _| {
                Some(InputEvent::PointerDown {
                    position: client_position(event)?,
                })
            });
        }
        if listeners.contains(Listeners::AFFORDANCES) {
            let group = Listeners::AFFORDANCES;
            let zoom_out: EventTarget = self.toolbar.zoom_out.clone().into();
            let label: EventTarget = self.toolbar.label.clone().into();
            let zoom_in: EventTarget = self.toolbar.zoom_in.clone().into();
            let recenter: EventTarget = self.toolbar.recenter.clone().into();
            self.bind(group, &zoom_out, "click", |_, _| {
                Some(InputEvent::Click(Affordance::ZoomOut))
            });
            self.bind(group, &label, "click", |_, _| {
                Some(InputEvent::Click(Affordance::ScaleLabel))
            });
            self.bind(group, &zoom_in, "click", |_, _| {
                Some(InputEvent::Click(Affordance::ZoomIn))
            });
            self.bind(group, &recenter, "click", |_, _| {
                Some(InputEvent::Click(Affordance::Recenter))
            });
        }
        if listeners.contains(Listeners::INTERSECTION) {
            self.observe();
        }
        if listeners.contains(Listeners::DRAG_TRACKING) {
            let group = Listeners::DRAG_TRACKING;
            let document: EventTarget = self.document.clone().into();
            let window: EventTarget = self.window.clone().into();
            self.bind(group, &document, "pointermove", |event, _| {
                Some(InputEvent::PointerMove {
                    position: client_position(event)?,
                })
            });
            self.bind(group, &document, "pointerup", |event, _| {
                Some(InputEvent::PointerUp {
                    position: client_position(event)?,
                })
            });
            self.bind(group, &document, "pointercancel", |_, _| {
                Some(InputEvent::PointerCancel)
            });
            self.bind(group, &window, "blur", |_, _| Some(InputEvent::FocusLost));
        }
    }

    fn unlisten(&mut self, listeners: Listeners) {
        self.bindings.retain(|binding| !listeners.contains(binding.group));
        if listeners.contains(Listeners::INTERSECTION) {
            self.observer = None;
        }
    }
}

/// A registered DOM listener; dropping it removes the listener.
#[derive(Debug)]
struct Binding {
    group: Listeners,
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Binding {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("pan/zoom could not remove `{}` listener: {err:?}", self.kind);
        }
    }
}

/// A connected intersection observer; dropping it disconnects.
#[derive(Debug)]
struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Hands `input` to the controller and applies its default-action verdict.
fn dispatch(
    controller: &Weak<RefCell<Option<InteractionController<WebHost>>>>,
    event: Option<&Event>,
    input: &InputEvent,
) {
    let Some(shared) = controller.upgrade() else {
        return;
    };
    let Ok(mut slot) = shared.try_borrow_mut() else {
        log::warn!("pan/zoom dropped re-entrant {input:?}");
        return;
    };
    let Some(controller) = slot.as_mut() else {
        return;
    };
    let response = controller.handle(input);
    if response.suppress_default
        && let Some(event) = event
    {
        event.prevent_default();
    }
}

fn client_position(event: &Event) -> Option<Point> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    ))
}

fn wheel(event: &Event, mac: bool) -> Option<InputEvent> {
    let event = event.dyn_ref::<WheelEvent>()?;
    Some(InputEvent::Wheel {
        delta_y: event.delta_y(),
        primary_modifier: primary_modifier(mac, event.meta_key(), event.ctrl_key()),
    })
}

fn key_down(event: &Event, mac: bool) -> Option<InputEvent> {
    let event = event.dyn_ref::<KeyboardEvent>()?;
    Some(InputEvent::KeyDown {
        key: dom_key(&event.key()),
        primary_modifier: primary_modifier(mac, event.meta_key(), event.ctrl_key()),
    })
}

fn key_up(event: &Event, _: bool) -> Option<InputEvent> {
    let event = event.dyn_ref::<KeyboardEvent>()?;
    Some(InputEvent::KeyUp {
        key: dom_key(&event.key()),
    })
}

/// The inline style of an HTML or SVG element.
pub(crate) fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        return Some(element.style());
    }
    element.dyn_ref::<SvgElement>().map(SvgElement::style)
}
