// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, JSON, Reflect};
use panzoom_controller::{AttachError, Change, InputEvent, InteractionController, PanZoomOptions};
use wasm_bindgen::prelude::*;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, Window};

use crate::config::{change_payload, options_from_json};
use crate::error::MountError;
use crate::host::{Shared, WebHost, inline_style};
use crate::keys::is_mac_user_agent;
use crate::style::{CONTAINER_CSS, CONTENT_TRANSFORM_ORIGIN};
use crate::toolbar::Toolbar;

/// A pan/zoom view mounted on a DOM container.
///
/// Dropping the view (or calling [`destroy`](Self::destroy)) removes every
/// listener and the toolbar, and puts back the inline styles the container and
/// content had before mounting.
#[wasm_bindgen]
#[derive(Debug)]
pub struct PanZoom {
    shared: Shared,
    toolbar: HtmlElement,
    saved: SavedStyles,
}

impl PanZoom {
    /// Mounts on `container`, which must hold exactly one element child.
    ///
    /// The child may be an HTML or an SVG element. Nothing in the document is
    /// touched unless the container and the options are usable.
    ///
    /// # Errors
    ///
    /// - [`MountError::NoDocument`] outside a browser window.
    /// - [`MountError::Attach`] if the container does not hold exactly one
    ///   content element or the options are unusable.
    /// - [`MountError::UnsupportedContent`] if the child has no inline style.
    /// - [`MountError::Dom`] if building the toolbar fails.
    pub fn mount(container: HtmlElement, options: PanZoomOptions) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoDocument)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let count = container.child_element_count() as usize;
        let content = match container.first_element_child() {
            Some(content) if count == 1 => content,
            _ => return Err(AttachError::ContentCount(count).into()),
        };
        let content_style = inline_style(&content)
            .ok_or_else(|| MountError::UnsupportedContent(content.tag_name().to_lowercase()))?;
        options.validate()?;

        let saved = SavedStyles::capture(container.style(), content_style.clone());
        match install(&window, &document, &container, content, &content_style, options) {
            Ok((shared, toolbar)) => {
                log::debug!("pan/zoom mounted with {options:?}");
                Ok(Self {
                    shared,
                    toolbar,
                    saved,
                })
            }
            Err(err) => {
                saved.restore();
                Err(err)
            }
        }
    }

    /// Mounts on the first element matching `selector`.
    ///
    /// # Errors
    ///
    /// [`MountError::SelectorNotFound`] if nothing matches, otherwise as
    /// [`mount`](Self::mount).
    pub fn mount_selector(selector: &str, options: PanZoomOptions) -> Result<Self, MountError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(MountError::NoDocument)?;
        let container = document
            .query_selector(selector)?
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| MountError::SelectorNotFound(selector.into()))?;
        Self::mount(container, options)
    }

    /// Installs a change observer, replacing any previous one.
    pub fn set_on_change(&self, on_change: impl FnMut(Change) + 'static) {
        self.with_controller(|controller| controller.set_on_change(on_change));
    }

    /// Runs `f` on the controller, unless the view was destroyed or the
    /// controller is busy handling an event.
    pub fn with_controller<R>(
        &self,
        f: impl FnOnce(&mut InteractionController<WebHost>) -> R,
    ) -> Option<R> {
        let mut slot = self.shared.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    }
}

#[wasm_bindgen]
impl PanZoom {
    /// Re-measures the container after its size changed.
    pub fn resize(&self) {
        self.with_controller(|controller| controller.handle(&InputEvent::Resize));
    }

    /// The current scale, or `1` once destroyed.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.with_controller(|controller| controller.state().scale())
            .unwrap_or(1.0)
    }

    /// Removes listeners, the toolbar and inline styles. Idempotent.
    pub fn destroy(&self) {
        let Ok(mut slot) = self.shared.try_borrow_mut() else {
            log::warn!("pan/zoom cannot be destroyed while it is handling an event");
            return;
        };
        let Some(controller) = slot.take() else {
            return;
        };
        drop(slot);
        drop(controller);
        self.toolbar.remove();
        self.saved.restore();
        log::debug!("pan/zoom destroyed");
    }
}

impl Drop for PanZoom {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Inline style text of the container and content from before mounting.
#[derive(Debug)]
struct SavedStyles {
    container: CssStyleDeclaration,
    container_css: String,
    content: CssStyleDeclaration,
    content_css: String,
}

impl SavedStyles {
    fn capture(container: CssStyleDeclaration, content: CssStyleDeclaration) -> Self {
        Self {
            container_css: container.css_text(),
            content_css: content.css_text(),
            container,
            content,
        }
    }

    fn restore(&self) {
        self.container.set_css_text(&self.container_css);
        self.content.set_css_text(&self.content_css);
    }
}

/// Styles the container and content, appends the toolbar and attaches the
/// controller. The caller restores the styles if this fails.
fn install(
    window: &Window,
    document: &Document,
    container: &HtmlElement,
    content: Element,
    content_style: &CssStyleDeclaration,
    options: PanZoomOptions,
) -> Result<(Shared, HtmlElement), MountError> {
    container.style().set_css_text(CONTAINER_CSS);
    content_style.set_property("transform-origin", CONTENT_TRANSFORM_ORIGIN)?;
    let toolbar = Toolbar::build(document)?;
    let toolbar_root = toolbar.root.clone();

    let shared: Shared = Rc::new(RefCell::new(None));
    let host = WebHost::new(
        window.clone(),
        container.clone(),
        content,
        toolbar,
        uses_meta_modifier(window),
        &shared,
    )
    .ok_or(MountError::NoDocument)?;
    let controller = InteractionController::attach(host, options)?;
    container.append_child(&toolbar_root)?;
    *shared.borrow_mut() = Some(controller);
    Ok((shared, toolbar_root))
}

/// JavaScript entry point: `createPanZoom(el, options)`.
///
/// `el` is a selector string or an `HTMLElement`. `options` may carry
/// `scaleSize`, `allowOverflow`, `minScale` and an `onChange(kind, value)`
/// function, called with `("scale", number)` or
/// `("position", {left, top})`.
///
/// # Errors
///
/// Throws an `Error` carrying the [`MountError`] message.
#[wasm_bindgen(js_name = createPanZoom)]
pub fn create_pan_zoom(el: JsValue, options: JsValue) -> Result<PanZoom, JsValue> {
    mount_from_js(&el, &options).map_err(|err| js_sys::Error::new(&err.to_string()).into())
}

fn mount_from_js(el: &JsValue, options: &JsValue) -> Result<PanZoom, MountError> {
    let (parsed, on_change) = if options.is_undefined() || options.is_null() {
        (PanZoomOptions::default(), None)
    } else {
        let json = String::from(JSON::stringify(options)?);
        let on_change = Reflect::get(options, &JsValue::from_str("onChange"))?
            .dyn_into::<Function>()
            .ok();
        (options_from_json(&json)?, on_change)
    };

    let view = if let Some(selector) = el.as_string() {
        PanZoom::mount_selector(&selector, parsed)?
    } else {
        let container = el.dyn_ref::<HtmlElement>().cloned().ok_or_else(|| {
            MountError::InvalidOptions("`el` must be a selector or an HTMLElement".into())
        })?;
        PanZoom::mount(container, parsed)?
    };

    if let Some(on_change) = on_change {
        view.set_on_change(move |change| {
            let (kind, value) = change_payload(change);
            let value = JSON::parse(&value.to_string()).unwrap_or(JsValue::NULL);
            if let Err(err) = on_change.call2(&JsValue::NULL, &JsValue::from_str(kind), &value) {
                log::warn!("pan/zoom onChange threw: {err:?}");
            }
        });
    }
    Ok(view)
}

fn uses_meta_modifier(window: &Window) -> bool {
    window
        .navigator()
        .user_agent()
        .is_ok_and(|agent| is_mac_user_agent(&agent))
}
