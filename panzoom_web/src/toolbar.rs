// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::style::{
    RECENTER_CSS, RECENTER_TEXT, SCALE_CONTROL_CSS, SCALE_LABEL_CSS, STEP_BUTTON_CSS, TOOLBAR_CSS,
};

/// The zoom toolbar: minus, percentage label, plus and "back to content".
#[derive(Clone, Debug)]
pub(crate) struct Toolbar {
    pub(crate) root: HtmlElement,
    pub(crate) zoom_out: HtmlElement,
    pub(crate) label: HtmlElement,
    pub(crate) zoom_in: HtmlElement,
    pub(crate) recenter: HtmlElement,
}

impl Toolbar {
    /// Creates the toolbar elements, detached from the document.
    pub(crate) fn build(document: &Document) -> Result<Self, JsValue> {
        let root = div(document, TOOLBAR_CSS, None)?;
        let control = div(document, SCALE_CONTROL_CSS, None)?;
        let zoom_out = div(document, STEP_BUTTON_CSS, Some("-"))?;
        let label = div(document, SCALE_LABEL_CSS, Some("100%"))?;
        let zoom_in = div(document, STEP_BUTTON_CSS, Some("+"))?;
        let recenter = div(document, RECENTER_CSS, Some(RECENTER_TEXT))?;

        control.append_child(&zoom_out)?;
        control.append_child(&label)?;
        control.append_child(&zoom_in)?;
        root.append_child(&control)?;
        root.append_child(&recenter)?;

        Ok(Self {
            root,
            zoom_out,
            label,
            zoom_in,
            recenter,
        })
    }
}

fn div(document: &Document, css: &str, text: Option<&str>) -> Result<HtmlElement, JsValue> {
    let element: HtmlElement = document.create_element("div")?.dyn_into()?;
    element.style().set_css_text(css);
    if text.is_some() {
        element.set_text_content(text);
    }
    Ok(element)
}
