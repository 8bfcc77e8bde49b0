use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::dom::{Region, Target};
use crate::surface::Surface;

/// The live page. Lookups happen on every write so re-rendered markup is
/// always found.
#[derive(Debug, Clone)]
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn find(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(selector, error = ?err, "query_selector failed");
                None
            }
        }
    }

    fn find_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(selector, error = ?err, "query_selector_all failed");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn style(&self, element: &Element, property: &str, value: &str) {
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = html.style().set_property(property, value) {
            tracing::warn!(property, error = ?err, "style update failed");
        }
    }
}

fn toggle(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(err) = result {
        tracing::warn!(class, error = ?err, "class update failed");
    }
}

impl Surface for DomSurface {
    fn set_html(&mut self, region: Region, html: &str) {
        if let Some(element) = self.find(region.selector()) {
            element.set_inner_html(html);
        }
    }

    fn set_text(&mut self, region: Region, text: &str) {
        if let Some(element) = self.find(region.selector()) {
            element.set_text_content(Some(text));
        }
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        if let Some(element) = self.find(region.selector()) {
            self.style(&element, "display", if visible { "block" } else { "none" });
        }
    }

    fn set_class(&mut self, target: Target<'_>, class: &str, on: bool) {
        for element in self.find_all(&target.selector()) {
            toggle(&element, class, on);
        }
    }

    fn flash_class(&mut self, region: Region, class: &str, millis: u32) {
        let Some(element) = self.find(region.selector()) else {
            return;
        };
        toggle(&element, class, true);

        let Some(window) = web_sys::window() else {
            return;
        };
        let class = class.to_string();
        let clear = Closure::once_into_js(move || toggle(&element, &class, false));
        let delay = i32::try_from(millis).unwrap_or(i32::MAX);
        if let Err(err) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(clear.unchecked_ref(), delay)
        {
            tracing::warn!(error = ?err, "could not schedule class removal");
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        if let Some(body) = self.document.body() {
            self.style(&body, "overflow", if locked { "hidden" } else { "" });
        }
    }
}
