use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::dom::{Region, SECTION_TITLE};
use crate::intent::EventSource;

/// Snapshot the element an event originated from. Events whose target is
/// not an element (text nodes, the document itself) yield `None`.
pub(super) fn snapshot(event: &Event) -> Option<EventSource> {
    let element = event.target()?.dyn_into::<Element>().ok()?;

    let mut source = EventSource::new(&element.tag_name());
    source.classes = element
        .class_name()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    source.name = element.get_attribute("name");
    source.value = element.get_attribute("value");
    source.data_value = element.get_attribute("data-value");
    source.product_id = element.get_attribute("data-product-id");

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        source.input_type = Some(input.type_());
        source.value = Some(input.value());
        source.checked = input.checked();
    }

    source.section = closest(&element, &format!(".{SECTION_TITLE}"))
        .and_then(|title| title.get_attribute("data-section"));
    source.in_sort_dropdown = closest(&element, Region::SortDropdown.selector()).is_some();

    Some(source)
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}
