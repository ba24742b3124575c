//! Null-safe lookups of the booking page's elements.

use tracing::trace;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Reads the current value of the form control with the given `id`.
///
/// Returns [`None`] if there is no such element.
/// Elements that aren't form controls fall back to their `value` attribute.
#[must_use]
pub fn control_value(document: &Document, id: &str) -> Option<String> {
	let element = document.get_element_by_id(id)?;
	if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
		Some(input.value())
	} else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
		Some(select.value())
	} else if let Some(text_area) = element.dyn_ref::<HtmlTextAreaElement>() {
		Some(text_area.value())
	} else {
		trace!("#{} is <{}>, not a form control.", id, element.tag_name());
		element.get_attribute("value")
	}
}

/// Finds the `<input>` with the given `id`.
#[must_use]
pub fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
	document.get_element_by_id(id)?.dyn_into().ok()
}
