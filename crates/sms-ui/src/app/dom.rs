//! Thin lookup and state helpers over `web-sys`.

use crate::core::error::DomError;
use gloo::console;
use gloo::utils::document;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    NodeList,
};

pub(crate) fn js_error(operation: &'static str, err: &JsValue) -> anyhow::Error {
    anyhow::Error::new(DomError {
        operation,
        detail: format!("{err:?}"),
    })
}

/// Log a failed DOM call and carry on; `None` when it failed.
pub(crate) fn report<T>(operation: &'static str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            console::error!(js_error(operation, &err).to_string());
            None
        }
    }
}

pub(crate) fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub(crate) fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

pub(crate) fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub(crate) fn query_all(selector: &str) -> Vec<Element> {
    document()
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

pub(crate) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Current value of a form control; `None` for elements without one.
pub(crate) fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    element
        .dyn_ref::<HtmlSelectElement>()
        .map(HtmlSelectElement::value)
}

pub(crate) fn is_disabled(element: &Element) -> bool {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        return button.disabled();
    }
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.disabled();
    }
    element.has_attribute("disabled")
}

pub(crate) fn set_disabled(element: &Element, disabled: bool) {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
        return;
    }
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_disabled(disabled);
        return;
    }
    let result = if disabled {
        element.set_attribute("disabled", "")
    } else {
        element.remove_attribute("disabled")
    };
    report("disabled flag update", result);
}
