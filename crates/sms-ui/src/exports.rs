//! JavaScript API for inline template scripts.
//!
//! Names mirror the page helpers templates already call (`toggleTheme`, `showAlert`, ...).
//! Callbacks receive plain objects: `{ success, message }` from the server on success or
//! rejection, `{ message }` for transport failures.

use crate::app::{
    FormHook, FormHooks, SubmitHandlers, add_custom_form_loading, add_loading_to_forms,
    close_sidebar, hide_loading, initialize_data_table, initialize_theme, run_page, show_alert,
    show_loading, submit_form_with_ajax, toggle_sidebar, toggle_theme, validate_form,
};
use crate::core::alerts::AlertKind;
use crate::core::forms::CustomLoadingOptions;
use crate::core::submit::{SubmitError, SubmitSuccess};
use gloo::console;
use js_sys::{Function, Object, Reflect};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Wire the page: theme, form loading, sidebar and the alert cleanup.
#[wasm_bindgen(js_name = runPage)]
pub fn js_run_page() {
    run_page();
}

/// Flip the page theme.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn js_toggle_theme() {
    toggle_theme();
}

/// Apply the stored or OS-preferred theme.
#[wasm_bindgen(js_name = initializeTheme)]
pub fn js_initialize_theme() {
    initialize_theme();
}

/// Toggle the sidebar.
#[wasm_bindgen(js_name = toggleSidebar)]
pub fn js_toggle_sidebar() {
    toggle_sidebar();
}

/// Hide the sidebar.
#[wasm_bindgen(js_name = closeSidebar)]
pub fn js_close_sidebar() {
    close_sidebar();
}

/// Show an alert banner; `kind` defaults to `info`, `duration` to the configured lifetime.
#[wasm_bindgen(js_name = showAlert)]
#[allow(clippy::cast_possible_truncation, clippy::needless_pass_by_value)]
pub fn js_show_alert(message: &str, kind: Option<String>, duration: Option<f64>) {
    let kind = kind.as_deref().map_or_else(AlertKind::default, AlertKind::parse);
    show_alert(message, kind, duration.map(|ms| ms as i64));
}

/// Put an element into the loading state; `null` or `undefined` is ignored.
#[wasm_bindgen(js_name = showLoading)]
#[allow(clippy::needless_pass_by_value)]
pub fn js_show_loading(element: Option<Element>, text: Option<String>) {
    if let Some(element) = element {
        show_loading(&element, text.as_deref());
    }
}

/// Release an element's loading state; `null` or `undefined` is ignored.
#[wasm_bindgen(js_name = hideLoading)]
#[allow(clippy::needless_pass_by_value)]
pub fn js_hide_loading(element: Option<Element>) {
    if let Some(element) = element {
        hide_loading(&element);
    }
}

/// Validate the required fields of a form.
#[wasm_bindgen(js_name = validateForm)]
#[must_use]
pub fn js_validate_form(form_id: &str) -> bool {
    validate_form(form_id)
}

/// Wire search and sort on a table.
#[wasm_bindgen(js_name = initializeDataTable)]
pub fn js_initialize_data_table(table_id: &str) {
    initialize_data_table(table_id);
}

/// Add loading feedback to every form not opted out.
#[wasm_bindgen(js_name = addLoadingToForms)]
pub fn js_add_loading_to_forms() {
    add_loading_to_forms();
}

/// Custom loading for one form.
///
/// `options` may carry `loadingText`, `buttonSelector`, `onSubmit(form, button)` and
/// `onComplete(form, button)`.
#[wasm_bindgen(js_name = addCustomFormLoading)]
pub fn js_add_custom_form_loading(selector: &str, options: Option<Object>) {
    let options = options.unwrap_or_default();
    let loading_text = string_field(&options, "loadingText")
        .unwrap_or_else(|| crate::app::config().processing_text.clone());
    let mut settings = CustomLoadingOptions::with_text(loading_text);
    if let Some(button_selector) = string_field(&options, "buttonSelector") {
        settings = settings.button_selector(button_selector);
    }
    let hooks = FormHooks {
        on_submit: function_field(&options, "onSubmit").map(form_hook),
        on_complete: function_field(&options, "onComplete").map(form_hook),
    };
    add_custom_form_loading(selector, settings, hooks);
}

/// Submit a form through fetch; callbacks replace the default alerts.
#[wasm_bindgen(js_name = submitFormWithAjax)]
pub fn js_submit_form_with_ajax(
    form_id: &str,
    on_success: Option<Function>,
    on_error: Option<Function>,
) {
    let handlers = SubmitHandlers {
        on_success: on_success.map(|callback| {
            Rc::new(move |success: &SubmitSuccess| {
                call(&callback, &success_payload(success));
            }) as Rc<dyn Fn(&SubmitSuccess)>
        }),
        on_error: on_error.map(|callback| {
            Rc::new(move |err: &SubmitError| {
                call(&callback, &error_payload(err));
            }) as Rc<dyn Fn(&SubmitError)>
        }),
    };
    submit_form_with_ajax(form_id, handlers);
}

fn form_hook(callback: Function) -> FormHook {
    Rc::new(move |form: &Element, button: &Element| {
        if let Err(err) = callback.call2(&JsValue::NULL, form, button) {
            console::error!("form hook threw", err);
        }
    })
}

fn call(callback: &Function, payload: &Object) {
    if let Err(err) = callback.call1(&JsValue::NULL, payload) {
        console::error!("submission callback threw", err);
    }
}

fn success_payload(success: &SubmitSuccess) -> Object {
    let payload = Object::new();
    set_field(&payload, "success", &JsValue::TRUE);
    if let Some(message) = &success.message {
        set_field(&payload, "message", &JsValue::from_str(message));
    }
    payload
}

fn error_payload(err: &SubmitError) -> Object {
    let payload = Object::new();
    match err {
        SubmitError::Rejected { message } => {
            set_field(&payload, "success", &JsValue::FALSE);
            if let Some(message) = message {
                set_field(&payload, "message", &JsValue::from_str(message));
            }
        }
        other => set_field(&payload, "message", &JsValue::from_str(&other.message())),
    }
    payload
}

fn set_field(target: &Object, key: &str, value: &JsValue) {
    if let Err(err) = Reflect::set(target, &JsValue::from_str(key), value) {
        console::warn!("callback payload field skipped", key, err);
    }
}

fn string_field(options: &Object, key: &str) -> Option<String> {
    Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
}

fn function_field(options: &Object, key: &str) -> Option<Function> {
    Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::utils::document;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::HtmlButtonElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn button(html: &str) -> HtmlButtonElement {
        let element = document()
            .create_element("button")
            .expect("button element");
        element.set_inner_html(html);
        element.dyn_into().expect("button type")
    }

    #[wasm_bindgen_test]
    fn missing_element_is_ignored() {
        js_show_loading(None, Some("Loading...".to_string()));
        js_hide_loading(None);
    }

    #[wasm_bindgen_test]
    fn show_then_hide_restores_the_button() {
        let target = button("<b>Enroll</b>");
        let element: Element = target.clone().into();
        js_show_loading(Some(element.clone()), Some("Enrolling...".to_string()));
        assert!(target.disabled());
        assert!(element.inner_html().contains("Enrolling..."));
        js_hide_loading(Some(element.clone()));
        assert!(!target.disabled());
        assert_eq!(element.inner_html(), "<b>Enroll</b>");
    }

    #[wasm_bindgen_test]
    fn a_clone_does_not_release_its_source() {
        let target = button("Save");
        let element: Element = target.clone().into();
        js_show_loading(Some(element.clone()), None);
        let copy: Element = element
            .clone_node_with_deep(true)
            .expect("clone")
            .dyn_into()
            .expect("element clone");
        js_hide_loading(Some(copy));
        assert!(target.disabled());
        js_hide_loading(Some(element.clone()));
        assert!(!target.disabled());
        assert_eq!(element.inner_html(), "Save");
    }
}
