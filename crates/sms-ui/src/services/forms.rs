//! Form POST transport.
//!
//! # Design
//! - Serialize with the browser's `FormData` so file inputs and multi-selects behave as on
//!   a regular submission.
//! - Return a typed outcome; presentation happens in the caller.

use crate::app::dom::query;
use crate::core::submit::{
    CSRF_FIELD_SELECTOR, CSRF_HEADER, SubmitError, SubmitOutcome, decode_response,
};
use gloo::utils::window;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement};

/// POST `form` to its action with the page's CSRF token and decode the JSON reply.
pub(crate) async fn submit_form(form: &HtmlFormElement) -> SubmitOutcome {
    let token = csrf_token().ok_or(SubmitError::MissingCsrfToken)?;
    let data = FormData::new_with_form(form).map_err(|err| SubmitError::Form {
        detail: format!("{err:?}"),
    })?;
    let response = Request::post(&action_url(form))
        .header(CSRF_HEADER, &token)
        .body(data)
        .send()
        .await
        .map_err(|err| SubmitError::Network {
            detail: err.to_string(),
        })?;
    let body = response.text().await.map_err(|err| SubmitError::Network {
        detail: err.to_string(),
    })?;
    decode_response(&body)
}

fn action_url(form: &HtmlFormElement) -> String {
    let action = form.action();
    if action.is_empty() {
        window().location().href().unwrap_or_default()
    } else {
        action
    }
}

fn csrf_token() -> Option<String> {
    query(CSRF_FIELD_SELECTOR)?
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}
