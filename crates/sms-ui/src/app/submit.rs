//! Asynchronous form submission with JSON feedback.

use crate::app::alerts::show_alert;
use crate::app::config;
use crate::app::dom::{by_id, query_in};
use crate::app::forms::claim_form;
use crate::app::loading::LoadingGuard;
use crate::core::forms::{FormOwner, SUBMIT_BUTTON_SELECTOR};
use crate::core::submit::{SubmitError, SubmitOutcome, SubmitSuccess, default_feedback};
use crate::services::forms::submit_form;
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;

/// Handlers replacing the default alert for one branch of the outcome.
#[derive(Clone, Default)]
pub struct SubmitHandlers {
    /// Called with the accepted submission.
    pub on_success: Option<Rc<dyn Fn(&SubmitSuccess)>>,
    /// Called with the failure, whether rejected by the server or lost in transit.
    pub on_error: Option<Rc<dyn Fn(&SubmitError)>>,
}

/// Submit the form `form_id` through fetch instead of navigating.
///
/// The form is taken away from [`add_loading_to_forms`](crate::add_loading_to_forms), so
/// the submit button shows the saving label until the response is handled and is then
/// restored. Without a matching handler, the outcome is reported through [`show_alert`].
pub fn submit_form_with_ajax(form_id: &str, handlers: SubmitHandlers) {
    let Some(form) = by_id(form_id).and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    claim_form(&form, FormOwner::Ajax);
    let target = form.clone();
    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let form = target.clone();
            let handlers = handlers.clone();
            spawn_local(async move {
                let outcome = run_submission(&form).await;
                present(&outcome, &handlers);
            });
        },
    )
    .forget();
}

async fn run_submission(form: &HtmlFormElement) -> SubmitOutcome {
    let _loading = query_in(form, SUBMIT_BUTTON_SELECTOR)
        .map(|button| LoadingGuard::acquire(&button, Some(&config().saving_text)));
    submit_form(form).await
}

fn present(outcome: &SubmitOutcome, handlers: &SubmitHandlers) {
    match outcome {
        Ok(success) => {
            if let Some(on_success) = &handlers.on_success {
                on_success(success);
                return;
            }
        }
        Err(err) => {
            console::warn!("form submission failed", err.to_string(), err.message());
            if let Some(on_error) = &handlers.on_error {
                on_error(err);
                return;
            }
        }
    }
    let (kind, message) = default_feedback(outcome);
    show_alert(&message, kind, None);
}
