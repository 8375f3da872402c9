//! Loading feedback on form submission.

use crate::app::config;
use crate::app::dom::{is_disabled, query, query_all, query_in, report};
use crate::app::loading::{clear_loading, show_loading};
use crate::core::forms::{
    CUSTOM_LOADING_ATTR, CustomLoadingOptions, FormOwner, LOADING_TEXT_ATTR,
    SUBMIT_BUTTON_SELECTOR, SubmissionTracker, resolve_loading_text,
};
use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

/// Hook receiving the form and its loading button.
pub type FormHook = Rc<dyn Fn(&Element, &Element)>;

/// Optional hooks for [`add_custom_form_loading`].
#[derive(Clone, Default)]
pub struct FormHooks {
    /// Runs right after the button enters the loading state.
    pub on_submit: Option<FormHook>,
    /// Runs when the fallback timer ends a loading state still owned by the submission.
    pub on_complete: Option<FormHook>,
}

/// Show a loading state on the submit button of every form not opted out.
///
/// The label comes from the button's `data-loading-text`, then the form's, then the
/// configured default.
pub fn add_loading_to_forms() {
    for form in query_all("form") {
        if !owner(&form).uses_blanket_loading() {
            continue;
        }
        let target = form.clone();
        EventListener::new(&form, "submit", move |_| on_blanket_submit(&target)).forget();
    }
}

fn on_blanket_submit(form: &Element) {
    if !owner(form).uses_blanket_loading() {
        return;
    }
    let Some(button) = query_in(form, SUBMIT_BUTTON_SELECTOR) else {
        return;
    };
    if is_disabled(&button) {
        return;
    }
    let config = config();
    let button_text = button.get_attribute(LOADING_TEXT_ATTR);
    let form_text = form.get_attribute(LOADING_TEXT_ATTR);
    let text = resolve_loading_text(
        button_text.as_deref(),
        form_text.as_deref(),
        &config.processing_text,
    );
    show_loading(&button, Some(text));
}

fn owner(form: &Element) -> FormOwner {
    FormOwner::from_attribute(form.get_attribute(CUSTOM_LOADING_ATTR).as_deref())
}

/// Take the form away from the page-wide listener.
pub(crate) fn claim_form(form: &Element, owner: FormOwner) {
    if let Some(value) = owner.attribute_value() {
        report("form claim", form.set_attribute(CUSTOM_LOADING_ATTR, value));
    }
}

/// Give the first form matching `selector` its own loading behavior.
///
/// The form is opted out of [`add_loading_to_forms`]. A fallback timer forces the loading
/// state off if it is still held by the same submission when the timer fires.
pub fn add_custom_form_loading(selector: &str, options: CustomLoadingOptions, hooks: FormHooks) {
    let Some(form) = query(selector) else {
        return;
    };
    claim_form(&form, FormOwner::Custom);
    let tracker = Rc::new(RefCell::new(SubmissionTracker::default()));
    let target = form.clone();
    EventListener::new(&form, "submit", move |_| {
        on_custom_submit(&target, &options, &hooks, &tracker);
    })
    .forget();
}

fn on_custom_submit(
    form: &Element,
    options: &CustomLoadingOptions,
    hooks: &FormHooks,
    tracker: &Rc<RefCell<SubmissionTracker>>,
) {
    let Some(button) = query_in(form, &options.button_selector) else {
        return;
    };
    if is_disabled(&button) {
        return;
    }
    let ticket = tracker.borrow_mut().begin();
    show_loading(&button, Some(&options.loading_text));
    if let Some(on_submit) = &hooks.on_submit {
        on_submit(form, &button);
    }

    let form = form.clone();
    let tracker = Rc::clone(tracker);
    let on_complete = hooks.on_complete.clone();
    Timeout::new(config().fallback_clear_ms, move || {
        if !tracker.borrow_mut().finish(ticket) {
            return;
        }
        if clear_loading(&button)
            && let Some(on_complete) = on_complete
        {
            on_complete(&form, &button);
        }
    })
    .forget();
}
