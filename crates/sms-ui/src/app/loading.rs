//! Loading states on buttons and other elements.
//!
//! # Design
//! - Snapshots live in a page-wide ledger keyed by the element itself.
//! - [`LoadingGuard`] ties a loading state to a scope and releases it on every exit path.

use crate::app::config;
use crate::app::dom::{is_disabled, report, set_disabled};
use crate::core::loading::{
    Acquire, BUTTON_CLASS, LOADING_CLASS, LoadingLedger, LoadingSnapshot, spinner_markup,
};
use std::cell::RefCell;
use web_sys::Element;

thread_local! {
    static LEDGER: RefCell<LoadingLedger<Element, LoadingSnapshot>> =
        RefCell::new(LoadingLedger::default());
}

/// Put `element` into the loading state.
///
/// The first call snapshots content and disabled flag, disables the element and, unless it
/// is a `.btn`, swaps its content for a spinner and `text` (configured default when `None`).
/// Further calls before [`hide_loading`] only nest.
pub fn show_loading(element: &Element, text: Option<&str>) {
    let acquired = LEDGER.with(|ledger| {
        ledger.borrow_mut().acquire(element.clone(), || LoadingSnapshot {
            inner_html: element.inner_html(),
            disabled: is_disabled(element),
        })
    });
    if acquired == Acquire::Nested {
        return;
    }
    report("loading class add", element.class_list().add_1(LOADING_CLASS));
    set_disabled(element, true);
    if !element.class_list().contains(BUTTON_CLASS) {
        match text {
            Some(text) => element.set_inner_html(&spinner_markup(text)),
            None => element.set_inner_html(&spinner_markup(&config().loading_text)),
        }
    }
}

/// Release one [`show_loading`]; the original state returns with the last release.
///
/// Elements that are not loading are left untouched.
pub fn hide_loading(element: &Element) {
    let snapshot = LEDGER.with(|ledger| ledger.borrow_mut().release(element));
    if let Some(snapshot) = snapshot {
        restore(element, &snapshot);
    }
}

/// End the loading state regardless of nesting; `true` when the element was loading.
pub(crate) fn clear_loading(element: &Element) -> bool {
    let snapshot = LEDGER.with(|ledger| ledger.borrow_mut().clear(element));
    snapshot.is_some_and(|snapshot| {
        restore(element, &snapshot);
        true
    })
}

fn restore(element: &Element, snapshot: &LoadingSnapshot) {
    element.set_inner_html(&snapshot.inner_html);
    report("loading class remove", element.class_list().remove_1(LOADING_CLASS));
    set_disabled(element, snapshot.disabled);
}

/// Scoped loading state: acquired on creation, released on drop.
#[must_use = "dropping the guard ends the loading state"]
pub struct LoadingGuard {
    element: Element,
}

impl LoadingGuard {
    /// Show the loading state on `element` until the guard is dropped.
    pub fn acquire(element: &Element, text: Option<&str>) -> Self {
        show_loading(element, text);
        Self {
            element: element.clone(),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        hide_loading(&self.element);
    }
}
