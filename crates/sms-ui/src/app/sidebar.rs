//! Sidebar controller.

use crate::app::dom::{by_id, query, report};
use crate::core::sidebar::{
    ClickTarget, SIDEBAR_ID, SIDEBAR_SHOW_CLASS, SIDEBAR_TOGGLE_SELECTOR, closes_on_click,
};
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Event, Node};

/// Show the sidebar when hidden, hide it when shown.
pub fn toggle_sidebar() {
    if let Some(sidebar) = by_id(SIDEBAR_ID) {
        report("sidebar toggle", sidebar.class_list().toggle(SIDEBAR_SHOW_CLASS));
    }
}

/// Hide the sidebar.
pub fn close_sidebar() {
    if let Some(sidebar) = by_id(SIDEBAR_ID) {
        report("sidebar close", sidebar.class_list().remove_1(SIDEBAR_SHOW_CLASS));
    }
}

pub(crate) fn wire() {
    if let Some(toggle) = query(SIDEBAR_TOGGLE_SELECTOR) {
        EventListener::new(&toggle, "click", |_| toggle_sidebar()).forget();
    }
    EventListener::new(&document(), "click", close_on_outside_click).forget();
}

fn close_on_outside_click(event: &Event) {
    let Some(sidebar) = by_id(SIDEBAR_ID) else {
        return;
    };
    let shown = sidebar.class_list().contains(SIDEBAR_SHOW_CLASS);
    if !shown {
        return;
    }
    let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
    let in_toggle = query(SIDEBAR_TOGGLE_SELECTOR)
        .is_some_and(|toggle| toggle.contains(target.as_ref()));
    let click = ClickTarget {
        in_sidebar: sidebar.contains(target.as_ref()),
        in_toggle,
    };
    if closes_on_click(shown, click) {
        close_sidebar();
    }
}
