//! Browser wiring for server-rendered pages.
//!
//! # Design
//! - Each component applies the DOM-free rules in [`crate::core`] to the live document.
//! - Missing elements end an operation silently; DOM API failures are logged once.
//! - Configuration is read on first use and lives for the page.

use crate::core::config::UiConfig;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use std::cell::{Cell, OnceCell};
use std::rc::Rc;

mod alerts;
pub(crate) mod dom;
mod forms;
mod loading;
mod preferences;
mod sidebar;
mod submit;
mod table;
mod theme;
mod validation;

pub use alerts::show_alert;
pub use forms::{FormHook, FormHooks, add_custom_form_loading, add_loading_to_forms};
pub use loading::{LoadingGuard, hide_loading, show_loading};
pub use sidebar::{close_sidebar, toggle_sidebar};
pub use submit::{SubmitHandlers, submit_form_with_ajax};
pub use table::initialize_data_table;
pub use theme::{initialize_theme, toggle_theme};
pub use validation::validate_form;

thread_local! {
    static CONFIG: OnceCell<Rc<UiConfig>> = const { OnceCell::new() };
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Page configuration, read from the inline configuration block on first use.
pub(crate) fn config() -> Rc<UiConfig> {
    CONFIG.with(|cell| Rc::clone(cell.get_or_init(|| Rc::new(preferences::load_config()))))
}

/// Wire the page once the DOM is ready (immediately when it already is).
///
/// Only the first call wires anything.
pub fn run_page() {
    if STARTED.with(|started| started.replace(true)) {
        return;
    }
    console_error_panic_hook::set_once();
    let document = document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
}

fn boot() {
    let config = config();
    initialize_theme();
    add_loading_to_forms();
    sidebar::wire();
    alerts::schedule_sweep(&config);
    console::debug!("sms-ui wired");
}
