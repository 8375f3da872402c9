#![forbid(unsafe_code)]
#![warn(
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Page helpers for the SMS server-rendered web UI.
//!
//! [`core`] holds the DOM-free rules (theme resolution, validation, alert styling, loading
//! ledger, natural sort, submission outcomes, configuration) and runs anywhere. The browser
//! wiring and the JavaScript API only build for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod exports;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::{
    FormHook, FormHooks, LoadingGuard, SubmitHandlers, add_custom_form_loading,
    add_loading_to_forms, close_sidebar, hide_loading, initialize_data_table, initialize_theme,
    run_page, show_alert, show_loading, submit_form_with_ajax, toggle_sidebar, toggle_theme,
    validate_form,
};
