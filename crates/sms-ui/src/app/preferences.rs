//! Persistence and environment helpers for the page.

use crate::app::dom::by_id;
use crate::core::config::{CONFIG_ELEMENT_ID, ConfigError, UiConfig};
use crate::core::prefs::{MemoryStore, PreferenceStore};
use crate::core::theme::DARK_SCHEME_QUERY;
use gloo::console;
use gloo::utils::window;
use std::cell::RefCell;
use web_sys::Storage;

thread_local! {
    static FALLBACK: RefCell<MemoryStore> = RefCell::new(MemoryStore::default());
}

/// Local storage, or a page-lifetime memory store when storage is unavailable.
///
/// Values are stored raw so templates and other scripts read plain `light`/`dark`.
pub(crate) struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        match local_storage() {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => FALLBACK.with(|store| store.borrow().load(key)),
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            match storage.set_item(key, value) {
                Ok(()) => return,
                Err(err) => log_storage_error("set", key, &format!("{err:?}")),
            }
        }
        FALLBACK.with(|store| store.borrow_mut().save(key, value));
    }
}

fn local_storage() -> Option<Storage> {
    window().local_storage().ok().flatten()
}

pub(crate) fn prefers_dark() -> bool {
    window()
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

pub(crate) fn load_config() -> UiConfig {
    let Some(text) = by_id(CONFIG_ELEMENT_ID).and_then(|element| element.text_content()) else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&text) {
        Ok(config) => config,
        Err(ConfigError::Json { source }) => {
            console::warn!("ui configuration ignored", source.to_string());
            UiConfig::default()
        }
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
