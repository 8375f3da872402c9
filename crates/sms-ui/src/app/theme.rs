//! Theme controller.

use crate::app::config;
use crate::app::dom::{by_id, report};
use crate::app::preferences::{BrowserStore, prefers_dark};
use crate::core::theme::{self as rules, THEME_ATTR, THEME_ICON_ID, ThemeMode};
use gloo::utils::document;

/// Flip between light and dark, persist the choice and update the icon.
pub fn toggle_theme() {
    let current = document()
        .document_element()
        .and_then(|root| root.get_attribute(THEME_ATTR));
    let current = ThemeMode::from_attribute(current.as_deref());
    let next = rules::toggle_theme(&mut BrowserStore, &config().theme_storage_key, current);
    apply_theme(next);
}

/// Apply the stored preference, else the OS preference, else light.
pub fn initialize_theme() {
    let mode = rules::initial_theme(&BrowserStore, &config().theme_storage_key, prefers_dark());
    apply_theme(mode);
}

fn apply_theme(mode: ThemeMode) {
    if let Some(root) = document().document_element() {
        report("theme apply", root.set_attribute(THEME_ATTR, mode.as_str()));
    }
    if let Some(icon) = by_id(THEME_ICON_ID) {
        icon.set_class_name(mode.icon_class());
    }
}
