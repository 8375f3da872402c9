//! Core, DOM-free rules and helpers for the page UI.
pub mod alerts;
pub mod config;
pub mod error;
pub mod forms;
pub mod loading;
pub mod prefs;
pub mod sidebar;
pub mod submit;
pub mod table;
pub mod theme;
pub mod validation;
