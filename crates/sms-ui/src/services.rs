//! HTTP client helpers.

pub(crate) mod forms;
