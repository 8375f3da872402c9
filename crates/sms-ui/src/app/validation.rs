//! Required-field validation against the live form.

use crate::app::dom::{by_id, field_value, query_all_in, query_in, report};
use crate::core::validation::{
    FEEDBACK_CLASS, FieldOutcome, INVALID_CLASS, REQUIRED_MESSAGE, REQUIRED_SELECTOR,
    ValidationReport,
};
use gloo::utils::document;
use web_sys::Element;

/// Flag empty required fields of the form `form_id`; `true` when all are filled.
///
/// A missing form counts as invalid. Submission is not blocked here; callers decide.
#[must_use]
pub fn validate_form(form_id: &str) -> bool {
    let Some(form) = by_id(form_id) else {
        return false;
    };
    let fields = query_all_in(&form, REQUIRED_SELECTOR);
    let values: Vec<String> = fields
        .iter()
        .map(|field| field_value(field).unwrap_or_default())
        .collect();
    let report = ValidationReport::from_values(values.iter().map(String::as_str));
    for (field, outcome) in fields.iter().zip(report.outcomes()) {
        match outcome {
            FieldOutcome::Missing => show_field_error(field, REQUIRED_MESSAGE),
            FieldOutcome::Valid => clear_field_error(field),
        }
    }
    report.is_valid()
}

fn show_field_error(field: &Element, message: &str) {
    clear_field_error(field);
    report("invalid flag add", field.class_list().add_1(INVALID_CLASS));
    let Some(parent) = field.parent_element() else {
        return;
    };
    if let Some(feedback) = report("feedback create", document().create_element("div")) {
        feedback.set_class_name(FEEDBACK_CLASS);
        feedback.set_text_content(Some(message));
        report("feedback insert", parent.append_child(&feedback));
    }
}

fn clear_field_error(field: &Element) {
    report("invalid flag remove", field.class_list().remove_1(INVALID_CLASS));
    if let Some(parent) = field.parent_element()
        && let Some(feedback) = query_in(&parent, &format!(".{FEEDBACK_CLASS}"))
    {
        feedback.remove();
    }
}
