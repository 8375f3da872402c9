//! Form submission loading rules.

/// Selector of a form's submit button.
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
/// Attribute opting a form out of the blanket loading wiring.
pub const CUSTOM_LOADING_ATTR: &str = "data-custom-loading";
/// Attribute carrying a per-button or per-form loading label.
pub const LOADING_TEXT_ATTR: &str = "data-loading-text";

/// Which wiring drives the loading state of a form's submit button.
///
/// Exactly one owner acquires the button per submission; a second acquisition would only
/// nest, and the owner's release would then leave the button loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormOwner {
    /// The page-wide submit listener.
    Blanket,
    /// A form set up with custom loading options.
    Custom,
    /// A form submitted through fetch, which holds the button for the whole request.
    Ajax,
}

impl FormOwner {
    /// Read the owner from the form's opt-out attribute; any value but `ajax` is custom.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            None => Self::Blanket,
            Some("ajax") => Self::Ajax,
            Some(_) => Self::Custom,
        }
    }

    /// Value written to the opt-out attribute when claiming a form.
    #[must_use]
    pub const fn attribute_value(self) -> Option<&'static str> {
        match self {
            Self::Blanket => None,
            Self::Custom => Some("true"),
            Self::Ajax => Some("ajax"),
        }
    }

    /// Whether the page-wide submit listener shows the loading state.
    #[must_use]
    pub const fn uses_blanket_loading(self) -> bool {
        matches!(self, Self::Blanket)
    }
}

/// Pick the loading label: the button's own, then the form's, then `default`.
#[must_use]
pub fn resolve_loading_text<'a>(
    button_text: Option<&'a str>,
    form_text: Option<&'a str>,
    default: &'a str,
) -> &'a str {
    button_text
        .filter(|text| !text.is_empty())
        .or_else(|| form_text.filter(|text| !text.is_empty()))
        .unwrap_or(default)
}

/// Options for a form with custom loading behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomLoadingOptions {
    /// Label shown while loading.
    pub loading_text: String,
    /// Selector of the button that shows the loading state.
    pub button_selector: String,
}

impl CustomLoadingOptions {
    /// Defaults with the given loading label.
    #[must_use]
    pub fn with_text(loading_text: impl Into<String>) -> Self {
        Self {
            loading_text: loading_text.into(),
            button_selector: SUBMIT_BUTTON_SELECTOR.to_string(),
        }
    }

    /// Override the target button selector.
    #[must_use]
    pub fn button_selector(mut self, selector: impl Into<String>) -> Self {
        self.button_selector = selector.into();
        self
    }
}

/// Identifies one submission of a custom-loading form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Tracks the in-flight submission of one form.
///
/// Completion is claimed with the ticket handed out by [`SubmissionTracker::begin`]; a
/// ticket from an earlier submission, or a second claim for the same one, is refused. This
/// keeps a stale fallback timer from clearing a newer submission and runs completion hooks
/// at most once per submission.
#[derive(Debug, Default)]
pub struct SubmissionTracker {
    generation: u64,
    open: bool,
}

impl SubmissionTracker {
    /// Start a new submission, superseding any open one.
    pub fn begin(&mut self) -> SubmissionTicket {
        self.generation = self.generation.wrapping_add(1);
        self.open = true;
        SubmissionTicket(self.generation)
    }

    /// Claim completion; `true` only for the first claim of the current submission.
    pub fn finish(&mut self, ticket: SubmissionTicket) -> bool {
        if self.open && ticket.0 == self.generation {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// Whether a submission is waiting for completion.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loading::{Acquire, LoadingLedger, LoadingSnapshot};

    #[test]
    fn button_label_wins_over_form_label() {
        assert_eq!(
            resolve_loading_text(Some("Enrolling..."), Some("Saving..."), "Processing..."),
            "Enrolling..."
        );
    }

    #[test]
    fn form_label_then_default() {
        assert_eq!(
            resolve_loading_text(None, Some("Saving..."), "Processing..."),
            "Saving..."
        );
        assert_eq!(resolve_loading_text(None, None, "Processing..."), "Processing...");
        assert_eq!(
            resolve_loading_text(Some(""), None, "Processing..."),
            "Processing..."
        );
    }

    #[test]
    fn custom_options_default_to_submit_button() {
        let options = CustomLoadingOptions::with_text("Uploading...");
        assert_eq!(options.button_selector, SUBMIT_BUTTON_SELECTOR);
        let options = options.button_selector("#upload");
        assert_eq!(options.button_selector, "#upload");
    }

    #[test]
    fn claimed_forms_skip_the_page_wide_listener() {
        assert!(FormOwner::from_attribute(None).uses_blanket_loading());
        for owner in [FormOwner::Custom, FormOwner::Ajax] {
            let read_back = FormOwner::from_attribute(owner.attribute_value());
            assert_eq!(read_back, owner);
            assert!(!read_back.uses_blanket_loading());
        }
        assert_eq!(FormOwner::from_attribute(Some("")), FormOwner::Custom);
    }

    #[test]
    fn ajax_submission_restores_its_button() {
        let owner = FormOwner::from_attribute(FormOwner::Ajax.attribute_value());
        let mut ledger = LoadingLedger::default();
        let original = LoadingSnapshot {
            inner_html: "Save".to_string(),
            disabled: false,
        };
        if owner.uses_blanket_loading() {
            ledger.acquire(1_u32, || original.clone());
        }
        assert_eq!(ledger.acquire(1, || original.clone()), Acquire::First);
        assert_eq!(ledger.release(&1), Some(original));
        assert!(!ledger.is_loading(&1));
    }

    #[test]
    fn completion_is_claimed_once() {
        let mut tracker = SubmissionTracker::default();
        let ticket = tracker.begin();
        assert!(tracker.is_open());
        assert!(tracker.finish(ticket));
        assert!(!tracker.finish(ticket));
        assert!(!tracker.is_open());
    }

    #[test]
    fn stale_ticket_cannot_finish_a_newer_submission() {
        let mut tracker = SubmissionTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.finish(first));
        assert!(tracker.finish(second));
    }
}
