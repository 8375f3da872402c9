//! Required-field validation.
//!
//! Presence only: a field passes when its value is non-empty after trimming.

/// Selector matching fields that must be filled.
pub const REQUIRED_SELECTOR: &str = "[required]";
/// Class applied to invalid fields.
pub const INVALID_CLASS: &str = "is-invalid";
/// Class of the feedback node inserted next to an invalid field.
pub const FEEDBACK_CLASS: &str = "invalid-feedback";
/// Feedback text for a missing value.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Result of checking one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Field has a value.
    Valid,
    /// Field is empty or whitespace only.
    Missing,
}

impl FieldOutcome {
    /// Check a single raw field value.
    #[must_use]
    pub fn check(value: &str) -> Self {
        if value.trim().is_empty() {
            Self::Missing
        } else {
            Self::Valid
        }
    }
}

/// Per-field outcomes for one form, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    outcomes: Vec<FieldOutcome>,
}

impl ValidationReport {
    /// Check every required value in order.
    #[must_use]
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            outcomes: values.into_iter().map(FieldOutcome::check).collect(),
        }
    }

    /// Outcomes aligned with the input values.
    #[must_use]
    pub fn outcomes(&self) -> &[FieldOutcome] {
        &self.outcomes
    }

    /// True when every field passed (vacuously true for a form without required fields).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|o| *o == FieldOutcome::Valid)
    }

    /// Indices of the fields that failed.
    #[must_use]
    pub fn missing(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| **o == FieldOutcome::Missing)
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_counts_as_missing() {
        assert_eq!(FieldOutcome::check("   \t"), FieldOutcome::Missing);
        assert_eq!(FieldOutcome::check(" x "), FieldOutcome::Valid);
    }

    #[test]
    fn one_empty_field_fails_and_is_the_only_one_flagged() {
        let report = ValidationReport::from_values(["", "Ada"]);
        assert!(!report.is_valid());
        assert_eq!(report.missing(), vec![0]);
    }

    #[test]
    fn filling_the_field_clears_the_failure() {
        let report = ValidationReport::from_values(["Grace", "Ada"]);
        assert!(report.is_valid());
        assert!(report.missing().is_empty());
        assert_eq!(report.outcomes(), &[FieldOutcome::Valid, FieldOutcome::Valid]);
    }

    #[test]
    fn form_without_required_fields_is_valid() {
        assert!(ValidationReport::from_values(Vec::<&str>::new()).is_valid());
    }
}
