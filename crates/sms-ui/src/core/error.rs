//! Failures reported by browser APIs.

use thiserror::Error;

/// A DOM call that returned an exception.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{operation} failed: {detail}")]
pub struct DomError {
    /// What the page was doing.
    pub operation: &'static str,
    /// Browser-reported detail.
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::DomError;

    #[test]
    fn message_names_the_operation_and_the_browser_detail() {
        let err = DomError {
            operation: "class toggle",
            detail: "InvalidCharacterError".to_string(),
        };
        assert_eq!(err.to_string(), "class toggle failed: InvalidCharacterError");
    }
}
