//! Asynchronous form submission outcomes.
//!
//! # Design
//! - The transport returns a typed [`SubmitOutcome`]; alerts and callbacks are layered on top.
//! - Server messages are kept verbatim; fallbacks apply only when the server sent none.

use crate::core::alerts::AlertKind;
use serde::Deserialize;
use thiserror::Error;

/// Name of the hidden field carrying the CSRF token.
pub const CSRF_FIELD_SELECTOR: &str = "[name=csrfmiddlewaretoken]";
/// Request header carrying the CSRF token.
pub const CSRF_HEADER: &str = "X-CSRFToken";
/// Fallback text for a successful submission.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully";
/// Fallback text for a rejected submission.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";
/// Text for transport-level failures.
pub const NETWORK_ERROR_MESSAGE: &str = "A network error occurred";

/// JSON body returned by form endpoints.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct SubmitResponse {
    /// Whether the server accepted the submission.
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Accepted submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitSuccess {
    /// Server message, if any.
    pub message: Option<String>,
}

/// Failed submission.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The page has no CSRF token field.
    #[error("csrf token field missing")]
    MissingCsrfToken,
    /// The form could not be serialized.
    #[error("form serialization failed")]
    Form {
        /// Browser-reported detail.
        detail: String,
    },
    /// The request never produced a response.
    #[error("network request failed")]
    Network {
        /// Browser-reported detail.
        detail: String,
    },
    /// The response body was not the expected JSON.
    #[error("response decoding failed")]
    Decode {
        /// Decoder-reported detail.
        detail: String,
    },
    /// The server answered with `success: false`.
    #[error("submission rejected")]
    Rejected {
        /// Server message, if any.
        message: Option<String>,
    },
}

impl SubmitError {
    /// Message handed to error callbacks.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Rejected { message } => message
                .clone()
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
            Self::Network { detail } | Self::Decode { detail } | Self::Form { detail } => {
                detail.clone()
            }
            Self::MissingCsrfToken => self.to_string(),
        }
    }
}

/// Result of one asynchronous submission.
pub type SubmitOutcome = Result<SubmitSuccess, SubmitError>;

impl SubmitResponse {
    /// Interpret the body's success flag.
    ///
    /// # Errors
    /// Returns [`SubmitError::Rejected`] when the server reported failure.
    pub fn into_outcome(self) -> SubmitOutcome {
        if self.success {
            Ok(SubmitSuccess {
                message: self.message,
            })
        } else {
            Err(SubmitError::Rejected {
                message: self.message,
            })
        }
    }
}

/// Decode a response body.
///
/// # Errors
/// Returns [`SubmitError::Decode`] for malformed JSON, or [`SubmitError::Rejected`] when the
/// server reported failure.
pub fn decode_response(body: &str) -> SubmitOutcome {
    serde_json::from_str::<SubmitResponse>(body)
        .map_err(|err| SubmitError::Decode {
            detail: err.to_string(),
        })?
        .into_outcome()
}

/// Default alert for an outcome when the caller supplied no handler.
#[must_use]
pub fn default_feedback(outcome: &SubmitOutcome) -> (AlertKind, String) {
    match outcome {
        Ok(success) => (
            AlertKind::Success,
            message_or(success.message.as_deref(), DEFAULT_SUCCESS_MESSAGE),
        ),
        Err(SubmitError::Rejected { message }) => (
            AlertKind::Danger,
            message_or(message.as_deref(), DEFAULT_ERROR_MESSAGE),
        ),
        Err(_) => (AlertKind::Danger, NETWORK_ERROR_MESSAGE.to_string()),
    }
}

fn message_or(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|text| !text.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_uses_server_message() {
        let outcome = decode_response(r#"{"success": true, "message": "Student saved"}"#);
        assert_eq!(
            default_feedback(&outcome),
            (AlertKind::Success, "Student saved".to_string())
        );
    }

    #[test]
    fn success_without_message_uses_fallback() {
        let outcome = decode_response(r#"{"success": true}"#);
        assert_eq!(
            default_feedback(&outcome),
            (AlertKind::Success, DEFAULT_SUCCESS_MESSAGE.to_string())
        );
    }

    #[test]
    fn rejection_keeps_server_message() {
        let outcome = decode_response(r#"{"success": false, "message": "Class is full"}"#);
        assert_eq!(
            outcome,
            Err(SubmitError::Rejected {
                message: Some("Class is full".to_string())
            })
        );
        assert_eq!(
            default_feedback(&outcome),
            (AlertKind::Danger, "Class is full".to_string())
        );
    }

    #[test]
    fn missing_success_flag_counts_as_rejection() {
        let outcome = decode_response("{}");
        assert_eq!(
            default_feedback(&outcome),
            (AlertKind::Danger, DEFAULT_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn malformed_body_reports_network_error() {
        let outcome = decode_response("<html>Forbidden</html>");
        assert!(matches!(outcome, Err(SubmitError::Decode { .. })));
        assert_eq!(
            default_feedback(&outcome),
            (AlertKind::Danger, NETWORK_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn transport_failures_share_the_network_alert() {
        let outcome: SubmitOutcome = Err(SubmitError::MissingCsrfToken);
        assert_eq!(default_feedback(&outcome).1, NETWORK_ERROR_MESSAGE);
        let err = SubmitError::Network {
            detail: "Failed to fetch".to_string(),
        };
        assert_eq!(err.message(), "Failed to fetch");
    }
}
