//! Alert banner styling, placement and expiry rules.

/// Element id of the alerts container.
pub const ALERTS_CONTAINER_ID: &str = "alerts-container";
/// Class given to a freshly created alerts container.
pub const ALERTS_CONTAINER_CLASS: &str = "alerts-container";
/// Preferred parent of the alerts container.
pub const MAIN_CONTENT_SELECTOR: &str = ".main-content";
/// Fallback parent of the alerts container.
pub const CONTAINER_FLUID_SELECTOR: &str = ".container-fluid";
/// Selector of any alert banner on the page.
pub const ALERT_SELECTOR: &str = ".alert";
/// Selector of an alert's close button.
pub const CLOSE_BUTTON_SELECTOR: &str = ".btn-close";
/// Attribute marking banners created at runtime; the page-load sweep leaves them alone.
pub const MANAGED_ALERT_ATTR: &str = "data-alert-managed";

/// Alert severity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Danger,
    /// Needs attention.
    Warning,
    /// Neutral notice.
    #[default]
    Info,
}

impl AlertKind {
    /// Parse a severity name; unknown names map to [`AlertKind::Info`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            "danger" => Self::Danger,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    /// Severity name used in the `alert-*` class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Icon classes rendered before the message.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Danger => "fas fa-exclamation-circle",
            Self::Warning => "fas fa-exclamation-triangle",
            Self::Info => "fas fa-info-circle",
        }
    }

    /// Full class list for the banner element.
    #[must_use]
    pub fn banner_class(self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.as_str())
    }
}

/// Where the alerts container gets inserted when it does not exist yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerAnchor {
    /// First child of `.main-content`.
    MainContent,
    /// First child of `.container-fluid`.
    ContainerFluid,
    /// First child of `body`.
    Body,
}

impl ContainerAnchor {
    /// Pick the anchor from which candidate regions exist on the page.
    #[must_use]
    pub const fn choose(has_main_content: bool, has_container_fluid: bool) -> Self {
        if has_main_content {
            Self::MainContent
        } else if has_container_fluid {
            Self::ContainerFluid
        } else {
            Self::Body
        }
    }

    /// Selector for the anchor, `None` for the body.
    #[must_use]
    pub const fn selector(self) -> Option<&'static str> {
        match self {
            Self::MainContent => Some(MAIN_CONTENT_SELECTOR),
            Self::ContainerFluid => Some(CONTAINER_FLUID_SELECTOR),
            Self::Body => None,
        }
    }
}

/// Auto-dismiss delay for a requested duration; zero or negative keeps the alert.
#[must_use]
pub fn dismiss_after(duration_ms: i64) -> Option<u32> {
    if duration_ms <= 0 {
        None
    } else {
        Some(u32::try_from(duration_ms).unwrap_or(u32::MAX))
    }
}

/// A banner request after defaults have been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertRequest {
    /// Text shown in the banner.
    pub message: String,
    /// Severity.
    pub kind: AlertKind,
    /// Auto-dismiss delay in milliseconds.
    pub dismiss_after_ms: Option<u32>,
}

impl AlertRequest {
    /// Build a request, falling back to `default_duration_ms` when no duration is given.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        kind: AlertKind,
        duration_ms: Option<i64>,
        default_duration_ms: u32,
    ) -> Self {
        let duration_ms = duration_ms.unwrap_or_else(|| i64::from(default_duration_ms));
        Self {
            message: message.into(),
            kind,
            dismiss_after_ms: dismiss_after(duration_ms),
        }
    }

    /// Whether the banner is gone at `elapsed_ms` after being shown.
    #[must_use]
    pub fn expired_at(&self, elapsed_ms: u32) -> bool {
        self.dismiss_after_ms.is_some_and(|delay| elapsed_ms >= delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_severity_falls_back_to_info() {
        assert_eq!(AlertKind::parse("fatal"), AlertKind::Info);
        assert_eq!(AlertKind::parse("danger"), AlertKind::Danger);
        assert_eq!(AlertKind::default(), AlertKind::Info);
    }

    #[test]
    fn banner_class_and_icon_follow_severity() {
        assert_eq!(
            AlertKind::Warning.banner_class(),
            "alert alert-warning alert-dismissible fade show"
        );
        assert_eq!(AlertKind::Success.icon_class(), "fas fa-check-circle");
        assert_eq!(AlertKind::Info.icon_class(), "fas fa-info-circle");
    }

    #[test]
    fn zero_duration_never_expires() {
        let request = AlertRequest::new("X", AlertKind::Success, Some(0), 5000);
        assert_eq!(request.dismiss_after_ms, None);
        assert!(!request.expired_at(u32::MAX));
    }

    #[test]
    fn positive_duration_expires_after_delay_not_before() {
        let request = AlertRequest::new("X", AlertKind::Info, Some(100), 5000);
        assert_eq!(request.dismiss_after_ms, Some(100));
        assert!(!request.expired_at(99));
        assert!(request.expired_at(100));
    }

    #[test]
    fn missing_arguments_use_defaults() {
        let request = AlertRequest::new("Saved", AlertKind::parse("notice"), None, 5000);
        assert_eq!(request.kind, AlertKind::Info);
        assert_eq!(request.dismiss_after_ms, Some(5000));
        assert_eq!(dismiss_after(-1), None);
    }

    #[test]
    fn anchor_prefers_main_content() {
        assert_eq!(
            ContainerAnchor::choose(true, true),
            ContainerAnchor::MainContent
        );
        assert_eq!(
            ContainerAnchor::choose(false, true),
            ContainerAnchor::ContainerFluid
        );
        assert_eq!(ContainerAnchor::choose(false, false), ContainerAnchor::Body);
        assert_eq!(ContainerAnchor::Body.selector(), None);
    }
}
