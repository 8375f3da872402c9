//! Sidebar visibility rules.

/// Element id of the sidebar.
pub const SIDEBAR_ID: &str = "sidebar";
/// Selector of the control that toggles the sidebar.
pub const SIDEBAR_TOGGLE_SELECTOR: &str = ".navbar-toggler";
/// Class marking the sidebar as shown.
pub const SIDEBAR_SHOW_CLASS: &str = "show";

/// Where a document click landed relative to the sidebar controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickTarget {
    /// Click landed inside the sidebar.
    pub in_sidebar: bool,
    /// Click landed inside the toggle control.
    pub in_toggle: bool,
}

/// Whether a document click should close the sidebar.
#[must_use]
pub const fn closes_on_click(shown: bool, target: ClickTarget) -> bool {
    shown && !target.in_sidebar && !target.in_toggle
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTSIDE: ClickTarget = ClickTarget {
        in_sidebar: false,
        in_toggle: false,
    };

    #[test]
    fn outside_click_closes_shown_sidebar() {
        assert!(closes_on_click(true, OUTSIDE));
    }

    #[test]
    fn hidden_sidebar_ignores_clicks() {
        assert!(!closes_on_click(false, OUTSIDE));
    }

    #[test]
    fn clicks_on_sidebar_or_toggle_keep_it_open() {
        assert!(!closes_on_click(
            true,
            ClickTarget {
                in_sidebar: true,
                in_toggle: false,
            }
        ));
        assert!(!closes_on_click(
            true,
            ClickTarget {
                in_sidebar: false,
                in_toggle: true,
            }
        ));
    }
}
