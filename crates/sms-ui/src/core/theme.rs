//! Light/dark theme resolution and persistence rules.
//!
//! # Design
//! - Resolve the effective theme from the stored preference first, then the OS hint.
//! - Persist through a [`PreferenceStore`] so the rules run against local storage in the
//!   browser and an in-memory store in tests.

use crate::core::prefs::PreferenceStore;

/// Root element attribute mirroring the active theme.
pub const THEME_ATTR: &str = "data-bs-theme";
/// Element id of the theme toggle icon.
pub const THEME_ICON_ID: &str = "theme-icon";
/// Media query reporting an OS-level dark preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in the root attribute and in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference; anything but the two known values is ignored.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Interpret the current root attribute value. Only an explicit `dark` counts as dark.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        if value == Some("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon classes shown by the toggle: a moon invites dark mode, a sun invites light mode.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

/// Resolve the effective theme: stored preference, else OS preference, else light.
#[must_use]
pub fn resolve_theme(stored: Option<&str>, prefers_dark: bool) -> ThemeMode {
    if let Some(mode) = stored.and_then(ThemeMode::parse) {
        return mode;
    }
    if prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

/// Flip `current` and persist the new theme under `key`.
pub fn toggle_theme<S: PreferenceStore + ?Sized>(
    store: &mut S,
    key: &str,
    current: ThemeMode,
) -> ThemeMode {
    let next = current.toggled();
    store.save(key, next.as_str());
    next
}

/// Resolve the effective theme from `store` and the OS hint.
#[must_use]
pub fn initial_theme<S: PreferenceStore + ?Sized>(
    store: &S,
    key: &str,
    prefers_dark: bool,
) -> ThemeMode {
    resolve_theme(store.load(key).as_deref(), prefers_dark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prefs::MemoryStore;

    const KEY: &str = "theme";

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn toggling_twice_round_trips_and_persists_each_step() {
        let mut store = MemoryStore::default();
        let first = toggle_theme(&mut store, KEY, ThemeMode::Light);
        assert_eq!(first, ThemeMode::Dark);
        assert_eq!(store.load(KEY).as_deref(), Some("dark"));

        let second = toggle_theme(&mut store, KEY, first);
        assert_eq!(second, ThemeMode::Light);
        assert_eq!(store.load(KEY).as_deref(), Some("light"));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn stored_preference_wins_over_os_hint() {
        let mut store = MemoryStore::default();
        store.save(KEY, "light");
        assert_eq!(initial_theme(&store, KEY, true), ThemeMode::Light);
    }

    #[test]
    fn os_hint_used_without_stored_preference() {
        let store = MemoryStore::default();
        assert_eq!(initial_theme(&store, KEY, true), ThemeMode::Dark);
        assert_eq!(initial_theme(&store, KEY, false), ThemeMode::Light);
    }

    #[test]
    fn unknown_stored_value_falls_through() {
        assert_eq!(resolve_theme(Some("sepia"), true), ThemeMode::Dark);
        assert_eq!(resolve_theme(Some(""), false), ThemeMode::Light);
    }

    #[test]
    fn attribute_only_recognises_dark() {
        assert_eq!(ThemeMode::from_attribute(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_attribute(Some("auto")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_attribute(None), ThemeMode::Light);
    }

    #[test]
    fn icon_tracks_theme() {
        assert_eq!(ThemeMode::Light.icon_class(), "fas fa-moon");
        assert_eq!(ThemeMode::Dark.icon_class(), "fas fa-sun");
    }
}
