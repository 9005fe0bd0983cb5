//! Light/dark palette selection. The chosen theme is written to the
//! `data-theme` attribute on the document element, which the stylesheet
//! keys all color variables off.

use web_sys::window;

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// An explicit stored choice always wins; otherwise the operating system
/// preference decides.
pub fn resolve(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
    stored.unwrap_or(if system_prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    })
}

/// Theme to use for this visit.
pub fn initial() -> Theme {
    resolve(stored(), system_prefers_dark())
}

fn stored() -> Option<Theme> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::THEME_STORAGE_KEY).ok())
        .flatten()
        .and_then(|value| Theme::parse(&value))
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Set the attribute the stylesheet reads the palette from.
pub fn apply(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
            log::warn!("failed to set theme attribute: {:?}", err);
        }
    }
}

/// Remember the choice for the next visit. Storage can be unavailable in
/// private browsing; the theme still applies for the current session.
pub fn persist(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
        if let Err(err) = storage.set_item(config::THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("failed to store theme preference: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_preference_wins() {
        assert_eq!(resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(resolve(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn test_system_preference_fills_in() {
        assert_eq!(resolve(None, true), Theme::Dark);
        assert_eq!(resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_parse_accepts_only_known_names() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn test_unknown_stored_value_falls_back_to_system() {
        assert_eq!(resolve(Theme::parse("banana"), true), Theme::Dark);
        assert_eq!(resolve(Theme::parse("banana"), false), Theme::Light);
    }

    #[test]
    fn test_round_trip_through_storage_format() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }
}
