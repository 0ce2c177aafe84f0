//! # Language & Theme
//!
//! UI language and color theme are plain values owned by the caller. A
//! renderer receives a [`Preferences`] and looks strings up in the
//! [`Dictionary`] for its language.
//!
//! ## Example
//!
//! ```rust
//! use gauge_core::i18n::{Language, Preferences, Theme};
//!
//! let mut prefs = Preferences::default();
//! assert_eq!(prefs.dictionary().nav_news, "News");
//!
//! prefs.toggle_language();
//! prefs.toggle_theme();
//! assert_eq!(prefs.language, Language::Ro);
//! assert_eq!(prefs.theme, Theme::Dark);
//! assert_eq!(prefs.dictionary().nav_news, "Noutăți");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ro,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ro];

    /// Two-letter code ("en", "ro")
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ro => "ro",
        }
    }

    /// Open Graph style locale
    pub fn locale(&self) -> &'static str {
        match self {
            Language::En => "en_US",
            Language::Ro => "ro_RO",
        }
    }

    pub fn parse(code: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    /// The other language
    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::Ro,
            Language::Ro => Language::En,
        }
    }

    pub fn dictionary(&self) -> &'static Dictionary {
        match self {
            Language::En => &EN,
            Language::Ro => &RO,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(name: &str) -> Option<Theme> {
        [Theme::Light, Theme::Dark]
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-visitor display state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

impl Preferences {
    pub fn new(language: Language, theme: Theme) -> Self {
        Preferences { language, theme }
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn dictionary(&self) -> &'static Dictionary {
        self.language.dictionary()
    }

    /// Label for the control that switches to the other theme
    pub fn theme_toggle_label(&self) -> &'static str {
        let dict = self.dictionary();
        match self.theme {
            Theme::Light => dict.theme_dark,
            Theme::Dark => dict.theme_light,
        }
    }
}

// ============================================================================
// Dictionaries
// ============================================================================

/// UI strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dictionary {
    pub nav_home: &'static str,
    pub nav_calculators: &'static str,
    pub nav_news: &'static str,
    pub nav_about: &'static str,
    pub nav_contact: &'static str,

    pub catalog_title: &'static str,
    /// Followed by the result count
    pub catalog_results: &'static str,
    /// Tag filter entry meaning "every tag"
    pub catalog_all: &'static str,
    pub catalog_empty: &'static str,
    pub related_calculators: &'static str,

    pub news_title: &'static str,
    pub news_search: &'static str,
    pub news_empty: &'static str,
    pub news_latest: &'static str,
    pub news_related: &'static str,
    pub news_contents: &'static str,
    pub news_page: &'static str,

    pub search_placeholder: &'static str,

    pub not_found_title: &'static str,
    pub not_found_message: &'static str,

    /// Names the language the toggle switches to
    pub language_toggle: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
}

pub static EN: Dictionary = Dictionary {
    nav_home: "Home",
    nav_calculators: "Calculators",
    nav_news: "News",
    nav_about: "About",
    nav_contact: "Contact",

    catalog_title: "Health calculators",
    catalog_results: "Results",
    catalog_all: "All",
    catalog_empty: "No calculators match your search.",
    related_calculators: "Related calculators",

    news_title: "Newsroom",
    news_search: "Search articles",
    news_empty: "No articles match your filters.",
    news_latest: "Latest articles",
    news_related: "Related articles",
    news_contents: "Contents",
    news_page: "Page",

    search_placeholder: "Search calculators...",

    not_found_title: "Page not found",
    not_found_message: "The page you are looking for does not exist.",

    language_toggle: "Română",
    theme_light: "Light mode",
    theme_dark: "Dark mode",
};

pub static RO: Dictionary = Dictionary {
    nav_home: "Acasă",
    nav_calculators: "Calculatoare",
    nav_news: "Noutăți",
    nav_about: "Despre",
    nav_contact: "Contact",

    catalog_title: "Calculatoare de sănătate",
    catalog_results: "Rezultate",
    catalog_all: "Toate",
    catalog_empty: "Niciun calculator nu corespunde căutării.",
    related_calculators: "Calculatoare similare",

    news_title: "Noutăți",
    news_search: "Caută articole",
    news_empty: "Niciun articol nu corespunde filtrelor.",
    news_latest: "Cele mai noi articole",
    news_related: "Articole similare",
    news_contents: "Cuprins",
    news_page: "Pagina",

    search_placeholder: "Caută calculatoare...",

    not_found_title: "Pagina nu a fost găsită",
    not_found_message: "Pagina pe care o cauți nu există.",

    language_toggle: "English",
    theme_light: "Mod luminos",
    theme_dark: "Mod întunecat",
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_language_parse_and_toggle() {
        assert_eq!(Language::parse("RO"), Some(Language::Ro));
        assert_eq!(Language::parse(" en "), Some(Language::En));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!(Theme::parse("Dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_preferences_toggle_independently() {
        let mut prefs = Preferences::default();
        prefs.toggle_theme();
        assert_eq!(prefs, Preferences::new(Language::En, Theme::Dark));
        assert_eq!(prefs.theme_toggle_label(), "Light mode");

        prefs.toggle_language();
        assert_eq!(prefs, Preferences::new(Language::Ro, Theme::Dark));
        assert_eq!(prefs.theme_toggle_label(), "Mod luminos");
    }

    #[test]
    fn test_language_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::Ro).unwrap(), "\"ro\"");
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn test_dictionaries_are_complete() {
        for lang in Language::ALL {
            let dict = serde_json::to_value(lang.dictionary()).unwrap();
            let entries = dict.as_object().unwrap();
            assert!(entries.len() >= 20);
            for (key, value) in entries {
                assert!(!value.as_str().unwrap().is_empty(), "{}.{}", lang, key);
            }
        }
        assert_ne!(EN.nav_news, RO.nav_news);
    }
}
