use serde::{Deserialize, Serialize};

/// Color schemes available for the generated HTML, drawn from syntect's
/// bundled themes. The default leans light since the output page has a
/// white background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorScheme {
    #[default]
    InspiredGitHub,
    SolarizedLight,
    SolarizedDark,
    Base16OceanLight,
    Base16OceanDark,
}

impl ColorScheme {
    /// Get the syntect theme key for this scheme
    pub fn theme_key(&self) -> &'static str {
        match self {
            Self::InspiredGitHub => "InspiredGitHub",
            Self::SolarizedLight => "Solarized (light)",
            Self::SolarizedDark => "Solarized (dark)",
            Self::Base16OceanLight => "base16-ocean.light",
            Self::Base16OceanDark => "base16-ocean.dark",
        }
    }

    /// Get the display name shown in the scheme selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::InspiredGitHub => "Inspired GitHub",
            Self::SolarizedLight => "Solarized Light",
            Self::SolarizedDark => "Solarized Dark",
            Self::Base16OceanLight => "Base16 Ocean Light",
            Self::Base16OceanDark => "Base16 Ocean Dark",
        }
    }

    /// Get all available schemes, in selector order
    pub fn all() -> &'static [ColorScheme] {
        &[
            Self::InspiredGitHub,
            Self::SolarizedLight,
            Self::SolarizedDark,
            Self::Base16OceanLight,
            Self::Base16OceanDark,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntect::highlighting::ThemeSet;

    #[test]
    fn test_every_scheme_key_exists_in_default_themes() {
        let theme_set = ThemeSet::load_defaults();
        for scheme in ColorScheme::all() {
            assert!(
                theme_set.themes.contains_key(scheme.theme_key()),
                "missing theme {}",
                scheme.theme_key()
            );
        }
    }

    #[test]
    fn test_default_scheme() {
        assert_eq!(ColorScheme::default(), ColorScheme::InspiredGitHub);
    }

    #[test]
    fn test_display_names_are_unique() {
        let names: Vec<_> = ColorScheme::all().iter().map(|s| s.display_name()).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }
}
