//! Toast color themes

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ColorParseError;

/// Theme used when the current theme has no entry
pub const DEFAULT_THEME: &str = "theme-default";

/// Fixed dark surface used when no theme map resolves
pub const FALLBACK_SURFACE: Rgb = Rgb(0x1f, 0x29, 0x37);

/// Fixed text color used when no theme map resolves
pub const FALLBACK_TEXT: Rgb = Rgb(0xff, 0xff, 0xff);

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// One entry of the theme map, as written in the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEntry {
    pub surface_dark: String,
    pub text_main: String,
}

/// Theme name to colors
pub type ThemeMap = BTreeMap<String, ThemeEntry>;

/// Resolved toast colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl ThemeColors {
    /// Resolve colors for `current` from `themes`.
    ///
    /// Both a map and a current theme are needed to leave the fixed dark
    /// colors. An unknown current theme falls back to `theme-default`.
    /// Entries whose colors do not parse are treated as missing.
    pub fn resolve(themes: Option<&ThemeMap>, current: Option<&str>) -> Self {
        let (Some(themes), Some(current)) = (themes, current) else {
            return Self::default();
        };

        let name = if themes.contains_key(current) {
            current
        } else {
            DEFAULT_THEME
        };

        themes
            .get(name)
            .and_then(|entry| {
                Some(Self {
                    background: entry.surface_dark.parse().ok()?,
                    foreground: entry.text_main.parse().ok()?,
                })
            })
            .unwrap_or_default()
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: FALLBACK_SURFACE,
            foreground: FALLBACK_TEXT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn themes() -> ThemeMap {
        let mut map = ThemeMap::new();
        map.insert(
            DEFAULT_THEME.to_string(),
            ThemeEntry {
                surface_dark: "#111827".to_string(),
                text_main: "#f9fafb".to_string(),
            },
        );
        map.insert(
            "theme-forest".to_string(),
            ThemeEntry {
                surface_dark: "#14532d".to_string(),
                text_main: "#ecfdf5".to_string(),
            },
        );
        map
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!("#1f2937".parse::<Rgb>().unwrap(), FALLBACK_SURFACE);
        assert_eq!("#FFFFFF".parse::<Rgb>().unwrap(), FALLBACK_TEXT);
        assert!("1f2937".parse::<Rgb>().is_err());
        assert!("#1f29".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
    }

    #[test]
    fn displays_hex() {
        assert_eq!(FALLBACK_SURFACE.to_string(), "#1f2937");
    }

    #[test]
    fn no_map_uses_fixed_dark_theme() {
        assert_eq!(ThemeColors::resolve(None, Some("theme-forest")), ThemeColors::default());
        assert_eq!(ThemeColors::resolve(Some(&themes()), None), ThemeColors::default());
    }

    #[test]
    fn current_theme_is_used_when_known() {
        let colors = ThemeColors::resolve(Some(&themes()), Some("theme-forest"));
        assert_eq!(colors.background, Rgb(0x14, 0x53, 0x2d));
        assert_eq!(colors.foreground, Rgb(0xec, 0xfd, 0xf5));
    }

    #[test]
    fn unknown_theme_falls_back_to_default_entry() {
        let colors = ThemeColors::resolve(Some(&themes()), Some("theme-sunset"));
        assert_eq!(colors.background, Rgb(0x11, 0x18, 0x27));
    }

    #[test]
    fn missing_default_entry_uses_fixed_dark_theme() {
        let mut map = themes();
        map.remove(DEFAULT_THEME);
        let colors = ThemeColors::resolve(Some(&map), Some("theme-ocean"));
        assert_eq!(colors, ThemeColors::default());
    }

    #[test]
    fn unparsable_entry_uses_fixed_dark_theme() {
        let mut map = ThemeMap::new();
        map.insert(
            "theme-blue".to_string(),
            ThemeEntry {
                surface_dark: "navy".to_string(),
                text_main: "#ffffff".to_string(),
            },
        );
        assert_eq!(
            ThemeColors::resolve(Some(&map), Some("theme-blue")),
            ThemeColors::default()
        );
    }
}
