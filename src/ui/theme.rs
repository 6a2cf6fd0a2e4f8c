use std::fs;
use std::str::FromStr;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

/// Foreground and background color applied together by every draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

impl ColorPair {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}

const DEFAULT_SHADOW: ColorPair = ColorPair::new(Color::DarkGray, Color::Black);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub normal: ColorPair,
    pub selected: ColorPair,
    pub disabled: ColorPair,
    /// Only dialogs paint with this.
    pub shadow: ColorPair,
}

/// The three palettes a setup screen is painted with, resolved once from a
/// [`Theme`] and then passed by reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palettes {
    pub screen: Palette,
    pub header: Palette,
    pub dialog: Palette,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub screen: PaletteColors,
    pub header: PaletteColors,
    pub dialog: PaletteColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaletteColors {
    pub normal: PairColors,
    pub selected: PairColors,
    #[serde(default)]
    pub disabled: Option<PairColors>,
    #[serde(default)]
    pub shadow: Option<PairColors>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PairColors {
    pub fg: String,
    pub bg: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("biosmenu")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(theme) = toml::from_str::<Theme>(&content) {
                    return Some(theme);
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }

    pub fn named(name: &str) -> Result<Self> {
        Self::load(name).ok_or_else(|| Error::ThemeNotFound(name.to_string()))
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }

    pub fn palettes(&self) -> Palettes {
        Palettes {
            screen: self.screen.palette(),
            header: self.header.palette(),
            dialog: self.dialog.palette(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("aptio").unwrap_or_else(|| Self {
            name: "default".to_string(),
            screen: PaletteColors::new(("blue", "gray"), ("white", "gray"), ("darkgray", "gray")),
            header: PaletteColors::new(("white", "blue"), ("blue", "gray"), ("gray", "blue")),
            dialog: PaletteColors::new(("white", "blue"), ("white", "black"), ("gray", "blue")),
        })
    }
}

impl PaletteColors {
    fn new(normal: (&str, &str), selected: (&str, &str), disabled: (&str, &str)) -> Self {
        Self {
            normal: PairColors::new(normal),
            selected: PairColors::new(selected),
            disabled: Some(PairColors::new(disabled)),
            shadow: None,
        }
    }

    /// Missing `disabled` falls back to `normal`; missing `shadow` is dark
    /// gray on black.
    pub fn palette(&self) -> Palette {
        let normal = self.normal.pair();
        Palette {
            normal,
            selected: self.selected.pair(),
            disabled: self.disabled.as_ref().map_or(normal, PairColors::pair),
            shadow: self.shadow.as_ref().map_or(DEFAULT_SHADOW, PairColors::pair),
        }
    }
}

impl PairColors {
    fn new((fg, bg): (&str, &str)) -> Self {
        Self {
            fg: fg.to_string(),
            bg: bg.to_string(),
        }
    }

    pub fn pair(&self) -> ColorPair {
        ColorPair::new(parse_color(&self.fg), parse_color(&self.bg))
    }
}

/// Accepts `#rrggbb` or any color name ratatui understands (`blue`,
/// `lightblue`, `darkgray`, an ANSI index, ...). Unknown names fall back to
/// the terminal default.
pub fn parse_color(spec: &str) -> Color {
    if let Some(hex) = spec.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        return Color::Reset;
    }
    Color::from_str(spec).unwrap_or(Color::Reset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_themes_parse() {
        let names = Theme::available_themes();
        assert!(names.contains(&"aptio".to_string()));
        for name in names {
            let content = ThemeAssets::get(&format!("{name}.toml")).unwrap();
            let text = std::str::from_utf8(content.data.as_ref()).unwrap();
            toml::from_str::<Theme>(text).unwrap_or_else(|e| panic!("{name}: {e}"));
        }
    }

    #[test]
    fn aptio_palettes_match_classic_colors() {
        let content = ThemeAssets::get("aptio.toml").unwrap();
        let theme: Theme = toml::from_str(std::str::from_utf8(content.data.as_ref()).unwrap()).unwrap();
        let palettes = theme.palettes();
        assert_eq!(palettes.screen.normal, ColorPair::new(Color::Blue, Color::Gray));
        assert_eq!(palettes.header.normal, ColorPair::new(Color::White, Color::Blue));
        assert_eq!(palettes.dialog.shadow, ColorPair::new(Color::DarkGray, Color::Black));
    }

    #[test]
    fn missing_optional_pairs_fall_back() {
        let colors: PaletteColors = toml::from_str(
            r#"
normal = { fg = "white", bg = "blue" }
selected = { fg = "black", bg = "white" }
"#,
        )
        .unwrap();
        let palette = colors.palette();
        assert_eq!(palette.disabled, palette.normal);
        assert_eq!(palette.shadow, DEFAULT_SHADOW);
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let err = Theme::named("no-such-theme-anywhere").unwrap_err();
        assert!(matches!(err, Error::ThemeNotFound(name) if name == "no-such-theme-anywhere"));
    }

    #[test]
    fn parses_hex_and_named_colors() {
        assert_eq!(parse_color("#1e1e2e"), Color::Rgb(0x1e, 0x1e, 0x2e));
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#zzz"), Color::Reset);
        assert_eq!(parse_color("not-a-color"), Color::Reset);
    }
}
