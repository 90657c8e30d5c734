//! Static application theme.
//!
//! The palette is derived once from a small configuration (two main colors,
//! contrast threshold and tonal offset) and handed to the component tree through
//! context. It never changes after startup.

pub mod color;

use color::{contrast_text, darken, lighten, Rgb};
use leptos::prelude::*;

/// Base spacing unit in pixels.
pub const SPACING_UNIT: u32 = 8;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PaletteConfig {
    pub primary: Rgb,
    pub secondary: Rgb,
    /// Minimum contrast ratio for white text on a main color.
    pub contrast_threshold: f64,
    /// Shift used for the light (`x1`) and dark (`x1.5`) shades.
    pub tonal_offset: f64,
}

pub const NC_PALETTE: PaletteConfig = PaletteConfig {
    primary: Rgb::from_hex(0xffccfa),
    secondary: Rgb::from_hex(0xcb8feb),
    contrast_threshold: 3.0,
    tonal_offset: 0.2,
};

/// A main color with its derived shades.
#[derive(Clone, PartialEq, Debug)]
pub struct PaletteColor {
    pub main: Rgb,
    pub light: Rgb,
    pub dark: Rgb,
    pub contrast_text: &'static str,
}

impl PaletteColor {
    pub fn augment(main: Rgb, config: &PaletteConfig) -> Self {
        Self {
            main,
            light: lighten(main, config.tonal_offset),
            dark: darken(main, config.tonal_offset * 1.5),
            contrast_text: contrast_text(main, config.contrast_threshold),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Theme {
    pub config: PaletteConfig,
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
}

impl Theme {
    pub fn new(config: PaletteConfig) -> Self {
        Self {
            primary: PaletteColor::augment(config.primary, &config),
            secondary: PaletteColor::augment(config.secondary, &config),
            config,
        }
    }

    pub fn nc_default() -> Self {
        Self::new(NC_PALETTE)
    }

    /// `spacing(&[3, 2])` -> `"24px 16px"`
    pub fn spacing(&self, factors: &[u32]) -> String {
        factors
            .iter()
            .map(|f| format!("{}px", f * SPACING_UNIT))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Inline style exposing the palette as CSS custom properties.
    ///
    /// The `--color*` entries override the thaw brand tokens for everything
    /// below the element carrying this style.
    pub fn css_vars(&self) -> String {
        let p = &self.primary;
        let s = &self.secondary;
        [
            ("--app-primary-main", p.main.to_string()),
            ("--app-primary-light", p.light.to_string()),
            ("--app-primary-dark", p.dark.to_string()),
            ("--app-primary-contrast-text", p.contrast_text.to_string()),
            ("--app-secondary-main", s.main.to_string()),
            ("--app-secondary-light", s.light.to_string()),
            ("--app-secondary-dark", s.dark.to_string()),
            ("--app-secondary-contrast-text", s.contrast_text.to_string()),
            ("--colorBrandBackground", p.main.to_string()),
            ("--colorBrandBackgroundHover", p.light.to_string()),
            ("--colorBrandBackgroundPressed", p.dark.to_string()),
            ("--colorBrandForeground1", s.dark.to_string()),
            ("--colorCompoundBrandStroke", s.main.to_string()),
            ("--colorNeutralForegroundOnBrand", p.contrast_text.to_string()),
        ]
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Provides the theme to children components.
#[component]
pub fn ThemeProvider(theme: Theme, children: Children) -> impl IntoView {
    log::debug!(
        "theme: primary {} / secondary {}",
        theme.primary.main,
        theme.secondary.main
    );
    provide_context(theme);
    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> Theme {
    use_context::<Theme>().expect("Theme not found. Wrap your app with ThemeProvider.")
}
