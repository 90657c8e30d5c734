//! sRGB helpers for deriving palette shades and readable text colors.

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const WHITE: Rgb = Rgb::from_hex(0xffffff);

/// Text color on dark backgrounds.
pub const TEXT_ON_DARK: &str = "#fff";
/// Text color on light backgrounds.
pub const TEXT_ON_LIGHT: &str = "rgba(0, 0, 0, 0.87)";

impl Rgb {
    /// `0xRRGGBB`
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        // Channels are truncated, not rounded.
        let channel = |c: u8| f(c as f64).clamp(0.0, 255.0) as u8;
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// WCAG 2.0 relative luminance, rounded to 3 decimals.
pub fn relative_luminance(color: Rgb) -> f64 {
    let linear = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    let l = 0.2126 * linear(color.r) + 0.7152 * linear(color.g) + 0.0722 * linear(color.b);
    (l * 1000.0).round() / 1000.0
}

pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

pub fn lighten(color: Rgb, coefficient: f64) -> Rgb {
    let k = coefficient.clamp(0.0, 1.0);
    color.map(|c| c + (255.0 - c) * k)
}

pub fn darken(color: Rgb, coefficient: f64) -> Rgb {
    let k = coefficient.clamp(0.0, 1.0);
    color.map(|c| c * (1.0 - k))
}

/// White text when it reaches `threshold` contrast against `background`.
pub fn contrast_text(background: Rgb, threshold: f64) -> &'static str {
    if contrast_ratio(background, WHITE) >= threshold {
        TEXT_ON_DARK
    } else {
        TEXT_ON_LIGHT
    }
}
