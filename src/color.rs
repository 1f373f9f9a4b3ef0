use palette::{FromColor, Srgb};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?}: expected 6 hex digits")]
    InvalidFormat(String),
}

/// Core color type used throughout the generator.
/// Wraps sRGB u8 components and provides conversions to and from HSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color in HSL form. Hue is in degrees `[0, 360)`, saturation and
/// lightness are percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl std::fmt::Display for Hsl {
    /// Renders as `h, s%, l%` with one decimal, the form used in CSS output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.1}, {:.1}%, {:.1}%",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800`, `FF8800` or `ff8800`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidFormat(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidFormat(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Serialize to lowercase `rrggbb`, without a leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    pub fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Convert to HSL. Achromatic colors get hue 0 and saturation 0.
    pub fn to_hsl(self) -> Hsl {
        let srgb: Srgb<f32> = self.to_srgb_u8().into_format();
        let hsl: palette::Hsl = palette::Hsl::from_color(srgb);
        let lightness = (hsl.lightness * 100.0).clamp(0.0, 100.0);
        if self.is_achromatic() {
            return Hsl::new(0.0, 0.0, lightness);
        }
        Hsl::new(
            normalize_hue(hsl.hue.into_positive_degrees()),
            (hsl.saturation * 100.0).clamp(0.0, 100.0),
            lightness,
        )
    }

    /// Create from HSL. Hue is wrapped into `[0, 360)`, saturation and
    /// lightness are clamped to `[0, 100]`.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let hsl: palette::Hsl = palette::Hsl::new(
            normalize_hue(hsl.hue),
            hsl.saturation.clamp(0.0, 100.0) / 100.0,
            hsl.lightness.clamp(0.0, 100.0) / 100.0,
        );
        Self::from_srgb_f32_clamped(Srgb::from_color(hsl))
    }

    /// Clamp an Srgb<f32> to [0, 1] and convert to Color.
    fn from_srgb_f32_clamped(srgb: Srgb<f32>) -> Self {
        let r = (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b }
    }

    /// Sum of the largest and smallest channel. HSL lightness is exactly
    /// proportional to this, so it orders colors by lightness without floats.
    pub fn lightness_key(self) -> u16 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        u16::from(max) + u16::from(min)
    }

    /// WCAG 2.0 relative luminance.
    ///
    /// Linearizes each sRGB channel, then computes the weighted sum.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// WCAG 2.0 contrast ratio between two colors.
    ///
    /// Returns a value in [1, 21]. Higher means more contrast.
    pub fn contrast_ratio(c1: &Color, c2: &Color) -> f32 {
        let l1 = c1.relative_luminance();
        let l2 = c2.relative_luminance();
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn text_color(self) -> Color {
        let luma =
            (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0;
        if luma < 0.5 {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }
}

fn normalize_hue(degrees: f32) -> f32 {
    let hue = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs, and
    // -0.0 would print as "-0.0"
    if hue >= 360.0 || hue == 0.0 {
        0.0
    } else {
        hue
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
