//! The color model abstraction consumed by palettes.
//!
//! A [`Palette`](crate::Palette) never inspects colors directly. It only
//! converts them to and from HSB triples, reads HSL lightness, formats them,
//! and asks for their 24-bit representation when rendering. [`ColorModel`]
//! captures exactly these conversions, and [`Color`] is its canonical
//! implementation.

use crate::core::{clamp_percent, rotate_hue};
use crate::{Color, ColorFormat, ColorSpace, Float};

/// A color representation that converts to and from HSB.
///
/// Implementations must be pure: converting never depends on ambient state,
/// and the same color always yields the same coordinates. HSB and HSL
/// triples use degrees `0..360` for hue and percentages `0..=100` for the
/// other two coordinates.
pub trait ColorModel: Clone {
    /// Convert this color to hue, saturation, and brightness.
    fn to_hsb(&self) -> [Float; 3];

    /// Create a color from hue, saturation, and brightness.
    ///
    /// Implementations should accept any hue and wrap it into `0..360`, while
    /// saturation and brightness should be clamped to `0..=100`.
    fn from_hsb(hsb: [Float; 3]) -> Self;

    /// Convert this color to hue, saturation, and lightness.
    fn to_hsl(&self) -> [Float; 3];

    /// Convert this color to 24-bit sRGB.
    fn to_24bit(&self) -> [u8; 3];

    /// Format this color according to the given format.
    fn format(&self, format: ColorFormat) -> String;
}

impl ColorModel for Color {
    fn to_hsb(&self) -> [Float; 3] {
        *self.to(ColorSpace::Hsb).as_ref()
    }

    fn from_hsb(hsb: [Float; 3]) -> Self {
        let [h, s, b] = hsb;
        Color::hsb(rotate_hue(h, 0.0), clamp_percent(s), clamp_percent(b))
    }

    fn to_hsl(&self) -> [Float; 3] {
        *self.to(ColorSpace::Hsl).as_ref()
    }

    fn to_24bit(&self) -> [u8; 3] {
        Color::to_24bit(self)
    }

    fn format(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::HashedHex => self.to_hex_format(),
            ColorFormat::ShortHex => {
                // Round to the nearest multiple of 0x11.
                let [r, g, b] = Color::to_24bit(self).map(|c| (c as u16 + 8) / 17);
                format!("#{:x}{:x}{:x}", r, g, b)
            }
            ColorFormat::Rgb => {
                let [r, g, b] = Color::to_24bit(self);
                format!("rgb({} {} {})", r, g, b)
            }
            ColorFormat::Hsb => self.to(ColorSpace::Hsb).to_string(),
            ColorFormat::Hsl => self.to(ColorSpace::Hsl).to_string(),
        }
    }
}
