use std::str::FromStr;

use crate::core::{
    clamp_percent, convert, format, from_24bit, parse, rotate_hue, to_24bit, to_eq_coordinates,
    ColorSpace,
};
use crate::Float;

/// Create a new sRGB color from 24-bit integer coordinates.
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer coordinates. However, it also is safe to use in const expressions.
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new(
            $crate::ColorSpace::Srgb,
            [
                $r as $crate::Float / 255.0,
                $g as $crate::Float / 255.0,
                $b as $crate::Float / 255.0,
            ],
        )
    };
}

/// A color object.
///
/// Every color object has a [color space](ColorSpace) and three coordinates.
/// Color objects are immutable values: every transformation returns a new
/// color.
///
/// # Color Coordinates
///
/// For sRGB, the coordinates of in-gamut colors have unit range. For HSB and
/// HSL, the hue is measured in degrees and the other two coordinates are
/// percentages `0..=100`. The hue may have any magnitude, though `0..360` is
/// preferred, and all methods producing hues produce hues in that range.
///
/// ## Equality Testing and Hashing
///
/// Equal colors must have equal hashes. Hence this class performs the
/// following steps to prepare coordinates for either operation:
///
///   * To turn coordinates into comparable entities, replace not-a-numbers with
///     positive zero;
///   * To preserve rotation semantics for hues, remove all full rotations;
///   * To prepare for rounding, scale down all HSB and HSL coordinates to unit
///     range;
///   * To allow for floating point error, multiply by 1e12 and then round;
///   * To make zeros comparable, replace negative zero with positive zero;
///   * To convince Rust that coordinates are comparable, convert to bits.
///
/// Colors in different color spaces are never equal, even if they describe
/// the same sRGB color. Convert with [`Color::to`] first.
#[derive(Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
}

impl Color {
    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// ```
    /// # use prettypalette::{Color, ColorSpace};
    /// let gold = Color::new(ColorSpace::Hsb, [51.0, 100.0, 100.0]);
    /// assert_eq!(gold.as_ref(), &[51.0, 100.0, 100.0]);
    /// ```
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates.
    #[inline]
    pub const fn srgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(ColorSpace::Srgb, [r, g, b])
    }

    /// Instantiate a new HSB color with the given hue, saturation, and
    /// brightness.
    ///
    /// ```
    /// # use prettypalette::{Color, ColorSpace};
    /// let yellow = Color::hsb(60.0, 100.0, 100.0);
    /// assert_eq!(yellow.space(), ColorSpace::Hsb);
    /// assert_eq!(yellow.to_hex_format(), "#ffff00");
    /// ```
    #[inline]
    pub const fn hsb(h: Float, s: Float, b: Float) -> Self {
        Self::new(ColorSpace::Hsb, [h, s, b])
    }

    /// Instantiate a new HSL color with the given hue, saturation, and
    /// lightness.
    #[inline]
    pub const fn hsl(h: Float, s: Float, l: Float) -> Self {
        Self::new(ColorSpace::Hsl, [h, s, l])
    }

    /// Instantiate a new sRGB color from its 24-bit representation.
    ///
    /// This function returns a new sRGB color with the given red, green, and
    /// blue coordinates scaled by 1/255. The [`rgb`] macro does the same thing
    /// but is safe to use inside const expressions.
    ///
    /// ```
    /// # use prettypalette::Color;
    /// let tangerine = Color::from_24bit(0xff, 0x93, 0x00);
    /// assert_eq!(tangerine, Color::srgb(1.0, 0.5764705882352941, 0.0));
    /// ```
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Convert this color to the target color space.
    ///
    /// ```
    /// # use prettypalette::{Color, ColorSpace};
    /// let navy = Color::from_24bit(0x33, 0x66, 0xcc);
    /// assert_eq!(navy.to(ColorSpace::Hsb), Color::hsb(220.0, 75.0, 80.0));
    /// assert_eq!(navy.to(ColorSpace::Hsl), Color::hsl(220.0, 60.0, 50.0));
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self::new(target, convert(self.space, target, &self.coordinates))
    }

    /// Get the hue in degrees `0..360`.
    pub fn hue(&self) -> Float {
        match self.space {
            ColorSpace::Srgb => self.to(ColorSpace::Hsb).coordinates[0],
            _ => rotate_hue(self.coordinates[0], 0.0),
        }
    }

    /// Get the HSB saturation as a percentage.
    pub fn saturation(&self) -> Float {
        self.to(ColorSpace::Hsb).coordinates[1]
    }

    /// Get the HSB brightness as a percentage.
    pub fn brightness(&self) -> Float {
        self.to(ColorSpace::Hsb).coordinates[2]
    }

    /// Get the HSL lightness as a percentage.
    pub fn lightness(&self) -> Float {
        self.to(ColorSpace::Hsl).coordinates[2]
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Rotate this color's hue by the given number of degrees.
    ///
    /// This method converts the color to HSB, if necessary, and returns an HSB
    /// color whose hue falls into `0..360`. Saturation and brightness are
    /// unchanged.
    ///
    /// ```
    /// # use prettypalette::Color;
    /// let red = Color::hsb(0.0, 80.0, 90.0);
    /// assert_eq!(red.rotate_hue(-30.0), Color::hsb(330.0, 80.0, 90.0));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn rotate_hue(&self, degrees: Float) -> Self {
        let [h, s, b] = convert(self.space, ColorSpace::Hsb, &self.coordinates);
        Self::hsb(rotate_hue(h, degrees), s, b)
    }

    /// Scale this color's HSB saturation and brightness by the given factors.
    ///
    /// The resulting saturation and brightness are clamped to `0..=100`.
    ///
    /// ```
    /// # use prettypalette::Color;
    /// let olive = Color::hsb(60.0, 50.0, 95.0);
    /// assert_eq!(olive.scale(0.9, 1.1), Color::hsb(60.0, 45.0, 100.0));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn scale(&self, saturation: Float, brightness: Float) -> Self {
        let [h, s, b] = convert(self.space, ColorSpace::Hsb, &self.coordinates);
        Self::hsb(h, clamp_percent(s * saturation), clamp_percent(b * brightness))
    }

    /// Interpolate between this and the other color in sRGB.
    ///
    /// The fraction is clamped to `0..=1`, with 0 returning this color and 1
    /// returning the other color, both converted to sRGB.
    ///
    /// ```
    /// # use prettypalette::Color;
    /// let black = Color::srgb(0.0, 0.0, 0.0);
    /// let white = Color::srgb(1.0, 1.0, 1.0);
    /// assert_eq!(black.interpolate(&white, 0.5), Color::srgb(0.5, 0.5, 0.5));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn interpolate(&self, other: &Self, fraction: Float) -> Self {
        let fraction = fraction.clamp(0.0, 1.0);
        let start = convert(self.space, ColorSpace::Srgb, &self.coordinates);
        let end = convert(other.space, ColorSpace::Srgb, &other.coordinates);

        let mix = |index: usize| (end[index] - start[index]).mul_add(fraction, start[index]);
        Self::srgb(mix(0), mix(1), mix(2))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to 24-bit RGB representation.
    ///
    /// This method converts the color to sRGB before clamping each coordinate
    /// to unit range and scaling it to a `u8`.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(self.space, &self.coordinates)
    }

    /// Format this color in familiar `#123abc` hashed hexadecimal representation.
    #[inline]
    pub fn to_hex_format(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Default for Color {
    /// Create an instance of the default color, sRGB black.
    #[inline]
    fn default() -> Self {
        Self::srgb(0.0, 0.0, 0.0)
    }
}

impl FromStr for Color {
    type Err = crate::error::ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower case.
    /// That makes parsing effectively case-insensitive.
    ///
    /// This method recognizes the *hashed notation* with three or six
    /// hexadecimal digits, e.g., `#123` or `#cafe00`, the *XParseColor
    /// notation* with one to four hexadecimal digits per coordinate, e.g.,
    /// `rgb:1/00/cafe`, and the *functional notation* `rgb(255 128 0)`,
    /// `hsb(60 100 100)` (or `hsv()`), `hsl(60 100 50)`, as well as `color(srgb
    /// 1 0.5 0)`. Functional coordinates may be separated by white space or
    /// commas.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prettypalette::{Color, ColorSpace};
    /// # use prettypalette::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("#011480")?;
    /// assert_eq!(navy, Color::from_24bit(0x01, 0x14, 0x80));
    ///
    /// let lemon: Color = str::parse("hsb(60, 100, 100)")?;
    /// assert_eq!(lemon, Color::hsb(60.0, 100.0, 100.0));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|(space, coordinates)| Self::new(space, coordinates))
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);

        let [n1, n2, n3] = to_eq_coordinates(self.space, &self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// ```
    /// # use prettypalette::{Color, Float};
    /// assert_eq!(Color::hsb(420.0, 50.0, 50.0), Color::hsb(60.0, 50.0, 50.0));
    /// assert_eq!(Color::hsb(Float::NAN, 0.0, 50.0), Color::hsb(0.0, 0.0, 50.0));
    /// assert_ne!(Color::hsb(60.0, 100.0, 100.0), Color::srgb(1.0, 1.0, 0.0));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.space != other.space {
            return false;
        } else if self.coordinates == other.coordinates {
            return true;
        }

        let n1 = to_eq_coordinates(self.space, &self.coordinates);
        let n2 = to_eq_coordinates(other.space, &other.coordinates);
        n1 == n2
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}])",
            self.space, c1, c2, c3
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color in functional notation, using `color(srgb
    /// ...)`, `hsb()`, or `hsl()`, depending on the color space. It respects
    /// the formatter's precision, defaulting to 5 digits past the decimal for
    /// sRGB and 3 digits for the percentage-based color spaces.
    ///
    /// ```
    /// # use prettypalette::{Color, ColorSpace};
    /// # use prettypalette::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let lime = Color::from_str("#a1d2ae")?;
    /// assert_eq!(format!("{}", lime), "color(srgb 0.63137 0.82353 0.68235)");
    /// assert_eq!(format!("{:.3}", lime), "color(srgb 0.631 0.824 0.682)");
    /// assert_eq!(format!("{}", lime.to(ColorSpace::Hsb)), "hsb(135.918 23.333 82.353)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.space, &self.coordinates, f)
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    /// Serialize this color as its [`Display`](std::fmt::Display) string.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    /// Deserialize a color from any string [`Color::from_str`] accepts.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

// ====================================================================================================================
