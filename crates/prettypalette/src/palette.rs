//! Utility module implementing palettes.
//!
//! A [`Palette`] is an ordered sequence of colors plus a cursor. Its methods
//! fall into two families:
//!
//!   * Harmony getters such as [`Palette::complementary`] or
//!     [`Palette::triadic`] derive a brand-new palette and leave the receiver
//!     untouched.
//!   * Mutators such as [`Palette::add_triadic_colors`], [`Palette::lighten`],
//!     or [`Palette::sort_by_brightness`] replace the receiver's colors.
//!
//! Palettes never shrink. Hence, once the cursor is valid, it stays valid
//! across all mutations, even though it may point to a different color after
//! reordering the palette.
//!
//!
//! # Example
//!
//! ```
//! # use prettypalette::{Color, Palette};
//! # use prettypalette::error::PaletteError;
//! let mut palette = Palette::new(vec![
//!     Color::hsb(60.0, 100.0, 100.0),
//!     Color::hsb(240.0, 100.0, 100.0),
//! ]);
//!
//! palette.reverse();
//! assert_eq!(palette.current()?, &Color::hsb(240.0, 100.0, 100.0));
//!
//! let complementary = palette.complementary();
//! assert_eq!(complementary.to_string(), "#ffff00-#0000ff");
//! # Ok::<(), PaletteError>(())
//! ```

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::{clamp_percent, rotate_hue};
use crate::error::{OutOfBoundsError, PaletteError};
use crate::render::{DrawOptions, Rect, Renderer, Swatch};
use crate::{Color, ColorFormat, ColorModel, Float, Harmony, StringOptions};

/// A palette of colors with a cursor.
///
/// The cursor is an index into the palette. When the palette is empty, the
/// cursor is zero and any attempt to access the current color fails with
/// [`PaletteError::Empty`].
///
/// Two palettes are equal if they have equal colors in the same order. The
/// cursor does not participate in equality testing, and cloning a palette
/// resets the clone's cursor.
#[derive(Debug)]
pub struct Palette<C: ColorModel = Color> {
    colors: Vec<C>,
    cursor: usize,
}

impl<C: ColorModel> Palette<C> {
    /// Create a new palette with the given colors and the cursor at the first
    /// color.
    pub fn new(colors: Vec<C>) -> Self {
        Self { colors, cursor: 0 }
    }

    /// Get the number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Determine whether the palette is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the cursor.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the colors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[C] {
        &self.colors
    }

    /// Get an iterator over the colors.
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.colors.iter()
    }

    /// Get the color at the given index or, if the index is `None`, at the
    /// cursor.
    ///
    /// Index zero is a regular index and returns the first color, not the
    /// current color.
    ///
    /// # Errors
    ///
    /// This method fails with [`PaletteError::Empty`] for empty palettes and
    /// with [`PaletteError::OutOfBounds`] for indices past the last color.
    ///
    /// ```
    /// # use prettypalette::{Color, Palette};
    /// # use prettypalette::error::PaletteError;
    /// let mut palette: Palette = "#000-#fff".parse()?;
    /// palette.next()?;
    /// assert_eq!(palette.get(Some(0))?.to_hex_format(), "#000000");
    /// assert_eq!(palette.get(None)?.to_hex_format(), "#ffffff");
    /// assert!(palette.get(Some(2)).is_err());
    /// # Ok::<(), PaletteError>(())
    /// ```
    pub fn get(&self, index: Option<usize>) -> Result<&C, PaletteError> {
        if self.colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        let index = index.unwrap_or(self.cursor);
        self.colors
            .get(index)
            .ok_or_else(|| OutOfBoundsError::new(index, 0..self.colors.len()).into())
    }

    /// Get the color at the cursor.
    ///
    /// # Errors
    ///
    /// This method fails with [`PaletteError::Empty`] for empty palettes.
    pub fn current(&self) -> Result<&C, PaletteError> {
        self.colors.get(self.cursor).ok_or(PaletteError::Empty)
    }

    /// Append the color.
    pub fn add(&mut self, color: C) {
        self.colors.push(color);
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Advance the cursor, wrapping around from the last to the first color,
    /// and return the new current color.
    ///
    /// # Errors
    ///
    /// This method fails with [`PaletteError::Empty`] for empty palettes and
    /// then leaves the cursor at zero.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&C, PaletteError> {
        let len = self.colors.len();
        if len == 0 {
            return Err(PaletteError::Empty);
        }

        self.cursor = (self.cursor + 1) % len;
        self.current()
    }

    /// Move the cursor back, wrapping around from the first to the last color,
    /// and return the new current color.
    ///
    /// # Errors
    ///
    /// This method fails with [`PaletteError::Empty`] for empty palettes and
    /// then leaves the cursor at zero.
    pub fn previous(&mut self) -> Result<&C, PaletteError> {
        let len = self.colors.len();
        if len == 0 {
            return Err(PaletteError::Empty);
        }

        self.cursor = (self.cursor + len - 1) % len;
        self.current()
    }

    /// Move the cursor to the first color.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Derive a new palette with the given harmony.
    ///
    /// For every color of this palette, the result contains one color per
    /// [harmony offset](Harmony::offsets), with the hue rotated by the offset
    /// and saturation and brightness unchanged. All colors derived from one
    /// color precede those derived from the next color.
    #[must_use = "method returns a new palette and does not mutate original value"]
    pub fn harmony(&self, harmony: Harmony) -> Self {
        let offsets = harmony.offsets();
        let mut colors = Vec::with_capacity(self.colors.len() * offsets.len());

        for color in &self.colors {
            let [h, s, b] = color.to_hsb();
            colors.extend(
                offsets
                    .iter()
                    .map(|offset| C::from_hsb([rotate_hue(h, *offset), s, b])),
            );
        }

        Self::new(colors)
    }

    /// Derive the complementary palette, with one color per color rotated by
    /// 180°.
    #[must_use = "method returns a new palette and does not mutate original value"]
    pub fn complementary(&self) -> Self {
        self.harmony(Harmony::Complementary)
    }

    /// Derive the analogous palette, with two colors per color rotated by
    /// -30° and 30°.
    #[must_use = "method returns a new palette and does not mutate original value"]
    pub fn analogous(&self) -> Self {
        self.harmony(Harmony::Analogous)
    }

    /// Derive the split-complementary palette, with two colors per color
    /// rotated by 150° and 210°.
    #[must_use = "method returns a new palette and does not mutate original value"]
    pub fn split_complementary(&self) -> Self {
        self.harmony(Harmony::SplitComplementary)
    }

    /// Derive the triadic palette, with two colors per color rotated by 120°
    /// and 240°.
    #[must_use = "method returns a new palette and does not mutate original value"]
    pub fn triadic(&self) -> Self {
        self.harmony(Harmony::Triadic)
    }

    /// Derive the tetradic palette, with three colors per color rotated by
    /// 90°, 180°, and 270°.
    #[must_use = "method returns a new palette and does not mutate original value"]
    pub fn tetradic(&self) -> Self {
        self.harmony(Harmony::Tetradic)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Expand this palette with the given harmony.
    ///
    /// This method replaces every color with a group consisting of the color
    /// itself and the colors derived from it. Within each group, the original
    /// color sits at the harmony's [base position](Harmony::base_position).
    /// The cursor keeps its numeric value.
    ///
    /// ```
    /// # use prettypalette::{Color, Harmony, Palette};
    /// let mut palette = Palette::new(vec![Color::hsb(0.0, 50.0, 50.0)]);
    /// palette.add_harmony(Harmony::Analogous);
    ///
    /// assert_eq!(palette.as_slice(), &[
    ///     Color::hsb(330.0, 50.0, 50.0),
    ///     Color::hsb(0.0, 50.0, 50.0),
    ///     Color::hsb(30.0, 50.0, 50.0),
    /// ]);
    /// ```
    pub fn add_harmony(&mut self, harmony: Harmony) {
        let derived = self.harmony(harmony);
        let base = harmony.base_position();
        let mut colors = Vec::with_capacity(self.colors.len() * harmony.group_len());

        for (color, group) in self
            .colors
            .iter()
            .zip(derived.colors.chunks_exact(harmony.derived_len()))
        {
            let (before, after) = group.split_at(base);
            colors.extend_from_slice(before);
            colors.push(color.clone());
            colors.extend_from_slice(after);
        }

        tracing::debug!(
            %harmony,
            before = self.colors.len(),
            after = colors.len(),
            "expanded palette"
        );
        self.colors = colors;
    }

    /// Expand every color into the pair of itself and its complement.
    pub fn add_complementary_colors(&mut self) {
        self.add_harmony(Harmony::Complementary)
    }

    /// Expand every color into a triple with the color between its two
    /// analogous colors.
    pub fn add_analogous_colors(&mut self) {
        self.add_harmony(Harmony::Analogous)
    }

    /// Expand every color into a triple with the color between its two
    /// split-complementary colors.
    pub fn add_split_complementary_colors(&mut self) {
        self.add_harmony(Harmony::SplitComplementary)
    }

    /// Expand every color into a triple with the color between its two
    /// triadic colors.
    pub fn add_triadic_colors(&mut self) {
        self.add_harmony(Harmony::Triadic)
    }

    /// Expand every color into a quadruple with the color followed by its
    /// three tetradic colors.
    pub fn add_tetradic_colors(&mut self) {
        self.add_harmony(Harmony::Tetradic)
    }

    // ----------------------------------------------------------------------------------------------------------------

    fn map_hsb<F>(&mut self, label: &'static str, f: F)
    where
        F: Fn([Float; 3]) -> [Float; 3],
    {
        for color in self.colors.iter_mut() {
            let [h, s, b] = f(color.to_hsb());
            *color = C::from_hsb([h, clamp_percent(s), clamp_percent(b)]);
        }

        tracing::debug!(transform = label, len = self.colors.len(), "adjusted tone");
    }

    /// Lighten all colors by decreasing saturation by 10% and increasing
    /// brightness by 10%.
    ///
    /// Saturation and brightness are clamped to `0..=100`, so repeatedly
    /// lightening a palette converges on white.
    pub fn lighten(&mut self) {
        self.map_hsb("lighten", |[h, s, b]| [h, s * 0.9, b * 1.1]);
    }

    /// Darken all colors by decreasing brightness by 10%.
    pub fn darken(&mut self) {
        self.map_hsb("darken", |[h, s, b]| [h, s, b * 0.9]);
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Reverse the order of colors.
    ///
    /// The cursor keeps its numeric value and hence points to a different
    /// color afterwards, unless it points to the middle.
    pub fn reverse(&mut self) {
        self.colors.reverse();
    }

    /// Shuffle the colors with the given source of randomness.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.colors.shuffle(rng);
    }

    /// Shuffle the colors with the thread-local source of randomness.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Stably sort the colors by ascending HSB brightness.
    pub fn sort_by_brightness(&mut self) {
        self.colors
            .sort_by(|c1, c2| c1.to_hsb()[2].total_cmp(&c2.to_hsb()[2]));
    }

    /// Stably sort the colors by ascending HSL lightness.
    pub fn sort_by_lightness(&mut self) {
        self.colors
            .sort_by(|c1, c2| c1.to_hsl()[2].total_cmp(&c2.to_hsl()[2]));
    }

    /// Stably sort the colors by ascending HSB saturation.
    pub fn sort_by_saturation(&mut self) {
        self.colors
            .sort_by(|c1, c2| c1.to_hsb()[1].total_cmp(&c2.to_hsb()[1]));
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Format this palette with the given options.
    ///
    /// ```
    /// # use prettypalette::{Color, ColorFormat, Palette, StringOptions};
    /// let palette = Palette::new(vec![
    ///     Color::from_24bit(0x33, 0x66, 0xcc),
    ///     Color::from_24bit(0xff, 0xff, 0x00),
    /// ]);
    ///
    /// let options = StringOptions::default()
    ///     .with_separator(", ")
    ///     .with_format(ColorFormat::Rgb);
    /// assert_eq!(
    ///     palette.to_string_with(&options),
    ///     "rgb(51 102 204), rgb(255 255 0)"
    /// );
    /// ```
    pub fn to_string_with(&self, options: &StringOptions) -> String {
        let format = options.format();
        self.colors
            .iter()
            .map(|color| color.format(format))
            .collect::<Vec<_>>()
            .join(options.separator())
    }

    /// Format this palette with the default options, but without hashes.
    pub fn to_hex_string(&self) -> String {
        self.to_string().replace('#', "")
    }

    /// Log every color as a swatch at level `INFO`.
    ///
    /// Each event carries the `#rrggbb` notation of its color as the `color`
    /// field.
    pub fn log(&self) {
        for color in &self.colors {
            let hex = color.format(ColorFormat::HashedHex);
            tracing::info!(color = %hex, "{}", Swatch::new(color.to_24bit()));
        }
    }

    /// Draw this palette with the renderer.
    ///
    /// This method divides the width of the options' bounds into as many
    /// equally wide slices as there are colors, and fills each slice with its
    /// color. If the options show the cursor, the current color's slice is
    /// inset by a fifth of the height at the top and bottom. If the options
    /// draw a border, this method finally strokes the bounds.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, options: &DrawOptions) {
        let bounds = options.bounds();

        if !self.colors.is_empty() {
            let slice_width = bounds.width / self.colors.len() as Float;
            for (index, color) in self.colors.iter().enumerate() {
                let x = (index as Float).mul_add(slice_width, bounds.x);
                let rect = if options.show_cursor() && index == self.cursor {
                    let slice_height = bounds.height / 5.0;
                    Rect::new(x, bounds.y + slice_height, slice_width, 3.0 * slice_height)
                } else {
                    Rect::new(x, bounds.y, slice_width, bounds.height)
                };

                renderer.fill_rect(rect, color.to_24bit());
            }
        }

        if options.draw_border() {
            renderer.stroke_rect(bounds, options.border_color(), options.border_weight());
        }
    }
}

// ====================================================================================================================

impl Palette<Color> {
    /// Create a gradient from the start to the end color.
    ///
    /// The palette has `amount` colors evenly interpolated in sRGB, including
    /// both start and end color. If `amount` is one, the palette contains only
    /// the start color.
    ///
    /// ```
    /// # use prettypalette::{Color, Palette};
    /// let gradient = Palette::gradient(
    ///     &Color::from_24bit(0, 0, 0),
    ///     &Color::from_24bit(255, 255, 255),
    ///     3,
    /// );
    /// assert_eq!(gradient.to_hex_string(), "000000-808080-ffffff");
    /// ```
    pub fn gradient(start: &Color, end: &Color, amount: usize) -> Self {
        let steps = amount.saturating_sub(1).max(1) as Float;
        (0..amount)
            .map(|index| start.interpolate(end, index as Float / steps))
            .collect()
    }

    /// Parse a palette from colors joined by the separator.
    ///
    /// Each color may use any notation [`Color`] parses. An empty or all
    /// white space string yields an empty palette.
    ///
    /// # Errors
    ///
    /// This method fails with [`PaletteError::Format`] for the first color that
    /// doesn't parse.
    pub fn parse_with(s: &str, separator: &str) -> Result<Self, PaletteError> {
        Self::parse_tokens(s, separator, |token| token.parse())
    }

    /// Parse a palette from its [hex string](Palette::to_hex_string), i.e.,
    /// six-digit hexadecimal colors without hashes joined by dashes.
    ///
    /// # Errors
    ///
    /// This method fails with [`PaletteError::Format`] for the first color that
    /// doesn't parse.
    pub fn from_hex_string(s: &str) -> Result<Self, PaletteError> {
        Self::parse_tokens(s, StringOptions::DEFAULT_SEPARATOR, |token| {
            format!("#{}", token.trim().trim_start_matches('#')).parse()
        })
    }

    fn parse_tokens<F>(s: &str, separator: &str, parse: F) -> Result<Self, PaletteError>
    where
        F: Fn(&str) -> Result<Color, crate::error::ColorFormatError>,
    {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }

        s.split(separator)
            .enumerate()
            .map(|(index, token)| {
                parse(token).map_err(|source| PaletteError::Format { index, source })
            })
            .collect()
    }
}

impl std::str::FromStr for Palette<Color> {
    type Err = PaletteError;

    /// Parse a palette from colors joined by the default separator `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, StringOptions::DEFAULT_SEPARATOR)
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl<C: ColorModel> Default for Palette<C> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<C: ColorModel> Clone for Palette<C> {
    fn clone(&self) -> Self {
        Self::new(self.colors.clone())
    }
}

impl<C: ColorModel + PartialEq> PartialEq for Palette<C> {
    fn eq(&self, other: &Self) -> bool {
        self.colors == other.colors
    }
}

impl<C: ColorModel + Eq> Eq for Palette<C> {}

impl<C: ColorModel> From<Vec<C>> for Palette<C> {
    fn from(value: Vec<C>) -> Self {
        Self::new(value)
    }
}

impl<C: ColorModel> FromIterator<C> for Palette<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, C: ColorModel> IntoIterator for &'a Palette<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl<C: ColorModel> AsRef<[C]> for Palette<C> {
    fn as_ref(&self) -> &[C] {
        &self.colors
    }
}

impl<C: ColorModel> std::ops::Index<usize> for Palette<C> {
    type Output = C;

    /// Access the color with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if the index is out of bounds. Use
    /// [`Palette::get`] for checked access.
    fn index(&self, index: usize) -> &Self::Output {
        &self.colors[index]
    }
}

impl<C: ColorModel> std::fmt::Display for Palette<C> {
    /// Format this palette as `#rrggbb` colors joined by dashes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, color) in self.colors.iter().enumerate() {
            if 0 < index {
                f.write_str(StringOptions::DEFAULT_SEPARATOR)?;
            }
            f.write_str(&color.format(ColorFormat::HashedHex))?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<C: ColorModel + serde::Serialize> serde::Serialize for Palette<C> {
    /// Serialize this palette as a sequence of colors.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.colors)
    }
}

#[cfg(feature = "serde")]
impl<'de, C: ColorModel + serde::Deserialize<'de>> serde::Deserialize<'de> for Palette<C> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<C> as serde::Deserialize>::deserialize(deserializer).map(Self::new)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Palette;
    use crate::error::{ColorFormatError, OutOfBoundsError, PaletteError};
    use crate::render::{DrawOptions, Rect, Renderer};
    use crate::{assert_close_enough, assert_same_color, Color, ColorModel, Float, Harmony};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn hsb(h: Float, s: Float, b: Float) -> Color {
        Color::hsb(h, s, b)
    }

    fn sample() -> Palette {
        Palette::new(vec![
            hsb(0.0, 100.0, 100.0),
            hsb(60.0, 80.0, 50.0),
            hsb(200.0, 40.0, 30.0),
        ])
    }

    fn hues(palette: &Palette) -> Vec<Float> {
        palette.iter().map(|c| c.to_hsb()[0]).collect()
    }

    #[test]
    fn test_access() -> Result<(), PaletteError> {
        let mut palette = sample();
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert_eq!(palette.cursor(), 0);
        assert_eq!(palette.current()?, &hsb(0.0, 100.0, 100.0));

        palette.next()?;
        assert_eq!(palette.get(None)?, &hsb(60.0, 80.0, 50.0));
        assert_eq!(palette.get(Some(0))?, &hsb(0.0, 100.0, 100.0));
        assert_eq!(palette.get(Some(2))?, &hsb(200.0, 40.0, 30.0));
        assert_eq!(
            palette.get(Some(3)),
            Err(PaletteError::OutOfBounds(OutOfBoundsError::new(3, 0..3)))
        );

        palette.add(hsb(300.0, 10.0, 10.0));
        assert_eq!(palette.len(), 4);
        assert_eq!(palette[3], hsb(300.0, 10.0, 10.0));

        let copy = palette.clone();
        assert_eq!(copy, palette);
        assert_eq!(copy.cursor(), 0);
        assert_eq!(palette.cursor(), 1);
        Ok(())
    }

    #[test]
    fn test_empty() {
        let mut palette = Palette::<Color>::default();
        assert!(palette.is_empty());
        assert_eq!(palette.current(), Err(PaletteError::Empty));
        assert_eq!(palette.get(None), Err(PaletteError::Empty));
        assert_eq!(palette.get(Some(0)), Err(PaletteError::Empty));
        assert_eq!(palette.next(), Err(PaletteError::Empty));
        assert_eq!(palette.previous(), Err(PaletteError::Empty));
        assert_eq!(palette.cursor(), 0);

        palette.add_analogous_colors();
        palette.lighten();
        palette.sort_by_saturation();
        palette.shuffle();
        assert!(palette.is_empty());
        assert!(palette.complementary().is_empty());
        assert_eq!(palette.to_string(), "");
    }

    #[test]
    fn test_cyclic_iteration() -> Result<(), PaletteError> {
        let mut palette = sample();
        palette.previous()?;
        assert_eq!(palette.cursor(), 2);
        palette.next()?;
        assert_eq!(palette.cursor(), 0);

        for expected in [1, 2, 0, 1] {
            palette.next()?;
            assert_eq!(palette.cursor(), expected);
        }

        palette.reset();
        assert_eq!(palette.cursor(), 0);

        let mut single = Palette::new(vec![hsb(10.0, 10.0, 10.0)]);
        assert_eq!(single.next()?, &hsb(10.0, 10.0, 10.0));
        assert_eq!(single.previous()?, &hsb(10.0, 10.0, 10.0));
        assert_eq!(single.cursor(), 0);
        Ok(())
    }

    #[test]
    fn test_harmony_hues() {
        let palette = sample();

        let cases: [(Palette, &[Float]); 5] = [
            (palette.complementary(), &[180.0, 240.0, 20.0]),
            (palette.analogous(), &[330.0, 30.0, 30.0, 90.0, 170.0, 230.0]),
            (
                palette.split_complementary(),
                &[150.0, 210.0, 210.0, 270.0, 350.0, 50.0],
            ),
            (palette.triadic(), &[120.0, 240.0, 180.0, 300.0, 320.0, 80.0]),
            (
                palette.tetradic(),
                &[90.0, 180.0, 270.0, 150.0, 240.0, 330.0, 290.0, 20.0, 110.0],
            ),
        ];

        for (derived, expected) in cases {
            let actual = hues(&derived);
            assert_eq!(actual.len(), expected.len());
            for (h1, h2) in actual.iter().zip(expected.iter()) {
                assert_close_enough!(*h1, *h2);
            }
        }

        // Saturation and brightness are preserved.
        for (index, color) in palette.triadic().iter().enumerate() {
            let [_, s1, b1] = color.to_hsb();
            let [_, s2, b2] = palette[index / 2].to_hsb();
            assert_close_enough!(s1, s2);
            assert_close_enough!(b1, b2);
        }

        // The receiver is unchanged.
        assert_eq!(palette, sample());
    }

    #[test]
    fn test_expansion() {
        let n = sample().len();
        for harmony in Harmony::ALL {
            let mut palette = sample();
            palette.add_harmony(harmony);
            assert_eq!(palette.len(), n * harmony.group_len());
        }

        let mut palette = sample();
        palette.add_complementary_colors();
        assert_eq!(palette.len(), 2 * n);
        assert_eq!(palette[0], hsb(0.0, 100.0, 100.0));
        assert_same_color!(palette[1].clone(), hsb(180.0, 100.0, 100.0));
        assert_eq!(palette[2], hsb(60.0, 80.0, 50.0));

        let mut palette = sample();
        palette.add_analogous_colors();
        assert_eq!(palette.len(), 3 * n);
        assert_same_color!(palette[0].clone(), hsb(330.0, 100.0, 100.0));
        assert_eq!(palette[1], hsb(0.0, 100.0, 100.0));
        assert_same_color!(palette[2].clone(), hsb(30.0, 100.0, 100.0));
        assert_same_color!(palette[3].clone(), hsb(30.0, 80.0, 50.0));
        assert_eq!(palette[4], hsb(60.0, 80.0, 50.0));

        let mut palette = sample();
        palette.add_split_complementary_colors();
        assert_eq!(palette.len(), 3 * n);
        assert_eq!(palette[7], hsb(200.0, 40.0, 30.0));

        let mut palette = sample();
        palette.next().ok();
        palette.add_triadic_colors();
        assert_eq!(palette.len(), 3 * n);
        assert_eq!(palette.cursor(), 1);
        assert_same_color!(palette[5].clone(), hsb(300.0, 80.0, 50.0));

        let mut palette = sample();
        palette.add_tetradic_colors();
        assert_eq!(palette.len(), 4 * n);
        assert_eq!(palette[4], hsb(60.0, 80.0, 50.0));
        assert_same_color!(palette[7].clone(), hsb(330.0, 80.0, 50.0));
    }

    #[test]
    fn test_tone() {
        let mut palette = Palette::new(vec![hsb(120.0, 50.0, 50.0), hsb(240.0, 100.0, 95.0)]);
        palette.lighten();
        assert_same_color!(palette[0].clone(), hsb(120.0, 45.0, 55.0));
        assert_same_color!(palette[1].clone(), hsb(240.0, 90.0, 100.0));

        palette.darken();
        assert_same_color!(palette[0].clone(), hsb(120.0, 45.0, 49.5));
        assert_same_color!(palette[1].clone(), hsb(240.0, 90.0, 90.0));

        for _ in 0..100 {
            palette.lighten();
        }
        for color in &palette {
            let [_, s, b] = color.to_hsb();
            assert!(0.0 <= s && s <= 100.0);
            assert_eq!(b, 100.0);
        }
    }

    #[test]
    fn test_reverse() -> Result<(), PaletteError> {
        let mut palette: Palette = "#ff0000-#00ff00-#0000ff".parse()?;
        palette.reverse();
        assert_eq!(palette.to_string(), "#0000ff-#00ff00-#ff0000");
        assert_eq!(palette.cursor(), 0);
        assert_eq!(palette.current()?.to_hex_format(), "#0000ff");

        palette.next()?;
        palette.next()?;
        palette.reverse();
        assert_eq!(palette.cursor(), 2);
        assert_eq!(palette.current()?.to_hex_format(), "#0000ff");
        Ok(())
    }

    #[test]
    fn test_shuffle() {
        let original: Palette = (0..20).map(|n| hsb(n as Float * 18.0, 50.0, 50.0)).collect();

        let mut palette = original.clone();
        palette.shuffle_with(&mut StdRng::seed_from_u64(665));
        assert_eq!(palette.len(), original.len());

        let mut before = original.to_string().split('-').map(String::from).collect::<Vec<_>>();
        let mut after = palette.to_string().split('-').map(String::from).collect::<Vec<_>>();
        before.sort();
        after.sort();
        assert_eq!(before, after);

        let mut again = original.clone();
        again.shuffle_with(&mut StdRng::seed_from_u64(665));
        assert_eq!(again, palette);

        let mut thread_shuffled = original.clone();
        thread_shuffled.shuffle();
        assert_eq!(thread_shuffled.len(), original.len());
    }

    #[test]
    fn test_sort() {
        let mut palette = Palette::new(vec![
            hsb(0.0, 10.0, 50.0),
            hsb(120.0, 90.0, 10.0),
            hsb(240.0, 50.0, 30.0),
            hsb(60.0, 20.0, 10.0),
        ]);

        palette.sort_by_brightness();
        assert_eq!(
            palette.as_slice(),
            &[
                hsb(120.0, 90.0, 10.0),
                hsb(60.0, 20.0, 10.0),
                hsb(240.0, 50.0, 30.0),
                hsb(0.0, 10.0, 50.0),
            ]
        );

        palette.sort_by_saturation();
        let saturation: Vec<_> = palette.iter().map(|c| c.to_hsb()[1]).collect();
        assert_eq!(saturation.len(), 4);
        assert_close_enough!(saturation[0], 10.0);
        assert_close_enough!(saturation[1], 20.0);
        assert_close_enough!(saturation[2], 50.0);
        assert_close_enough!(saturation[3], 90.0);

        let mut palette = Palette::new(vec![
            Color::hsl(0.0, 50.0, 80.0),
            Color::hsl(90.0, 50.0, 20.0),
            Color::hsl(180.0, 10.0, 80.0),
        ]);
        palette.sort_by_lightness();
        assert_eq!(
            palette.as_slice(),
            &[
                Color::hsl(90.0, 50.0, 20.0),
                Color::hsl(0.0, 50.0, 80.0),
                Color::hsl(180.0, 10.0, 80.0),
            ]
        );
    }

    #[test]
    fn test_strings() -> Result<(), PaletteError> {
        let palette = Palette::new(vec![
            Color::from_24bit(0x33, 0x66, 0xcc),
            hsb(60.0, 100.0, 100.0),
            Color::from_24bit(0, 0, 0),
        ]);

        assert_eq!(palette.to_string(), "#3366cc-#ffff00-#000000");
        assert_eq!(palette.to_hex_string(), "3366cc-ffff00-000000");

        let parsed: Palette = palette.to_string().parse()?;
        assert_eq!(parsed.len(), 3);
        for (c1, c2) in parsed.iter().zip(palette.iter()) {
            assert_eq!(c1.to_24bit(), ColorModel::to_24bit(c2));
        }
        assert_eq!(Palette::from_hex_string(&palette.to_hex_string())?, parsed);

        let options = crate::StringOptions::default()
            .with_separator(" / ")
            .with_format(crate::ColorFormat::Hsb);
        let text = palette.to_string_with(&options);
        assert_eq!(text, "hsb(220 75 80) / hsb(60 100 100) / hsb(0 0 0)");
        assert_eq!(Palette::parse_with(&text, " / ")?.to_string(), palette.to_string());

        assert_eq!(Palette::parse_with("   ", ",")?, Palette::default());
        assert_eq!(
            "#000-#12-#fff".parse::<Palette>(),
            Err(PaletteError::Format {
                index: 1,
                source: ColorFormatError::UnexpectedCharacters
            })
        );
        Ok(())
    }

    #[test]
    fn test_gradient() {
        let start = Color::from_24bit(240, 240, 0);
        let end = Color::from_24bit(0, 0, 255);

        let gradient = Palette::gradient(&start, &end, 10);
        assert_eq!(gradient.len(), 10);
        assert_eq!(gradient[0].to_24bit(), [240, 240, 0]);
        assert_eq!(gradient[9].to_24bit(), [0, 0, 255]);

        assert!(Palette::gradient(&start, &end, 0).is_empty());
        assert_eq!(Palette::gradient(&start, &end, 1).to_string(), "#f0f000");
    }

    #[test]
    fn test_end_to_end() {
        let mut palette = Palette::new(vec![hsb(60.0, 100.0, 100.0), hsb(240.0, 100.0, 100.0)]);
        palette.reverse();
        assert_eq!(hues(&palette), vec![240.0, 60.0]);

        let complementary = palette.complementary();
        assert_eq!(hues(&complementary), vec![60.0, 240.0]);
        assert_eq!(hues(&palette), vec![240.0, 60.0]);
    }

    // ----------------------------------------------------------------------------------------------------------------

    #[derive(Default)]
    struct Recorder {
        fills: Vec<(Rect, [u8; 3])>,
        strokes: Vec<(Rect, [u8; 3], Float)>,
    }

    impl Renderer for Recorder {
        fn fill_rect(&mut self, rect: Rect, color: [u8; 3]) {
            self.fills.push((rect, color));
        }

        fn stroke_rect(&mut self, rect: Rect, color: [u8; 3], weight: Float) {
            self.strokes.push((rect, color, weight));
        }
    }

    #[test]
    fn test_draw() -> Result<(), PaletteError> {
        let mut palette: Palette = "#f00-#0f0-#00f-#fff".parse()?;
        palette.next()?;

        let mut recorder = Recorder::default();
        palette.draw(&mut recorder, &DrawOptions::default());
        assert_eq!(recorder.fills.len(), 4);
        assert_eq!(recorder.fills[0], (Rect::new(0.0, 0.0, 25.0, 50.0), [255, 0, 0]));
        assert_eq!(recorder.fills[3], (Rect::new(75.0, 0.0, 25.0, 50.0), [255, 255, 255]));
        assert!(recorder.strokes.is_empty());

        let options = DrawOptions::builder()
            .position(10.0, 10.0)
            .size(40.0, 50.0)
            .show_cursor(true)
            .draw_border(true)
            .border_color([9, 9, 9])
            .border_weight(2.0)
            .build();
        let mut recorder = Recorder::default();
        palette.draw(&mut recorder, &options);
        assert_eq!(recorder.fills[0], (Rect::new(10.0, 10.0, 10.0, 50.0), [255, 0, 0]));
        assert_eq!(recorder.fills[1], (Rect::new(20.0, 20.0, 10.0, 30.0), [0, 255, 0]));
        assert_eq!(recorder.fills[2], (Rect::new(30.0, 10.0, 10.0, 50.0), [0, 0, 255]));
        assert_eq!(
            recorder.strokes,
            vec![(Rect::new(10.0, 10.0, 40.0, 50.0), [9, 9, 9], 2.0)]
        );

        let mut recorder = Recorder::default();
        Palette::<Color>::default().draw(&mut recorder, &options);
        assert!(recorder.fills.is_empty());
        assert_eq!(recorder.strokes.len(), 1);
        Ok(())
    }

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_log() -> Result<(), PaletteError> {
        let buffer = Buffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        let mut palette: Palette = "#3366cc-#f0f000".parse()?;
        tracing::subscriber::with_default(subscriber, || {
            palette.log();
            palette.add_complementary_colors();
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("color=#3366cc"));
        assert!(lines[0].contains("■■■■"));
        assert!(lines[1].contains("color=#f0f000"));
        assert!(lines[2].contains("DEBUG"));
        assert!(lines[2].contains("harmony=complementary"));
        assert!(lines[2].contains("after=4"));
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        let palette = Palette::new(vec![hsb(60.0, 100.0, 100.0), Color::from_24bit(0, 0, 255)]);
        let json = serde_json::to_string(&palette)?;
        assert_eq!(json, r#"["hsb(60 100 100)","color(srgb 0 0 1)"]"#);

        let back: Palette = serde_json::from_str(&json)?;
        assert_eq!(back, palette);
        Ok(())
    }
}
