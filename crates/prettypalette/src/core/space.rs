/// The enumeration of supported color spaces.
///
/// # sRGB
///
/// [sRGB](https://en.wikipedia.org/wiki/SRGB) is the default color space for
/// the web and the reference color space for this crate. In-gamut coordinates
/// range from 0 to 1, inclusive. Rendering and hexadecimal formatting always
/// go through sRGB.
///
/// # HSB and HSL
///
/// [HSB and HSL](https://en.wikipedia.org/wiki/HSL_and_HSV) are cylindrical
/// re-parameterizations of sRGB. Both use hue as the angular coordinate, in
/// degrees `0..360`, and express the remaining two coordinates as percentages
/// `0..=100`:
///
/// | Color space | Coordinate 1 | Coordinate 2 | Coordinate 3 |
/// | ----------- | :----------: | :----------: | :----------: |
/// | HSB         | hue          | saturation   | brightness   |
/// | HSL         | hue          | saturation   | lightness    |
///
/// HSB, also known as HSV, is the color space palette harmonies operate in.
/// Rotating the hue of an HSB color while keeping saturation and brightness
/// fixed yields another color of the same "weight." HSL is used for sorting
/// colors by lightness only.
///
/// For achromatic colors, i.e., grays, hue is powerless. Conversions from
/// sRGB report a hue of zero for such colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    Hsb,
    Hsl,
}

impl ColorSpace {
    /// Determine whether this color space is polar, i.e., has a hue.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Hsb | Self::Hsl)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Srgb => "sRGB",
            Self::Hsb => "HSB",
            Self::Hsl => "HSL",
        };

        f.write_str(s)
    }
}
