//! Format specifications for colors and palettes.
//!
//! [`ColorFormat`] picks the textual representation of a single color, and
//! [`StringOptions`] combines that choice with the separator placed between
//! the colors of a palette.
//!
//! ```
//! # use prettypalette::{ColorFormat, StringOptions};
//! # use prettypalette::error::ColorFormatError;
//! let options = StringOptions::default()
//!     .with_separator(", ")
//!     .with_format("hsl".parse()?);
//!
//! assert_eq!(options.separator(), ", ");
//! assert_eq!(options.format(), ColorFormat::Hsl);
//! # Ok::<(), ColorFormatError>(())
//! ```

use std::borrow::Cow;

use crate::error::ColorFormatError;

/// The textual representation of a color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// Six hexadecimal digits after a hash, e.g., `#3366cc`. This format is
    /// lossless for 24-bit colors.
    #[default]
    HashedHex,
    /// Three hexadecimal digits after a hash, e.g., `#36c`. Each coordinate is
    /// rounded to the closest of the 16 representable values.
    ShortHex,
    /// The functional `rgb()` notation with 24-bit integer coordinates, e.g.,
    /// `rgb(51 102 204)`.
    Rgb,
    /// The functional `hsb()` notation, e.g., `hsb(220 75 80)`.
    Hsb,
    /// The functional `hsl()` notation, e.g., `hsl(220 60 50)`.
    Hsl,
}

impl ColorFormat {
    /// All color formats.
    pub const ALL: [ColorFormat; 5] = [
        Self::HashedHex,
        Self::ShortHex,
        Self::Rgb,
        Self::Hsb,
        Self::Hsl,
    ];

    /// Get the specification string for this color format.
    pub const fn spec(&self) -> &'static str {
        match self {
            Self::HashedHex => "#rrggbb",
            Self::ShortHex => "#rgb",
            Self::Rgb => "rgb",
            Self::Hsb => "hsb",
            Self::Hsl => "hsl",
        }
    }
}

impl std::str::FromStr for ColorFormat {
    type Err = ColorFormatError;

    /// Parse a format specification.
    ///
    /// Recognized specifications are `#rrggbb`, `#rgb`, `rgb`, `hsb`, and
    /// `hsl`. Matching ignores ASCII case as well as leading and trailing
    /// white space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.spec().eq_ignore_ascii_case(s))
            .ok_or(ColorFormatError::UnknownSpecification)
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.spec())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Options for converting a palette to a string.
///
/// The default options separate colors with a dash `-` and format each color
/// as `#rrggbb`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringOptions {
    separator: Cow<'static, str>,
    format: ColorFormat,
}

impl StringOptions {
    /// The default separator.
    pub const DEFAULT_SEPARATOR: &'static str = "-";

    /// Create new string options with the default separator and format.
    pub const fn new() -> Self {
        Self {
            separator: Cow::Borrowed(Self::DEFAULT_SEPARATOR),
            format: ColorFormat::HashedHex,
        }
    }

    /// Replace the separator.
    #[must_use = "method returns new options and does not mutate original value"]
    pub fn with_separator(self, separator: impl Into<Cow<'static, str>>) -> Self {
        Self {
            separator: separator.into(),
            ..self
        }
    }

    /// Replace the color format.
    #[must_use = "method returns new options and does not mutate original value"]
    pub fn with_format(self, format: ColorFormat) -> Self {
        Self { format, ..self }
    }

    /// Get the separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Get the color format.
    pub fn format(&self) -> ColorFormat {
        self.format
    }
}

impl Default for StringOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ====================================================================================================================
