//! Utility module with prettypalette's errors.

use std::ops::Range;

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// For palettes, the range is `0..len`, with the length of the palette at the
/// time of the access.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{value} does not fit into range {}..{}", .expected.start, .expected.end)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: Range<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: usize, expected: Range<usize>) -> Self {
        Self { value, expected }
    }
}

// ====================================================================================================================

/// An erroneous color format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#`,
    /// `rgb:`, or a known function name.
    #[error("color format should start with `#`, `rgb:`, `rgb()`, `hsb()`, `hsl()`, or `color()`")]
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩0` has the wrong length because the emoji takes four bytes.
    #[error("color format should contain only valid ASCII characters")]
    UnexpectedCharacters,

    /// A parenthesized color format without the opening parenthesis. For
    /// example, `hsb 0 0 0)` is missing the opening parenthesis.
    #[error("color format should include an opening parenthesis but has none")]
    NoOpeningParenthesis,

    /// A parenthesized color format without the closing parenthesis. For
    /// example, `hsl(1 2 3` is missing the closing parenthesis.
    #[error("color format should include a closing parenthesis but has none")]
    NoClosingParenthesis,

    /// A `color()` format that is using a color space other than sRGB.
    #[error("color format should have known color space but does not")]
    UnknownColorSpace,

    /// A color format that is missing a coordinate. For example, `rgb:0` is
    /// missing the second and third coordinate.
    #[error("color format should have 3 coordinates but is missing one")]
    MissingCoordinate,

    /// A color format that has too many digits in a coordinate. For example,
    /// `rgb:12345/1/22` has too many digits in the first coordinate.
    #[error("color format coordinates should have 1-4 hex digits but one has more")]
    OversizedCoordinate,

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#efg` has a malformed third coordinate.
    #[error("color format coordinates should be hexadecimal integers but are not")]
    MalformedHex,

    /// A color format that has a malformed floating point number as
    /// coordinate. For example, `hsb(120 0..1 50)` has a malformed second
    /// coordinate.
    #[error("color format coordinates should be floating point numbers but are not")]
    MalformedFloat,

    /// A color format with more than three coordinates. For example,
    /// `rgb:1/2/3/4` has one coordinate too many.
    #[error("color format should have 3 coordinates but has more")]
    TooManyCoordinates,

    /// A format specification, such as `#rrggbb`, that is not supported.
    #[error("format specification should be `#rrggbb`, `#rgb`, `rgb`, `hsb`, or `hsl`")]
    UnknownSpecification,
}

// ====================================================================================================================

/// An error while accessing or parsing a palette.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// The palette has no colors, so there is no current color and the
    /// cursor cannot move.
    #[error("palette has no colors")]
    Empty,

    /// An index into the palette is out of bounds.
    #[error("palette index out of bounds")]
    OutOfBounds(#[from] OutOfBoundsError),

    /// A color in a palette's string representation is malformed.
    #[error("palette color #{} is malformed", .index + 1)]
    Format {
        index: usize,
        #[source]
        source: ColorFormatError,
    },
}
