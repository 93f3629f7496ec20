use crate::error::ColorFormatError;
use crate::{ColorSpace, Float};

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(1 + factor * index..1 + factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a color in X Windows format. If successful, this function returns
/// the three coordinates scaled to unit range.
fn parse_x(s: &str) -> Result<[Float; 3], ColorFormatError> {
    let body = s
        .strip_prefix("rgb:")
        .ok_or(ColorFormatError::UnknownFormat)?;

    fn parse_coordinate(s: Option<&str>) -> Result<Float, ColorFormatError> {
        let t = s.ok_or(ColorFormatError::MissingCoordinate)?;
        if t.is_empty() {
            return Err(ColorFormatError::MissingCoordinate);
        } else if 4 < t.len() {
            return Err(ColorFormatError::OversizedCoordinate);
        }

        let n = u16::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;
        Ok(n as Float / (16_u32.pow(t.len() as u32) - 1) as Float)
    }

    let mut iter = body.split('/');
    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok([c1, c2, c3])
}

/// Parse a color in functional notation. This function recognizes `rgb()`
/// with coordinates `0..=255`, `hsb()` and its alias `hsv()`, `hsl()`, and
/// `color()` with the `srgb` color space. Coordinates may be separated by
/// white space or commas but must not have units.
fn parse_functional(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    use ColorSpace::*;

    // Munge function name. The scale converts rgb() to unit range.
    let (space, scale, rest) = s
        .strip_prefix("rgb")
        .map(|r| (Some(Srgb), 255.0, r))
        .or_else(|| s.strip_prefix("hsb").map(|r| (Some(Hsb), 1.0, r)))
        .or_else(|| s.strip_prefix("hsv").map(|r| (Some(Hsb), 1.0, r)))
        .or_else(|| s.strip_prefix("hsl").map(|r| (Some(Hsl), 1.0, r)))
        .or_else(|| s.strip_prefix("color").map(|r| (None, 1.0, r)))
        .ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading whitespace
    let rest = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.trim_end()
                .strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    let (space, body) = match space {
        Some(space) => (space, rest),
        None => rest
            .trim_start()
            .strip_prefix("srgb")
            .map(|r| (Srgb, r))
            .ok_or(ColorFormatError::UnknownColorSpace)?,
    };

    #[inline]
    fn parse_coordinate(s: Option<&str>, scale: Float) -> Result<Float, ColorFormatError> {
        s.ok_or(ColorFormatError::MissingCoordinate).and_then(|t| {
            t.parse::<Float>()
                .map(|n| n / scale)
                .map_err(|_| ColorFormatError::MalformedFloat)
        })
    }

    let mut iter = body
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());
    let c1 = parse_coordinate(iter.next(), scale)?;
    let c2 = parse_coordinate(iter.next(), scale)?;
    let c3 = parse_coordinate(iter.next(), scale)?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok((space, [c1, c2, c3]))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// This function recognizes hashed hexadecimal, XParseColor, and functional
/// formats for colors. Before trying to parse either of these formats, this
/// function trims leading and trailing white space and converts ASCII letters
/// to lowercase.
pub(crate) fn parse(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        let [c1, c2, c3] = parse_hashed(s)?;
        Ok((
            ColorSpace::Srgb,
            [
                c1 as Float / 255.0,
                c2 as Float / 255.0,
                c3 as Float / 255.0,
            ],
        ))
    } else if s.starts_with("rgb:") {
        Ok((ColorSpace::Srgb, parse_x(s)?))
    } else {
        parse_functional(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn prefix(space: ColorSpace) -> &'static str {
    match space {
        ColorSpace::Srgb => "color(srgb ",
        ColorSpace::Hsb => "hsb(",
        ColorSpace::Hsl => "hsl(",
    }
}

/// Format the color as a string.
///
/// This function formats the given cooordinates for the given color space
/// with the `color()`, `hsb()`, or `hsl()` function and space-separated
/// arguments. It respects the formatter's precision, defaulting to 5 digits
/// past the decimal. Since HSB and HSL coordinates are two orders of magnitude
/// larger than sRGB coordinates, this function uses a precision smaller by 2
/// for them.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str(prefix(space))?;

    let mut factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    if space.is_polar() {
        factor = (factor / 100.0).max(1.0);
    }

    for (index, coordinate) in coordinates.iter().enumerate() {
        if coordinate.is_nan() {
            f.write_str("none")?;
        } else {
            // Rounding avoids trailing zeros, for the most part. If the
            // fractional part is zero, we do need an explicit precision of 0.
            let c = (coordinate * factor).round() / factor;
            if c == c.trunc() {
                f.write_fmt(format_args!("{:.0}", c))?;
            } else {
                f.write_fmt(format_args!("{}", c))?;
            }
        }

        if index < 2 {
            f.write_str(" ")?;
        }
    }

    f.write_str(")")
}

// ====================================================================================================================
