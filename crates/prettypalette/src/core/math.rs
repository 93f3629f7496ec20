use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// ----------------------------------------------------------------------------------------------------------

/// Rotate the hue by the given number of degrees.
///
/// The result always falls into `0..360`, no matter the sign or magnitude of
/// either argument.
#[inline]
pub(crate) fn rotate_hue(hue: Float, degrees: Float) -> Float {
    let rotated = (hue + degrees).rem_euclid(360.0);
    // rem_euclid may round up to the modulus for tiny negative inputs.
    if rotated >= 360.0 {
        0.0
    } else {
        rotated
    }
}

/// Clamp a percentage to `0..=100`, mapping not-a-number to zero.
#[inline]
pub(crate) fn clamp_percent(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
