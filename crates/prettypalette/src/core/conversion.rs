use super::{normalize, rotate_hue, ColorSpace};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function converts the coordinates to sRGB first. Even if the result
/// is out of gamut, the conversion automatically clamps coordinates to the
/// range `0x00..=0xff`.
pub(crate) fn to_24bit(space: ColorSpace, coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = convert(space, ColorSpace::Srgb, coordinates);
    [
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the hue in degrees for the given sRGB coordinates, their maximum,
/// and the difference between maximum and minimum. Achromatic colors have a
/// hue of zero.
#[inline]
fn hue_of(value: &[Float; 3], max: Float, delta: Float) -> Float {
    let [r, g, b] = *value;
    if delta == 0.0 {
        return 0.0;
    }

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    rotate_hue(sector * 60.0, 0.0)
}

/// Convert coordinates from sRGB to HSB. This is a one-hop, direct conversion.
fn srgb_to_hsb(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    [hue_of(value, max, delta), saturation * 100.0, max * 100.0]
}

/// Convert coordinates from HSB to sRGB. This is a one-hop, direct conversion.
fn hsb_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    let h = rotate_hue(h, 0.0) / 60.0;
    let (s, v) = (s / 100.0, v / 100.0);

    #[inline]
    fn channel(n: Float, h: Float, s: Float, v: Float) -> Float {
        let k = (n + h).rem_euclid(6.0);
        v - v * s * k.min(4.0 - k).clamp(0.0, 1.0)
    }

    [
        channel(5.0, h, s, v),
        channel(3.0, h, s, v),
        channel(1.0, h, s, v),
    ]
}

/// Convert coordinates from sRGB to HSL. This is a one-hop, direct conversion.
fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let lightness = (max + min) / 2.0;
    let denominator = 1.0 - (2.0 * lightness - 1.0).abs();
    let saturation = if delta == 0.0 || denominator == 0.0 {
        0.0
    } else {
        delta / denominator
    };

    [
        hue_of(value, max, delta),
        saturation * 100.0,
        lightness * 100.0,
    ]
}

/// Convert coordinates from HSL to sRGB. This is a one-hop, direct conversion.
fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    let h = rotate_hue(h, 0.0) / 30.0;
    let (s, l) = (s / 100.0, l / 100.0);
    let a = s * l.min(1.0 - l);

    #[inline]
    fn channel(n: Float, h: Float, l: Float, a: Float) -> Float {
        let k = (n + h).rem_euclid(12.0);
        l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    }

    [
        channel(0.0, h, l, a),
        channel(8.0, h, l, a),
        channel(4.0, h, l, a),
    ]
}

/// Convert coordinates from HSB to HSL. This is a one-hop, direct conversion
/// that leaves the hue untouched.
fn hsb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    let (s, v) = (s / 100.0, v / 100.0);

    let l = v * (1.0 - s / 2.0);
    let m = l.min(1.0 - l);
    let saturation = if m <= 0.0 { 0.0 } else { (v - l) / m };

    [h, saturation * 100.0, l * 100.0]
}

/// Convert coordinates from HSL to HSB. This is a one-hop, direct conversion
/// that leaves the hue untouched.
fn hsl_to_hsb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    let (s, l) = (s / 100.0, l / 100.0);

    let v = l + s * l.min(1.0 - l);
    let saturation = if v <= 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };

    [h, saturation * 100.0, v * 100.0]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from one color space to another.
///
/// This function normalizes not-a-number coordinates to zero and then converts
/// them to to the targeted color space, which may be the same as the original
/// color space. This function does not check whether the result is in gamut for
/// the targeted color space.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    let coordinates = normalize(from_space, coordinates);
    match (from_space, to_space) {
        (Srgb, Srgb) | (Hsb, Hsb) | (Hsl, Hsl) => coordinates,
        (Srgb, Hsb) => srgb_to_hsb(&coordinates),
        (Srgb, Hsl) => srgb_to_hsl(&coordinates),
        (Hsb, Srgb) => hsb_to_srgb(&coordinates),
        (Hsl, Srgb) => hsl_to_srgb(&coordinates),
        (Hsb, Hsl) => hsb_to_hsl(&coordinates),
        (Hsl, Hsb) => hsl_to_hsb(&coordinates),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{assert_same_coordinates, ColorSpace::*};
    use crate::Float;

    struct Representations {
        srgb: [Float; 3],
        hsb: [Float; 3],
        hsl: [Float; 3],
    }

    const BLACK: Representations = Representations {
        // #000000
        srgb: [0.0, 0.0, 0.0],
        hsb: [0.0, 0.0, 0.0],
        hsl: [0.0, 0.0, 0.0],
    };

    const YELLOW: Representations = Representations {
        // #ffff00
        srgb: [1.0, 1.0, 0.0],
        hsb: [60.0, 100.0, 100.0],
        hsl: [60.0, 100.0, 50.0],
    };

    const BLUE: Representations = Representations {
        // #3366cc
        srgb: [0.2, 0.4, 0.8],
        hsb: [220.0, 75.0, 80.0],
        hsl: [220.0, 60.0, 50.0],
    };

    const TEAL: Representations = Representations {
        // #339999
        srgb: [0.2, 0.6, 0.6],
        hsb: [180.0, 66.66666666666666, 60.0],
        hsl: [180.0, 50.0, 40.0],
    };

    const WHITE: Representations = Representations {
        // #ffffff
        srgb: [1.0, 1.0, 1.0],
        hsb: [0.0, 0.0, 100.0],
        hsl: [0.0, 0.0, 100.0],
    };

    #[test]
    fn test_conversions() {
        for &color in [&BLACK, &YELLOW, &BLUE, &TEAL, &WHITE].iter() {
            let hsb = srgb_to_hsb(&color.srgb);
            assert_same_coordinates!(Hsb, &hsb, &color.hsb);

            let srgb = hsb_to_srgb(&hsb);
            assert_same_coordinates!(Srgb, &srgb, &color.srgb);

            let hsl = srgb_to_hsl(&color.srgb);
            assert_same_coordinates!(Hsl, &hsl, &color.hsl);

            let also_srgb = hsl_to_srgb(&hsl);
            assert_same_coordinates!(Srgb, &also_srgb, &color.srgb);

            let also_hsl = hsb_to_hsl(&color.hsb);
            assert_same_coordinates!(Hsl, &also_hsl, &color.hsl);

            let also_hsb = hsl_to_hsb(&color.hsl);
            assert_same_coordinates!(Hsb, &also_hsb, &color.hsb);
        }
    }

    #[test]
    fn test_primaries() {
        assert_same_coordinates!(Hsb, &convert(Srgb, Hsb, &[1.0, 0.0, 0.0]), &[0.0, 100.0, 100.0]);
        assert_same_coordinates!(Hsb, &convert(Srgb, Hsb, &[0.0, 1.0, 0.0]), &[120.0, 100.0, 100.0]);
        assert_same_coordinates!(Hsb, &convert(Srgb, Hsb, &[0.0, 0.0, 1.0]), &[240.0, 100.0, 100.0]);
        assert_same_coordinates!(Hsb, &convert(Srgb, Hsb, &[1.0, 0.0, 1.0]), &[300.0, 100.0, 100.0]);
        assert_same_coordinates!(Srgb, &convert(Hsb, Srgb, &[300.0, 100.0, 100.0]), &[1.0, 0.0, 1.0]);
        assert_same_coordinates!(Srgb, &convert(Hsl, Srgb, &[120.0, 100.0, 50.0]), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_24bit() {
        assert_eq!(to_24bit(Hsb, &[60.0, 100.0, 100.0]), [255_u8, 255, 0]);
        assert_eq!(to_24bit(Hsl, &[220.0, 60.0, 50.0]), [0x33_u8, 0x66, 0xcc]);
        assert_eq!(to_24bit(Srgb, &[1.5, -0.5, Float::NAN]), [255_u8, 0, 0]);
        assert_eq!(from_24bit(0x33, 0x66, 0xcc), [0.2, 0.4, 0.8]);
    }
}
