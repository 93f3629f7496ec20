mod conversion;
mod equality;
mod math;
mod space;
mod string;

// conversion
pub(crate) use conversion::{convert, from_24bit, to_24bit};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::{normalize, to_eq_coordinates};

// math
pub(crate) use math::{clamp_percent, rotate_hue, FloatExt};

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, parse};
