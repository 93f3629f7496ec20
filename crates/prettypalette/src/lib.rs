//! # Pretty 🎨 Palette
//!
//! Prettypalette derives, reorders, and renders palettes of related colors.
//!
//!
//! ## 1. Overview
//!
//! Prettypalette's main abstractions are:
//!
//!   * [`Color`] combines a [`ColorSpace`], i.e., sRGB, HSB, or HSL, with
//!     three [`Float`] coordinates. Its methods convert between the color
//!     spaces, rotate hues, scale saturation and brightness, and interpolate
//!     between colors.
//!   * [`ColorModel`] abstracts over color representations. Palettes only
//!     ever convert colors to and from HSB triples, read HSL lightness, and
//!     format colors, so any type implementing this trait can fill a palette.
//!   * [`Palette`] holds an ordered sequence of colors plus a cursor. Its
//!     methods derive [`Harmony`]-based palettes, expand palettes in place,
//!     lighten and darken colors, reverse, shuffle, and sort them, and
//!     cycle through them with the cursor.
//!   * The [`render`] module draws palettes as rows of colored slices with
//!     any [`Renderer`](render::Renderer), including the terminal-based
//!     [`Canvas`](render::Canvas).
//!
//!
//! ## 2. Harmonies
//!
//! A harmony derives colors from a base color by rotating its hue while
//! keeping saturation and brightness. Palettes support two ways of using
//! harmonies. Getters such as [`Palette::analogous`] return a new palette
//! with only the derived colors:
//!
//! ```
//! # use prettypalette::{Color, Palette};
//! let palette = Palette::new(vec![Color::hsb(0.0, 80.0, 90.0)]);
//! let analogous = palette.analogous();
//!
//! assert_eq!(analogous.as_slice(), &[
//!     Color::hsb(330.0, 80.0, 90.0),
//!     Color::hsb(30.0, 80.0, 90.0),
//! ]);
//! assert_eq!(palette.len(), 1);
//! ```
//!
//! In contrast, expansions such as [`Palette::add_analogous_colors`] update
//! the palette in place, placing every original color amidst its derived
//! colors:
//!
//! ```
//! # use prettypalette::{Color, Palette};
//! let mut palette = Palette::new(vec![Color::hsb(0.0, 80.0, 90.0)]);
//! palette.add_analogous_colors();
//!
//! assert_eq!(palette.as_slice(), &[
//!     Color::hsb(330.0, 80.0, 90.0),
//!     Color::hsb(0.0, 80.0, 90.0),
//!     Color::hsb(30.0, 80.0, 90.0),
//! ]);
//! ```
//!
//!
//! ## 3. Strings
//!
//! By default, palettes format as `#rrggbb` colors joined by dashes, and they
//! parse from the same representation. [`StringOptions`] change the
//! separator and [`ColorFormat`].
//!
//! ```
//! # use prettypalette::{ColorFormat, Palette, StringOptions};
//! # use prettypalette::error::PaletteError;
//! let palette: Palette = "#3366cc-#ffff00".parse()?;
//! assert_eq!(palette.to_hex_string(), "3366cc-ffff00");
//!
//! let options = StringOptions::default()
//!     .with_separator(" ")
//!     .with_format(ColorFormat::ShortHex);
//! assert_eq!(palette.to_string_with(&options), "#36c #ff0");
//! # Ok::<(), PaletteError>(())
//! ```
//!
//!
//! ## 4. Features
//!
//!   * `f64` (default) selects `f64` as [`Float`]; otherwise, it is `f32`.
//!   * `serde` serializes colors as their [`Display`](std::fmt::Display)
//!     strings and palettes as sequences of colors.
//!
//! Palettes also log through [`tracing`](https://docs.rs/tracing): harmony
//! expansions and tone adjustments emit `DEBUG` events, while
//! [`Palette::log`] emits one `INFO` event with a color swatch per color.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod format;
mod harmony;
mod model;
mod object;
mod palette;
pub mod render;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::ColorSpace;
pub use format::{ColorFormat, StringOptions};
pub use harmony::Harmony;
pub use model::ColorModel;
pub use object::Color;
pub use palette::Palette;
