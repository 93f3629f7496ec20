//! Color harmonies.

use crate::Float;

/// A color harmony.
///
/// A harmony derives colors from a base color by rotating its hue by fixed
/// offsets while keeping saturation and brightness. When expanding a palette
/// with a harmony, each original color and its derived colors form a group of
/// [`Harmony::group_len`] colors, with the original color at
/// [`Harmony::base_position`] and the derived colors around it in offset
/// order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Harmony {
    /// One color opposite the base color.
    Complementary,
    /// Two colors 30° to either side of the base color.
    Analogous,
    /// Two colors 30° to either side of the complementary color.
    SplitComplementary,
    /// Two colors forming an equilateral triangle with the base color.
    Triadic,
    /// Three colors forming a square with the base color.
    Tetradic,
}

impl Harmony {
    /// All harmonies.
    pub const ALL: [Harmony; 5] = [
        Self::Complementary,
        Self::Analogous,
        Self::SplitComplementary,
        Self::Triadic,
        Self::Tetradic,
    ];

    /// Get the hue offsets in degrees, in the order derived colors appear.
    ///
    /// ```
    /// # use prettypalette::Harmony;
    /// assert_eq!(Harmony::Analogous.offsets(), &[330.0, 30.0]);
    /// assert_eq!(Harmony::Tetradic.offsets().len(), 3);
    /// ```
    pub const fn offsets(&self) -> &'static [Float] {
        match self {
            Self::Complementary => &[180.0],
            Self::Analogous => &[330.0, 30.0],
            Self::SplitComplementary => &[150.0, 210.0],
            Self::Triadic => &[120.0, 240.0],
            Self::Tetradic => &[90.0, 180.0, 270.0],
        }
    }

    /// Get the number of colors derived from each base color.
    pub const fn derived_len(&self) -> usize {
        self.offsets().len()
    }

    /// Get the number of colors in each group of an expanded palette, i.e.,
    /// the base color plus its derived colors.
    pub const fn group_len(&self) -> usize {
        1 + self.derived_len()
    }

    /// Get the position of the base color within each group of an expanded
    /// palette.
    ///
    /// Two-color harmonies place the base color between the derived colors.
    /// The others lead with the base color.
    pub const fn base_position(&self) -> usize {
        match self {
            Self::Complementary | Self::Tetradic => 0,
            Self::Analogous | Self::SplitComplementary | Self::Triadic => 1,
        }
    }

    /// Get a human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
        }
    }
}

impl std::fmt::Display for Harmony {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
