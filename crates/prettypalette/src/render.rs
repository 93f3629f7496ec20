//! Rendering palettes as rows of colored slices.
//!
//! [`Palette::draw`](crate::Palette::draw) lays out a palette as equally wide
//! slices and hands each slice to a [`Renderer`]. This module defines that
//! trait, the [`DrawOptions`] controlling the layout, and two renderers for
//! terminals: [`Canvas`] rasterizes rectangles into character cells and
//! [`Swatch`] displays a single color as a run of squares.
//!
//!
//! # Example
//!
//! ```
//! # use prettypalette::{Color, Palette};
//! # use prettypalette::render::{Canvas, DrawOptions};
//! let palette = Palette::gradient(
//!     &Color::from_24bit(240, 240, 0),
//!     &Color::from_24bit(0, 0, 255),
//!     4,
//! );
//!
//! let options = DrawOptions::builder()
//!     .size(8.0, 2.0)
//!     .build();
//!
//! let mut canvas = Canvas::new(8, 2);
//! palette.draw(&mut canvas, &options);
//! assert_eq!(canvas.get(0, 0), Some([240, 240, 0]));
//! assert_eq!(canvas.get(7, 1), Some([0, 0, 255]));
//! ```

use crate::Float;

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: Float,
    pub y: Float,
    pub width: Float,
    pub height: Float,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: Float, y: Float, width: Float, height: Float) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Determine whether the point lies inside this rectangle. The left and
    /// top edges are inclusive, the right and bottom edges exclusive.
    pub fn contains(&self, x: Float, y: Float) -> bool {
        self.x <= x && x < self.x + self.width && self.y <= y && y < self.y + self.height
    }
}

/// A renderer of rectangles.
///
/// Colors are passed in 24-bit sRGB.
pub trait Renderer {
    /// Fill the rectangle with the color, without outline.
    fn fill_rect(&mut self, rect: Rect, color: [u8; 3]);

    /// Outline the rectangle with the color, without fill. The stroke is
    /// centered on the rectangle's edges.
    fn stroke_rect(&mut self, rect: Rect, color: [u8; 3], weight: Float);
}

// ====================================================================================================================

#[derive(Clone, Debug)]
struct DrawOptionData {
    x: Float,
    y: Float,
    width: Float,
    height: Float,
    show_cursor: bool,
    draw_border: bool,
    border_color: [u8; 3],
    border_weight: Float,
}

impl DrawOptionData {
    pub const fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 50.0,
            show_cursor: false,
            draw_border: false,
            border_color: [0, 0, 0],
            border_weight: 1.0,
        }
    }
}

/// A builder of draw options.
#[derive(Debug)]
pub struct DrawOptionBuilder(DrawOptionData);

impl DrawOptionBuilder {
    /// Set the top-left corner.
    pub fn position(&mut self, x: Float, y: Float) -> &mut Self {
        self.0.x = x;
        self.0.y = y;
        self
    }

    /// Set the width and height.
    ///
    /// Negative sizes are treated as zero.
    pub fn size(&mut self, width: Float, height: Float) -> &mut Self {
        self.0.width = width.max(0.0);
        self.0.height = height.max(0.0);
        self
    }

    /// Highlight the slice of the palette's current color by insetting it.
    pub fn show_cursor(&mut self, show: bool) -> &mut Self {
        self.0.show_cursor = show;
        self
    }

    /// Outline the palette.
    pub fn draw_border(&mut self, draw: bool) -> &mut Self {
        self.0.draw_border = draw;
        self
    }

    /// Set the border color.
    pub fn border_color(&mut self, color: [u8; 3]) -> &mut Self {
        self.0.border_color = color;
        self
    }

    /// Set the border weight.
    pub fn border_weight(&mut self, weight: Float) -> &mut Self {
        self.0.border_weight = weight.max(0.0);
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> DrawOptions {
        DrawOptions(self.0.clone())
    }
}

/// Options for drawing a palette.
///
/// By default, a palette covers a 100×50 area at the origin, with neither
/// cursor highlight nor border. When enabled, the border is black and one
/// unit wide.
#[derive(Clone, Debug)]
pub struct DrawOptions(DrawOptionData);

impl Default for DrawOptions {
    fn default() -> Self {
        DrawOptions(DrawOptionData::new())
    }
}

impl DrawOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> DrawOptionBuilder {
        DrawOptionBuilder(DrawOptionData::new())
    }

    /// Get the bounding rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.0.x, self.0.y, self.0.width, self.0.height)
    }

    /// Determine whether to highlight the cursor.
    pub fn show_cursor(&self) -> bool {
        self.0.show_cursor
    }

    /// Determine whether to draw a border.
    pub fn draw_border(&self) -> bool {
        self.0.draw_border
    }

    /// Get the border color.
    pub fn border_color(&self) -> [u8; 3] {
        self.0.border_color
    }

    /// Get the border weight.
    pub fn border_weight(&self) -> Float {
        self.0.border_weight
    }
}

// ====================================================================================================================

/// A grid of character cells for rendering palettes in the terminal.
///
/// Each cell is one unit wide and one unit high. A fill paints every cell
/// whose center lies inside the rectangle, and a stroke paints every cell
/// whose center lies within half the weight of the rectangle's edges.
/// Displaying a canvas writes one line per row, using 24-bit background colors
/// for painted cells and the default background otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    columns: usize,
    rows: usize,
    cells: Vec<Option<[u8; 3]>>,
}

impl Canvas {
    /// Create a new blank canvas.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; columns * rows],
        }
    }

    /// Get the number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the color of the cell, if it has been painted.
    pub fn get(&self, column: usize, row: usize) -> Option<[u8; 3]> {
        if self.columns <= column {
            return None;
        }

        self.cells.get(row * self.columns + column).copied().flatten()
    }

    /// Clear all cells.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn paint<P: Fn(Float, Float) -> bool>(&mut self, color: [u8; 3], predicate: P) {
        let columns = self.columns;
        for (index, cell) in self.cells.iter_mut().enumerate() {
            let x = (index % columns) as Float + 0.5;
            let y = (index / columns) as Float + 0.5;
            if predicate(x, y) {
                *cell = Some(color);
            }
        }
    }
}

impl Renderer for Canvas {
    fn fill_rect(&mut self, rect: Rect, color: [u8; 3]) {
        self.paint(color, |x, y| rect.contains(x, y));
    }

    fn stroke_rect(&mut self, rect: Rect, color: [u8; 3], weight: Float) {
        let half = weight / 2.0;
        let outer = Rect::new(
            rect.x - half,
            rect.y - half,
            rect.width + weight,
            rect.height + weight,
        );
        let inner = Rect::new(
            rect.x + half,
            rect.y + half,
            rect.width - weight,
            rect.height - weight,
        );

        self.paint(color, |x, y| outer.contains(x, y) && !inner.contains(x, y));
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.columns == 0 {
            return Ok(());
        }

        for row in self.cells.chunks(self.columns) {
            let mut previous = None;
            for cell in row {
                if *cell != previous {
                    match cell {
                        Some([r, g, b]) => write!(f, "\x1b[48;2;{};{};{}m", r, g, b)?,
                        None => f.write_str("\x1b[49m")?,
                    }
                    previous = *cell;
                }
                f.write_str(" ")?;
            }

            if previous.is_some() {
                f.write_str("\x1b[49m")?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color swatch.
///
/// Displaying a swatch writes a run of squares in the swatch's color as
/// 24-bit foreground color, restoring the default foreground afterwards.
///
/// ```
/// # use prettypalette::render::Swatch;
/// let swatch = Swatch::new([255, 0, 0]).with_width(3);
/// assert_eq!(swatch.to_string(), "\x1b[38;2;255;0;0m■■■\x1b[39m");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    color: [u8; 3],
    width: usize,
}

impl Swatch {
    /// The default number of squares.
    pub const DEFAULT_WIDTH: usize = 20;

    /// Create a new swatch with the default width.
    pub const fn new(color: [u8; 3]) -> Self {
        Self {
            color,
            width: Self::DEFAULT_WIDTH,
        }
    }

    /// Change the number of squares.
    #[must_use = "method returns a new swatch and does not mutate original value"]
    pub const fn with_width(self, width: usize) -> Self {
        Self { width, ..self }
    }
}

impl std::fmt::Display for Swatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.color;
        write!(f, "\x1b[38;2;{};{};{}m", r, g, b)?;
        for _ in 0..self.width {
            f.write_str("■")?;
        }
        f.write_str("\x1b[39m")
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Canvas, DrawOptions, Rect, Renderer, Swatch};

    #[test]
    fn test_options() {
        let options = DrawOptions::default();
        assert_eq!(options.bounds(), Rect::new(0.0, 0.0, 100.0, 50.0));
        assert!(!options.show_cursor());
        assert!(!options.draw_border());
        assert_eq!(options.border_color(), [0, 0, 0]);
        assert_eq!(options.border_weight(), 1.0);

        let options = DrawOptions::builder()
            .position(10.0, 70.0)
            .size(40.0, -5.0)
            .show_cursor(true)
            .draw_border(true)
            .border_color([255, 255, 255])
            .border_weight(2.0)
            .build();
        assert_eq!(options.bounds(), Rect::new(10.0, 70.0, 40.0, 0.0));
        assert!(options.show_cursor());
        assert!(options.draw_border());
        assert_eq!(options.border_color(), [255, 255, 255]);
        assert_eq!(options.border_weight(), 2.0);
    }

    #[test]
    fn test_fill() {
        let mut canvas = Canvas::new(4, 3);
        canvas.fill_rect(Rect::new(1.0, 1.0, 2.0, 5.0), [1, 2, 3]);

        assert_eq!(canvas.get(0, 0), None);
        assert_eq!(canvas.get(0, 1), None);
        assert_eq!(canvas.get(1, 1), Some([1, 2, 3]));
        assert_eq!(canvas.get(2, 2), Some([1, 2, 3]));
        assert_eq!(canvas.get(3, 2), None);
        assert_eq!(canvas.get(4, 0), None);
        assert_eq!(canvas.get(0, 3), None);

        canvas.clear();
        assert_eq!(canvas.get(1, 1), None);
    }

    #[test]
    fn test_stroke() {
        let mut canvas = Canvas::new(5, 5);
        canvas.stroke_rect(Rect::new(0.5, 0.5, 4.0, 4.0), [9, 9, 9], 1.0);

        for index in 0..5 {
            assert_eq!(canvas.get(index, 0), Some([9, 9, 9]));
            assert_eq!(canvas.get(index, 4), Some([9, 9, 9]));
            assert_eq!(canvas.get(0, index), Some([9, 9, 9]));
            assert_eq!(canvas.get(4, index), Some([9, 9, 9]));
        }
        assert_eq!(canvas.get(2, 2), None);
        assert_eq!(canvas.get(1, 3), None);
    }

    #[test]
    fn test_display() {
        let mut canvas = Canvas::new(3, 2);
        canvas.fill_rect(Rect::new(0.0, 0.0, 2.0, 1.0), [255, 0, 0]);
        canvas.fill_rect(Rect::new(2.0, 1.0, 1.0, 1.0), [0, 0, 255]);

        assert_eq!(
            canvas.to_string(),
            concat!(
                "\x1b[48;2;255;0;0m  \x1b[49m \n",
                "  \x1b[48;2;0;0;255m \x1b[49m\n",
            )
        );

        assert_eq!(Canvas::new(0, 3).to_string(), "");
        assert_eq!(
            Swatch::new([0, 128, 255]).to_string(),
            format!("\x1b[38;2;0;128;255m{}\x1b[39m", "■".repeat(20))
        );
    }
}
