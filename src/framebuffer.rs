//! The framebuffer store, holding the colour of every pixel on the panel.
//!
//! The framebuffer is owned by the application. Anything holding a mutable reference may draw into
//! it, and the driver only ever reads it during a refresh.

use itertools::iproduct;

use crate::color::Color;

/// A `ROWS` by `COLS` grid of pixel colours, indexed by (row, column). Every cell always holds a
/// valid colour; a new framebuffer is all black.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer<const ROWS: usize, const COLS: usize> {
    cells: [[Color; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Framebuffer<ROWS, COLS> {
    /// Construct an all-black framebuffer.
    pub const fn new() -> Self {
        Self {
            cells: [[Color::Black; COLS]; ROWS],
        }
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn cols(&self) -> usize {
        COLS
    }

    /// Set every pixel to black.
    pub fn clear(&mut self) {
        self.fill(Color::Black);
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        for (row, col) in iproduct!(0..ROWS, 0..COLS) {
            self.cells[row][col] = color;
        }
    }

    /// Set every pixel of `row` to `color`. Rows outside the framebuffer are ignored.
    pub fn fill_row(&mut self, row: usize, color: Color) {
        if let Some(cells) = self.cells.get_mut(row) {
            for cell in cells.iter_mut() {
                *cell = color;
            }
        }
    }

    /// Set the pixel at (`row`, `col`) to `color`. Writes outside the framebuffer are silently
    /// dropped, so drawing code may compute coordinates that run off the edge.
    pub fn set_pixel(&mut self, row: usize, col: usize, color: Color) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = color;
        }
    }

    /// Get the colour of the pixel at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the framebuffer.
    pub fn get_pixel(&self, row: usize, col: usize) -> Color {
        self.cells[row][col]
    }

    /// The pixels of `row`, from column 0 upwards.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the framebuffer.
    pub fn row(&self, row: usize) -> &[Color; COLS] {
        &self.cells[row]
    }
}

impl<const ROWS: usize, const COLS: usize> Default for Framebuffer<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PANEL_COLS, PANEL_ROWS};
    use itertools::iproduct;

    type PanelBuffer = Framebuffer<PANEL_ROWS, PANEL_COLS>;

    fn all_cells() -> impl Iterator<Item = (usize, usize)> {
        iproduct!(0..PANEL_ROWS, 0..PANEL_COLS)
    }

    #[test]
    fn new_is_black() {
        let fb = PanelBuffer::new();
        assert!(all_cells().all(|(r, c)| fb.get_pixel(r, c) == Color::Black));
        assert_eq!(fb, PanelBuffer::default());
        assert_eq!(fb.rows(), 32);
        assert_eq!(fb.cols(), 64);
    }

    #[test]
    fn clear() {
        let mut fb = PanelBuffer::new();
        fb.fill(Color::White);
        fb.set_pixel(3, 9, Color::Cyan);
        fb.clear();
        assert!(all_cells().all(|(r, c)| fb.get_pixel(r, c) == Color::Black));
        fb.clear();
        assert!(all_cells().all(|(r, c)| fb.get_pixel(r, c) == Color::Black));
    }

    #[test]
    fn set_then_get() {
        let mut fb = PanelBuffer::new();
        for (r, c) in all_cells() {
            for &color in Color::ALL.iter() {
                fb.set_pixel(r, c, color);
                assert_eq!(fb.get_pixel(r, c), color);
            }
        }
    }

    #[test]
    fn set_pixel_touches_one_cell() {
        let mut fb = PanelBuffer::new();
        fb.set_pixel(31, 0, Color::Magenta);
        for (r, c) in all_cells() {
            let expected = if (r, c) == (31, 0) {
                Color::Magenta
            } else {
                Color::Black
            };
            assert_eq!(fb.get_pixel(r, c), expected);
        }
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = PanelBuffer::new();
        fb.fill(Color::Green);
        let before = fb.clone();
        fb.set_pixel(PANEL_ROWS, 0, Color::Red);
        fb.set_pixel(0, PANEL_COLS, Color::Red);
        fb.set_pixel(PANEL_ROWS, PANEL_COLS, Color::Red);
        fb.set_pixel(usize::max_value(), 5, Color::Red);
        fb.fill_row(PANEL_ROWS, Color::Red);
        assert_eq!(fb, before);
    }

    #[test]
    fn fill_row() {
        let mut fb = PanelBuffer::new();
        fb.fill_row(7, Color::Blue);
        for (r, c) in all_cells() {
            let expected = if r == 7 { Color::Blue } else { Color::Black };
            assert_eq!(fb.get_pixel(r, c), expected);
        }
        assert!(fb.row(7).iter().all(|&c| c == Color::Blue));
    }
}
