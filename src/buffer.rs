use image::{Rgba, RgbaImage};

/// Low-resolution grid of per-cell colors, one contiguous allocation.
/// Indexed `(row, col)` with row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorBuffer {
    img: RgbaImage,
}

impl ColorBuffer {
    pub fn new(rows: usize, cols: usize, fill: Rgba<u8>) -> Self {
        Self { img: RgbaImage::from_pixel(cols as u32, rows as u32, fill) }
    }

    pub fn rows(&self) -> usize { self.img.height() as usize }
    pub fn cols(&self) -> usize { self.img.width() as usize }

    pub fn get(&self, row: usize, col: usize) -> Rgba<u8> {
        *self.img.get_pixel(col as u32, row as u32)
    }

    pub fn set(&mut self, row: usize, col: usize, color: Rgba<u8>) {
        self.img.put_pixel(col as u32, row as u32, color);
    }

    /// Cells in row-major order as `(row, col, color)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Rgba<u8>)> + '_ {
        self.img.enumerate_pixels().map(|(x, y, p)| (y as usize, x as usize, *p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREY: Rgba<u8> = Rgba([100, 100, 100, 255]);

    #[test]
    fn indexes_by_row_then_column() {
        let mut b = ColorBuffer::new(2, 3, GREY);
        assert_eq!((b.rows(), b.cols()), (2, 3));
        b.set(1, 2, RED);
        assert_eq!(b.get(1, 2), RED);
        assert_eq!(b.get(0, 2), GREY);
    }

    #[test]
    fn cells_walk_row_major() {
        let mut b = ColorBuffer::new(2, 2, GREY);
        b.set(0, 1, RED);
        let order: Vec<_> = b.cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(b.cells().filter(|&(_, _, p)| p == RED).count(), 1);
    }
}
