// Copyright @genoise 2026

use super::constants::Vector4f;

use std::ops;
use std::vec::Vec;

/// Display raster. Pixels are linear RGBA; alpha 0 marks "no data"
/// (transparent black), which is what zero-weight film pixels produce.
#[derive(Debug, Clone)]
pub struct Bitmap {
    data: Vec<Vector4f>,
    height: usize,
    width: usize,
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = Vector4f;

    fn index(&self, index: (usize, usize)) -> &Vector4f {
        assert!(index.0 < self.width && index.1 < self.height);
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Vector4f {
        assert!(index.0 < self.width && index.1 < self.height);
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_number = width * height;
        Self { data: vec![Vector4f::new(0.0, 0.0, 0.0, 0.0); pixel_number],
               width,
               height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Copy of the `[x0, x0 + w) x [y0, y0 + h)` sub-rectangle.
    pub fn crop(&self, x0: usize, y0: usize, w: usize, h: usize) -> Bitmap {
        assert!(x0 + w <= self.width && y0 + h <= self.height);
        let mut out = Bitmap::new(w, h);
        for y in 0..h {
            for x in 0..w {
                out[(x, y)] = self[(x0 + x, y0 + y)];
            }
        }
        out
    }

    /// Unweighted overlay: every covered pixel of `other` replaces the
    /// corresponding pixel here. Transparent pixels of `other` are skipped
    /// so a partial render does not erase neighbouring regions.
    pub fn overlay(&mut self, other: &Bitmap, x0: usize, y0: usize) {
        for y in 0..other.height {
            for x in 0..other.width {
                let dst_x = x0 + x;
                let dst_y = y0 + y;
                if dst_x >= self.width || dst_y >= self.height {
                    continue;
                }
                let pixel = other[(x, y)];
                if pixel[3] > 0.0 {
                    self[(dst_x, dst_y)] = pixel;
                }
            }
        }
    }
}

/* Test for Bitmap */
