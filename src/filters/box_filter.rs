// Copyright @genoise 2026

use crate::core::filter::Filter;
use crate::math::constants::Float;

/// Uniform weight over a square footprint. With extent `e` a sample
/// deposits into exactly (2e + 1)^2 pixels.
pub struct BoxFilter {
    extent: usize,
    radius: Float,
}

impl BoxFilter {
    pub fn new(extent: usize) -> Self {
        Self { extent, radius: extent as Float + 0.5 }
    }
}

impl Filter for BoxFilter {
    fn extent_x(&self) -> usize {
        self.extent
    }

    fn extent_y(&self) -> usize {
        self.extent
    }

    fn is_contributing(&self, dx: Float, dy: Float) -> bool {
        dx.abs() <= self.radius && dy.abs() <= self.radius
    }

    fn contribution(&self, dx: Float, dy: Float) -> Float {
        if self.is_contributing(dx, dy) {
            1.0
        } else {
            0.0
        }
    }
}

/* Tests for BoxFilter */
