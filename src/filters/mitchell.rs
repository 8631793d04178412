// Copyright @genoise 2026

use crate::core::filter::Filter;
use crate::math::constants::Float;

/// Mitchell-Netravali piecewise cubic over a 2-pixel half-width. The
/// outer lobe goes slightly negative; those weights are part of the
/// reconstruction and are accumulated as-is, never clamped.
pub struct MitchellFilter {
    b: Float,
    c: Float,
}

impl Default for MitchellFilter {
    fn default() -> Self {
        Self::new(1.0 / 3.0, 1.0 / 3.0)
    }
}

impl MitchellFilter {
    pub fn new(b: Float, c: Float) -> Self {
        Self { b, c }
    }

    fn mitchell_1d(&self, x: Float) -> Float {
        let x = x.abs();
        if x >= 2.0 {
            return 0.0;
        }

        let (b, c) = (self.b, self.c);
        if x < 1.0 {
            ((12.0 - 9.0 * b - 6.0 * c) * x * x * x
                + (-18.0 + 12.0 * b + 6.0 * c) * x * x
                + (6.0 - 2.0 * b)) / 6.0
        } else {
            ((-b - 6.0 * c) * x * x * x
                + (6.0 * b + 30.0 * c) * x * x
                + (-12.0 * b - 48.0 * c) * x
                + (8.0 * b + 24.0 * c)) / 6.0
        }
    }
}

impl Filter for MitchellFilter {
    fn extent_x(&self) -> usize {
        2
    }

    fn extent_y(&self) -> usize {
        2
    }

    fn is_contributing(&self, dx: Float, dy: Float) -> bool {
        dx.abs() < 2.0 && dy.abs() < 2.0
    }

    fn contribution(&self, dx: Float, dy: Float) -> Float {
        self.mitchell_1d(dx) * self.mitchell_1d(dy)
    }
}

/* Tests for MitchellFilter */
