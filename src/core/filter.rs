// Copyright @genoise 2026

use crate::math::constants::Float;

/// Reconstruction filter. Offsets are measured from the sample position
/// to a pixel center, in pixels. Weights may be negative (the Mitchell
/// filter's outer lobe is) and must be accumulated as-is.
pub trait Filter: Send + Sync {
    /// Footprint half-width in whole pixels along x.
    fn extent_x(&self) -> usize;

    /// Footprint half-width in whole pixels along y.
    fn extent_y(&self) -> usize;

    fn is_contributing(&self, dx: Float, dy: Float) -> bool;

    fn contribution(&self, dx: Float, dy: Float) -> Float;
}
