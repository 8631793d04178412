// Copyright @genoise 2026

use crate::core::sample::Sample;
use crate::math::ray::Ray3f;

/// Maps a film sample (film position plus lens position) to a primary
/// ray in world space.
pub trait Camera: Send + Sync {
    fn generate_ray(&self, sample: &Sample) -> Ray3f;

    /// Film resolution in pixels.
    fn resolution(&self) -> (usize, usize);
}
