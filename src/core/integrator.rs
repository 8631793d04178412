// Copyright @genoise 2026

use crate::core::sample::Sample;
use crate::core::scene::Scene;
use crate::math::ray::Ray3f;
use crate::math::spectrum::ColorSpectrum;

/// Radiance estimator for one traced ray. `estimate` is a pure,
/// stack-recursive computation over one sample; the only shared state it
/// touches is the scene's read-only acceleration structure, so estimates
/// are safe to run in parallel without coordination.
pub trait Integrator: Send + Sync {
    fn estimate(&self, scene: &Scene, ray: &Ray3f, sample: &mut Sample) -> ColorSpectrum;
}
