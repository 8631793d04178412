// Copyright @genoise 2026

use crate::core::interaction::Interaction;
use crate::core::primitive::Primitive;
use crate::core::scene::Scene;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::spectrum::ColorSpectrum;
use std::sync::Arc;

/// One stochastic draw toward a light: the unit direction from the shaded
/// point, the density of the draw, the incident radiance with the
/// per-source geometric terms (cosine at the light, inverse-square
/// falloff) already folded in, and the distance to the sampled point
/// (infinite for environment sources).
#[derive(Debug, Clone, Copy)]
pub struct LightSample {
    pub wi: Vector3f,
    pub pdf: Float,
    pub radiance: ColorSpectrum,
    pub distance: Float,
}

pub trait Light: Send + Sync {
    /// Zero-measure source: exactly one sample per evaluation, density 1.
    fn is_delta(&self) -> bool {
        false
    }

    /// Environment source enclosing the scene.
    fn is_infinite(&self) -> bool {
        false
    }

    /// How many samples direct lighting should draw from this source.
    fn sample_count(&self) -> u32 {
        1
    }

    fn sample(&self, it: &Interaction, u: &Vector2f) -> Option<LightSample>;

    /// Density the sampler would assign to direction `wi` from `it`.
    fn pdf(&self, it: &Interaction, wi: &Vector3f) -> Float;

    /// Radiance carried by a ray that left the scene along `dir`.
    /// Non-zero only for environment sources.
    fn escaped_radiance(&self, _dir: &Vector3f) -> ColorSpectrum {
        ColorSpectrum::default()
    }

    /// Physical representation of this light in the scene, if any; shadow
    /// rays ignore it so the light cannot occlude itself.
    fn primitive(&self) -> Option<&Arc<Primitive>> {
        None
    }

    /// Shadow-ray visibility through the scene's acceleration structure.
    fn visible(&self, it: &Interaction, light_sample: &LightSample, scene: &Scene) -> bool {
        let max_t = if light_sample.distance.is_finite() {
            Some(light_sample.distance - scene.epsilon())
        } else {
            None
        };
        let shadow_ray = it.ray().spawn(it.p(), light_sample.wi,
                                        Some(scene.epsilon()), max_t);
        scene.interaction(&shadow_ray, self.primitive()).is_none()
    }
}
