// Copyright @genoise 2026

use crate::core::interaction::Interaction;
use crate::core::light::{Light, LightSample};
use crate::core::primitive::Primitive;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::ColorSpectrum;
use std::sync::Arc;

/// Light emitted by the surface of `primitive`. Samples are drawn on the
/// facing side of the shape and their area density is converted to a
/// solid-angle density at the shaded point.
pub struct AreaLight {
    primitive: Arc<Primitive>,
    radiance: ColorSpectrum,
    sample_count: u32,
}

impl AreaLight {
    pub fn new(primitive: Arc<Primitive>, radiance: ColorSpectrum) -> Self {
        Self::with_sample_count(primitive, radiance, 1)
    }

    pub fn with_sample_count(primitive: Arc<Primitive>,
                             radiance: ColorSpectrum,
                             sample_count: u32) -> Self {
        Self { primitive, radiance, sample_count }
    }
}

impl Light for AreaLight {
    fn sample_count(&self) -> u32 {
        self.sample_count
    }

    fn sample(&self, it: &Interaction, u: &Vector2f) -> Option<LightSample> {
        let shape = self.primitive.shape();

        if shape.supports_solid_angle_sampling() {
            if let Some(s) = shape.sample_solid_angle(&it.p(), u) {
                if s.pdf <= 0.0 {
                    return None;
                }
                // Distance to the surface along the sampled direction.
                let probe = Ray3f::new(it.p(), s.dir, Some(0.0), None);
                let distance = match shape.ray_intersection(&probe) {
                    Some(hit) => hit.t(),
                    None => return None,
                };
                return Some(LightSample {
                    wi: s.dir,
                    pdf: s.pdf,
                    radiance: self.radiance,
                    distance,
                });
            }
        }

        let s = shape.sample_toward(&it.p(), u);
        if s.pdf <= 0.0 {
            return None;
        }
        let to_light = s.p - it.p();
        let distance2 = to_light.dot(&to_light);
        if distance2 < 1e-12 {
            return None;
        }
        let distance = distance2.sqrt();
        let wi = to_light / distance;
        let cos_light = s.n.dot(&-wi);
        if cos_light <= 0.0 {
            return None;
        }
        Some(LightSample {
            wi,
            pdf: s.pdf * distance2 / cos_light,
            radiance: self.radiance,
            distance,
        })
    }

    fn pdf(&self, it: &Interaction, wi: &Vector3f) -> Float {
        let shape = self.primitive.shape();
        let probe = Ray3f::new(it.p(), *wi, Some(0.0), None);
        let hit = match shape.ray_intersection(&probe) {
            Some(hit) => hit,
            None => return 0.0,
        };
        let cos_light = hit.n().dot(&-wi);
        if cos_light <= 0.0 {
            return 0.0;
        }
        // sample_toward draws uniformly over the region it covers, so its
        // density does not depend on the random numbers.
        let area_pdf = shape.sample_toward(&it.p(), &Vector2f::new(0.5, 0.5)).pdf;
        area_pdf * hit.t() * hit.t() / cos_light
    }

    fn primitive(&self) -> Option<&Arc<Primitive>> {
        Some(&self.primitive)
    }
}

/* Tests for AreaLight */
