// Copyright @genoise 2026

use crate::core::interaction::Interaction;
use crate::core::material::{DirectionSample, Material};
use crate::core::sample::Sample;
use crate::math::constants::{Float, Vector3f, INV_PI};
use crate::math::frame::{build_tangent_frame, local_to_world};
use crate::math::spectrum::ColorSpectrum;
use crate::math::warp::{sample_cosine_hemisphere, sample_cosine_hemisphere_pdf};

/// Ideal diffuse reflector with reflectance `albedo`.
pub struct Lambertian {
    albedo: ColorSpectrum,
}

impl Lambertian {
    pub fn new(albedo: ColorSpectrum) -> Self {
        Self { albedo }
    }

    // Shading normal on the eye side of the surface.
    fn facing_normal(it: &Interaction) -> Vector3f {
        if it.w_e().dot(&it.n()) >= 0.0 {
            it.n()
        } else {
            -it.n()
        }
    }
}

impl Material for Lambertian {
    fn is_reflective(&self) -> bool {
        true
    }

    fn sample_reflection(&self, it: &Interaction, sample: &mut Sample) -> Option<DirectionSample> {
        let n = Self::facing_normal(it);
        let (t, b) = build_tangent_frame(&n);
        let local = sample_cosine_hemisphere(&sample.next_2d());
        let wi = local_to_world(&local, &t, &b, &n);
        let pdf = sample_cosine_hemisphere_pdf(local.z.max(0.0));
        if pdf <= 0.0 {
            return None;
        }
        Some(DirectionSample {
            wi,
            pdf,
            value: self.albedo * INV_PI,
        })
    }

    fn reflection_pdf(&self, it: &Interaction, wi: &Vector3f) -> Float {
        let cos_theta = Self::facing_normal(it).dot(wi);
        if cos_theta <= 0.0 {
            0.0
        } else {
            sample_cosine_hemisphere_pdf(cos_theta)
        }
    }

    fn eval_reflection(&self, it: &Interaction, wi: &Vector3f) -> ColorSpectrum {
        if Self::facing_normal(it).dot(wi) <= 0.0 {
            ColorSpectrum::default()
        } else {
            self.albedo * INV_PI
        }
    }
}

/* Tests for Lambertian */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interaction::SurfaceHit;
    use crate::core::primitive::Primitive;
    use crate::math::constants::Vector2f;
    use crate::math::ray::Ray3f;
    use crate::math::spectrum::Spectrum;
    use crate::shapes::sphere::Sphere;
    use std::sync::Arc;

    fn test_interaction() -> Interaction {
        let sphere = Sphere::new(Vector3f::new(0.0, 0.0, 1.0), 1.0);
        let primitive = Arc::new(Primitive::new(Arc::new(sphere), None));
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, -2.0),
                             Vector3f::new(0.0, 0.0, 1.0), None, None);
        let hit = SurfaceHit::new(Vector3f::zeros(),
                                  Vector3f::new(0.0, 0.0, -1.0),
                                  Vector2f::new(0.0, 0.0), 2.0);
        Interaction::new(primitive, hit, ray)
    }

    #[test]
    fn test_sampled_directions_carry_consistent_pdf() {
        let material = Lambertian::new(ColorSpectrum::splat(0.8));
        let it = test_interaction();
        let mut sample = crate::core::sample::Sample::new(
            0, 0, 0.5, 0.5, 0.5, 0.5, 0.0, Vec::new(), Vec::new(), 3);

        for _ in 0..64 {
            let ds = material.sample_reflection(&it, &mut sample).expect("sample");
            assert!(ds.pdf > 0.0);
            // The evaluator agrees with the density the sampler reported.
            let eval_pdf = material.reflection_pdf(&it, &ds.wi);
            assert!((eval_pdf - ds.pdf).abs() < 1e-4);
            // Reflected directions stay on the eye side.
            assert!(it.n().dot(&ds.wi) >= -1e-5);
        }
    }

    #[test]
    fn test_backfacing_directions_have_zero_density_and_value() {
        let material = Lambertian::new(ColorSpectrum::splat(0.8));
        let it = test_interaction();
        let behind = Vector3f::new(0.0, 0.0, 1.0);
        assert_eq!(material.reflection_pdf(&it, &behind), 0.0);
        assert!(material.eval_reflection(&it, &behind).is_black());
        assert!(!material.is_delta());
        assert!(!material.is_transmissive());
    }
}
