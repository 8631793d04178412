// Copyright @genoise 2026

use crate::core::interaction::Interaction;
use crate::core::material::{DirectionSample, Material};
use crate::core::sample::Sample;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::ColorSpectrum;

use super::mirror::reflect;

/// Smooth dielectric with Fresnel-weighted reflection and refraction.
/// Both lobes are delta distributions.
pub struct Glass {
    reflectance: ColorSpectrum,
    transmittance: ColorSpectrum,
    ior: Float,
}

impl Glass {
    pub fn new(reflectance: ColorSpectrum, transmittance: ColorSpectrum, ior: Float) -> Self {
        Self { reflectance, transmittance, ior }
    }

    // Unpolarized Fresnel reflectance for a dielectric interface.
    fn fresnel(cos_i: Float, eta_i: Float, eta_t: Float) -> Float {
        let sin2_t = (eta_i / eta_t) * (eta_i / eta_t) * (1.0 - cos_i * cos_i);
        if sin2_t >= 1.0 {
            return 1.0;
        }
        let cos_t = (1.0 - sin2_t).sqrt();
        let r_parallel = (eta_t * cos_i - eta_i * cos_t) / (eta_t * cos_i + eta_i * cos_t);
        let r_perpendicular = (eta_i * cos_i - eta_t * cos_t) / (eta_i * cos_i + eta_t * cos_t);
        0.5 * (r_parallel * r_parallel + r_perpendicular * r_perpendicular)
    }

    // Normal on the eye side plus the index pair for that orientation.
    fn interface(&self, it: &Interaction) -> (Vector3f, Float, Float) {
        if it.w_e().dot(&it.n()) >= 0.0 {
            (it.n(), 1.0, self.ior)
        } else {
            (-it.n(), self.ior, 1.0)
        }
    }
}

impl Material for Glass {
    fn is_reflective(&self) -> bool {
        true
    }

    fn is_transmissive(&self) -> bool {
        true
    }

    fn is_delta(&self) -> bool {
        true
    }

    fn sample_reflection(&self, it: &Interaction, _sample: &mut Sample) -> Option<DirectionSample> {
        let (n, eta_i, eta_t) = self.interface(it);
        let cos_i = n.dot(&it.w_e()).min(1.0);
        let f = Self::fresnel(cos_i, eta_i, eta_t);
        let wi = reflect(&it.w_e(), &n);
        let cos_theta = n.dot(&wi).abs().max(1e-6);
        Some(DirectionSample {
            wi,
            pdf: 1.0,
            value: self.reflectance * (f / cos_theta),
        })
    }

    fn sample_transmission(&self, it: &Interaction, _sample: &mut Sample) -> Option<DirectionSample> {
        let (n, eta_i, eta_t) = self.interface(it);
        let cos_i = n.dot(&it.w_e()).min(1.0);
        let eta = eta_i / eta_t;
        let sin2_t = eta * eta * (1.0 - cos_i * cos_i);
        if sin2_t >= 1.0 {
            // Total internal reflection.
            return None;
        }
        let cos_t = (1.0 - sin2_t).sqrt();
        let wi = -it.w_e() * eta + n * (eta * cos_i - cos_t);
        let f = Self::fresnel(cos_i, eta_i, eta_t);
        Some(DirectionSample {
            wi,
            pdf: 1.0,
            value: self.transmittance * ((1.0 - f) / cos_t.max(1e-6)),
        })
    }
}

/* Tests for Glass */

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

    fn interaction(origin: Vector3f, dir: Vector3f, n: Vector3f) -> Interaction {
        let sphere = Sphere::new(Vector3f::zeros(), 1.0);
        let primitive = Arc::new(Primitive::new(Arc::new(sphere), None));
        let ray = Ray3f::new(origin, dir, None, None);
        let hit = SurfaceHit::new(Vector3f::zeros(), n, Vector2f::new(0.0, 0.0), 1.0);
        Interaction::new(primitive, hit, ray)
    }

    #[test]
    fn test_normal_incidence_splits_by_fresnel() {
        let glass = Glass::new(ColorSpectrum::splat(1.0), ColorSpectrum::splat(1.0), 1.5);
        let it = interaction(Vector3f::new(0.0, 0.0, -1.0),
                             Vector3f::new(0.0, 0.0, 1.0),
                             Vector3f::new(0.0, 0.0, -1.0));
        let mut sample = crate::core::sample::Sample::new(
            0, 0, 0.5, 0.5, 0.5, 0.5, 0.0, Vec::new(), Vec::new(), 1);

        // At normal incidence with ior 1.5 the Fresnel term is 4%.
        let refl = glass.sample_reflection(&it, &mut sample).expect("reflection");
        assert!((refl.value.luminance() - 0.04).abs() < 1e-3);
        assert!((refl.wi - Vector3f::new(0.0, 0.0, -1.0)).norm() < 1e-5);

        let trans = glass.sample_transmission(&it, &mut sample).expect("transmission");
        assert!((trans.value.luminance() - 0.96).abs() < 1e-3);
        assert!((trans.wi - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn test_total_internal_reflection_suppresses_transmission() {
        let glass = Glass::new(ColorSpectrum::splat(1.0), ColorSpectrum::splat(1.0), 1.5);
        // Grazing exit from inside the dense medium, beyond the critical angle.
        let dir = Vector3f::new(0.9, 0.0, -0.436).normalize();
        let it = interaction(Vector3f::new(0.0, 0.0, -1.0) - dir, dir,
                             Vector3f::new(0.0, 0.0, -1.0));
        let mut sample = crate::core::sample::Sample::new(
            0, 0, 0.5, 0.5, 0.5, 0.5, 0.0, Vec::new(), Vec::new(), 1);

        assert!(glass.sample_transmission(&it, &mut sample).is_none());
        // Everything reflects instead.
        let refl = glass.sample_reflection(&it, &mut sample).expect("reflection");
        assert!(refl.value.luminance() > 1.0);
    }

    #[test]
    fn test_refracted_direction_bends_toward_the_normal() {
        let glass = Glass::new(ColorSpectrum::splat(1.0), ColorSpectrum::splat(1.0), 1.5);
        // Incidence at 30 degrees from vacuum.
        let dir = Vector3f::new(0.5, 0.0, (1.0 - 0.25_f32).sqrt());
        let it = interaction(-dir, dir, Vector3f::new(0.0, 0.0, -1.0));
        let mut sample = crate::core::sample::Sample::new(
            0, 0, 0.5, 0.5, 0.5, 0.5, 0.0, Vec::new(), Vec::new(), 1);

        let trans = glass.sample_transmission(&it, &mut sample).expect("transmission");
        // Snell's law: sin_t = sin_i / 1.5.
        let sin_i = dir.x;
        let sin_t = trans.wi.x;
        assert!((sin_t - sin_i / 1.5).abs() < 1e-4);
        assert!(trans.wi.z > 0.0);
    }
}
