// Copyright @genoise 2026

use crate::core::interaction::Interaction;
use crate::core::material::{DirectionSample, Material};
use crate::core::sample::Sample;
use crate::math::constants::Vector3f;
use crate::math::spectrum::ColorSpectrum;

/// Perfect specular reflector. The reflection lobe is a Dirac delta, so
/// `reflection_pdf` and `eval_reflection` keep their zero defaults and the
/// integrator skips light sampling on this surface.
pub struct Mirror {
    reflectance: ColorSpectrum,
}

impl Mirror {
    pub fn new(reflectance: ColorSpectrum) -> Self {
        Self { reflectance }
    }
}

pub(crate) fn reflect(w: &Vector3f, n: &Vector3f) -> Vector3f {
    n * (2.0 * n.dot(w)) - w
}

impl Material for Mirror {
    fn is_reflective(&self) -> bool {
        true
    }

    fn is_delta(&self) -> bool {
        true
    }

    fn sample_reflection(&self, it: &Interaction, _sample: &mut Sample) -> Option<DirectionSample> {
        let n = if it.w_e().dot(&it.n()) >= 0.0 { it.n() } else { -it.n() };
        let wi = reflect(&it.w_e(), &n);
        let cos_theta = n.dot(&wi).abs().max(1e-6);
        Some(DirectionSample {
            wi,
            pdf: 1.0,
            // The cosine applied by the estimator cancels here.
            value: self.reflectance * (1.0 / cos_theta),
        })
    }
}

/* Tests for Mirror */

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

    #[test]
    fn test_mirror_reflects_about_the_normal() {
        let sphere = Sphere::new(Vector3f::zeros(), 1.0);
        let primitive = Arc::new(Primitive::new(Arc::new(sphere), None));
        let dir = Vector3f::new(1.0, -1.0, 0.0).normalize();
        let ray = Ray3f::new(Vector3f::new(-1.0, 1.0, 0.0), dir, None, None);
        let hit = SurfaceHit::new(Vector3f::zeros(),
                                  Vector3f::new(0.0, 1.0, 0.0),
                                  Vector2f::new(0.0, 0.0), 1.0);
        let it = Interaction::new(primitive, hit, ray);

        let mirror = Mirror::new(ColorSpectrum::splat(0.9));
        assert!(mirror.is_delta());

        let mut sample = crate::core::sample::Sample::new(
            0, 0, 0.5, 0.5, 0.5, 0.5, 0.0, Vec::new(), Vec::new(), 1);
        let ds = mirror.sample_reflection(&it, &mut sample).expect("delta sample");
        let expected = Vector3f::new(1.0, 1.0, 0.0).normalize();
        assert!((ds.wi - expected).norm() < 1e-5);
        assert_eq!(ds.pdf, 1.0);

        // The delta lobe is invisible to direction queries.
        assert_eq!(mirror.reflection_pdf(&it, &expected), 0.0);
        assert!(mirror.eval_reflection(&it, &expected).is_black());
    }
}
