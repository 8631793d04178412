// Copyright @genoise 2026

use crate::core::interaction::Interaction;
use crate::core::material::Material;
use crate::math::spectrum::ColorSpectrum;

/// Surface that emits `radiance` from its front side. Attach the hosting
/// primitive to an `AreaLight` so direct light sampling can see it too.
pub struct Emissive {
    radiance: ColorSpectrum,
    two_sided: bool,
}

impl Emissive {
    pub fn new(radiance: ColorSpectrum) -> Self {
        Self { radiance, two_sided: false }
    }

    pub fn two_sided(radiance: ColorSpectrum) -> Self {
        Self { radiance, two_sided: true }
    }

    pub fn radiance(&self) -> ColorSpectrum {
        self.radiance
    }
}

impl Material for Emissive {
    fn is_emissive(&self) -> bool {
        true
    }

    fn emitted(&self, it: &Interaction) -> ColorSpectrum {
        if self.two_sided || it.w_e().dot(&it.n()) > 0.0 {
            self.radiance
        } else {
            ColorSpectrum::default()
        }
    }
}

/* Tests for Emissive */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interaction::SurfaceHit;
    use crate::core::primitive::Primitive;
    use crate::math::constants::{Vector2f, Vector3f};
    use crate::math::ray::Ray3f;
    use crate::math::spectrum::Spectrum;
    use crate::shapes::sphere::Sphere;
    use std::sync::Arc;

    fn interaction(ray_dir: Vector3f, n: Vector3f) -> Interaction {
        let sphere = Sphere::new(Vector3f::zeros(), 1.0);
        let primitive = Arc::new(Primitive::new(Arc::new(sphere), None));
        let ray = Ray3f::new(-ray_dir, ray_dir, None, None);
        let hit = SurfaceHit::new(Vector3f::zeros(), n, Vector2f::new(0.0, 0.0), 1.0);
        Interaction::new(primitive, hit, ray)
    }

    #[test]
    fn test_emission_is_one_sided_by_default() {
        let material = Emissive::new(ColorSpectrum::splat(5.0));
        assert!(material.is_emissive());

        let front = interaction(Vector3f::new(0.0, 0.0, 1.0), Vector3f::new(0.0, 0.0, -1.0));
        assert!((material.emitted(&front).luminance() - 5.0).abs() < 1e-5);

        let back = interaction(Vector3f::new(0.0, 0.0, -1.0), Vector3f::new(0.0, 0.0, -1.0));
        assert!(material.emitted(&back).is_black());

        let both = Emissive::two_sided(ColorSpectrum::splat(5.0));
        assert!(!both.emitted(&back).is_black());
    }
}
