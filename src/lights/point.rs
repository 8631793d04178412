// Copyright @genoise 2026

use crate::core::interaction::Interaction;
use crate::core::light::{Light, LightSample};
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::spectrum::ColorSpectrum;

/// Isotropic point source with intensity `i` (power per solid angle).
/// A delta light: the single useful direction has density 1 and the
/// inverse-square falloff is folded into the returned radiance.
pub struct PointLight {
    position: Vector3f,
    intensity: ColorSpectrum,
}

impl PointLight {
    pub fn new(position: Vector3f, intensity: ColorSpectrum) -> Self {
        Self { position, intensity }
    }
}

impl Light for PointLight {
    fn is_delta(&self) -> bool {
        true
    }

    fn sample(&self, it: &Interaction, _u: &Vector2f) -> Option<LightSample> {
        let to_light = self.position - it.p();
        let distance2 = to_light.dot(&to_light);
        if distance2 < 1e-12 {
            return None;
        }
        let distance = distance2.sqrt();
        Some(LightSample {
            wi: to_light / distance,
            pdf: 1.0,
            radiance: self.intensity * (1.0 / distance2),
            distance,
        })
    }

    fn pdf(&self, _it: &Interaction, _wi: &Vector3f) -> Float {
        // A chosen direction never hits a zero-measure source.
        0.0
    }
}

/* Tests for PointLight */
