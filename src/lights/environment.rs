// Copyright @genoise 2026

use crate::core::interaction::Interaction;
use crate::core::light::{Light, LightSample};
use crate::math::constants::{Float, Vector2f, Vector3f, INV_TWO_PI};
use crate::math::frame::{build_tangent_frame, local_to_world};
use crate::math::spectrum::ColorSpectrum;
use crate::math::warp::sample_uniform_hemisphere;

/// Constant-radiance environment enclosing the scene. Directions are
/// drawn uniformly over the hemisphere above the shaded point.
pub struct EnvironmentLight {
    radiance: ColorSpectrum,
}

impl EnvironmentLight {
    pub fn new(radiance: ColorSpectrum) -> Self {
        Self { radiance }
    }
}

impl Light for EnvironmentLight {
    fn is_infinite(&self) -> bool {
        true
    }

    fn sample(&self, it: &Interaction, u: &Vector2f) -> Option<LightSample> {
        let n = if it.w_e().dot(&it.n()) >= 0.0 { it.n() } else { -it.n() };
        let (t, b) = build_tangent_frame(&n);
        let local = sample_uniform_hemisphere(u);
        Some(LightSample {
            wi: local_to_world(&local, &t, &b, &n),
            pdf: INV_TWO_PI,
            radiance: self.radiance,
            distance: std::f32::INFINITY,
        })
    }

    fn pdf(&self, it: &Interaction, wi: &Vector3f) -> Float {
        let n = if it.w_e().dot(&it.n()) >= 0.0 { it.n() } else { -it.n() };
        if n.dot(wi) > 0.0 {
            INV_TWO_PI
        } else {
            0.0
        }
    }

    fn escaped_radiance(&self, _dir: &Vector3f) -> ColorSpectrum {
        self.radiance
    }
}

/* Tests for EnvironmentLight */
