// Copyright @genoise 2026

use crate::core::interaction::Interaction;
use crate::core::sample::Sample;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::ColorSpectrum;

/// One stochastic draw from a material lobe: a world-space direction, the
/// density it was drawn with, and the lobe value for that direction.
#[derive(Debug, Clone, Copy)]
pub struct DirectionSample {
    pub wi: Vector3f,
    pub pdf: Float,
    pub value: ColorSpectrum,
}

/// Scattering contract. The three capabilities are independent: a
/// material may be any combination of reflective, transmissive and
/// emissive, and the integrator queries each flag before touching the
/// matching operations. Densities of 0 must translate into exactly zero
/// contribution on the caller's side, never NaN.
pub trait Material: Send + Sync {
    fn is_reflective(&self) -> bool {
        false
    }

    fn is_transmissive(&self) -> bool {
        false
    }

    fn is_emissive(&self) -> bool {
        false
    }

    /// Perfectly specular lobes have zero-measure densities; direct
    /// lighting is skipped for them and folded into the indirect term.
    fn is_delta(&self) -> bool {
        false
    }

    fn sample_reflection(&self, _it: &Interaction, _sample: &mut Sample) -> Option<DirectionSample> {
        None
    }

    /// Density the reflection sampler would have assigned to `wi`.
    fn reflection_pdf(&self, _it: &Interaction, _wi: &Vector3f) -> Float {
        0.0
    }

    /// Lobe value for a given direction, used by next-event estimation.
    fn eval_reflection(&self, _it: &Interaction, _wi: &Vector3f) -> ColorSpectrum {
        ColorSpectrum::default()
    }

    fn sample_transmission(&self, _it: &Interaction, _sample: &mut Sample) -> Option<DirectionSample> {
        None
    }

    fn transmission_pdf(&self, _it: &Interaction, _wi: &Vector3f) -> Float {
        0.0
    }

    /// Radiance emitted toward the eye vector of the interaction.
    fn emitted(&self, _it: &Interaction) -> ColorSpectrum {
        ColorSpectrum::default()
    }
}
