// Copyright @genoise 2026

use crate::core::integrator::Integrator;
use crate::core::interaction::Interaction;
use crate::core::sample::Sample;
use crate::core::scene::Scene;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::{ColorSpectrum, Spectrum};

use super::path::PathIntegrator;

/// Variant of the path tracer that averages several indirect draws at the
/// first bounce instead of tracing a single path. Splitting at the camera
/// vertex trades depth for width; deeper vertices fall back to one draw.
pub struct MonteCarloIntegrator {
    inner: PathIntegrator,
    indirect_samples: u32,
}

impl MonteCarloIntegrator {
    pub fn new(max_depth: u32, indirect_samples: u32) -> Self {
        Self {
            inner: PathIntegrator::new(max_depth),
            indirect_samples: indirect_samples.max(1),
        }
    }

    pub fn indirect_samples(&self) -> u32 {
        self.indirect_samples
    }

    fn facing_normal(it: &Interaction) -> Vector3f {
        if it.w_e().dot(&it.n()) >= 0.0 {
            it.n()
        } else {
            -it.n()
        }
    }
}

impl Integrator for MonteCarloIntegrator {
    fn estimate(&self, scene: &Scene, ray: &Ray3f, sample: &mut Sample) -> ColorSpectrum {
        if ray.depth() >= self.inner.max_depth() {
            return ColorSpectrum::default();
        }

        let it = match scene.interaction(ray, None) {
            Some(it) => it,
            // A camera ray that leaves the scene collects the environment.
            None => return self.inner.trace(scene, ray, sample, true),
        };
        let material = match it.primitive().material() {
            Some(material) => material.clone(),
            None => return ColorSpectrum::default(),
        };

        let mut radiance = material.emitted(&it);

        if material.is_reflective() {
            if !material.is_delta() {
                radiance += PathIntegrator::direct_lighting(
                    scene, &it, material.as_ref(), sample);
            }
            let mut indirect = ColorSpectrum::default();
            for _ in 0..self.indirect_samples {
                if let Some(ds) = material.sample_reflection(&it, sample) {
                    if ds.pdf > 0.0 && !ds.value.is_black() {
                        let cos_theta = Self::facing_normal(&it).dot(&ds.wi);
                        if cos_theta > 0.0 {
                            let bounce = ray.spawn(it.p(), ds.wi,
                                                   Some(scene.epsilon()), None);
                            let incoming = self.inner.trace(scene, &bounce, sample,
                                                            material.is_delta());
                            indirect += incoming * ds.value * (cos_theta / ds.pdf);
                        }
                    }
                }
            }
            radiance += indirect * (1.0 / self.indirect_samples as Float);
        }

        if material.is_transmissive() {
            if let Some(ds) = material.sample_transmission(&it, sample) {
                if ds.pdf > 0.0 && !ds.value.is_black() {
                    let cos_theta = Self::facing_normal(&it).dot(&ds.wi).abs();
                    if cos_theta > 0.0 {
                        let bounce = ray.spawn(it.p(), ds.wi,
                                               Some(scene.epsilon()), None);
                        let incoming = self.inner.trace(scene, &bounce, sample,
                                                        material.is_delta());
                        radiance += incoming * ds.value * (cos_theta / ds.pdf);
                    }
                }
            }
        }

        radiance
    }
}

/// Balance heuristic for combining two sampling strategies.
pub fn balance_heuristic(nf: u32, f_pdf: Float, ng: u32, g_pdf: Float) -> Float {
    let f = nf as Float * f_pdf;
    let g = ng as Float * g_pdf;
    if f + g <= 0.0 {
        0.0
    } else {
        f / (f + g)
    }
}

/// Power heuristic with exponent 2; sharper than the balance heuristic
/// when one strategy dominates.
pub fn power_heuristic(nf: u32, f_pdf: Float, ng: u32, g_pdf: Float) -> Float {
    let f = nf as Float * f_pdf;
    let g = ng as Float * g_pdf;
    let denom = f * f + g * g;
    if denom <= 0.0 {
        0.0
    } else {
        f * f / denom
    }
}

/* Tests for MonteCarloIntegrator */
