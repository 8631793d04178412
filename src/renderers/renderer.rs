// Copyright @genoise 2026

use crate::core::film::Film;
use crate::core::integrator::Integrator;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::constants::Float;
use std::sync::Arc;

/// Observer for render progress; invoked with a monotonically
/// non-decreasing fraction in [0, 1].
pub type ProgressCallback = Box<dyn Fn(Float) + Send + Sync>;

/// Drives a sampler's stream through an integrator onto a film.
pub trait Renderer: Send + Sync {
    fn render(&self, sampler: Box<dyn Sampler>, film: &Film, scene: &Scene);
}

/// Single-threaded renderer: one camera ray per sample, one radiance
/// estimate per ray, one splat per estimate.
pub struct SamplingRenderer {
    integrator: Arc<dyn Integrator>,
    progress: Option<ProgressCallback>,
}

impl SamplingRenderer {
    pub fn new(integrator: Arc<dyn Integrator>) -> Self {
        Self { integrator, progress: None }
    }

    pub fn with_progress(integrator: Arc<dyn Integrator>,
                         progress: ProgressCallback) -> Self {
        Self { integrator, progress: Some(progress) }
    }

    pub fn integrator(&self) -> &Arc<dyn Integrator> {
        &self.integrator
    }
}

impl Renderer for SamplingRenderer {
    fn render(&self, mut sampler: Box<dyn Sampler>, film: &Film, scene: &Scene) {
        let total = sampler.total_samples().max(1);
        let mut done = 0usize;

        while let Some(mut sample) = sampler.next_sample() {
            let ray = scene.camera().generate_ray(&sample);
            let radiance = self.integrator.estimate(scene, &ray, &mut sample);
            film.add_sample(&sample, &radiance);

            done += 1;
            if let Some(progress) = &self.progress {
                progress(done as Float / total as Float);
            }
        }
    }
}

/* Tests for SamplingRenderer */
