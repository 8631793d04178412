// Copyright @genoise 2026

use crate::core::film::Film;
use crate::core::integrator::Integrator;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::constants::Float;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::renderer::{ProgressCallback, Renderer};

/// Multi-threaded renderer. The sampler's region is split into row bands
/// and each worker claims the next unrendered band from a shared atomic
/// counter. Every band gets an independent partition of the sampler, and
/// per-pixel seeding makes the result identical to a single-threaded run.
pub struct ParallelRenderer {
    integrator: Arc<dyn Integrator>,
    threads: usize,
    progress: Option<ProgressCallback>,
}

impl ParallelRenderer {
    pub fn new(integrator: Arc<dyn Integrator>, threads: usize) -> Self {
        Self { integrator, threads: threads.max(1), progress: None }
    }

    pub fn with_progress(integrator: Arc<dyn Integrator>, threads: usize,
                         progress: ProgressCallback) -> Self {
        Self { integrator, threads: threads.max(1), progress: Some(progress) }
    }

    pub fn threads(&self) -> usize {
        self.threads
    }
}

impl Renderer for ParallelRenderer {
    fn render(&self, sampler: Box<dyn Sampler>, film: &Film, scene: &Scene) {
        let total = sampler.total_samples().max(1);
        // More bands than workers keeps everyone busy when rows differ
        // in cost.
        let bands = sampler.region().split_rows(self.threads * 4);
        let partitions: Vec<Mutex<Option<Box<dyn Sampler>>>> = bands
            .iter()
            .map(|band| Mutex::new(Some(sampler.partition(*band))))
            .collect();

        let next_band = AtomicUsize::new(0);
        let completed = AtomicUsize::new(0);
        // Reports are serialized through this lock and dropped unless the
        // count increased, so observers see a non-decreasing fraction.
        let last_reported = Mutex::new(0usize);

        std::thread::scope(|scope| {
            for _ in 0..self.threads {
                scope.spawn(|| {
                    loop {
                        let band = next_band.fetch_add(1, Ordering::Relaxed);
                        if band >= partitions.len() {
                            break;
                        }
                        let mut partition = partitions[band]
                            .lock().unwrap().take()
                            .unwrap();

                        let band_samples = partition.total_samples();
                        while let Some(mut sample) = partition.next_sample() {
                            let ray = scene.camera().generate_ray(&sample);
                            let radiance = self.integrator.estimate(scene, &ray, &mut sample);
                            film.add_sample(&sample, &radiance);
                        }

                        let done = completed.fetch_add(band_samples, Ordering::Relaxed)
                            + band_samples;
                        if let Some(progress) = &self.progress {
                            let mut reported = last_reported.lock().unwrap();
                            if done > *reported {
                                *reported = done;
                                progress(done as Float / total as Float);
                            }
                        }
                    }
                });
            }
        });
    }
}

/* Tests for ParallelRenderer */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cameras::perspective::PerspectiveCamera;
    use crate::core::camera::Camera;
    use crate::core::primitive::Primitive;
    use crate::core::sampler::PixelRegion;
    use crate::filters::box_filter::BoxFilter;
    use crate::integrators::path::PathIntegrator;
    use crate::lights::environment::EnvironmentLight;
    use crate::materials::lambertian::Lambertian;
    use crate::math::constants::Vector3f;
    use crate::math::spectrum::{ColorSpectrum, Spectrum};
    use crate::renderers::renderer::SamplingRenderer;
    use crate::samplers::random::RandomSampler;
    use crate::shapes::sphere::Sphere;

    fn test_scene(width: usize, height: usize) -> Scene {
        let camera: Arc<dyn Camera> = Arc::new(PerspectiveCamera::new(
            Vector3f::new(0.0, 0.0, -4.0),
            Vector3f::zeros(),
            Vector3f::new(0.0, 1.0, 0.0),
            std::f32::consts::FRAC_PI_3,
            width, height,
        ));
        let sphere = Arc::new(Primitive::new(
            Arc::new(Sphere::new(Vector3f::zeros(), 1.0)),
            Some(Arc::new(Lambertian::new(ColorSpectrum::splat(0.7)))),
        ));
        let env = Arc::new(EnvironmentLight::new(ColorSpectrum::splat(1.0)));
        Scene::new(vec![sphere], vec![env], camera)
    }

    // Per-pixel seeding makes the parallel result bit-identical to the
    // serial one when the filter footprint is a single pixel.
    #[test]
    fn test_parallel_matches_serial_render() {
        let scene = test_scene(8, 8);
        let region = PixelRegion::new(0, 0, 7, 7);
        let integrator = Arc::new(PathIntegrator::new(3));

        let serial_film = Film::new(8, 8, Arc::new(BoxFilter::new(0)));
        let serial = SamplingRenderer::new(integrator.clone());
        serial.render(Box::new(RandomSampler::new(region, 2, 42)),
                      &serial_film, &scene);

        let parallel_film = Film::new(8, 8, Arc::new(BoxFilter::new(0)));
        let parallel = ParallelRenderer::new(integrator, 4);
        assert_eq!(parallel.threads(), 4);
        parallel.render(Box::new(RandomSampler::new(region, 2, 42)),
                        &parallel_film, &scene);

        let serial_image = serial_film.get_image();
        let parallel_image = parallel_film.get_image();
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(serial_image[(x, y)], parallel_image[(x, y)],
                           "pixel ({}, {}) diverged across thread counts", x, y);
            }
        }
    }

    // A distributed render: every band rendered on its own film, shipped
    // back as a fragment and recomposed on a fresh film.
    #[test]
    fn test_fragment_recomposition_matches_whole_frame() {
        let scene = test_scene(6, 6);
        let region = PixelRegion::new(0, 0, 5, 5);
        let integrator = Arc::new(PathIntegrator::new(2));
        let filter = Arc::new(BoxFilter::new(0));

        let whole_film = Film::new(6, 6, filter.clone());
        let renderer = SamplingRenderer::new(integrator.clone());
        renderer.render(Box::new(RandomSampler::new(region, 1, 13)),
                        &whole_film, &scene);

        let recomposed = Film::new(6, 6, filter.clone());
        let source = RandomSampler::new(region, 1, 13);
        for (i, band) in region.split_rows(3).into_iter().enumerate() {
            let band_film = Film::new(6, 6, filter.clone());
            let worker = SamplingRenderer::new(integrator.clone());
            worker.render(source.partition(band), &band_film, &scene);
            let fragment = band_film.fragment(&format!("job/{}", i), band);
            recomposed.merge_fragment(&fragment);
        }

        let whole = whole_film.get_image();
        let merged = recomposed.get_image();
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(whole[(x, y)], merged[(x, y)]);
            }
        }
    }

    #[test]
    fn test_parallel_progress_reaches_one() {
        let scene = test_scene(4, 4);
        let film = Film::new(4, 4, Arc::new(BoxFilter::new(0)));
        let reported: Arc<Mutex<Vec<f32>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = reported.clone();
        let renderer = ParallelRenderer::with_progress(
            Arc::new(PathIntegrator::new(2)), 2,
            Box::new(move |fraction| sink.lock().unwrap().push(fraction)),
        );

        renderer.render(Box::new(RandomSampler::new(PixelRegion::new(0, 0, 3, 3), 1, 3)),
                        &film, &scene);

        let reported = reported.lock().unwrap();
        assert!(!reported.is_empty());
        assert!((reported.iter().cloned().fold(0.0f32, f32::max) - 1.0).abs() < 1e-6);
    }

    // Workers race to report; the fractions an observer receives must
    // still be non-decreasing.
    #[test]
    fn test_parallel_progress_is_monotonic_across_threads() {
        let scene = test_scene(16, 16);
        let film = Film::new(16, 16, Arc::new(BoxFilter::new(0)));
        let reported: Arc<Mutex<Vec<f32>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = reported.clone();
        let renderer = ParallelRenderer::with_progress(
            Arc::new(PathIntegrator::new(2)), 4,
            Box::new(move |fraction| sink.lock().unwrap().push(fraction)),
        );

        renderer.render(Box::new(RandomSampler::new(PixelRegion::new(0, 0, 15, 15), 2, 21)),
                        &film, &scene);

        let reported = reported.lock().unwrap();
        assert!(reported.len() > 1);
        for pair in reported.windows(2) {
            assert!(pair[0] <= pair[1],
                    "progress went backwards: {} after {}", pair[1], pair[0]);
        }
        assert!((reported.last().unwrap() - 1.0).abs() < 1e-6);
    }
}
