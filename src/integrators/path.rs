// Copyright @genoise 2026

use crate::core::integrator::Integrator;
use crate::core::interaction::Interaction;
use crate::core::material::Material;
use crate::core::sample::Sample;
use crate::core::scene::Scene;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::{ColorSpectrum, Spectrum};

/// Recursive path tracer with next-event estimation. At every surface
/// interaction the estimate is the sum of the surface's own emission,
/// one direct-lighting pass over the scene's lights, and recursively
/// traced reflection and transmission bounces. Direct lighting is
/// skipped on delta materials, whose lobes light sampling can never hit.
pub struct PathIntegrator {
    max_depth: u32,
}

impl PathIntegrator {
    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    fn facing_normal(it: &Interaction) -> Vector3f {
        if it.w_e().dot(&it.n()) >= 0.0 {
            it.n()
        } else {
            -it.n()
        }
    }

    // Estimator for one light draw; 0 when the draw is unusable.
    pub(super) fn direct_lighting(scene: &Scene, it: &Interaction,
                                  material: &dyn Material, sample: &mut Sample) -> ColorSpectrum {
        let n = Self::facing_normal(it);
        let mut total = ColorSpectrum::default();

        for light in scene.lights() {
            let count = light.sample_count().max(1);
            let mut accum = ColorSpectrum::default();
            for _ in 0..count {
                let ls = match light.sample(it, &sample.next_2d()) {
                    Some(ls) if ls.pdf > 0.0 => ls,
                    _ => continue,
                };
                let cos_theta = n.dot(&ls.wi);
                if cos_theta <= 0.0 {
                    continue;
                }
                let f = material.eval_reflection(it, &ls.wi);
                if f.is_black() {
                    continue;
                }
                if !light.visible(it, &ls, scene) {
                    continue;
                }
                accum += ls.radiance * f * (cos_theta / ls.pdf);
            }
            total += accum * (1.0 / count as Float);
        }

        total
    }

    fn escaped(scene: &Scene, ray: &Ray3f) -> ColorSpectrum {
        let mut radiance = ColorSpectrum::default();
        for light in scene.lights() {
            radiance += light.escaped_radiance(&ray.dir());
        }
        radiance
    }

    // `collect_escaped` is set for camera rays and for rays spawned from
    // delta lobes. Bounces from materials that already ran direct
    // lighting must not collect environment radiance again, or the
    // environment is counted twice.
    pub(super) fn trace(&self, scene: &Scene, ray: &Ray3f,
                        sample: &mut Sample, collect_escaped: bool) -> ColorSpectrum {
        if ray.depth() >= self.max_depth {
            return ColorSpectrum::default();
        }

        let it = match scene.interaction(ray, None) {
            Some(it) => it,
            None => {
                return if collect_escaped {
                    Self::escaped(scene, ray)
                } else {
                    ColorSpectrum::default()
                };
            }
        };
        let material = match it.primitive().material() {
            Some(material) => material.clone(),
            // Shadow-only geometry absorbs the path.
            None => return ColorSpectrum::default(),
        };

        let mut radiance = material.emitted(&it);

        if material.is_reflective() {
            if !material.is_delta() {
                radiance += Self::direct_lighting(scene, &it, material.as_ref(), sample);
            }
            if let Some(ds) = material.sample_reflection(&it, sample) {
                if ds.pdf > 0.0 && !ds.value.is_black() {
                    let cos_theta = Self::facing_normal(&it).dot(&ds.wi);
                    if cos_theta > 0.0 {
                        let bounce = ray.spawn(it.p(), ds.wi, Some(scene.epsilon()), None);
                        let incoming = self.trace(scene, &bounce, sample,
                                                  material.is_delta());
                        radiance += incoming * ds.value * (cos_theta / ds.pdf);
                    }
                }
            }
        }

        if material.is_transmissive() {
            if let Some(ds) = material.sample_transmission(&it, sample) {
                if ds.pdf > 0.0 && !ds.value.is_black() {
                    let cos_theta = Self::facing_normal(&it).dot(&ds.wi).abs();
                    if cos_theta > 0.0 {
                        let bounce = ray.spawn(it.p(), ds.wi, Some(scene.epsilon()), None);
                        let incoming = self.trace(scene, &bounce, sample,
                                                  material.is_delta());
                        radiance += incoming * ds.value * (cos_theta / ds.pdf);
                    }
                }
            }
        }

        radiance
    }
}

impl Integrator for PathIntegrator {
    fn estimate(&self, scene: &Scene, ray: &Ray3f, sample: &mut Sample) -> ColorSpectrum {
        self.trace(scene, ray, sample, true)
    }
}

/* Tests for PathIntegrator */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cameras::perspective::PerspectiveCamera;
    use crate::core::camera::Camera;
    use crate::core::primitive::Primitive;
    use crate::lights::environment::EnvironmentLight;
    use crate::lights::point::PointLight;
    use crate::materials::lambertian::Lambertian;
    use crate::materials::mirror::Mirror;
    use crate::math::constants::PI;
    use crate::shapes::plane::Plane;
    use crate::shapes::sphere::Sphere;
    use std::sync::Arc;

    fn test_camera() -> Arc<dyn Camera> {
        Arc::new(PerspectiveCamera::new(
            Vector3f::new(0.0, 0.0, -5.0),
            Vector3f::zeros(),
            Vector3f::new(0.0, 1.0, 0.0),
            std::f32::consts::FRAC_PI_2,
            8, 8,
        ))
    }

    fn fresh_sample(seed: u64) -> Sample {
        Sample::new(0, 0, 0.5, 0.5, 0.5, 0.5, 0.0, Vec::new(), Vec::new(), seed)
    }

    // A diffuse sphere of albedo rho under a uniform environment of
    // radiance l reflects rho * l when only direct lighting runs.
    #[test]
    fn test_furnace_converges_to_albedo_times_radiance() {
        let rho = 0.5;
        let sphere = Arc::new(Primitive::new(
            Arc::new(Sphere::new(Vector3f::zeros(), 1.0)),
            Some(Arc::new(Lambertian::new(ColorSpectrum::splat(rho)))),
        ));
        let env = Arc::new(EnvironmentLight::new(ColorSpectrum::splat(1.0)));
        let scene = Scene::new(vec![sphere], vec![env], test_camera());
        let integrator = PathIntegrator::new(1);

        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, -3.0),
                             Vector3f::new(0.0, 0.0, 1.0), None, None);
        let samples = 4096;
        let mut mean = 0.0;
        for i in 0..samples {
            let mut sample = fresh_sample(1000 + i);
            mean += integrator.estimate(&scene, &ray, &mut sample).luminance();
        }
        mean /= samples as Float;

        assert!((mean - rho).abs() < 0.05 * rho,
                "furnace mean {} expected {}", mean, rho);
    }

    // Deeper recursion must not add energy: the indirect bounce from a
    // surface that already sampled the environment directly collects
    // nothing when it escapes.
    #[test]
    fn test_furnace_energy_conserved_with_deeper_recursion() {
        let rho = 0.5;
        let sphere = Arc::new(Primitive::new(
            Arc::new(Sphere::new(Vector3f::zeros(), 1.0)),
            Some(Arc::new(Lambertian::new(ColorSpectrum::splat(rho)))),
        ));
        let env = Arc::new(EnvironmentLight::new(ColorSpectrum::splat(1.0)));
        let scene = Scene::new(vec![sphere], vec![env], test_camera());
        let integrator = PathIntegrator::new(3);

        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, -3.0),
                             Vector3f::new(0.0, 0.0, 1.0), None, None);
        let samples = 4096;
        let mut mean = 0.0;
        for i in 0..samples {
            let mut sample = fresh_sample(7000 + i);
            mean += integrator.estimate(&scene, &ray, &mut sample).luminance();
        }
        mean /= samples as Float;

        assert!((mean - rho).abs() < 0.05 * rho,
                "furnace at depth 3: mean {} expected {}", mean, rho);
    }

    // A point light at distance d over a diffuse floor reflects
    // rho * i / (pi * d^2) at the point directly underneath.
    #[test]
    fn test_point_light_inverse_square_on_floor() {
        let rho = 0.8;
        let intensity = 10.0;
        let floor = Arc::new(Primitive::new(
            Arc::new(Plane::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0))),
            Some(Arc::new(Lambertian::new(ColorSpectrum::splat(rho)))),
        ));
        let integrator = PathIntegrator::new(1);
        let ray = Ray3f::new(Vector3f::new(0.0, 4.0, 0.0),
                             Vector3f::new(0.0, -1.0, 0.0), None, None);

        for d in [2.0_f32, 4.0] {
            let light = Arc::new(PointLight::new(Vector3f::new(0.0, d, 0.0),
                                                 ColorSpectrum::splat(intensity)));
            let scene = Scene::new(vec![floor.clone()], vec![light], test_camera());
            let mut sample = fresh_sample(11);
            let estimate = integrator.estimate(&scene, &ray, &mut sample).luminance();
            let expected = rho * intensity / (PI * d * d);
            assert!((estimate - expected).abs() < 1e-3 * expected,
                    "distance {}: estimate {} expected {}", d, estimate, expected);
        }
    }

    // Delta materials get no direct-lighting term; the mirror forwards
    // whatever its reflected ray sees.
    #[test]
    fn test_mirror_forwards_environment_radiance() {
        let mirror = Arc::new(Primitive::new(
            Arc::new(Sphere::new(Vector3f::zeros(), 1.0)),
            Some(Arc::new(Mirror::new(ColorSpectrum::splat(0.9)))),
        ));
        let env = Arc::new(EnvironmentLight::new(ColorSpectrum::splat(2.0)));
        let scene = Scene::new(vec![mirror], vec![env], test_camera());
        let integrator = PathIntegrator::new(4);

        // Head-on hit reflects straight back out of the scene.
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, -3.0),
                             Vector3f::new(0.0, 0.0, 1.0), None, None);
        let mut sample = fresh_sample(5);
        let estimate = integrator.estimate(&scene, &ray, &mut sample).luminance();
        assert!((estimate - 0.9 * 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_depth_limit_terminates_with_black_not_nan() {
        let sphere = Arc::new(Primitive::new(
            Arc::new(Sphere::new(Vector3f::zeros(), 1.0)),
            Some(Arc::new(Lambertian::new(ColorSpectrum::splat(0.5)))),
        ));
        let env = Arc::new(EnvironmentLight::new(ColorSpectrum::splat(1.0)));
        let scene = Scene::new(vec![sphere], vec![env], test_camera());
        let integrator = PathIntegrator::new(2);

        let exhausted = Ray3f::with_depth(Vector3f::new(0.0, 0.0, -3.0),
                                          Vector3f::new(0.0, 0.0, 1.0),
                                          None, None, 2);
        let mut sample = fresh_sample(1);
        let estimate = integrator.estimate(&scene, &exhausted, &mut sample);
        assert!(estimate.is_black());
        assert!(estimate.is_finite());
    }

    #[test]
    fn test_escaped_ray_collects_environment() {
        let env = Arc::new(EnvironmentLight::new(ColorSpectrum::splat(0.25)));
        let scene = Scene::new(Vec::new(), vec![env], test_camera());
        let integrator = PathIntegrator::new(4);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0), None, None);
        let mut sample = fresh_sample(2);
        let estimate = integrator.estimate(&scene, &ray, &mut sample);
        assert!((estimate.luminance() - 0.25).abs() < 1e-6);
    }
}
