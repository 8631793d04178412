// Copyright @genoise 2026

use crate::core::camera::Camera;
use crate::core::sample::Sample;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::warp::sample_uniform_disk_concentric;

/// Pinhole look-at camera with a vertical field of view, optionally
/// widened into a thin lens for depth of field.
pub struct PerspectiveCamera {
    origin: Vector3f,
    forward: Vector3f,
    right: Vector3f,
    up: Vector3f,
    tan_half_fov: Float,
    width: usize,
    height: usize,
    aperture_radius: Float,
    focal_distance: Float,
}

impl PerspectiveCamera {
    pub fn new(origin: Vector3f, target: Vector3f, up: Vector3f,
               fov_y: Float, width: usize, height: usize) -> Self {
        let forward = (target - origin).normalize();
        let right = up.cross(&forward).normalize();
        let up = forward.cross(&right);
        Self {
            origin,
            forward,
            right,
            up,
            tan_half_fov: (0.5 * fov_y).tan(),
            width,
            height,
            aperture_radius: 0.0,
            focal_distance: 1.0,
        }
    }

    /// Thin-lens variant; `focal_distance` is where the plane of sharp
    /// focus sits along the viewing axis.
    pub fn with_lens(origin: Vector3f, target: Vector3f, up: Vector3f,
                     fov_y: Float, width: usize, height: usize,
                     aperture_radius: Float, focal_distance: Float) -> Self {
        let mut camera = Self::new(origin, target, up, fov_y, width, height);
        camera.aperture_radius = aperture_radius;
        camera.focal_distance = focal_distance;
        camera
    }
}

impl Camera for PerspectiveCamera {
    fn generate_ray(&self, sample: &Sample) -> Ray3f {
        let aspect = self.width as Float / self.height as Float;
        let ndc_x = 2.0 * (sample.film_x() / self.width as Float) - 1.0;
        let ndc_y = 1.0 - 2.0 * (sample.film_y() / self.height as Float);
        let dir = (self.forward
            + self.right * (ndc_x * self.tan_half_fov * aspect)
            + self.up * (ndc_y * self.tan_half_fov)).normalize();

        if self.aperture_radius <= 0.0 {
            return Ray3f::new(self.origin, dir, None, None);
        }

        let focus = self.origin
            + dir * (self.focal_distance / dir.dot(&self.forward));
        let disk = sample_uniform_disk_concentric(&sample.lens_uv()) * self.aperture_radius;
        let lens_point = self.origin + self.right * disk.x + self.up * disk.y;
        Ray3f::new(lens_point, focus - lens_point, None, None)
    }

    fn resolution(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

/* Tests for PerspectiveCamera */

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_at(film_x: Float, film_y: Float) -> Sample {
        Sample::new(0, 0, film_x, film_y, 0.5, 0.5, 0.0, Vec::new(), Vec::new(), 1)
    }

    #[test]
    fn test_center_ray_points_at_the_target() {
        let camera = PerspectiveCamera::new(
            Vector3f::new(0.0, 0.0, -5.0),
            Vector3f::zeros(),
            Vector3f::new(0.0, 1.0, 0.0),
            std::f32::consts::FRAC_PI_2,
            64, 48,
        );
        assert_eq!(camera.resolution(), (64, 48));

        let ray = camera.generate_ray(&sample_at(32.0, 24.0));
        assert!((ray.origin() - Vector3f::new(0.0, 0.0, -5.0)).norm() < 1e-6);
        assert!((ray.dir() - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn test_film_axes_map_to_screen_directions() {
        let camera = PerspectiveCamera::new(
            Vector3f::zeros(),
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(0.0, 1.0, 0.0),
            std::f32::consts::FRAC_PI_2,
            32, 32,
        );

        // Larger film x leans right, larger film y leans down.
        let right = camera.generate_ray(&sample_at(30.0, 16.0));
        assert!(right.dir().x > 0.1);
        let down = camera.generate_ray(&sample_at(16.0, 30.0));
        assert!(down.dir().y < -0.1);

        // Opposite corners mirror through the axis.
        let a = camera.generate_ray(&sample_at(2.0, 2.0));
        let b = camera.generate_ray(&sample_at(30.0, 30.0));
        assert!((a.dir().x + b.dir().x).abs() < 1e-5);
        assert!((a.dir().y + b.dir().y).abs() < 1e-5);
    }

    #[test]
    fn test_thin_lens_rays_converge_at_the_focal_plane() {
        let camera = PerspectiveCamera::with_lens(
            Vector3f::zeros(),
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(0.0, 1.0, 0.0),
            std::f32::consts::FRAC_PI_2,
            32, 32,
            0.25, 4.0,
        );

        // Two lens positions for the same film point meet where the
        // focal plane sits.
        let s1 = Sample::new(0, 0, 16.0, 16.0, 0.1, 0.9, 0.0, Vec::new(), Vec::new(), 1);
        let s2 = Sample::new(0, 0, 16.0, 16.0, 0.9, 0.1, 0.0, Vec::new(), Vec::new(), 1);
        let r1 = camera.generate_ray(&s1);
        let r2 = camera.generate_ray(&s2);
        assert!((r1.origin() - r2.origin()).norm() > 1e-4);

        let t1 = 4.0 / r1.dir().z;
        let t2 = 4.0 / r2.dir().z;
        assert!((r1.at(t1) - r2.at(t2)).norm() < 1e-4);
    }
}
