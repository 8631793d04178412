// Copyright @genoise 2026

use crate::core::interaction::SurfaceHit;
use crate::core::shape::{DirectionPdf, Shape, ShapeSample};
use crate::math::aabb::AABB;
use crate::math::constants::{Float, Vector2f, Vector3f, INV_PI, INV_TWO_PI, PI};
use crate::math::frame::{build_tangent_frame, local_to_world};
use crate::math::ray::Ray3f;
use crate::math::warp::{sample_uniform_cone, sample_uniform_cone_pdf,
                        sample_uniform_hemisphere, sample_uniform_sphere};

pub struct Sphere {
    center: Vector3f,
    radius: Float,
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Vector3f {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    // Smaller root of the quadratic that lies inside the ray window.
    fn intersect_t(&self, ray: &Ray3f) -> Option<Float> {
        let oc = ray.origin() - self.center;
        let b = 2.0 * oc.dot(&ray.dir());
        let c = oc.dot(&oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t_near = 0.5 * (-b - sqrt_d);
        let t_far = 0.5 * (-b + sqrt_d);
        if ray.test_segment(t_near) {
            Some(t_near)
        } else if ray.test_segment(t_far) {
            Some(t_far)
        } else {
            None
        }
    }

    fn uv_at(&self, n: &Vector3f) -> Vector2f {
        let mut phi = n.y.atan2(n.x);
        if phi < 0.0 {
            phi += 2.0 * PI;
        }
        let theta = n.z.clamp(-1.0, 1.0).acos();
        Vector2f::new(phi * INV_TWO_PI, theta * INV_PI)
    }
}

impl Shape for Sphere {
    fn bounding_box(&self) -> Option<AABB> {
        let r = Vector3f::new(self.radius, self.radius, self.radius);
        Some(AABB::new(self.center - r, self.center + r))
    }

    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceHit> {
        let t = self.intersect_t(ray)?;
        let p = ray.at(t);
        let n = (p - self.center) / self.radius;
        Some(SurfaceHit::new(p, n, self.uv_at(&n), t))
    }

    fn ray_intersection_t(&self, ray: &Ray3f) -> bool {
        self.intersect_t(ray).is_some()
    }

    fn nearest_point(&self, p: &Vector3f) -> Vector3f {
        let offset = p - self.center;
        let distance = offset.norm();
        if distance < 1e-8 {
            return self.center + Vector3f::new(self.radius, 0.0, 0.0);
        }
        self.center + offset * (self.radius / distance)
    }

    fn sample_area(&self, u: &Vector2f) -> ShapeSample {
        let n = sample_uniform_sphere(u);
        ShapeSample {
            p: self.center + n * self.radius,
            n,
            pdf: 1.0 / self.surface_area(),
        }
    }

    fn sample_toward(&self, p_ref: &Vector3f, u: &Vector2f) -> ShapeSample {
        let axis = p_ref - self.center;
        if axis.norm() < 1e-8 {
            // Reference point at the center sees every direction alike.
            return self.sample_area(u);
        }
        let axis = axis.normalize();
        let (t, b) = build_tangent_frame(&axis);
        let local = sample_uniform_hemisphere(u);
        let n = local_to_world(&local, &t, &b, &axis);
        ShapeSample {
            p: self.center + n * self.radius,
            n,
            // Only the facing hemisphere is sampled.
            pdf: 1.0 / (0.5 * self.surface_area()),
        }
    }

    fn supports_solid_angle_sampling(&self) -> bool {
        true
    }

    fn sample_solid_angle(&self, p_ref: &Vector3f, u: &Vector2f) -> Option<DirectionPdf> {
        let to_center = self.center - p_ref;
        let distance2 = to_center.dot(&to_center);
        if distance2 <= self.radius * self.radius {
            return None;
        }

        let sin2_theta_max = self.radius * self.radius / distance2;
        let cos_theta_max = (1.0 - sin2_theta_max).max(0.0).sqrt();
        let axis = to_center.normalize();
        let (t, b) = build_tangent_frame(&axis);
        let local = sample_uniform_cone(u, cos_theta_max);
        Some(DirectionPdf {
            dir: local_to_world(&local, &t, &b, &axis),
            pdf: sample_uniform_cone_pdf(cos_theta_max),
        })
    }

    fn surface_area(&self) -> Float {
        4.0 * PI * self.radius * self.radius
    }
}

/* Tests for Sphere */
