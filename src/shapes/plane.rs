// Copyright @genoise 2026

use crate::core::interaction::SurfaceHit;
use crate::core::shape::{Shape, ShapeSample};
use crate::math::aabb::AABB;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::frame::build_tangent_frame;
use crate::math::ray::Ray3f;

/// Infinite plane through `anchor` with unit `normal`. Unboundable, so
/// the accelerator keeps it on the linear fallback list.
pub struct Plane {
    anchor: Vector3f,
    normal: Vector3f,
    tangent: Vector3f,
    bitangent: Vector3f,
}

impl Plane {
    pub fn new(anchor: Vector3f, normal: Vector3f) -> Self {
        let normal = normal.normalize();
        let (tangent, bitangent) = build_tangent_frame(&normal);
        Self { anchor, normal, tangent, bitangent }
    }

    fn intersect_t(&self, ray: &Ray3f) -> Option<Float> {
        let denom = ray.dir().dot(&self.normal);
        if denom.abs() < 1e-8 {
            return None;
        }
        let t = (self.anchor - ray.origin()).dot(&self.normal) / denom;
        if ray.test_segment(t) {
            Some(t)
        } else {
            None
        }
    }
}

impl Shape for Plane {
    fn bounding_box(&self) -> Option<AABB> {
        None
    }

    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceHit> {
        let t = self.intersect_t(ray)?;
        let p = ray.at(t);
        let local = p - self.anchor;
        let uv = Vector2f::new(local.dot(&self.tangent), local.dot(&self.bitangent));
        // The normal faces the incoming ray.
        let n = if ray.dir().dot(&self.normal) < 0.0 { self.normal } else { -self.normal };
        Some(SurfaceHit::new(p, n, uv, t))
    }

    fn ray_intersection_t(&self, ray: &Ray3f) -> bool {
        self.intersect_t(ray).is_some()
    }

    fn nearest_point(&self, p: &Vector3f) -> Vector3f {
        p - self.normal * (p - self.anchor).dot(&self.normal)
    }

    fn sample_area(&self, _u: &Vector2f) -> ShapeSample {
        // An infinite surface has no area measure; a pdf of 0 tells the
        // caller to drop the contribution.
        ShapeSample { p: self.anchor, n: self.normal, pdf: 0.0 }
    }

    fn sample_toward(&self, p_ref: &Vector3f, _u: &Vector2f) -> ShapeSample {
        ShapeSample { p: self.nearest_point(p_ref), n: self.normal, pdf: 0.0 }
    }

    fn surface_area(&self) -> Float {
        std::f32::INFINITY
    }
}

/* Tests for Plane */
