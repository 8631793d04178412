// Copyright @genoise 2026

use crate::core::interaction::SurfaceHit;
use crate::math::aabb::AABB;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;

/// Point sampled on a shape's surface, with the probability density of
/// picking it. The density is with respect to surface area; a density of
/// 0 marks a degenerate sample the caller must treat as no contribution.
#[derive(Debug, Clone, Copy)]
pub struct ShapeSample {
    pub p: Vector3f,
    pub n: Vector3f,
    pub pdf: Float,
}

/// Direction sampled from a viewpoint, with a solid-angle density.
#[derive(Debug, Clone, Copy)]
pub struct DirectionPdf {
    pub dir: Vector3f,
    pub pdf: Float,
}

pub trait Shape: Send + Sync {
    /// World-space bounding volume; `None` for unboundable geometry such
    /// as an infinite plane, which the accelerator keeps on a linear
    /// fallback list.
    fn bounding_box(&self) -> Option<AABB>;

    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceHit>;

    /// Boolean-only intersection test, cheaper than the full query.
    fn ray_intersection_t(&self, ray: &Ray3f) -> bool;

    /// Closest point on the surface to an external point.
    fn nearest_point(&self, p: &Vector3f) -> Vector3f;

    fn sample_area(&self, u: &Vector2f) -> ShapeSample;

    /// Area sampling biased toward the part of the surface visible from
    /// `p_ref`, with its own density.
    fn sample_toward(&self, p_ref: &Vector3f, u: &Vector2f) -> ShapeSample;

    fn supports_solid_angle_sampling(&self) -> bool {
        false
    }

    fn sample_solid_angle(&self, _p_ref: &Vector3f, _u: &Vector2f) -> Option<DirectionPdf> {
        None
    }

    fn surface_area(&self) -> Float;
}
