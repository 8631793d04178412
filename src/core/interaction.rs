// Copyright @genoise 2026

use crate::core::primitive::Primitive;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;
use std::sync::Arc;

/// Geometric result of a shape intersection or surface sample: a world
/// space point, the surface normal there and the (u, v) parameterization.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    p: Vector3f,
    n: Vector3f,
    uv: Vector2f,
    t: Float,
}

impl SurfaceHit {
    pub fn new(p: Vector3f, n: Vector3f, uv: Vector2f, t: Float) -> Self {
        Self { p, n, uv, t }
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn n(&self) -> Vector3f {
        self.n
    }

    pub fn uv(&self) -> Vector2f {
        self.uv
    }

    pub fn t(&self) -> Float {
        self.t
    }
}

/// A surface hit tied to the primitive it lies on and to the ray that
/// found it. Built fresh per intersection query and never mutated; the
/// eye vector is the normalized reversal of the ray direction.
pub struct Interaction {
    primitive: Arc<Primitive>,
    hit: SurfaceHit,
    ray: Ray3f,
    w_e: Vector3f,
}

impl Interaction {
    pub fn new(primitive: Arc<Primitive>, hit: SurfaceHit, ray: Ray3f) -> Self {
        let w_e = (-ray.dir()).normalize();
        Self { primitive, hit, ray, w_e }
    }

    pub fn primitive(&self) -> &Arc<Primitive> {
        &self.primitive
    }

    pub fn p(&self) -> Vector3f {
        self.hit.p()
    }

    pub fn n(&self) -> Vector3f {
        self.hit.n()
    }

    pub fn uv(&self) -> Vector2f {
        self.hit.uv()
    }

    pub fn t(&self) -> Float {
        self.hit.t()
    }

    pub fn ray(&self) -> &Ray3f {
        &self.ray
    }

    pub fn depth(&self) -> u32 {
        self.ray.depth()
    }

    /// Unit vector toward the viewer.
    pub fn w_e(&self) -> Vector3f {
        self.w_e
    }
}
