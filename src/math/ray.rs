// Copyright @genoise 2026

use super::constants::{Float, Vector3f, FLOAT_MAX};

/// A ray with a validity window and a recursion depth. A bounce never
/// mutates an existing ray; it spawns a child with `depth + 1`.
#[derive(Debug, Clone, Copy)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
    pub min_t: Float,
    pub max_t: Float,
    depth: u32,
    t: Float,
}

impl Ray3f {
    pub fn new(o: Vector3f, d: Vector3f,
               min_t: Option<Float>, max_t: Option<Float>) -> Self {
        Self { origin: o, dir: d.normalize(),
               min_t: min_t.unwrap_or(0.0),
               max_t: max_t.unwrap_or(FLOAT_MAX),
               depth: 0,
               t: FLOAT_MAX }
    }

    pub fn with_depth(o: Vector3f, d: Vector3f,
                      min_t: Option<Float>, max_t: Option<Float>,
                      depth: u32) -> Self {
        let mut ray = Self::new(o, d, min_t, max_t);
        ray.depth = depth;
        ray
    }

    /// A continuation ray for the next bounce of a recursive estimate.
    pub fn spawn(&self, o: Vector3f, d: Vector3f,
                 min_t: Option<Float>, max_t: Option<Float>) -> Self {
        Self::with_depth(o, d, min_t, max_t, self.depth + 1)
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }

    /// Narrow the window to `t` if `t` lies inside it, recording `t` as the
    /// last hit parameter. Returns whether the narrowing happened.
    pub fn update(&mut self, t: Float) -> bool {
        if t < self.min_t || t > self.max_t {
            false
        } else {
            self.max_t = t;
            self.t = t;
            true
        }
    }

    pub fn test_segment(&self, t: Float) -> bool {
        t >= self.min_t && t <= self.max_t
    }
}

/* Tests for Ray */
