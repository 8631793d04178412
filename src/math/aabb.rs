// Copyright @genoise 2026

use super::constants::{Float, Vector3f, FLOAT_MIN, FLOAT_MAX};
use super::ray::Ray3f;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AABB {
    pub p_min: Vector3f,
    pub p_max: Vector3f,
}

impl Default for AABB {
    fn default() -> Self {
        Self { p_min: Vector3f::new(FLOAT_MAX, FLOAT_MAX, FLOAT_MAX),
               p_max: Vector3f::new(FLOAT_MIN, FLOAT_MIN, FLOAT_MIN) }
    }
}

impl AABB {
    pub fn new(p_min: Vector3f, p_max: Vector3f) -> Self {
        let mut min = Vector3f::new(0.0, 0.0, 0.0);
        let mut max = Vector3f::new(0.0, 0.0, 0.0);
        for idx in 0..3 {
            min[idx] = p_min[idx].min(p_max[idx]);
            max[idx] = p_max[idx].max(p_min[idx]);
        }
        Self { p_min: min, p_max: max }
    }

    pub fn center(&self) -> Vector3f {
        0.5f32 * self.p_min + 0.5f32 * self.p_max
    }

    pub fn expand_by_point(&mut self, p: &Vector3f) {
        for idx in 0..3 {
            self.p_min[idx] = self.p_min[idx].min(p[idx]);
            self.p_max[idx] = self.p_max[idx].max(p[idx]);
        }
    }

    pub fn expand_by_aabb(&mut self, other: &AABB) {
        for idx in 0..3 {
            self.p_min[idx] = self.p_min[idx].min(other.p_min[idx]);
            self.p_max[idx] = self.p_max[idx].max(other.p_max[idx]);
        }
    }

    /// The box that covers both operands.
    pub fn union(&self, other: &AABB) -> AABB {
        let mut merged = *self;
        merged.expand_by_aabb(other);
        merged
    }

    pub fn contains_point(&self, p: &Vector3f) -> bool {
        for idx in 0..3 {
            if p[idx] < self.p_min[idx] || p[idx] > self.p_max[idx] {
                return false;
            }
        }
        true
    }

    pub fn contains_aabb(&self, other: &AABB) -> bool {
        for idx in 0..3 {
            if other.p_min[idx] < self.p_min[idx] || other.p_max[idx] > self.p_max[idx] {
                return false;
            }
        }
        true
    }

    pub fn overlaps(&self, other: &AABB) -> bool {
        for idx in 0..3 {
            if self.p_max[idx] < other.p_min[idx] || other.p_max[idx] < self.p_min[idx] {
                return false;
            }
        }
        true
    }

    pub fn ray_intersect(&self, ray: &Ray3f) -> bool {
        if !self.is_valid() {
            return false;
        }

        let o = ray.origin();
        let d = ray.dir();
        let mut t_min = ray.min_t;
        let mut t_max = ray.max_t;

        for idx in 0..3 {
            let dir = d[idx];
            if dir.abs() < 1e-8 {
                if o[idx] < self.p_min[idx] || o[idx] > self.p_max[idx] {
                    return false;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t0 = (self.p_min[idx] - o[idx]) * inv;
            let mut t1 = (self.p_max[idx] - o[idx]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_max < t_min {
                return false;
            }
        }

        true
    }

    pub fn ray_intersect_range(&self, ray: &Ray3f) -> Option<(Float, Float)> {
        if !self.is_valid() {
            return None;
        }

        let o = ray.origin();
        let d = ray.dir();
        let mut t_min = ray.min_t;
        let mut t_max = ray.max_t;

        for idx in 0..3 {
            let dir = d[idx];
            if dir.abs() < 1e-8 {
                if o[idx] < self.p_min[idx] || o[idx] > self.p_max[idx] {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t0 = (self.p_min[idx] - o[idx]) * inv;
            let mut t1 = (self.p_max[idx] - o[idx]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_max < t_min {
                return None;
            }
        }

        Some((t_min, t_max))
    }

    pub fn surface_area(&self) -> Float {
        let a = self.p_max[0] - self.p_min[0];
        let b = self.p_max[1] - self.p_min[1];
        let c = self.p_max[2] - self.p_min[2];

        2.0f32 * (a * b + a * c + b * c)
    }

    pub fn volume(&self) -> Float {
        let a = self.p_max[0] - self.p_min[0];
        let b = self.p_max[1] - self.p_min[1];
        let c = self.p_max[2] - self.p_min[2];

        a * b * c
    }

    pub fn diagonal(&self) -> Vector3f {
        self.p_max - self.p_min
    }

    pub fn is_valid(&self) -> bool {
        for idx in 0..3 {
            if self.p_min[idx] > self.p_max[idx] {
                return false;
            }
        }

        true
    }
}

/* Test for AABB */
#[cfg(test)]
mod tests {
    use super::AABB;
    use super::Ray3f;
    use super::Vector3f;

    #[test]
    fn test_aabb_geometry() {
        let min = Vector3f::new(1.0, 7.0, 3.0);
        let max = Vector3f::new(4.0, 4.0, 4.0);
        let mut bbox: AABB = AABB::new(min, max);

        // Corners are swapped componentwise so min <= max holds.
        assert!(bbox.is_valid());
        assert_eq!(bbox.p_min[1], 4.0);
        assert_eq!(bbox.p_max[1], 7.0);

        let center = bbox.center();
        assert!((center[0] - 2.5f32).abs() < 1e-5);
        assert!((center[1] - 5.5f32).abs() < 1e-5);
        assert!((center[2] - 3.5f32).abs() < 1e-5);

        bbox.expand_by_point(&Vector3f::new(-1.0, 5.0, 6.0));
        assert_eq!(bbox.p_min[0], -1.0);
        assert_eq!(bbox.p_max[2], 6.0);

        let mut bbox1: AABB = AABB::default();
        bbox1.expand_by_aabb(&bbox);
        assert_eq!(bbox1, bbox);
    }

    #[test]
    fn test_aabb_union_contains_overlaps() {
        let a = AABB::new(Vector3f::new(0.0, 0.0, 0.0), Vector3f::new(1.0, 1.0, 1.0));
        let b = AABB::new(Vector3f::new(2.0, 0.0, 0.0), Vector3f::new(3.0, 1.0, 1.0));

        let u = a.union(&b);
        assert!(u.contains_aabb(&a));
        assert!(u.contains_aabb(&b));
        assert!(!a.contains_aabb(&u));

        assert!(!a.overlaps(&b));
        assert!(u.overlaps(&a));
        assert!(a.contains_point(&Vector3f::new(0.5, 0.5, 0.5)));
        assert!(!a.contains_point(&Vector3f::new(1.5, 0.5, 0.5)));

        assert!((u.volume() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_aabb_intersect() {
        let o1 = Vector3f::new(0.0, 0.0, 0.0);
        let d1 = Vector3f::new(1.0, 1.0, 1.0);

        let bbox = AABB::new(Vector3f::new(-1.0, -1.0, -1.0),
                             Vector3f::new(1.0, 1.0, 1.0));

        let r1 = Ray3f::new(o1, d1, Some(0.0), Some(1.0));
        let r2 = Ray3f::new(o1, d1, Some(0.0), Some(10.0));
        assert_eq!(bbox.ray_intersect(&r1), true);
        assert_eq!(bbox.ray_intersect(&r2), true);

        let o2 = Vector3f::new(-1.1, 0.0, 0.0);
        let d2 = Vector3f::new(-0.1, 10.0, 10.0);
        let r3 = Ray3f::new(o2, d2, None, None);
        assert_eq!(bbox.ray_intersect(&r3), false);

        let r4 = Ray3f::new(Vector3f::new(-5.0, 0.0, 0.0), Vector3f::new(1.0, 0.0, 0.0), None, None);
        let range = bbox.ray_intersect_range(&r4).expect("expected slab hit");
        assert!((range.0 - 4.0).abs() < 1e-5);
        assert!((range.1 - 6.0).abs() < 1e-5);
    }
}
