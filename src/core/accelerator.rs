// Copyright @genoise 2026

use crate::core::interaction::{Interaction, SurfaceHit};
use crate::core::primitive::Primitive;
use crate::math::aabb::AABB;
use crate::math::constants::{Float, EPSILON};
use crate::math::ray::Ray3f;
use std::sync::Arc;

#[derive(Clone, Copy)]
enum Node {
    // Leaf bounds are exactly the primitive's own bounding volume.
    Leaf { primitive: usize, bounds: AABB },
    // Interior bounds are computed once from the children at merge time.
    Interior { left: usize, right: usize, bounds: AABB },
}

impl Node {
    fn bounds(&self) -> AABB {
        match *self {
            Node::Leaf { bounds, .. } => bounds,
            Node::Interior { bounds, .. } => bounds,
        }
    }
}

/// Spatial index over a set of primitives: boundable primitives go into a
/// binary tree built by greedy agglomeration, unboundable ones (infinite
/// planes and the like) stay on a linear fallback list. Nodes live in an
/// index-addressed arena.
pub struct Accelerator {
    primitives: Vec<Arc<Primitive>>,
    nodes: Vec<Node>,
    root: Option<usize>,
    unbounded: Vec<usize>,
    epsilon: Float,
}

impl Accelerator {
    pub fn new(primitives: Vec<Arc<Primitive>>) -> Self {
        Self::with_epsilon(primitives, EPSILON)
    }

    pub fn with_epsilon(primitives: Vec<Arc<Primitive>>, epsilon: Float) -> Self {
        let mut accel = Self {
            primitives,
            nodes: Vec::new(),
            root: None,
            unbounded: Vec::new(),
            epsilon,
        };
        accel.build();
        accel
    }

    pub fn primitives(&self) -> &[Arc<Primitive>] {
        &self.primitives
    }

    pub fn epsilon(&self) -> Float {
        self.epsilon
    }

    // Repeatedly merge the pair of root-level nodes whose merged box has
    // the smallest volume until one root remains. Cubic in the node count,
    // which is the primitive count of one scene partition.
    fn build(&mut self) {
        let mut roots: Vec<usize> = Vec::new();
        for (idx, primitive) in self.primitives.iter().enumerate() {
            match primitive.shape().bounding_box() {
                Some(bounds) => {
                    roots.push(self.nodes.len());
                    self.nodes.push(Node::Leaf { primitive: idx, bounds });
                }
                None => self.unbounded.push(idx),
            }
        }

        while roots.len() > 1 {
            let mut best_pair = (0usize, 1usize);
            let mut best_volume = FLOAT_INFINITY;
            for i in 0..roots.len() {
                for j in (i + 1)..roots.len() {
                    let merged = self.nodes[roots[i]].bounds()
                        .union(&self.nodes[roots[j]].bounds());
                    let volume = merged.volume();
                    if volume < best_volume {
                        best_volume = volume;
                        best_pair = (i, j);
                    }
                }
            }

            let (i, j) = best_pair;
            let left = roots[i];
            let right = roots[j];
            let bounds = self.nodes[left].bounds().union(&self.nodes[right].bounds());
            let merged_idx = self.nodes.len();
            self.nodes.push(Node::Interior { left, right, bounds });

            // Remove the higher index first so the lower one stays valid.
            roots.swap_remove(j);
            roots.swap_remove(i);
            roots.push(merged_idx);
        }

        self.root = roots.first().copied();
    }

    /// Nearest valid interaction along the ray, or `None`. A hit counts
    /// only if its parameter exceeds the epsilon guard and, when
    /// `ignoring` is given, the hit primitive is a different object.
    pub fn get_interaction(&self, ray: &Ray3f,
                           ignoring: Option<&Arc<Primitive>>) -> Option<Interaction> {
        let tree_hit = self.root
            .and_then(|root| self.intersect_node(root, ray, ignoring));

        // The tree answers for all bounded geometry; the linear list is
        // consulted when the tree has nothing to offer.
        let hit = match tree_hit {
            Some(hit) => Some(hit),
            None => self.intersect_unbounded(ray, ignoring),
        };

        hit.map(|(idx, surface)| {
            Interaction::new(self.primitives[idx].clone(), surface, *ray)
        })
    }

    fn intersect_node(&self, node_idx: usize, ray: &Ray3f,
                      ignoring: Option<&Arc<Primitive>>) -> Option<(usize, SurfaceHit)> {
        let node = self.nodes[node_idx];
        if !node.bounds().ray_intersect(ray) {
            return None;
        }

        match node {
            Node::Leaf { primitive, .. } => {
                self.intersect_primitive(primitive, ray, ignoring)
            }
            Node::Interior { left, right, .. } => {
                let left_hit = self.intersect_node(left, ray, ignoring);
                let right_hit = self.intersect_node(right, ray, ignoring);
                closer(left_hit, right_hit)
            }
        }
    }

    fn intersect_primitive(&self, idx: usize, ray: &Ray3f,
                           ignoring: Option<&Arc<Primitive>>) -> Option<(usize, SurfaceHit)> {
        if let Some(skip) = ignoring {
            if Arc::ptr_eq(skip, &self.primitives[idx]) {
                return None;
            }
        }
        // Narrow the window so a root at the ray origin is skipped in
        // favor of the next intersection along the same ray.
        let mut guarded = *ray;
        guarded.min_t = guarded.min_t.max(self.epsilon);
        let hit = self.primitives[idx].shape().ray_intersection(&guarded)?;
        Some((idx, hit))
    }

    fn intersect_unbounded(&self, ray: &Ray3f,
                           ignoring: Option<&Arc<Primitive>>) -> Option<(usize, SurfaceHit)> {
        let mut best: Option<(usize, SurfaceHit)> = None;
        for &idx in &self.unbounded {
            let hit = self.intersect_primitive(idx, ray, ignoring);
            best = closer(best, hit);
        }
        best
    }
}

const FLOAT_INFINITY: Float = std::f32::INFINITY;

fn closer(a: Option<(usize, SurfaceHit)>,
          b: Option<(usize, SurfaceHit)>) -> Option<(usize, SurfaceHit)> {
    match (a, b) {
        (Some(lhs), Some(rhs)) => {
            if lhs.1.t() <= rhs.1.t() { Some(lhs) } else { Some(rhs) }
        }
        (Some(lhs), None) => Some(lhs),
        (None, rhs) => rhs,
    }
}

/* Tests for Accelerator */
