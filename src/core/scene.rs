// Copyright @genoise 2026

use crate::core::accelerator::Accelerator;
use crate::core::camera::Camera;
use crate::core::interaction::Interaction;
use crate::core::light::Light;
use crate::core::primitive::Primitive;
use crate::math::constants::{Float, EPSILON};
use crate::math::ray::Ray3f;
use std::sync::{Arc, OnceLock};

/// Immutable aggregate of primitives, lights and a camera. The
/// acceleration structure is derived from the primitives on first
/// intersection query and is read-only from then on, so concurrent
/// estimates over the same scene need no coordination.
pub struct Scene {
    primitives: Vec<Arc<Primitive>>,
    lights: Vec<Arc<dyn Light>>,
    camera: Arc<dyn Camera>,
    epsilon: Float,
    accelerator: OnceLock<Accelerator>,
}

impl Scene {
    pub fn new(primitives: Vec<Arc<Primitive>>,
               lights: Vec<Arc<dyn Light>>,
               camera: Arc<dyn Camera>) -> Self {
        Self::with_epsilon(primitives, lights, camera, EPSILON)
    }

    pub fn with_epsilon(primitives: Vec<Arc<Primitive>>,
                        lights: Vec<Arc<dyn Light>>,
                        camera: Arc<dyn Camera>,
                        epsilon: Float) -> Self {
        Self {
            primitives,
            lights,
            camera,
            epsilon,
            accelerator: OnceLock::new(),
        }
    }

    pub fn primitives(&self) -> &[Arc<Primitive>] {
        &self.primitives
    }

    pub fn lights(&self) -> &[Arc<dyn Light>] {
        &self.lights
    }

    pub fn camera(&self) -> &Arc<dyn Camera> {
        &self.camera
    }

    pub fn epsilon(&self) -> Float {
        self.epsilon
    }

    pub fn accelerator(&self) -> &Accelerator {
        self.accelerator.get_or_init(|| {
            log::debug!("building acceleration structure over {} primitives",
                        self.primitives.len());
            Accelerator::with_epsilon(self.primitives.clone(), self.epsilon)
        })
    }

    pub fn interaction(&self, ray: &Ray3f,
                       ignoring: Option<&Arc<Primitive>>) -> Option<Interaction> {
        self.accelerator().get_interaction(ray, ignoring)
    }
}
