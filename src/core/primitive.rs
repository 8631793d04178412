// Copyright @genoise 2026

use crate::core::material::Material;
use crate::core::shape::Shape;
use std::sync::Arc;

/// One renderable object: a shape paired with an optional material. A
/// primitive without material still occludes rays (shadow-only geometry)
/// but is never shaded.
pub struct Primitive {
    shape: Arc<dyn Shape>,
    material: Option<Arc<dyn Material>>,
}

impl Primitive {
    pub fn new(shape: Arc<dyn Shape>, material: Option<Arc<dyn Material>>) -> Self {
        Self { shape, material }
    }

    pub fn shape(&self) -> &Arc<dyn Shape> {
        &self.shape
    }

    pub fn material(&self) -> Option<&Arc<dyn Material>> {
        self.material.as_ref()
    }

    pub fn is_boundable(&self) -> bool {
        self.shape.bounding_box().is_some()
    }
}
