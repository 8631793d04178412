// Copyright @genoise 2026

pub mod accelerator;
pub mod camera;
pub mod error;
pub mod film;
pub mod filter;
pub mod integrator;
pub mod interaction;
pub mod light;
pub mod material;
pub mod primitive;
pub mod sample;
pub mod sampler;
pub mod scene;
pub mod shape;
pub mod task;
