// Copyright @genoise 2026

pub mod aabb;
pub mod bitmap;
pub mod constants;
pub mod frame;
pub mod ray;
pub mod spectrum;
pub mod warp;
