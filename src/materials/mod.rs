// Copyright @genoise 2026

pub mod emissive;
pub mod glass;
pub mod lambertian;
pub mod mirror;
