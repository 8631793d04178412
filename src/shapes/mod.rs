// Copyright @genoise 2026

pub mod plane;
pub mod sphere;
