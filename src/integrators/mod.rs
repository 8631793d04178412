// Copyright @genoise 2026

pub mod monte_carlo;
pub mod path;
