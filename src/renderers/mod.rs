// Copyright @genoise 2026

pub mod parallel;
pub mod renderer;
