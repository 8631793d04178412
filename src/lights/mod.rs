// Copyright @genoise 2026

pub mod area;
pub mod environment;
pub mod point;
