// Copyright @genoise 2026

pub mod best_candidate;
pub mod common;
pub mod random;
pub mod stratified;
