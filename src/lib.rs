// Copyright @genoise 2026

#![allow(dead_code)]

pub extern crate nalgebra as na;

pub mod cameras;
pub mod core;
pub mod filters;
pub mod integrators;
pub mod io;
pub mod lights;
pub mod materials;
pub mod math;
pub mod renderers;
pub mod samplers;
pub mod shapes;
