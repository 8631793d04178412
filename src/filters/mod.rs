// Copyright @genoise 2026

pub mod box_filter;
pub mod mitchell;
