// Copyright @genoise 2026

pub mod perspective;
