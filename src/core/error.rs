// Copyright @genoise 2026

use thiserror::Error;

/// Configuration problems are surfaced before any rendering begins.
/// Geometric misses and degenerate sampling densities are ordinary zero
/// contributions, never errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pixel region ({x0}, {y0})..({x1}, {y1}) is not inside a {width}x{height} film")]
    RegionOutsideFilm {
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
        width: usize,
        height: usize,
    },

    #[error("samples per pixel must be positive")]
    ZeroSampleCount,

    #[error("film dimensions must be positive, got {width}x{height}")]
    InvalidFilmDimensions { width: usize, height: usize },

    #[error("integrator max depth must be positive")]
    ZeroMaxDepth,

    #[error("indirect sample count must be positive")]
    ZeroIndirectSamples,
}
