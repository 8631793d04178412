// Copyright @genoise 2026

use crate::math::constants::{Float, Vector2f};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// One (pixel, sub-sample) record produced by a sampler: a film-plane
/// position inside the pixel's unit cell, a lens position in [0,1]^2, a
/// time value, and supplies of extra 1-D/2-D values in [0,1) that
/// materials and lights consume as their random dimensions.
///
/// The supplies never run dry: a pre-generated list that reaches its end
/// is reshuffled and walked again, and an empty list means values are
/// drawn on demand from the sample's own rng stream.
pub struct Sample {
    pixel_x: usize,
    pixel_y: usize,
    film_x: Float,
    film_y: Float,
    lens_u: Float,
    lens_v: Float,
    time: Float,
    extra_1d: Vec<Float>,
    cursor_1d: usize,
    extra_2d: Vec<Vector2f>,
    cursor_2d: usize,
    rng: SmallRng,
}

impl Sample {
    #[allow(clippy::too_many_arguments)]
    pub fn new(pixel_x: usize, pixel_y: usize,
               film_x: Float, film_y: Float,
               lens_u: Float, lens_v: Float,
               time: Float,
               extra_1d: Vec<Float>,
               extra_2d: Vec<Vector2f>,
               seed: u64) -> Self {
        Self {
            pixel_x,
            pixel_y,
            film_x,
            film_y,
            lens_u,
            lens_v,
            time,
            extra_1d,
            cursor_1d: 0,
            extra_2d,
            cursor_2d: 0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn pixel(&self) -> (usize, usize) {
        (self.pixel_x, self.pixel_y)
    }

    pub fn film_x(&self) -> Float {
        self.film_x
    }

    pub fn film_y(&self) -> Float {
        self.film_y
    }

    pub fn lens_uv(&self) -> Vector2f {
        Vector2f::new(self.lens_u, self.lens_v)
    }

    pub fn time(&self) -> Float {
        self.time
    }

    pub fn next_1d(&mut self) -> Float {
        if self.extra_1d.is_empty() {
            return self.rng.gen::<Float>();
        }
        if self.cursor_1d >= self.extra_1d.len() {
            self.extra_1d.shuffle(&mut self.rng);
            self.cursor_1d = 0;
        }
        let value = self.extra_1d[self.cursor_1d];
        self.cursor_1d += 1;
        value
    }

    pub fn next_2d(&mut self) -> Vector2f {
        if self.extra_2d.is_empty() {
            return Vector2f::new(self.rng.gen::<Float>(), self.rng.gen::<Float>());
        }
        if self.cursor_2d >= self.extra_2d.len() {
            self.extra_2d.shuffle(&mut self.rng);
            self.cursor_2d = 0;
        }
        let value = self.extra_2d[self.cursor_2d];
        self.cursor_2d += 1;
        value
    }
}

/* Tests for Sample */
