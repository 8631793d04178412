// Copyright @genoise 2026

use crate::core::sample::Sample;
use crate::core::sampler::{pixel_seed, PixelRegion, Sampler};
use crate::math::constants::{Float, Vector2f};
use crate::samplers::common::PixelWalk;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const CANDIDATES_PER_SAMPLE: usize = 16;

/// Dart-throwing placement: each position is the best of several uniform
/// candidates, judged by distance to the samples already placed in the
/// pixel. Approximates a Poisson-disk distribution, which reads as more
/// uniform than independent placement at the same count.
pub struct BestCandidateSampler {
    region: PixelRegion,
    samples_per_pixel: u32,
    base_seed: u64,
    walk: PixelWalk,
    pixel_rng: SmallRng,
    film_positions: Vec<Vector2f>,
}

impl BestCandidateSampler {
    pub fn new(region: PixelRegion, samples_per_pixel: u32, base_seed: u64) -> Self {
        let samples_per_pixel = samples_per_pixel.max(1);
        Self {
            region,
            samples_per_pixel,
            base_seed,
            walk: PixelWalk::new(region, samples_per_pixel),
            pixel_rng: SmallRng::seed_from_u64(base_seed),
            film_positions: Vec::new(),
        }
    }

    fn min_distance(placed: &[Vector2f], candidate: &Vector2f) -> Float {
        placed
            .iter()
            .map(|p| (p - candidate).norm())
            .fold(std::f32::MAX, Float::min)
    }

    fn start_pixel(&mut self, x: usize, y: usize) {
        self.pixel_rng = SmallRng::seed_from_u64(pixel_seed(self.base_seed, x, y));

        let mut placed: Vec<Vector2f> = Vec::with_capacity(self.samples_per_pixel as usize);
        for _ in 0..self.samples_per_pixel {
            if placed.is_empty() {
                placed.push(Vector2f::new(self.pixel_rng.gen(), self.pixel_rng.gen()));
                continue;
            }

            let mut best = Vector2f::new(self.pixel_rng.gen(), self.pixel_rng.gen());
            let mut best_distance = Self::min_distance(&placed, &best);
            for _ in 1..CANDIDATES_PER_SAMPLE {
                let candidate = Vector2f::new(self.pixel_rng.gen(), self.pixel_rng.gen());
                let distance = Self::min_distance(&placed, &candidate);
                if distance > best_distance {
                    best = candidate;
                    best_distance = distance;
                }
            }
            placed.push(best);
        }
        self.film_positions = placed;
    }
}

impl Sampler for BestCandidateSampler {
    fn next_sample(&mut self) -> Option<Sample> {
        if self.walk.is_done() {
            return None;
        }

        let (x, y, sub) = self.walk.current();
        if self.walk.starts_pixel() {
            self.start_pixel(x, y);
        }

        let offset = self.film_positions[sub as usize];
        let film_x = x as Float + offset.x;
        let film_y = y as Float + offset.y;
        let lens_u = self.pixel_rng.gen::<Float>();
        let lens_v = self.pixel_rng.gen::<Float>();
        let time = self.pixel_rng.gen::<Float>();
        let stream_seed = self.pixel_rng.gen::<u64>();

        self.walk.advance();
        Some(Sample::new(x, y, film_x, film_y, lens_u, lens_v, time,
                         Vec::new(), Vec::new(), stream_seed))
    }

    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    fn region(&self) -> PixelRegion {
        self.region
    }

    fn partition(&self, region: PixelRegion) -> Box<dyn Sampler> {
        Box::new(BestCandidateSampler::new(region, self.samples_per_pixel, self.base_seed))
    }
}

/* Tests for BestCandidateSampler */
