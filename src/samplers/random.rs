// Copyright @genoise 2026

use crate::core::sample::Sample;
use crate::core::sampler::{pixel_seed, PixelRegion, Sampler};
use crate::math::constants::Float;
use crate::samplers::common::PixelWalk;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Every dimension is an independent uniform draw; extra dimensions are
/// produced on demand by the sample itself, with no pre-generation.
pub struct RandomSampler {
    region: PixelRegion,
    samples_per_pixel: u32,
    base_seed: u64,
    walk: PixelWalk,
    pixel_rng: SmallRng,
}

impl RandomSampler {
    pub fn new(region: PixelRegion, samples_per_pixel: u32, base_seed: u64) -> Self {
        Self {
            region,
            samples_per_pixel: samples_per_pixel.max(1),
            base_seed,
            walk: PixelWalk::new(region, samples_per_pixel.max(1)),
            pixel_rng: SmallRng::seed_from_u64(base_seed),
        }
    }
}

impl Sampler for RandomSampler {
    fn next_sample(&mut self) -> Option<Sample> {
        if self.walk.is_done() {
            return None;
        }

        let (x, y, _sub) = self.walk.current();
        if self.walk.starts_pixel() {
            self.pixel_rng = SmallRng::seed_from_u64(pixel_seed(self.base_seed, x, y));
        }

        let film_x = x as Float + self.pixel_rng.gen::<Float>();
        let film_y = y as Float + self.pixel_rng.gen::<Float>();
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
        Box::new(RandomSampler::new(region, self.samples_per_pixel, self.base_seed))
    }
}

/* Tests for RandomSampler */
