// Copyright @genoise 2026

use crate::core::sampler::PixelRegion;

/// Row-major walk over (pixel, sub-sample) pairs of a region. Strategies
/// share the walk and differ only in how they place positions.
#[derive(Debug, Clone)]
pub struct PixelWalk {
    region: PixelRegion,
    samples_per_pixel: u32,
    pixel_index: usize,
    sub_index: u32,
}

impl PixelWalk {
    pub fn new(region: PixelRegion, samples_per_pixel: u32) -> Self {
        Self { region, samples_per_pixel, pixel_index: 0, sub_index: 0 }
    }

    pub fn is_done(&self) -> bool {
        self.pixel_index >= self.region.pixel_count()
    }

    /// Current pixel coordinates and sub-sample index.
    pub fn current(&self) -> (usize, usize, u32) {
        let x = self.region.x0 + self.pixel_index % self.region.width();
        let y = self.region.y0 + self.pixel_index / self.region.width();
        (x, y, self.sub_index)
    }

    pub fn starts_pixel(&self) -> bool {
        self.sub_index == 0
    }

    pub fn advance(&mut self) {
        self.sub_index += 1;
        if self.sub_index >= self.samples_per_pixel {
            self.sub_index = 0;
            self.pixel_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_visits_every_pair_once() {
        let region = PixelRegion::new(1, 2, 3, 3);
        let mut walk = PixelWalk::new(region, 2);

        let mut seen = Vec::new();
        while !walk.is_done() {
            seen.push(walk.current());
            walk.advance();
        }

        assert_eq!(seen.len(), region.pixel_count() * 2);
        let mut dedup = seen.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), seen.len());
        assert_eq!(seen[0], (1, 2, 0));
        assert_eq!(seen[1], (1, 2, 1));
        assert_eq!(seen[2], (2, 2, 0));
    }
}
