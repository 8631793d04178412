// Copyright @genoise 2026

use crate::core::filter::Filter;
use crate::core::sample::Sample;
use crate::core::sampler::PixelRegion;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector4f};
use crate::math::spectrum::{ColorSpectrum, Spectrum};
use std::sync::{Arc, Mutex};

/// Photographic exposure model applied when accumulated radiance is
/// turned into display luminance.
#[derive(Debug, Clone, Copy)]
pub struct Exposure {
    pub calibration: Float,
    pub exposure_time: Float,
    pub iso: Float,
    pub aperture: Float,
}

impl Default for Exposure {
    fn default() -> Self {
        Self { calibration: 1.0, exposure_time: 1.0, iso: 1.0, aperture: 1.0 }
    }
}

impl Exposure {
    pub fn scale(&self) -> Float {
        self.calibration * self.exposure_time * self.iso / (self.aperture * self.aperture)
    }
}

// Accumulation raster, padded by the filter extent on every side so a
// splat near the canvas edge has somewhere to land.
struct FilmBuffer {
    padded_width: usize,
    padded_height: usize,
    accum: Vec<ColorSpectrum>,
    weights: Vec<Float>,
}

impl FilmBuffer {
    fn new(padded_width: usize, padded_height: usize) -> Self {
        let n = padded_width * padded_height;
        Self {
            padded_width,
            padded_height,
            accum: vec![ColorSpectrum::default(); n],
            weights: vec![0.0; n],
        }
    }

    fn index(&self, padded_x: usize, padded_y: usize) -> usize {
        padded_x + self.padded_width * padded_y
    }
}

/// Raw accumulation data for a sub-rectangle of a film, tagged with a job
/// identifier so a distributed render can be recomposed.
pub struct FilmFragment {
    pub id: String,
    pub region: PixelRegion,
    accum: Vec<ColorSpectrum>,
    weights: Vec<Float>,
}

/// Weighted sample accumulation plus conversion to a display image.
///
/// `add_sample` is safe under concurrent invocation from many rendering
/// threads: the lazily-allocated buffer and every per-pixel
/// read-modify-write happen under one lock scoped to this film.
/// Accumulation is commutative, so no ordering is required.
pub struct Film {
    width: usize,
    height: usize,
    filter: Arc<dyn Filter>,
    exposure: Exposure,
    buffer: Mutex<Option<FilmBuffer>>,
}

impl Film {
    pub fn new(width: usize, height: usize, filter: Arc<dyn Filter>) -> Self {
        Self::with_exposure(width, height, filter, Exposure::default())
    }

    pub fn with_exposure(width: usize, height: usize,
                         filter: Arc<dyn Filter>, exposure: Exposure) -> Self {
        Self {
            width,
            height,
            filter,
            exposure,
            buffer: Mutex::new(None),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn filter(&self) -> &Arc<dyn Filter> {
        &self.filter
    }

    /// Splat one radiance estimate across every pixel of the filter
    /// footprint around the sample position.
    pub fn add_sample(&self, sample: &Sample, radiance: &ColorSpectrum) {
        debug_assert!(radiance.is_finite());

        let ex = self.filter.extent_x();
        let ey = self.filter.extent_y();
        let (px, py) = sample.pixel();

        let mut guard = self.buffer.lock().unwrap();
        let buffer = guard.get_or_insert_with(|| {
            FilmBuffer::new(self.width + 2 * ex, self.height + 2 * ey)
        });

        let x_lo = px as isize - ex as isize;
        let y_lo = py as isize - ey as isize;
        for y in y_lo..=(py as isize + ey as isize) {
            for x in x_lo..=(px as isize + ex as isize) {
                let dx = (x as Float + 0.5) - sample.film_x();
                let dy = (y as Float + 0.5) - sample.film_y();
                if !self.filter.is_contributing(dx, dy) {
                    continue;
                }

                let padded_x = x + ex as isize;
                let padded_y = y + ey as isize;
                if padded_x < 0 || padded_y < 0
                    || padded_x >= buffer.padded_width as isize
                    || padded_y >= buffer.padded_height as isize {
                    continue;
                }

                let weight = self.filter.contribution(dx, dy);
                let idx = buffer.index(padded_x as usize, padded_y as usize);
                buffer.accum[idx] += *radiance * weight;
                buffer.weights[idx] += weight;
            }
        }
    }

    /// Display image: accumulated spectrum over accumulated weight, run
    /// through the exposure model. Pixels that never received weight come
    /// out as transparent black.
    pub fn get_image(&self) -> Bitmap {
        let ex = self.filter.extent_x();
        let ey = self.filter.extent_y();
        let scale = self.exposure.scale();

        let mut image = Bitmap::new(self.width, self.height);
        let guard = self.buffer.lock().unwrap();
        let buffer = match guard.as_ref() {
            Some(buffer) => buffer,
            None => return image,
        };

        for y in 0..self.height {
            for x in 0..self.width {
                let idx = buffer.index(x + ex, y + ey);
                let weight = buffer.weights[idx];
                if weight == 0.0 {
                    continue;
                }
                let rgb = (buffer.accum[idx] / weight * scale).to_rgb();
                image[(x, y)] = Vector4f::new(rgb[0], rgb[1], rgb[2], 1.0);
            }
        }
        image
    }

    /// Raw accumulation for a sub-rectangle, tagged with `id`.
    pub fn fragment(&self, id: &str, region: PixelRegion) -> FilmFragment {
        assert!(region.x1 < self.width && region.y1 < self.height);
        let ex = self.filter.extent_x();
        let ey = self.filter.extent_y();

        let n = region.pixel_count();
        let mut accum = vec![ColorSpectrum::default(); n];
        let mut weights = vec![0.0; n];

        let guard = self.buffer.lock().unwrap();
        if let Some(buffer) = guard.as_ref() {
            let mut out = 0;
            for y in region.y0..=region.y1 {
                for x in region.x0..=region.x1 {
                    let idx = buffer.index(x + ex, y + ey);
                    accum[out] = buffer.accum[idx];
                    weights[out] = buffer.weights[idx];
                    out += 1;
                }
            }
        }

        FilmFragment { id: String::from(id), region, accum, weights }
    }

    /// Overlay a fragment's pixels into this film, replacing whatever the
    /// covered pixels held before.
    pub fn merge_fragment(&self, fragment: &FilmFragment) {
        assert!(fragment.region.x1 < self.width && fragment.region.y1 < self.height);
        let ex = self.filter.extent_x();
        let ey = self.filter.extent_y();

        let mut guard = self.buffer.lock().unwrap();
        let buffer = guard.get_or_insert_with(|| {
            FilmBuffer::new(self.width + 2 * ex, self.height + 2 * ey)
        });

        let mut src = 0;
        for y in fragment.region.y0..=fragment.region.y1 {
            for x in fragment.region.x0..=fragment.region.x1 {
                let idx = buffer.index(x + ex, y + ey);
                buffer.accum[idx] = fragment.accum[src];
                buffer.weights[idx] = fragment.weights[src];
                src += 1;
            }
        }
    }
}

/* Tests for Film */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample::Sample;
    use crate::filters::box_filter::BoxFilter;

    fn centered_sample(px: usize, py: usize) -> Sample {
        Sample::new(px, py,
                    px as Float + 0.5, py as Float + 0.5,
                    0.5, 0.5, 0.0,
                    Vec::new(), Vec::new(), 11)
    }

    #[test]
    fn test_box_filter_footprint_pixel_count() {
        let extent = 1usize;
        let film = Film::new(8, 8, Arc::new(BoxFilter::new(extent)));
        let sample = centered_sample(4, 4);
        film.add_sample(&sample, &ColorSpectrum::splat(1.0));

        let image = film.get_image();
        let mut touched = 0;
        for y in 0..8 {
            for x in 0..8 {
                if image[(x, y)][3] > 0.0 {
                    touched += 1;
                    // Uniform weight: normalized value equals the splat.
                    assert!((image[(x, y)][0] - 1.0).abs() < 1e-5);
                }
            }
        }
        assert_eq!(touched, (2 * extent + 1) * (2 * extent + 1));
    }

    #[test]
    fn test_zero_weight_pixels_are_transparent_black() {
        let film = Film::new(4, 4, Arc::new(BoxFilter::new(0)));
        let image = film.get_image();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(image[(x, y)], Vector4f::new(0.0, 0.0, 0.0, 0.0));
            }
        }
    }

    #[test]
    fn test_exposure_model_scales_output() {
        let exposure = Exposure {
            calibration: 0.5,
            exposure_time: 2.0,
            iso: 4.0,
            aperture: 2.0,
        };
        // 0.5 * 2 * 4 / 4 = 1.0 scale on top of the accumulated mean.
        assert!((exposure.scale() - 1.0).abs() < 1e-6);

        let film = Film::with_exposure(2, 2, Arc::new(BoxFilter::new(0)), exposure);
        let sample = centered_sample(1, 1);
        film.add_sample(&sample, &ColorSpectrum::new(0.25, 0.5, 0.75));

        let image = film.get_image();
        assert!((image[(1, 1)][1] - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_edge_splat_spills_into_padding_without_panic() {
        let film = Film::new(4, 4, Arc::new(BoxFilter::new(2)));
        let sample = centered_sample(0, 0);
        film.add_sample(&sample, &ColorSpectrum::splat(2.0));

        let image = film.get_image();
        assert!(image[(0, 0)][3] > 0.0);
        assert!((image[(0, 0)][0] - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_fragment_extract_and_merge_round_trip() {
        let filter = Arc::new(BoxFilter::new(0));
        let source = Film::new(4, 4, filter.clone());
        for y in 0..4 {
            for x in 0..4 {
                let sample = centered_sample(x, y);
                let v = (x + 4 * y) as Float;
                source.add_sample(&sample, &ColorSpectrum::splat(v));
            }
        }

        let region = PixelRegion::new(1, 1, 3, 2);
        let fragment = source.fragment("job-17", region);
        assert_eq!(fragment.id, "job-17");

        let target = Film::new(4, 4, filter);
        target.merge_fragment(&fragment);

        let merged = target.get_image();
        let original = source.get_image();
        for y in 1..=2 {
            for x in 1..=3 {
                assert_eq!(merged[(x, y)], original[(x, y)]);
            }
        }
        // Pixels outside the fragment stay untouched.
        assert_eq!(merged[(0, 0)][3], 0.0);
    }
}
