// Copyright @genoise 2026

use super::constants::{Float, Vector3f};
use std::ops::{Add, AddAssign, Div, Mul};

/// Radiometric value carried through the light transport estimate. The
/// pipeline only relies on this contract, so the working realization can
/// be swapped by retargeting the `ColorSpectrum` alias below.
pub trait Spectrum:
    Copy + Clone + Default + Send + Sync
    + Add<Output = Self>
    + AddAssign
    + Mul<Float, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Float, Output = Self>
{
    fn from_rgb(r: Float, g: Float, b: Float) -> Self;
    fn splat(v: Float) -> Self;
    fn to_rgb(&self) -> Vector3f;
    fn is_black(&self) -> bool;
    fn luminance(&self) -> Float;
    fn is_finite(&self) -> bool;
}

/// Compact 3-channel realization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RGBSpectrum {
    rgb: Vector3f,
}

impl Default for RGBSpectrum {
    fn default() -> Self {
        Self { rgb: Vector3f::new(0.0f32, 0.0f32, 0.0f32) }
    }
}

impl RGBSpectrum {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { rgb: Vector3f::new(r, g, b) }
    }

    pub fn r(&self) -> Float {
        self.rgb[0]
    }

    pub fn g(&self) -> Float {
        self.rgb[1]
    }

    pub fn b(&self) -> Float {
        self.rgb[2]
    }
}

impl Add for RGBSpectrum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { rgb: self.rgb + rhs.rgb }
    }
}

impl AddAssign for RGBSpectrum {
    fn add_assign(&mut self, rhs: Self) {
        self.rgb += rhs.rgb;
    }
}

impl Mul<Float> for RGBSpectrum {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self {
        Self { rgb: self.rgb * rhs }
    }
}

impl Mul for RGBSpectrum {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self { rgb: self.rgb.component_mul(&rhs.rgb) }
    }
}

impl Div<Float> for RGBSpectrum {
    type Output = Self;

    fn div(self, rhs: Float) -> Self {
        Self { rgb: self.rgb / rhs }
    }
}

impl Spectrum for RGBSpectrum {
    fn from_rgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(r, g, b)
    }

    fn splat(v: Float) -> Self {
        Self::new(v, v, v)
    }

    fn to_rgb(&self) -> Vector3f {
        self.rgb
    }

    fn is_black(&self) -> bool {
        self.rgb[0] == 0.0 && self.rgb[1] == 0.0 && self.rgb[2] == 0.0
    }

    fn luminance(&self) -> Float {
        0.212671 * self.rgb[0] + 0.715160 * self.rgb[1] + 0.072169 * self.rgb[2]
    }

    fn is_finite(&self) -> bool {
        self.rgb[0].is_finite() && self.rgb[1].is_finite() && self.rgb[2].is_finite()
    }
}

pub const SPECTRUM_SAMPLES: usize = 30;
const LAMBDA_START: Float = 400.0;
const LAMBDA_END: Float = 700.0;

/// Wavelength-tabulated realization with uniform bins over 400-700 nm.
/// RGB values map onto thirds of the band (blue low, green middle, red
/// high), so RGB round trips are exact for band-constant spectra.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledSpectrum {
    samples: [Float; SPECTRUM_SAMPLES],
}

impl Default for SampledSpectrum {
    fn default() -> Self {
        Self { samples: [0.0; SPECTRUM_SAMPLES] }
    }
}

impl SampledSpectrum {
    pub fn wavelength(bin: usize) -> Float {
        let step = (LAMBDA_END - LAMBDA_START) / (SPECTRUM_SAMPLES as Float);
        LAMBDA_START + (bin as Float + 0.5) * step
    }

    pub fn sample(&self, bin: usize) -> Float {
        self.samples[bin]
    }
}

impl Add for SampledSpectrum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for idx in 0..SPECTRUM_SAMPLES {
            out.samples[idx] += rhs.samples[idx];
        }
        out
    }
}

impl AddAssign for SampledSpectrum {
    fn add_assign(&mut self, rhs: Self) {
        for idx in 0..SPECTRUM_SAMPLES {
            self.samples[idx] += rhs.samples[idx];
        }
    }
}

impl Mul<Float> for SampledSpectrum {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self {
        let mut out = self;
        for idx in 0..SPECTRUM_SAMPLES {
            out.samples[idx] *= rhs;
        }
        out
    }
}

impl Mul for SampledSpectrum {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = self;
        for idx in 0..SPECTRUM_SAMPLES {
            out.samples[idx] *= rhs.samples[idx];
        }
        out
    }
}

impl Div<Float> for SampledSpectrum {
    type Output = Self;

    fn div(self, rhs: Float) -> Self {
        let mut out = self;
        for idx in 0..SPECTRUM_SAMPLES {
            out.samples[idx] /= rhs;
        }
        out
    }
}

impl Spectrum for SampledSpectrum {
    fn from_rgb(r: Float, g: Float, b: Float) -> Self {
        let mut out = Self::default();
        for idx in 0..SPECTRUM_SAMPLES {
            let lambda = Self::wavelength(idx);
            out.samples[idx] = if lambda < 500.0 {
                b
            } else if lambda < 600.0 {
                g
            } else {
                r
            };
        }
        out
    }

    fn splat(v: Float) -> Self {
        Self { samples: [v; SPECTRUM_SAMPLES] }
    }

    fn to_rgb(&self) -> Vector3f {
        let mut rgb = Vector3f::new(0.0, 0.0, 0.0);
        let mut counts = [0.0f32; 3];
        for idx in 0..SPECTRUM_SAMPLES {
            let lambda = Self::wavelength(idx);
            let channel = if lambda < 500.0 { 2 } else if lambda < 600.0 { 1 } else { 0 };
            rgb[channel] += self.samples[idx];
            counts[channel] += 1.0;
        }
        for channel in 0..3 {
            if counts[channel] > 0.0 {
                rgb[channel] /= counts[channel];
            }
        }
        rgb
    }

    fn is_black(&self) -> bool {
        self.samples.iter().all(|&s| s == 0.0)
    }

    fn luminance(&self) -> Float {
        let rgb = self.to_rgb();
        0.212671 * rgb[0] + 0.715160 * rgb[1] + 0.072169 * rgb[2]
    }

    fn is_finite(&self) -> bool {
        self.samples.iter().all(|s| s.is_finite())
    }
}

/// The realization the rest of the crate works in.
pub type ColorSpectrum = RGBSpectrum;

/* Tests for Spectrum */
