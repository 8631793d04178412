// Copyright @genoise 2026

use crate::core::error::ConfigError;
use crate::core::film::{Exposure, Film};
use crate::core::integrator::Integrator;
use crate::core::sampler::{PixelRegion, Sampler};
use crate::filters::box_filter::BoxFilter;
use crate::filters::mitchell::MitchellFilter;
use crate::integrators::monte_carlo::MonteCarloIntegrator;
use crate::integrators::path::PathIntegrator;
use crate::samplers::best_candidate::BestCandidateSampler;
use crate::samplers::random::RandomSampler;
use crate::samplers::stratified::StratifiedSampler;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerKind {
    Random,
    Stratified,
    BestCandidate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterKind {
    Box { extent: usize },
    Mitchell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorKind {
    Path,
    MonteCarlo { indirect_samples: u32 },
}

/// Everything a worker needs to run one render job: film geometry, the
/// pixel region it owns, and the sampler/filter/integrator policies plus
/// an opaque job identifier for tagging partial output.
#[derive(Debug, Clone)]
pub struct RenderTask {
    pub job_id: String,
    pub film_width: usize,
    pub film_height: usize,
    pub region: PixelRegion,
    pub samples_per_pixel: u32,
    pub seed: u64,
    pub max_depth: u32,
    pub sampler: SamplerKind,
    pub filter: FilterKind,
    pub integrator: IntegratorKind,
    pub exposure: Exposure,
}

impl RenderTask {
    pub fn new(job_id: &str, film_width: usize, film_height: usize) -> Result<Self, ConfigError> {
        if film_width == 0 || film_height == 0 {
            return Err(ConfigError::InvalidFilmDimensions {
                width: film_width,
                height: film_height,
            });
        }
        Ok(Self {
            job_id: String::from(job_id),
            film_width,
            film_height,
            region: PixelRegion::new(0, 0, film_width - 1, film_height - 1),
            samples_per_pixel: 1,
            seed: 0,
            max_depth: 4,
            sampler: SamplerKind::Random,
            filter: FilterKind::Box { extent: 0 },
            integrator: IntegratorKind::Path,
            exposure: Exposure::default(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.film_width == 0 || self.film_height == 0 {
            return Err(ConfigError::InvalidFilmDimensions {
                width: self.film_width,
                height: self.film_height,
            });
        }
        if self.region.x1 >= self.film_width || self.region.y1 >= self.film_height {
            return Err(ConfigError::RegionOutsideFilm {
                x0: self.region.x0,
                y0: self.region.y0,
                x1: self.region.x1,
                y1: self.region.y1,
                width: self.film_width,
                height: self.film_height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSampleCount);
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroMaxDepth);
        }
        if let IntegratorKind::MonteCarlo { indirect_samples } = self.integrator {
            if indirect_samples == 0 {
                return Err(ConfigError::ZeroIndirectSamples);
            }
        }
        Ok(())
    }

    pub fn build_sampler(&self) -> Result<Box<dyn Sampler>, ConfigError> {
        self.validate()?;
        let sampler: Box<dyn Sampler> = match self.sampler {
            SamplerKind::Random => {
                Box::new(RandomSampler::new(self.region, self.samples_per_pixel, self.seed))
            }
            SamplerKind::Stratified => {
                Box::new(StratifiedSampler::new(self.region, self.samples_per_pixel, self.seed))
            }
            SamplerKind::BestCandidate => {
                Box::new(BestCandidateSampler::new(self.region, self.samples_per_pixel, self.seed))
            }
        };
        Ok(sampler)
    }

    pub fn build_film(&self) -> Result<Film, ConfigError> {
        self.validate()?;
        let filter: Arc<dyn crate::core::filter::Filter> = match self.filter {
            FilterKind::Box { extent } => Arc::new(BoxFilter::new(extent)),
            FilterKind::Mitchell => Arc::new(MitchellFilter::default()),
        };
        Ok(Film::with_exposure(self.film_width, self.film_height, filter, self.exposure))
    }

    pub fn build_integrator(&self) -> Result<Box<dyn Integrator>, ConfigError> {
        self.validate()?;
        let integrator: Box<dyn Integrator> = match self.integrator {
            IntegratorKind::Path => Box::new(PathIntegrator::new(self.max_depth)),
            IntegratorKind::MonteCarlo { indirect_samples } => {
                Box::new(MonteCarloIntegrator::new(self.max_depth, indirect_samples))
            }
        };
        Ok(integrator)
    }

    /// Split this task into at most `n` disjoint row-band sub-tasks over
    /// the same film; their fragments recompose the parent image.
    pub fn decompose(&self, n: usize) -> Vec<RenderTask> {
        self.region
            .split_rows(n)
            .into_iter()
            .enumerate()
            .map(|(band, region)| {
                let mut sub = self.clone();
                sub.job_id = format!("{}/{}", self.job_id, band);
                sub.region = region;
                sub
            })
            .collect()
    }
}

/* Tests for RenderTask */
