//! Constant-rate drying curve.
//!
//! Water leaves the batch at the maximum removal rate from the balance,
//! so the remaining water mass falls linearly with time until it reaches
//! the final water mass. Moisture content is reported on a wet basis.

mod config;
mod error;

pub use config::{CurveConfig, DEFAULT_CURVE_STEPS};
pub use error::InvalidParameterError;

use std::{iter::FusedIterator, ops::Range};

use uom::si::{
    f64::{Mass, Ratio, Time},
    ratio::ratio,
    time::hour,
};

use super::Results;

/// Builds the drying curve for a balance.
///
/// Samples are spaced evenly over the minimum drying time, from the moment
/// the batch is loaded to the moment it reaches the target moisture content.
///
/// # Errors
///
/// Returns an [`InvalidParameterError`] if the configured step count is zero
/// or too large to index.
pub fn generate_curve(
    results: &Results,
    config: CurveConfig,
) -> Result<DryingCurve, InvalidParameterError> {
    let samples = config.sample_count()?;
    Ok(DryingCurve {
        results: *results,
        steps: config.steps,
        samples,
    })
}

/// One point on a drying curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Time elapsed since the batch was loaded.
    pub time: Time,

    /// Wet-basis moisture content at that time.
    pub moisture: Ratio,
}

impl CurveSample {
    /// Elapsed time in hours, for plotting.
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.time.get::<hour>()
    }

    /// Wet-basis moisture content as a fraction, for plotting.
    #[must_use]
    pub fn moisture_fraction(&self) -> f64 {
        self.moisture.get::<ratio>()
    }
}

/// A drying curve sampled at evenly spaced times.
///
/// Samples are computed on demand. Each call to [`iter`](Self::iter) starts
/// again from the first sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DryingCurve {
    results: Results,
    steps: usize,
    samples: usize,
}

impl DryingCurve {
    /// Number of intervals between the first and last sample.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of samples, always `steps + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples
    }

    /// Always `false`: a curve has at least both endpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Returns an iterator over the samples in time order.
    #[must_use]
    pub fn iter(&self) -> Samples<'_> {
        Samples {
            curve: self,
            indices: 0..self.samples,
        }
    }

    /// Returns the sample at `index`, or `None` past the last sample.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CurveSample> {
        (index < self.samples).then(|| self.sample(index))
    }

    /// Collects all samples.
    #[must_use]
    pub fn to_vec(&self) -> Vec<CurveSample> {
        self.iter().collect()
    }

    /// Collects `(hours, moisture fraction)` pairs for an x/y plot.
    #[must_use]
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.iter()
            .map(|sample| (sample.hours(), sample.moisture_fraction()))
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn sample(&self, index: usize) -> CurveSample {
        let r = &self.results;

        let time = r.minimum_drying_time * (index as f64 / self.steps as f64);

        let removed: Mass = r.max_water_removal_rate * time;
        let water = (r.initial_water_mass - removed).max(r.final_water_mass);

        // Rounding can undershoot the target at the last sample.
        let moisture: Ratio = water / (r.dry_solid_mass + water);
        let moisture = moisture.max(*r.final_moisture);

        CurveSample { time, moisture }
    }
}

impl<'a> IntoIterator for &'a DryingCurve {
    type Item = CurveSample;
    type IntoIter = Samples<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the samples of a [`DryingCurve`].
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    curve: &'a DryingCurve,
    indices: Range<usize>,
}

impl Iterator for Samples<'_> {
    type Item = CurveSample;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|i| self.curve.sample(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl DoubleEndedIterator for Samples<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.indices.next_back().map(|i| self.curve.sample(i))
    }
}

impl ExactSizeIterator for Samples<'_> {}

impl FusedIterator for Samples<'_> {}
