//! Composite response of the three-band cascade
//!
//! Each band is evaluated through the injected [`MagnitudeResponse`] at the
//! same frequency set, the linear magnitudes are multiplied, and the product
//! is converted to dB for display.

use super::band::{BandId, EqualizerState};
use super::host::MagnitudeResponse;
use crate::error::{EqError, Result};
use crate::geometry::{Point, Surface, FREQ_MAX, FREQ_MIN};
use log::debug;
use serde::{Deserialize, Serialize};

/// Number of points on the drawn response curve
pub const CURVE_SAMPLE_COUNT: usize = 128;

/// Smallest linear magnitude converted to dB (-240 dB), keeps the curve finite
const MIN_MAGNITUDE: f64 = 1e-12;

/// One point of the response curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseSample {
    /// Frequency in Hz
    pub frequency: f64,
    /// Composite magnitude in dB
    pub magnitude_db: f64,
}

/// Convert a linear magnitude to dB
pub fn linear_to_db(magnitude: f64) -> f64 {
    20.0 * magnitude.max(MIN_MAGNITUDE).log10()
}

/// `count` log-spaced frequencies from 20 Hz to 20 kHz, both ends included
pub fn log_spaced_frequencies(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![FREQ_MIN],
        _ => {
            let log_min = FREQ_MIN.log10();
            let log_max = FREQ_MAX.log10();
            (0..count)
                .map(|i| {
                    let t = i as f64 / (count - 1) as f64;
                    10.0_f64.powf(log_min + t * (log_max - log_min))
                })
                .collect()
        }
    }
}

/// Cascades the three bands into one magnitude response
#[derive(Debug, Clone)]
pub struct ResponseCompositor<R> {
    response: R,
}

impl<R: MagnitudeResponse> ResponseCompositor<R> {
    /// Create a compositor around a host response primitive
    pub fn new(response: R) -> Self {
        Self { response }
    }

    /// The injected response primitive
    pub fn response(&self) -> &R {
        &self.response
    }

    /// Product of the three bands' linear magnitudes at each frequency
    pub fn composite_magnitude(
        &self,
        state: &EqualizerState,
        frequencies: &[f64],
    ) -> Result<Vec<f64>> {
        let mut composite = vec![1.0; frequencies.len()];

        for band in BandId::ALL {
            let params = state.band(band);
            let magnitudes = self.response.magnitude_response(
                params.filter_type,
                params.frequency,
                params.gain_db,
                params.q,
                frequencies,
            )?;

            if magnitudes.len() != frequencies.len() {
                return Err(EqError::ResponseLengthMismatch {
                    expected: frequencies.len(),
                    actual: magnitudes.len(),
                });
            }

            for (total, mag) in composite.iter_mut().zip(magnitudes) {
                *total *= mag;
            }
        }

        Ok(composite)
    }

    /// Composite magnitude in dB at each frequency
    pub fn composite_db(&self, state: &EqualizerState, frequencies: &[f64]) -> Result<Vec<f64>> {
        Ok(self
            .composite_magnitude(state, frequencies)?
            .into_iter()
            .map(linear_to_db)
            .collect())
    }

    /// Composite magnitude in dB at a single frequency
    pub fn magnitude_db_at(&self, state: &EqualizerState, frequency: f64) -> Result<f64> {
        let db = self.composite_db(state, &[frequency])?;
        db.first().copied().ok_or(EqError::ResponseLengthMismatch {
            expected: 1,
            actual: 0,
        })
    }
}

/// Samples the composite response on a fixed log-spaced grid
#[derive(Debug, Clone)]
pub struct CurveSampler {
    frequencies: Vec<f64>,
}

impl Default for CurveSampler {
    fn default() -> Self {
        Self::new(CURVE_SAMPLE_COUNT)
    }
}

impl CurveSampler {
    /// Create a sampler with `count` points
    pub fn new(count: usize) -> Self {
        Self {
            frequencies: log_spaced_frequencies(count),
        }
    }

    /// The sample grid in Hz
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Number of points per curve
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Sample the composite response for a state
    pub fn sample<R: MagnitudeResponse>(
        &self,
        compositor: &ResponseCompositor<R>,
        state: &EqualizerState,
    ) -> Result<Vec<ResponseSample>> {
        let db = compositor.composite_db(state, &self.frequencies)?;
        Ok(self
            .frequencies
            .iter()
            .zip(db)
            .map(|(&frequency, magnitude_db)| ResponseSample {
                frequency,
                magnitude_db,
            })
            .collect())
    }

    /// Sample for drawing; an unmeasured surface yields no samples
    ///
    /// Safe to call redundantly, e.g. on every resize event.
    pub fn render<R: MagnitudeResponse>(
        &self,
        compositor: &ResponseCompositor<R>,
        state: &EqualizerState,
        surface: Surface,
    ) -> Result<Vec<ResponseSample>> {
        if !surface.is_measured() {
            debug!("Skipping curve render on unmeasured surface {:?}", surface);
            return Ok(Vec::new());
        }
        self.sample(compositor, state)
    }

    /// The rendered curve as surface points, in frequency order
    pub fn polyline<R: MagnitudeResponse>(
        &self,
        compositor: &ResponseCompositor<R>,
        state: &EqualizerState,
        surface: Surface,
    ) -> Result<Vec<Point>> {
        Ok(self
            .render(compositor, state, surface)?
            .iter()
            .filter_map(|s| surface.to_point(s.frequency, s.magnitude_db))
            .collect())
    }
}
