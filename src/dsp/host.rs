//! Host magnitude-response capability
//!
//! The curve never reaches into a global audio engine. Whatever can answer
//! "how loud is this single filter stage at these frequencies" is handed to
//! the compositor as a [`MagnitudeResponse`] implementation.

use super::band::FilterType;
use super::biquad::BiquadCoeffs;
use crate::error::{EqError, Result};
use crate::geometry::FREQ_MAX;

/// Default sample rate used to evaluate the built-in biquads
pub const DEFAULT_SAMPLE_RATE: f64 = 48000.0;

/// Single-stage magnitude response provided by the host audio engine
pub trait MagnitudeResponse {
    /// Linear-scale gain of one filter stage at each requested frequency
    ///
    /// Implementations must return exactly one value per entry in
    /// `sample_frequencies`, or an error when the primitive is unavailable.
    fn magnitude_response(
        &self,
        filter_type: FilterType,
        frequency: f64,
        gain_db: f64,
        q: f64,
        sample_frequencies: &[f64],
    ) -> Result<Vec<f64>>;
}

impl<T: MagnitudeResponse + ?Sized> MagnitudeResponse for &T {
    fn magnitude_response(
        &self,
        filter_type: FilterType,
        frequency: f64,
        gain_db: f64,
        q: f64,
        sample_frequencies: &[f64],
    ) -> Result<Vec<f64>> {
        (**self).magnitude_response(filter_type, frequency, gain_db, q, sample_frequencies)
    }
}

impl<T: MagnitudeResponse + ?Sized> MagnitudeResponse for Box<T> {
    fn magnitude_response(
        &self,
        filter_type: FilterType,
        frequency: f64,
        gain_db: f64,
        q: f64,
        sample_frequencies: &[f64],
    ) -> Result<Vec<f64>> {
        (**self).magnitude_response(filter_type, frequency, gain_db, q, sample_frequencies)
    }
}

/// Built-in response for hosts without their own engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadResponse {
    sample_rate: f64,
}

impl Default for BiquadResponse {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl BiquadResponse {
    pub fn new(sample_rate: f64) -> Self {
        Self { sample_rate }
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

impl MagnitudeResponse for BiquadResponse {
    fn magnitude_response(
        &self,
        filter_type: FilterType,
        frequency: f64,
        gain_db: f64,
        q: f64,
        sample_frequencies: &[f64],
    ) -> Result<Vec<f64>> {
        // The displayed band must stay below Nyquist
        if !(self.sample_rate.is_finite() && self.sample_rate > 2.0 * FREQ_MAX) {
            return Err(EqError::ResponseUnavailable {
                reason: format!(
                    "sample rate {} cannot cover {} Hz",
                    self.sample_rate, FREQ_MAX
                ),
            });
        }

        let coeffs = BiquadCoeffs::calculate(filter_type, self.sample_rate, frequency, gain_db, q);
        Ok(sample_frequencies
            .iter()
            .map(|&f| coeffs.magnitude_at(f, self.sample_rate))
            .collect())
    }
}

/// Stand-in for a host that has no response primitive at all
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableResponse;

impl MagnitudeResponse for UnavailableResponse {
    fn magnitude_response(
        &self,
        _filter_type: FilterType,
        _frequency: f64,
        _gain_db: f64,
        _q: f64,
        _sample_frequencies: &[f64],
    ) -> Result<Vec<f64>> {
        Err(EqError::ResponseUnavailable {
            reason: "host audio engine provides no magnitude response".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::{CurveSampler, EqualizerState, ResponseCompositor};
    use approx::assert_relative_eq;

    #[test]
    fn test_biquad_response_one_value_per_frequency() {
        let response = BiquadResponse::default();
        let freqs = [50.0, 1000.0, 15000.0];
        let mags = response
            .magnitude_response(FilterType::Peak, 1000.0, 6.0, 1.0, &freqs)
            .unwrap();

        assert_eq!(mags.len(), freqs.len());
        assert_relative_eq!(20.0 * mags[1].log10(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_biquad_response_rejects_bad_sample_rate() {
        let response = BiquadResponse::new(0.0);
        let err = response
            .magnitude_response(FilterType::Peak, 1000.0, 6.0, 1.0, &[100.0])
            .unwrap_err();
        assert_eq!(err.error_code(), "RESPONSE_UNAVAILABLE");
    }

    #[test]
    fn test_biquad_response_rejects_rates_below_audio_band() {
        for rate in [1.5, 4.0, 22050.0, 40000.0, f64::NAN, f64::INFINITY] {
            let err = BiquadResponse::new(rate)
                .magnitude_response(FilterType::LowShelf, 200.0, 3.0, 0.7, &[100.0])
                .unwrap_err();
            assert_eq!(err.error_code(), "RESPONSE_UNAVAILABLE", "rate {}", rate);
        }
    }

    #[test]
    fn test_low_rate_curve_reports_unavailable() {
        let compositor = ResponseCompositor::new(BiquadResponse::new(1.5));
        let err = CurveSampler::default()
            .sample(&compositor, &EqualizerState::default())
            .unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_unavailable_response() {
        let err = UnavailableResponse
            .magnitude_response(FilterType::LowShelf, 200.0, 0.0, 0.7, &[100.0])
            .unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_boxed_provider() {
        let boxed: Box<dyn MagnitudeResponse> = Box::new(BiquadResponse::default());
        let mags = boxed
            .magnitude_response(FilterType::HighShelf, 5000.0, 0.0, 0.7, &[100.0, 10000.0])
            .unwrap();
        assert_relative_eq!(mags[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(mags[1], 1.0, epsilon = 1e-12);
    }
}
