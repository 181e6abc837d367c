//! Filter model and response curve
//!
//! Three cascaded biquad bands, the host magnitude-response seam, and the
//! sampled composite curve drawn by the visualizer.

mod band;
mod biquad;
mod host;
mod response;

pub use band::{
    BandId, BandParams, BandShape, EqualizerState, FilterType, PeakingBand, ShelvingBand,
    GAIN_MAX_DB, GAIN_MIN_DB, PASS_Q, Q_MAX, Q_MIN, SHELF_Q,
};
pub use biquad::BiquadCoeffs;
pub use host::{BiquadResponse, MagnitudeResponse, UnavailableResponse, DEFAULT_SAMPLE_RATE};
pub use response::{
    linear_to_db, log_spaced_frequencies, CurveSampler, ResponseCompositor, ResponseSample,
    CURVE_SAMPLE_COUNT,
};
