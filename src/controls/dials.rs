//! Per-band gain / frequency / Q dials
//!
//! Dials edit raw band parameters and never consult the response curve, so
//! they keep working when the host cannot provide a magnitude response.

use super::radial::RadialControl;
use crate::dsp::{BandId, EqualizerState, GAIN_MAX_DB, GAIN_MIN_DB, Q_MAX, Q_MIN};
use crate::error::{EqError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gain dial resolution (dB)
pub const GAIN_STEP_DB: f64 = 0.1;
/// Frequency dial resolution (Hz)
pub const FREQUENCY_STEP_HZ: f64 = 1.0;
/// Q dial resolution
pub const Q_STEP: f64 = 0.01;

/// Which band parameter a dial edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialParam {
    Gain,
    Frequency,
    Q,
}

impl fmt::Display for DialParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialParam::Gain => write!(f, "gain"),
            DialParam::Frequency => write!(f, "frequency"),
            DialParam::Q => write!(f, "q"),
        }
    }
}

impl FromStr for DialParam {
    type Err = EqError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gain" => Ok(DialParam::Gain),
            "frequency" | "freq" => Ok(DialParam::Frequency),
            "q" => Ok(DialParam::Q),
            _ => Err(EqError::InvalidParameter {
                param: "dial".to_string(),
                value: s.to_string(),
                expected: "gain, frequency or q".to_string(),
            }),
        }
    }
}

/// Build the dial for a band parameter, positioned at the state's value
///
/// Returns `None` for Q on the outer bands, which have no Q control.
pub fn dial_for(state: &EqualizerState, band: BandId, param: DialParam) -> Option<RadialControl> {
    let dial = match param {
        DialParam::Gain => RadialControl::new(GAIN_MIN_DB, GAIN_MAX_DB)
            .with_step(GAIN_STEP_DB)
            .with_value(state.gain_db(band)),
        DialParam::Frequency => {
            let (floor, ceil) = band.frequency_range();
            RadialControl::logarithmic(floor, ceil)
                .with_step(FREQUENCY_STEP_HZ)
                .with_value(state.frequency(band))
        }
        DialParam::Q if band == BandId::Mid => RadialControl::logarithmic(Q_MIN, Q_MAX)
            .with_step(Q_STEP)
            .with_value(state.mid.q),
        DialParam::Q => return None,
    };
    Some(dial)
}

/// Return a copy of `state` with one parameter set from a dial angle
pub fn apply_dial(
    state: &EqualizerState,
    band: BandId,
    param: DialParam,
    angle: f64,
) -> Result<EqualizerState> {
    let dial = dial_for(state, band, param).ok_or_else(|| EqError::InvalidParameter {
        param: param.to_string(),
        value: band.to_string(),
        expected: "q dial exists only on the mid band".to_string(),
    })?;

    let value = dial.angle_to_value(angle);
    let mut next = *state;
    match param {
        DialParam::Gain => next.set_gain_db(band, value),
        DialParam::Frequency => next.set_frequency(band, value),
        DialParam::Q => next.set_q(value),
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dials_start_at_state_values() {
        let state = EqualizerState::default();

        let gain = dial_for(&state, BandId::Low, DialParam::Gain).unwrap();
        assert_relative_eq!(gain.angle(), 0.0);

        let freq = dial_for(&state, BandId::Mid, DialParam::Frequency).unwrap();
        assert_eq!(freq.min(), 200.0);
        assert_eq!(freq.max(), 10000.0);
        assert_eq!(freq.value(), 1000.0);

        assert!(dial_for(&state, BandId::High, DialParam::Q).is_none());
        assert!(dial_for(&state, BandId::Mid, DialParam::Q).is_some());
    }

    #[test]
    fn test_apply_gain_dial() {
        let state = EqualizerState::default();
        let next = apply_dial(&state, BandId::High, DialParam::Gain, 135.0).unwrap();
        assert_eq!(next.high.gain_db, 24.0);
        assert_eq!(next.low, state.low);
        assert_eq!(next.mid, state.mid);

        let next = apply_dial(&state, BandId::High, DialParam::Gain, 45.0).unwrap();
        assert_relative_eq!(next.high.gain_db, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_apply_frequency_dial_respects_band_bounds() {
        let state = EqualizerState::default();
        let low = apply_dial(&state, BandId::Low, DialParam::Frequency, -135.0).unwrap();
        assert_eq!(low.low.frequency, 20.0);
        let low = apply_dial(&state, BandId::Low, DialParam::Frequency, 999.0).unwrap();
        assert_eq!(low.low.frequency, 1000.0);

        let high = apply_dial(&state, BandId::High, DialParam::Frequency, -135.0).unwrap();
        assert_eq!(high.high.frequency, 1000.0);
    }

    #[test]
    fn test_apply_q_dial() {
        let state = EqualizerState::default();
        let next = apply_dial(&state, BandId::Mid, DialParam::Q, 135.0).unwrap();
        assert_relative_eq!(next.mid.q, 18.0, epsilon = 1e-9);

        let err = apply_dial(&state, BandId::Low, DialParam::Q, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }

    #[test]
    fn test_parse_dial_param() {
        assert_eq!("Gain".parse::<DialParam>().unwrap(), DialParam::Gain);
        assert_eq!("freq".parse::<DialParam>().unwrap(), DialParam::Frequency);
        assert!("width".parse::<DialParam>().is_err());
    }
}
