//! Rotary Controls
//!
//! The shared knob mapping and the equalizer's per-band dials built on it.

mod dials;
mod radial;

pub use dials::{apply_dial, dial_for, DialParam, FREQUENCY_STEP_HZ, GAIN_STEP_DB, Q_STEP};
pub use radial::{
    RadialControl, ScaleMode, ARC_MAX_DEG, ARC_MIN_DEG, ARC_SWEEP_DEG, DEFAULT_SENSITIVITY,
};
