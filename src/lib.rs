//! eqviz - Three-Band Equalizer Visualizer Core
//!
//! Turns a small set of filter parameters into a sampled frequency-response
//! curve, places draggable control points on it, and maps pointer drags and
//! dial turns back onto the band parameters.
//!
//! # Architecture
//!
//! - `geometry`: frequency/gain to surface coordinates
//! - `dsp`: band model, biquad magnitude response, curve composition
//! - `controls`: rotary dials mapping values onto a 270 degree arc
//! - `editor`: hit-testing and the pointer drag state machine
//!
//! The parameter state is owned by the host; every operation takes it by
//! reference and hands updated copies back through a change callback.

pub mod cli;
pub mod config;
pub mod controls;
pub mod dsp;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod visualizer;

pub use error::{EqError, Result};
pub use visualizer::EqVisualizer;
