//! Knob-style value ⇄ angle mapping
//!
//! A value in [min, max] sits on a 270° arc from -135° (min) to +135° (max),
//! measured clockwise from straight up. Logarithmic controls spread the arc
//! evenly over the log of the value, which suits frequency and Q dials.

use log::warn;
use serde::{Deserialize, Serialize};

/// Angle of the minimum value (degrees)
pub const ARC_MIN_DEG: f64 = -135.0;
/// Angle of the maximum value (degrees)
pub const ARC_MAX_DEG: f64 = 135.0;
/// Total sweep of the arc (degrees)
pub const ARC_SWEEP_DEG: f64 = ARC_MAX_DEG - ARC_MIN_DEG;

/// Default drag sensitivity (fraction of the arc per pixel)
pub const DEFAULT_SENSITIVITY: f64 = 0.005;

/// How values are spread along the arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    #[default]
    Linear,
    /// Equal angles per ratio; needs positive bounds, otherwise behaves linearly
    Logarithmic,
}

/// A bounded scalar displayed on a rotary arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialControl {
    min: f64,
    max: f64,
    scale: ScaleMode,
    step: Option<f64>,
    value: f64,
}

impl RadialControl {
    /// Linear control over [min, max], starting at `min`
    ///
    /// Non-finite bounds give a degenerate control pinned at 0.
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = if min.is_finite() && max.is_finite() {
            (min, max)
        } else {
            warn!("Radial control bounds [{}, {}] are not finite, pinning to 0", min, max);
            (0.0, 0.0)
        };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            scale: ScaleMode::Linear,
            step: None,
            value: min,
        }
    }

    /// Logarithmic control over [min, max], starting at `min`
    pub fn logarithmic(min: f64, max: f64) -> Self {
        Self::new(min, max).with_scale(ScaleMode::Logarithmic)
    }

    pub fn with_scale(mut self, scale: ScaleMode) -> Self {
        self.scale = scale;
        self
    }

    /// Quantize values to multiples of `step`; non-positive steps disable it
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = (step.is_finite() && step > 0.0).then_some(step);
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn scale(&self) -> ScaleMode {
        self.scale
    }

    pub fn step(&self) -> Option<f64> {
        self.step
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Store a value, clamped to [min, max]. NaN is ignored.
    pub fn set_value(&mut self, value: f64) {
        if !value.is_nan() {
            self.value = value.clamp(self.min, self.max);
        }
    }

    fn is_log(&self) -> bool {
        self.scale == ScaleMode::Logarithmic && self.min > 0.0 && self.max > 0.0
    }

    /// Position of a value along the arc, 0.0 (min) to 1.0 (max)
    pub fn value_to_fraction(&self, value: f64) -> f64 {
        if self.max <= self.min || value.is_nan() {
            return 0.0;
        }
        let value = value.clamp(self.min, self.max);
        let fraction = if self.is_log() {
            (value.ln() - self.min.ln()) / (self.max.ln() - self.min.ln())
        } else {
            (value - self.min) / (self.max - self.min)
        };
        fraction.clamp(0.0, 1.0)
    }

    /// Value at a position along the arc (unquantized)
    pub fn fraction_to_value(&self, fraction: f64) -> f64 {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let value = if self.is_log() {
            (self.min.ln() + fraction * (self.max.ln() - self.min.ln())).exp()
        } else {
            self.min + fraction * (self.max - self.min)
        };
        value.clamp(self.min, self.max)
    }

    /// Round to the nearest multiple of the step (if any) and clamp
    pub fn quantize(&self, value: f64) -> f64 {
        let value = match self.step {
            Some(step) => (value / step).round() * step,
            None => value,
        };
        value.clamp(self.min, self.max)
    }

    /// Angle (degrees) at which a value is drawn
    pub fn value_to_angle(&self, value: f64) -> f64 {
        self.value_to_fraction(value) * ARC_SWEEP_DEG + ARC_MIN_DEG
    }

    /// Value selected by an angle (degrees)
    ///
    /// Angles past either end of the arc stick to that end. The result is
    /// always inside [min, max].
    pub fn angle_to_value(&self, angle: f64) -> f64 {
        let angle = if angle.is_nan() {
            ARC_MIN_DEG
        } else {
            angle.clamp(ARC_MIN_DEG, ARC_MAX_DEG)
        };
        let fraction = (angle - ARC_MIN_DEG) / ARC_SWEEP_DEG;
        self.quantize(self.fraction_to_value(fraction))
    }

    /// Angle of the stored value
    pub fn angle(&self) -> f64 {
        self.value_to_angle(self.value)
    }

    /// Update the stored value from an angle and return it
    pub fn set_from_angle(&mut self, angle: f64) -> f64 {
        self.value = self.angle_to_value(angle);
        self.value
    }

    /// Nudge the control by a pointer delta in pixels
    ///
    /// Up or right increases the value; whichever axis moved further wins.
    /// Returns the new value if it changed. A stepped control advances by at
    /// least one step so slow drags do not stall on rounding.
    pub fn drag_by(&mut self, dx: f64, dy: f64, sensitivity: f64) -> Option<f64> {
        let up = -dy;
        let delta = if up.abs() > dx.abs() { up } else { dx };
        if delta == 0.0 || !delta.is_finite() {
            return None;
        }

        let old = self.value;
        let fraction = self.value_to_fraction(old) + delta * sensitivity;
        let mut new = self.quantize(self.fraction_to_value(fraction));

        if let Some(step) = self.step {
            if (new - old).abs() <= f64::EPSILON {
                new = self.quantize(old + step.copysign(delta));
            }
        }

        if (new - old).abs() > f64::EPSILON {
            self.value = new;
            Some(new)
        } else {
            None
        }
    }
}
