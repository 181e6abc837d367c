//! Three-band equalizer parameter model
//!
//! Low and High bands switch between a shelving and a pass-type topology;
//! the Mid band is always a peaking filter with an adjustable Q. All setters
//! clamp into the band's bounds instead of rejecting values.

use crate::error::{EqError, Result};
use crate::geometry::{DB_MAX, DB_MIN};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// Lowest band gain (dB)
pub const GAIN_MIN_DB: f64 = DB_MIN;
/// Highest band gain (dB)
pub const GAIN_MAX_DB: f64 = DB_MAX;

/// Mid-band Q bounds
pub const Q_MIN: f64 = 0.1;
pub const Q_MAX: f64 = 18.0;

/// Q used by the shelving topology (shelf slope S = 1)
pub const SHELF_Q: f64 = FRAC_1_SQRT_2;
/// Q used by the pass-type topology (Butterworth)
pub const PASS_Q: f64 = FRAC_1_SQRT_2;

/// Concrete biquad topology evaluated for a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Bell curve boost/cut
    Peak,
    /// Boost/cut below frequency
    LowShelf,
    /// Boost/cut above frequency
    HighShelf,
    /// Remove above frequency
    LowPass,
    /// Remove below frequency
    HighPass,
}

impl FilterType {
    /// Whether the gain parameter changes this topology's response
    pub fn uses_gain(self) -> bool {
        !matches!(self, FilterType::LowPass | FilterType::HighPass)
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterType::Peak => write!(f, "peaking"),
            FilterType::LowShelf => write!(f, "lowshelf"),
            FilterType::HighShelf => write!(f, "highshelf"),
            FilterType::LowPass => write!(f, "lowpass"),
            FilterType::HighPass => write!(f, "highpass"),
        }
    }
}

/// One of the three bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandId {
    Low,
    Mid,
    High,
}

impl BandId {
    /// All bands in cascade order
    pub const ALL: [BandId; 3] = [BandId::Low, BandId::Mid, BandId::High];

    /// Frequency bounds (Hz) for this band
    ///
    /// The mid band is deliberately narrower than the display range.
    pub fn frequency_range(self) -> (f64, f64) {
        match self {
            BandId::Low => (20.0, 1000.0),
            BandId::Mid => (200.0, 10000.0),
            BandId::High => (1000.0, 20000.0),
        }
    }

    /// Clamp a frequency into this band's bounds
    pub fn clamp_frequency(self, freq: f64) -> f64 {
        let (floor, ceil) = self.frequency_range();
        freq.clamp(floor, ceil)
    }
}

impl fmt::Display for BandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandId::Low => write!(f, "low"),
            BandId::Mid => write!(f, "mid"),
            BandId::High => write!(f, "high"),
        }
    }
}

/// Runtime-selectable topology of an outer band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandShape {
    /// Low shelf on the Low band, high shelf on the High band
    #[default]
    Shelf,
    /// High-pass on the Low band, low-pass on the High band
    Pass,
}

/// Parameters of an outer (Low/High) band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShelvingBand {
    /// Gain in dB (-24 to +24)
    pub gain_db: f64,
    /// Corner frequency in Hz
    pub frequency: f64,
    #[serde(default)]
    pub shape: BandShape,
}

/// Parameters of the Mid band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakingBand {
    /// Gain in dB (-24 to +24)
    pub gain_db: f64,
    /// Center frequency in Hz
    pub frequency: f64,
    /// Resonance (0.1 to 18.0)
    pub q: f64,
}

/// Flattened view of a single band, as fed to the magnitude response
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandParams {
    pub band: BandId,
    pub filter_type: FilterType,
    pub frequency: f64,
    pub gain_db: f64,
    pub q: f64,
}

/// The full editable parameter set for the three bands
///
/// Owned by the host application; the editor only ever receives and returns
/// copies of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EqualizerState {
    pub low: ShelvingBand,
    pub mid: PeakingBand,
    pub high: ShelvingBand,
}

impl Default for EqualizerState {
    fn default() -> Self {
        Self {
            low: ShelvingBand {
                gain_db: 0.0,
                frequency: 200.0,
                shape: BandShape::Shelf,
            },
            mid: PeakingBand {
                gain_db: 0.0,
                frequency: 1000.0,
                q: 1.0,
            },
            high: ShelvingBand {
                gain_db: 0.0,
                frequency: 5000.0,
                shape: BandShape::Shelf,
            },
        }
    }
}

impl EqualizerState {
    /// Gain of a band in dB
    pub fn gain_db(&self, band: BandId) -> f64 {
        match band {
            BandId::Low => self.low.gain_db,
            BandId::Mid => self.mid.gain_db,
            BandId::High => self.high.gain_db,
        }
    }

    /// Center/corner frequency of a band in Hz
    pub fn frequency(&self, band: BandId) -> f64 {
        match band {
            BandId::Low => self.low.frequency,
            BandId::Mid => self.mid.frequency,
            BandId::High => self.high.frequency,
        }
    }

    /// Effective Q of a band (fixed for the outer bands)
    pub fn q(&self, band: BandId) -> f64 {
        match band {
            BandId::Mid => self.mid.q,
            BandId::Low | BandId::High => match self.shape(band) {
                Some(BandShape::Pass) => PASS_Q,
                _ => SHELF_Q,
            },
        }
    }

    /// Topology tag of an outer band (`None` for Mid)
    pub fn shape(&self, band: BandId) -> Option<BandShape> {
        match band {
            BandId::Low => Some(self.low.shape),
            BandId::Mid => None,
            BandId::High => Some(self.high.shape),
        }
    }

    /// Biquad topology currently selected for a band
    pub fn filter_type(&self, band: BandId) -> FilterType {
        match (band, self.shape(band)) {
            (BandId::Low, Some(BandShape::Pass)) => FilterType::HighPass,
            (BandId::Low, _) => FilterType::LowShelf,
            (BandId::High, Some(BandShape::Pass)) => FilterType::LowPass,
            (BandId::High, _) => FilterType::HighShelf,
            (BandId::Mid, _) => FilterType::Peak,
        }
    }

    /// Snapshot of a band's parameters
    pub fn band(&self, band: BandId) -> BandParams {
        BandParams {
            band,
            filter_type: self.filter_type(band),
            frequency: self.frequency(band),
            gain_db: self.gain_db(band),
            q: self.q(band),
        }
    }

    /// Set a band's gain, clamped to [-24, 24] dB. NaN is ignored.
    pub fn set_gain_db(&mut self, band: BandId, gain_db: f64) {
        if gain_db.is_nan() {
            return;
        }
        let gain_db = gain_db.clamp(GAIN_MIN_DB, GAIN_MAX_DB);
        match band {
            BandId::Low => self.low.gain_db = gain_db,
            BandId::Mid => self.mid.gain_db = gain_db,
            BandId::High => self.high.gain_db = gain_db,
        }
    }

    /// Set a band's frequency, clamped to the band's bounds. NaN is ignored.
    pub fn set_frequency(&mut self, band: BandId, frequency: f64) {
        if frequency.is_nan() {
            return;
        }
        let frequency = band.clamp_frequency(frequency);
        match band {
            BandId::Low => self.low.frequency = frequency,
            BandId::Mid => self.mid.frequency = frequency,
            BandId::High => self.high.frequency = frequency,
        }
    }

    /// Set the mid-band Q, clamped to [0.1, 18]. NaN is ignored.
    pub fn set_q(&mut self, q: f64) {
        if !q.is_nan() {
            self.mid.q = q.clamp(Q_MIN, Q_MAX);
        }
    }

    /// Switch an outer band's topology
    pub fn set_shape(&mut self, band: BandId, shape: BandShape) -> Result<()> {
        match band {
            BandId::Low => self.low.shape = shape,
            BandId::High => self.high.shape = shape,
            BandId::Mid => {
                return Err(EqError::InvalidParameter {
                    param: "shape".to_string(),
                    value: format!("{:?}", shape),
                    expected: "low or high band (mid is always peaking)".to_string(),
                })
            }
        }
        Ok(())
    }

    /// Copy with every parameter forced back inside its bounds
    ///
    /// Used on state that arrives from outside (files, hosts). NaN values
    /// fall back to the defaults.
    pub fn clamped(&self) -> Self {
        let mut out = Self::default();
        out.low.shape = self.low.shape;
        out.high.shape = self.high.shape;
        for band in BandId::ALL {
            out.set_gain_db(band, self.gain_db(band));
            out.set_frequency(band, self.frequency(band));
        }
        out.set_q(self.mid.q);
        out
    }

    /// Whether every parameter is inside its bounds
    pub fn is_within_bounds(&self) -> bool {
        BandId::ALL.iter().all(|&band| {
            let (floor, ceil) = band.frequency_range();
            let gain = self.gain_db(band);
            let freq = self.frequency(band);
            (GAIN_MIN_DB..=GAIN_MAX_DB).contains(&gain) && (floor..=ceil).contains(&freq)
        }) && (Q_MIN..=Q_MAX).contains(&self.mid.q)
    }
}
