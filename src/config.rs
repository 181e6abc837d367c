//! Editor configuration
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults below.

use crate::dsp::{BiquadResponse, CurveSampler, DEFAULT_SAMPLE_RATE};
use crate::editor::DEFAULT_HIT_RADIUS;
use crate::error::{EqError, Result};
use crate::geometry::FREQ_MAX;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for response evaluation and pointer editing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Sample rate used by the built-in biquad response (Hz)
    pub sample_rate: f64,
    /// Control point grab radius (px)
    pub hit_radius: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            hit_radius: DEFAULT_HIT_RADIUS,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading editor config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check that every field is usable
    pub fn validate(&self) -> Result<()> {
        // The highest displayed frequency must stay below Nyquist
        if !(self.sample_rate.is_finite() && self.sample_rate > 2.0 * FREQ_MAX) {
            return Err(EqError::InvalidConfig {
                reason: format!(
                    "sample_rate must be above {} Hz, got {}",
                    2.0 * FREQ_MAX,
                    self.sample_rate
                ),
            });
        }

        if !(self.hit_radius.is_finite() && self.hit_radius > 0.0) {
            return Err(EqError::InvalidConfig {
                reason: format!("hit_radius must be positive, got {}", self.hit_radius),
            });
        }

        Ok(())
    }

    /// Built-in response primitive at the configured sample rate
    pub fn response(&self) -> BiquadResponse {
        BiquadResponse::new(self.sample_rate)
    }

    /// Curve sampler on the fixed 128-point grid
    pub fn sampler(&self) -> CurveSampler {
        CurveSampler::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.sample_rate, 48000.0);
        assert_eq!(config.hit_radius, 25.0);
        assert_eq!(config.sampler().len(), 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EditorConfig::from_json_str(r#"{ "hit_radius": 12.5 }"#).unwrap();
        assert_eq!(
            config,
            EditorConfig {
                hit_radius: 12.5,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        for json in [
            r#"{ "sample_rate": 22050 }"#,
            r#"{ "hit_radius": 0 }"#,
        ] {
            let err = EditorConfig::from_json_str(json).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_CONFIG", "{}", json);
        }
    }

    #[test]
    fn test_curve_resolution_is_not_configurable() {
        // Unknown keys are ignored; every curve has 128 points
        let config = EditorConfig::from_json_str(r#"{ "curve_points": 16 }"#).unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.sampler().len(), 128);
    }

    #[test]
    fn test_malformed_json() {
        let err = EditorConfig::from_json_str("{ hit_radius: }").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "sample_rate": 96000, "hit_radius": 10 }}"#).unwrap();

        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.sample_rate, 96000.0);
        assert_eq!(config.hit_radius, 10.0);
        assert_eq!(config.response().sample_rate(), 96000.0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EditorConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
