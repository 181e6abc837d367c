//! Axis transforms between (frequency, gain) and surface pixels
//!
//! Frequency runs along a log10 axis, gain along a linear dB axis with y
//! growing downward. The four functions are exact inverses of each other.

/// Lowest displayed frequency (Hz)
pub const FREQ_MIN: f64 = 20.0;
/// Highest displayed frequency (Hz)
pub const FREQ_MAX: f64 = 20000.0;

/// Bottom of the gain axis (dB)
pub const DB_MIN: f64 = -24.0;
/// Top of the gain axis (dB)
pub const DB_MAX: f64 = 24.0;

/// Convert frequency to an x coordinate on a surface of the given width
pub fn frequency_to_x(freq: f64, width: f64) -> f64 {
    let log_min = FREQ_MIN.log10();
    let log_max = FREQ_MAX.log10();
    (freq.log10() - log_min) / (log_max - log_min) * width
}

/// Convert an x coordinate back to frequency (inverse of [`frequency_to_x`])
pub fn x_to_frequency(x: f64, width: f64) -> f64 {
    let log_min = FREQ_MIN.log10();
    let log_max = FREQ_MAX.log10();
    10.0_f64.powf(log_min + x / width * (log_max - log_min))
}

/// Convert gain to a y coordinate on a surface of the given height
pub fn gain_to_y(db: f64, height: f64) -> f64 {
    (1.0 - (db - DB_MIN) / (DB_MAX - DB_MIN)) * height
}

/// Convert a y coordinate back to gain (inverse of [`gain_to_y`])
pub fn y_to_gain(y: f64, height: f64) -> f64 {
    DB_MIN + (1.0 - y / height) * (DB_MAX - DB_MIN)
}
