//! Surface Geometry
//!
//! Pixel-space types and the frequency/gain axis transforms shared by the
//! curve renderer and the pointer editor.

mod mapping;

pub use mapping::{
    frequency_to_x, gain_to_y, x_to_frequency, y_to_gain, DB_MAX, DB_MIN, FREQ_MAX, FREQ_MIN,
};

use serde::{Deserialize, Serialize};

/// A position on the rendering surface (pixels, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Size of the rendering surface in pixels
///
/// A surface that has not been laid out yet reports zero size; every
/// conversion that would divide by the size returns `None` for it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the surface has a usable, non-zero size
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Map a (frequency, gain) pair to a surface point
    pub fn to_point(&self, freq: f64, db: f64) -> Option<Point> {
        if !self.is_measured() {
            return None;
        }
        Some(Point::new(
            frequency_to_x(freq, self.width),
            gain_to_y(db, self.height),
        ))
    }

    /// Map a surface point back to (frequency, gain)
    ///
    /// Points outside the surface extrapolate past the axis range; callers
    /// clamp to whatever bounds apply to them.
    pub fn from_point(&self, point: Point) -> Option<(f64, f64)> {
        if !self.is_measured() {
            return None;
        }
        Some((
            x_to_frequency(point.x, self.width),
            y_to_gain(point.y, self.height),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_relative_eq!(a.distance(b), 5.0);
        assert_relative_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_unmeasured_surface() {
        assert!(!Surface::default().is_measured());
        assert!(!Surface::new(0.0, 200.0).is_measured());
        assert!(!Surface::new(400.0, f64::NAN).is_measured());
        assert!(Surface::new(400.0, 200.0).is_measured());

        let surface = Surface::new(0.0, 0.0);
        assert!(surface.to_point(1000.0, 0.0).is_none());
        assert!(surface.from_point(Point::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn test_surface_round_trip() {
        let surface = Surface::new(750.0, 240.0);
        let point = surface.to_point(440.0, -7.5).unwrap();
        let (freq, db) = surface.from_point(point).unwrap();
        assert_relative_eq!(freq, 440.0, max_relative = 1e-12);
        assert_relative_eq!(db, -7.5, epsilon = 1e-12);
    }
}
