use std::f64::consts::PI;

pub use kurbo::Point;

/// Output canvas dimensions in pixel-equivalent units.
///
/// All percentage fields in the slide model resolve against the *current*
/// canvas; rendering the same deck at a different size produces a different
/// absolute layout.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixel-equivalent units, must be > 0.
    pub width: f64,
    /// Height in pixel-equivalent units, must be > 0.
    pub height: f64,
}

impl Default for Canvas {
    /// 1080p, the conventional deck canvas.
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl Canvas {
    /// Create a canvas. Dimensions are validated by [`crate::model::Deck::validate`].
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Resolve percentage coordinates into absolute canvas coordinates.
    ///
    /// Returns `(x, y, s)` where `x` and `s` resolve against the width and
    /// `y` against the height with the vertical axis inverted: 0% is the
    /// canvas bottom, 100% the top.
    pub fn dimen(&self, xp: f64, yp: f64, sp: f64) -> (f64, f64, f64) {
        (
            pct(xp, self.width),
            pct(100.0 - yp, self.height),
            pct(sp, self.width),
        )
    }
}

/// Convert a percentage to a canvas measure.
pub fn pct(p: f64, m: f64) -> f64 {
    (p / 100.0) * m
}

/// Convert degrees to radians.
pub fn radians(deg: f64) -> f64 {
    (deg * PI) / 180.0
}

/// Euclidean coordinates from polar coordinates around `(x, y)`.
pub fn polar(x: f64, y: f64, r: f64, angle: f64) -> Point {
    Point::new(r * radians(angle).cos() + x, r * radians(angle).sin() + y)
}
