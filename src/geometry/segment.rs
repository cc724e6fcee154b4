use kurbo::{ParamCurve, ParamCurveArclen};

use crate::foundation::core::{CubicBez, Point};

/// Accuracy used for arc-length measurement and its inverse.
pub const ARCLEN_ACCURACY: f64 = 1e-6;

/// One cubic Bézier of a stroke, with its arc length measured once at construction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Segment {
    curve: CubicBez,
    length: f64,
}

impl Segment {
    /// Wrap a curve and measure it.
    pub fn new(curve: CubicBez) -> Self {
        let length = curve.arclen(ARCLEN_ACCURACY);
        Self { curve, length }
    }

    /// Build from start point, two control points and end point.
    pub fn from_points(start: Point, c1: Point, c2: Point, end: Point) -> Self {
        Self::new(CubicBez::new(start, c1, c2, end))
    }

    /// The underlying curve.
    pub fn curve(&self) -> CubicBez {
        self.curve
    }

    /// Start point.
    pub fn start(&self) -> Point {
        self.curve.p0
    }

    /// First control point.
    pub fn control1(&self) -> Point {
        self.curve.p1
    }

    /// Second control point.
    pub fn control2(&self) -> Point {
        self.curve.p2
    }

    /// End point.
    pub fn end(&self) -> Point {
        self.curve.p3
    }

    /// Arc length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Curve parameter at which the arc length measured from the start equals `length`.
    ///
    /// Clamped to `[0, 1]`; monotonic in `length`.
    pub fn param_at_length(&self, length: f64) -> f64 {
        if length <= 0.0 {
            return 0.0;
        }
        if self.length <= 0.0 || length >= self.length {
            return 1.0;
        }
        self.curve
            .inv_arclen(length, ARCLEN_ACCURACY)
            .clamp(0.0, 1.0)
    }

    /// Leading part of the curve whose arc length is `length`.
    pub fn truncate(&self, length: f64) -> CubicBez {
        let t = self.param_at_length(length);
        if t >= 1.0 {
            return self.curve;
        }
        self.curve.subsegment(0.0..t)
    }

    /// Point at arc length `length` from the start.
    pub fn point_at_length(&self, length: f64) -> Point {
        self.curve.eval(self.param_at_length(length))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/segment.rs"]
mod tests;
