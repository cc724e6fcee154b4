use crate::{
    foundation::core::{BezPath, CubicBez, Point},
    foundation::error::{StrokeError, StrokeResult},
    geometry::segment::Segment,
};

const CONTINUITY_EPSILON: f64 = 1e-9;

/// One continuous pen-down path: an ordered, non-empty run of segments.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    segments: Vec<Segment>,
    length: f64,
}

impl Stroke {
    /// Build a stroke, checking that it is non-empty and that each segment starts where the
    /// previous one ends.
    pub fn new(segments: Vec<Segment>) -> StrokeResult<Self> {
        if segments.is_empty() {
            return Err(StrokeError::validation(
                "a stroke needs at least one segment",
            ));
        }
        for (i, pair) in segments.windows(2).enumerate() {
            if (pair[0].end() - pair[1].start()).hypot() > CONTINUITY_EPSILON {
                return Err(StrokeError::validation(format!(
                    "segment {} does not start where segment {i} ends",
                    i + 1
                )));
            }
        }
        Ok(Self::from_contiguous(segments))
    }

    /// Caller guarantees the invariants `new` checks.
    pub(crate) fn from_contiguous(segments: Vec<Segment>) -> Self {
        debug_assert!(!segments.is_empty());
        let length = segments.iter().map(Segment::length).sum();
        Self { segments, length }
    }

    /// Segments in drawing order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Where the pen goes down.
    pub fn start(&self) -> Point {
        self.segments[0].start()
    }

    /// Where the pen lifts.
    pub fn end(&self) -> Point {
        self.segments[self.segments.len() - 1].end()
    }

    /// All curves of the stroke.
    pub fn curves(&self) -> Vec<CubicBez> {
        self.segments.iter().map(Segment::curve).collect()
    }

    /// Curves covering the first `length` units of the stroke.
    ///
    /// The segment straddling the boundary is cut at the boundary point, so the last curve
    /// ends exactly `length` units along the stroke. Empty for `length <= 0`.
    pub fn prefix(&self, length: f64) -> Vec<CubicBez> {
        if length >= self.length {
            return self.curves();
        }
        let mut out = Vec::new();
        let mut walked = 0.0;
        for seg in &self.segments {
            let remaining = length - walked;
            if remaining <= 0.0 {
                break;
            }
            if remaining >= seg.length() {
                out.push(seg.curve());
                walked += seg.length();
            } else {
                out.push(seg.truncate(remaining));
                break;
            }
        }
        out
    }

    /// Point `length` units along the stroke.
    pub fn point_at_length(&self, length: f64) -> Point {
        if length <= 0.0 {
            return self.start();
        }
        let mut walked = 0.0;
        for seg in &self.segments {
            if length - walked < seg.length() {
                return seg.point_at_length(length - walked);
            }
            walked += seg.length();
        }
        self.end()
    }

    /// The stroke as a single open path.
    pub fn to_bez_path(&self) -> BezPath {
        curves_to_path(&self.curves())
    }
}

/// Open path through consecutive curves.
pub fn curves_to_path(curves: &[CubicBez]) -> BezPath {
    let mut path = BezPath::new();
    if let Some(first) = curves.first() {
        path.move_to(first.p0);
    }
    for c in curves {
        path.curve_to(c.p1, c.p2, c.p3);
    }
    path
}

/// Strokes of one character, in stroke order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct StrokeSet {
    strokes: Vec<Stroke>,
}

impl StrokeSet {
    /// Wrap strokes; their order is kept as given.
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// Strokes in stroke order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Stroke at `index`.
    pub fn get(&self, index: usize) -> Option<&Stroke> {
        self.strokes.get(index)
    }

    /// Iterate in stroke order.
    pub fn iter(&self) -> std::slice::Iter<'_, Stroke> {
        self.strokes.iter()
    }

    /// Number of strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Sum of all stroke lengths.
    pub fn total_length(&self) -> f64 {
        self.strokes.iter().map(Stroke::length).sum()
    }
}

impl<'a> IntoIterator for &'a StrokeSet {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.strokes.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/stroke.rs"]
mod tests;
