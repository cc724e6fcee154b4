use std::time::Duration;

use crate::{
    animation::timing::{Progress, Timeline},
    foundation::core::{BezPath, CubicBez, Point},
    geometry::stroke::{StrokeSet, curves_to_path},
};

/// A stroke as it appears in one frame: whole, or cut at the pen position.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisibleStroke {
    /// Index of the stroke in its set.
    pub index: usize,
    /// Drawn fraction of the stroke's length in `(0, 1]`.
    pub fraction: f64,
    /// Drawn length.
    pub length: f64,
    /// Absolute-coordinate curves, the last one possibly truncated.
    pub segments: Vec<CubicBez>,
}

impl VisibleStroke {
    /// Whether the whole stroke is shown.
    pub fn is_complete(&self) -> bool {
        self.fraction >= 1.0
    }

    /// The visible part as one open path.
    pub fn to_bez_path(&self) -> BezPath {
        curves_to_path(&self.segments)
    }
}

/// Everything that should be on screen at one instant of a run.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct VisibleGeometry {
    /// Drawn strokes in stroke order; only the last one may be partial.
    pub strokes: Vec<VisibleStroke>,
    /// Tip of the stroke being drawn; `None` once every stroke is complete.
    pub pen: Option<Point>,
    /// Sum of the drawn lengths.
    pub revealed_length: f64,
}

impl VisibleGeometry {
    /// Geometry for a point in a run over `strokes`.
    pub fn at_progress(strokes: &StrokeSet, progress: Progress) -> Self {
        let done = progress.stroke_index.min(strokes.len());
        let mut visible = Vec::with_capacity(done + 1);
        let mut revealed_length = 0.0;

        for (index, stroke) in strokes.iter().enumerate().take(done) {
            revealed_length += stroke.length();
            visible.push(VisibleStroke {
                index,
                fraction: 1.0,
                length: stroke.length(),
                segments: stroke.curves(),
            });
        }

        let pen = strokes.get(progress.stroke_index).map(|stroke| {
            let fraction = progress.fraction.clamp(0.0, 1.0);
            let target = stroke.length() * fraction;
            let segments = stroke.prefix(target);
            if target > 0.0 && !segments.is_empty() {
                revealed_length += target;
                visible.push(VisibleStroke {
                    index: progress.stroke_index,
                    fraction,
                    length: target,
                    segments,
                });
            }
            stroke.point_at_length(target)
        });

        Self {
            strokes: visible,
            pen,
            revealed_length,
        }
    }

    /// Every stroke drawn in full.
    pub fn full(strokes: &StrokeSet) -> Self {
        Self::at_progress(strokes, Progress::finished(strokes.len()))
    }

    /// Nothing is drawn yet.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Number of leading strokes shown in full.
    pub fn completed_strokes(&self) -> usize {
        self.strokes.iter().take_while(|s| s.is_complete()).count()
    }

    /// The partially drawn stroke, if any.
    pub fn current(&self) -> Option<&VisibleStroke> {
        self.strokes.last().filter(|s| !s.is_complete())
    }
}

/// Pure mapping from drawing time to geometry.
pub fn frame_at(strokes: &StrokeSet, timeline: &Timeline, elapsed: Duration) -> VisibleGeometry {
    VisibleGeometry::at_progress(strokes, timeline.locate(elapsed))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/frame.rs"]
mod tests;
