use crate::foundation::error::{StrokeError, StrokeResult};

pub use kurbo::{Affine, BezPath, CubicBez, Point, Rect, Vec2};

/// Side length of the square drawing box used by KanjiVG data.
pub const KANJIVG_BOX: f64 = 109.0;

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Square canvas of `size` pixels.
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

/// Maps path coordinates from a source box onto a canvas, stretching to fill it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Region of path space that should cover the canvas.
    pub source: Rect,
    /// Target surface.
    pub canvas: Canvas,
}

impl Viewport {
    /// Validate and build a viewport.
    pub fn new(source: Rect, canvas: Canvas) -> StrokeResult<Self> {
        let finite = [source.x0, source.y0, source.x1, source.y1]
            .iter()
            .all(|v| v.is_finite());
        if !finite || source.width() <= 0.0 || source.height() <= 0.0 {
            return Err(StrokeError::validation(
                "viewport source must be a finite rect with positive size",
            ));
        }
        if canvas.width == 0 || canvas.height == 0 {
            return Err(StrokeError::validation("viewport canvas must be non-empty"));
        }
        Ok(Self { source, canvas })
    }

    /// Viewport for the 109x109 KanjiVG box.
    pub fn kanjivg(canvas: Canvas) -> StrokeResult<Self> {
        Self::new(Rect::new(0.0, 0.0, KANJIVG_BOX, KANJIVG_BOX), canvas)
    }

    /// Path space to canvas space.
    pub fn to_affine(self) -> Affine {
        let sx = f64::from(self.canvas.width) / self.source.width();
        let sy = f64::from(self.canvas.height) / self.source.height();
        Affine::scale_non_uniform(sx, sy) * Affine::translate(-self.source.origin().to_vec2())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
