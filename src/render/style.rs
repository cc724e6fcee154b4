use serde::{Deserialize, Serialize};

use crate::foundation::error::{StrokeError, StrokeResult};

/// Straight-alpha 8-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub(crate) fn to_cpu(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

/// How a frame is painted: drawn strokes, the not-yet-drawn outline and the pen dot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Stroke width in source (109-unit box) coordinates.
    pub stroke_width: f64,
    /// Color of drawn strokes.
    pub stroke_color: Rgba8,
    /// Faint outline of strokes not drawn yet; `None` hides it.
    pub ghost_color: Option<Rgba8>,
    /// Color of the dot at the pen position; `None` hides it.
    pub pen_color: Option<Rgba8>,
    /// Pen dot radius in source coordinates.
    pub pen_radius: f64,
    /// Canvas fill.
    pub background: Rgba8,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_width: 3.0,
            stroke_color: Rgba8::BLACK,
            ghost_color: Some(Rgba8::new(0, 0, 0, 50)),
            pen_color: Some(Rgba8::rgb(33, 150, 243)),
            pen_radius: 4.0,
            background: Rgba8::WHITE,
        }
    }
}

impl RenderStyle {
    /// Read a style from JSON; missing fields keep their defaults.
    pub fn from_json(text: &str) -> StrokeResult<Self> {
        let style: Self = serde_json::from_str(text).map_err(|e| StrokeError::serde(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Reject widths and radii that cannot be painted.
    pub fn validate(&self) -> StrokeResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(StrokeError::validation(
                "stroke_width must be finite and > 0",
            ));
        }
        if !self.pen_radius.is_finite() || self.pen_radius < 0.0 {
            return Err(StrokeError::validation(
                "pen_radius must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;
