use vello_cpu::kurbo::Shape as _;

use crate::{
    animation::frame::VisibleGeometry,
    foundation::core::{Affine, BezPath, Point, Viewport},
    foundation::error::{StrokeError, StrokeResult},
    geometry::stroke::StrokeSet,
    render::style::{RenderStyle, Rgba8},
};

const PEN_TOLERANCE: f64 = 0.05;

/// One rendered frame of 8-bit RGBA pixels, row-major.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
    /// Whether color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// The pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Bytes with straight alpha, as PNG encoders expect.
    pub fn to_straight_alpha(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Paints [`VisibleGeometry`] onto a pixel canvas with `vello_cpu`.
pub struct CpuRenderer {
    viewport: Viewport,
    style: RenderStyle,
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for CpuRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuRenderer")
            .field("viewport", &self.viewport)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl CpuRenderer {
    /// Renderer for `viewport` with `style`.
    pub fn new(viewport: Viewport, style: RenderStyle) -> StrokeResult<Self> {
        style.validate()?;
        let width: u16 = viewport
            .canvas
            .width
            .try_into()
            .map_err(|_| StrokeError::validation("canvas width exceeds u16"))?;
        let height: u16 = viewport
            .canvas
            .height
            .try_into()
            .map_err(|_| StrokeError::validation("canvas height exceeds u16"))?;
        Ok(Self {
            viewport,
            style,
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    /// Target viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Paint style.
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Paint one frame. `strokes` is the full set the frame was taken from; it supplies the
    /// outlines of strokes that are not drawn yet.
    pub fn render(&mut self, strokes: &StrokeSet, frame: &VisibleGeometry) -> FrameRGBA {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(self.style.background.to_cpu());
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));

        ctx.set_transform(affine_to_cpu(self.viewport.to_affine()));
        ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(self.style.stroke_width)
                .with_caps(vello_cpu::kurbo::Cap::Round)
                .with_join(vello_cpu::kurbo::Join::Round),
        );

        if let Some(ghost) = self.style.ghost_color {
            ctx.set_paint(ghost.to_cpu());
            for stroke in strokes.iter().skip(frame.completed_strokes()) {
                ctx.stroke_path(&bezpath_to_cpu(&stroke.to_bez_path()));
            }
        }

        ctx.set_paint(self.style.stroke_color.to_cpu());
        for stroke in &frame.strokes {
            ctx.stroke_path(&bezpath_to_cpu(&stroke.to_bez_path()));
        }

        if let (Some(color), Some(pen)) = (self.style.pen_color, frame.pen)
            && self.style.pen_radius > 0.0
        {
            draw_dot(&mut ctx, pen, self.style.pen_radius, color);
        }

        ctx.flush();
        clear_pixmap(&mut self.pixmap, [0, 0, 0, 0]);
        ctx.render_to_pixmap(&mut self.pixmap);

        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn draw_dot(ctx: &mut vello_cpu::RenderContext, center: Point, radius: f64, color: Rgba8) {
    let dot = vello_cpu::kurbo::Circle::new(point_to_cpu(center), radius).to_path(PEN_TOLERANCE);
    ctx.set_paint(color.to_cpu());
    ctx.fill_path(&dot);
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
