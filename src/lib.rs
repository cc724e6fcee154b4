//! Kanjistroke turns KanjiVG-style stroke paths into stroke-order animations.
//!
//! The pipeline is small and host-driven:
//!
//! - Parse `M`/`m` + `C`/`c` path data into a [`StrokeSet`] ([`parse`], [`parse_all`], or
//!   [`extract_path_data`] for whole SVG documents)
//! - Drive a [`StrokeAnimator`] (or the [`StrokeEngine`] facade) with per-frame ticks
//! - Hand each [`VisibleGeometry`] to a [`FrameSink`], or paint it with [`CpuRenderer`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod engine;
mod foundation;
mod geometry;
mod path;
mod render;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, CubicBez, KANJIVG_BOX, Point, Rect, Vec2, Viewport,
};
pub use crate::foundation::error::{
    AnimationError, ParseError, StrokeError, StrokeResult,
};

pub use crate::path::command::PathCommand;
pub use crate::path::parser::{parse, parse_all};
pub use crate::path::svg::extract_path_data;

pub use crate::geometry::segment::{ARCLEN_ACCURACY, Segment};
pub use crate::geometry::stroke::{Stroke, StrokeSet, curves_to_path};

pub use crate::animation::animator::{AnimationState, Phase, StrokeAnimator};
pub use crate::animation::frame::{VisibleGeometry, VisibleStroke, frame_at};
pub use crate::animation::sink::{Callbacks, FrameSink, NullSink, RecordingSink, callbacks};
pub use crate::animation::timing::{
    AnimatorConfig, DEFAULT_TIME_PER_UNIT, DurationMode, Progress, Timeline,
};

pub use crate::engine::StrokeEngine;

pub use crate::render::cpu::{CpuRenderer, FrameRGBA};
pub use crate::render::style::{RenderStyle, Rgba8};
