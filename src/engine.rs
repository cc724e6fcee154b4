use std::{cell::RefCell, rc::Rc, sync::Arc, time::Duration};

use crate::{
    animation::animator::{AnimationState, Phase, StrokeAnimator},
    animation::frame::VisibleGeometry,
    animation::sink::{FrameSink, NullSink},
    animation::timing::{AnimatorConfig, Timeline},
    foundation::error::StrokeResult,
    geometry::stroke::StrokeSet,
    path::parser::parse_all,
    path::svg::extract_path_data,
};

/// One on-screen character: its strokes, its animator and the sink frames go to.
///
/// Owned by whatever manages the drawing surface; there is no global state.
pub struct StrokeEngine {
    strokes: Arc<StrokeSet>,
    animator: StrokeAnimator,
    config: AnimatorConfig,
    sink: Rc<RefCell<dyn FrameSink>>,
}

impl Default for StrokeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StrokeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrokeEngine")
            .field("strokes", &self.strokes.len())
            .field("animator", &self.animator)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl StrokeEngine {
    /// Engine with no strokes, default pacing and a sink that drops frames.
    pub fn new() -> Self {
        Self::with_config(AnimatorConfig::default())
    }

    /// Engine with no strokes and the given pacing.
    pub fn with_config(config: AnimatorConfig) -> Self {
        Self {
            strokes: Arc::new(StrokeSet::default()),
            animator: StrokeAnimator::new(),
            config,
            sink: Rc::new(RefCell::new(NullSink)),
        }
    }

    /// Pacing used by [`StrokeEngine::start_draw_animation`].
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Replace the default pacing; a run in flight keeps its own.
    pub fn set_config(&mut self, config: AnimatorConfig) {
        self.config = config;
    }

    /// Route frames of later runs to `sink`.
    pub fn attach_sink(&mut self, sink: impl FrameSink + 'static) {
        self.sink = Rc::new(RefCell::new(sink));
    }

    /// Replace the strokes with freshly parsed `path_data`.
    ///
    /// All or nothing: if any string fails to parse, the current strokes and any run on them
    /// are left alone. On success any run is cancelled first.
    #[tracing::instrument(skip_all)]
    pub fn load_path_data<I, S>(&mut self, path_data: I) -> StrokeResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let strokes = parse_all(path_data)?;
        self.install(strokes);
        Ok(())
    }

    /// Load the strokes of an SVG document (one `<path>` per stroke, KanjiVG layout).
    #[tracing::instrument(skip_all, fields(bytes = svg.len()))]
    pub fn load_svg(&mut self, svg: &str) -> StrokeResult<()> {
        let path_data = extract_path_data(svg)?;
        self.load_path_data(path_data)
    }

    fn install(&mut self, strokes: StrokeSet) {
        self.animator.cancel();
        self.strokes = Arc::new(strokes);
        tracing::info!(strokes = self.strokes.len(), "stroke set loaded");
    }

    /// Start (or restart) drawing with the engine's pacing.
    pub fn start_draw_animation(&mut self) -> StrokeResult<()> {
        let config = self.config;
        self.start_draw_animation_with(&config)
    }

    /// Start (or restart) drawing with explicit pacing.
    pub fn start_draw_animation_with(&mut self, config: &AnimatorConfig) -> StrokeResult<()> {
        let sink: Box<dyn FrameSink> = Box::new(Rc::clone(&self.sink));
        self.animator
            .start(Arc::clone(&self.strokes), config, sink)?;
        Ok(())
    }

    /// Stop the current run without completing it.
    pub fn cancel(&mut self) {
        self.animator.cancel();
    }

    /// Advance the current run by one host frame.
    pub fn tick(&mut self, delta: Duration) -> Phase {
        self.animator.tick(delta)
    }

    /// Whether a run is advancing.
    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    /// Whether the last run drew every stroke.
    pub fn is_drawn(&self) -> bool {
        self.animator.is_finished()
    }

    /// Progress snapshot of the animator.
    pub fn state(&self) -> AnimationState {
        self.animator.state()
    }

    /// Geometry of the current or last completed run; `None` when idle.
    pub fn current_frame(&self) -> Option<VisibleGeometry> {
        self.animator.current_frame()
    }

    /// The whole character, for hosts that draw without animating.
    pub fn full_frame(&self) -> VisibleGeometry {
        VisibleGeometry::full(&self.strokes)
    }

    /// Loaded strokes.
    pub fn strokes(&self) -> &StrokeSet {
        &self.strokes
    }

    /// Shared handle to the loaded strokes.
    pub fn shared_strokes(&self) -> Arc<StrokeSet> {
        Arc::clone(&self.strokes)
    }

    /// Number of loaded strokes.
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Drawing time of a run with the engine's pacing, start delay excluded.
    pub fn draw_duration(&self) -> Duration {
        Timeline::new(&self.strokes, self.config.duration_mode).total()
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
