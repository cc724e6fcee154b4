use std::{fmt, sync::Arc, time::Duration};

use crate::{
    animation::frame::VisibleGeometry,
    animation::sink::FrameSink,
    animation::timing::{AnimatorConfig, Progress, Timeline},
    foundation::error::AnimationError,
    geometry::stroke::StrokeSet,
};

/// Lifecycle of the animator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    /// No run, or the last run was cancelled.
    #[default]
    Idle,
    /// A run is advancing with each tick.
    Running,
    /// The last run drew every stroke.
    Finished,
}

/// Snapshot of the animator's progress.
///
/// `stroke_index` is in `[0, stroke_count]`; when it equals the stroke count, `fraction` is 1
/// and `phase` is [`Phase::Finished`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct AnimationState {
    /// Stroke being drawn.
    pub stroke_index: usize,
    /// Drawn fraction of that stroke in `[0, 1]`.
    pub fraction: f64,
    /// Time since the run started, start delay included.
    pub elapsed: Duration,
    /// Start delay plus drawing time of the run.
    pub total: Duration,
    /// Lifecycle phase.
    pub phase: Phase,
}

impl AnimationState {
    fn progress(&self) -> Progress {
        Progress {
            stroke_index: self.stroke_index,
            fraction: self.fraction,
        }
    }
}

struct Run {
    strokes: Arc<StrokeSet>,
    timeline: Timeline,
    delay: Duration,
    // Dropped on completion so nothing reaches the sink afterwards.
    sink: Option<Box<dyn FrameSink>>,
}

impl Run {
    fn progress_at(&self, elapsed: Duration) -> Progress {
        if elapsed < self.delay {
            Progress::START
        } else {
            self.timeline.locate(elapsed - self.delay)
        }
    }
}

/// Drives one stroke-by-stroke reveal at a time, one host tick at a time.
///
/// The animator owns no clock: the host calls [`StrokeAnimator::tick`] once per frame with the
/// time since its previous tick.
#[derive(Default)]
pub struct StrokeAnimator {
    run: Option<Run>,
    state: AnimationState,
}

impl fmt::Debug for StrokeAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrokeAnimator")
            .field("state", &self.state)
            .field("strokes", &self.run.as_ref().map(|r| r.strokes.len()))
            .finish()
    }
}

impl StrokeAnimator {
    /// Idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current progress snapshot.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Whether a run is advancing.
    pub fn is_running(&self) -> bool {
        self.state.phase == Phase::Running
    }

    /// Whether the last run completed.
    pub fn is_finished(&self) -> bool {
        self.state.phase == Phase::Finished
    }

    /// Stroke set of the current or last completed run.
    pub fn strokes(&self) -> Option<&Arc<StrokeSet>> {
        self.run.as_ref().map(|r| &r.strokes)
    }

    /// Begin a run, cancelling any run in flight.
    ///
    /// An empty stroke set is refused before anything else happens: no callback fires and the
    /// state is left as it was.
    #[tracing::instrument(skip_all, fields(strokes = strokes.len()))]
    pub fn start(
        &mut self,
        strokes: Arc<StrokeSet>,
        config: &AnimatorConfig,
        sink: Box<dyn FrameSink>,
    ) -> Result<(), AnimationError> {
        if strokes.is_empty() {
            tracing::debug!("refusing to animate an empty stroke set");
            return Err(AnimationError::NothingToAnimate);
        }
        if self.is_running() {
            self.cancel();
        }

        let timeline = Timeline::new(&strokes, config.duration_mode);
        self.state = AnimationState {
            stroke_index: 0,
            fraction: 0.0,
            elapsed: Duration::ZERO,
            total: config.start_delay.saturating_add(timeline.total()),
            phase: Phase::Running,
        };
        tracing::debug!(total_ms = self.state.total.as_millis(), "animation started");

        self.run = Some(Run {
            strokes,
            timeline,
            delay: config.start_delay,
            sink: Some(sink),
        });
        Ok(())
    }

    /// Stop immediately and forget the run. No completion is reported.
    pub fn cancel(&mut self) {
        if self.run.take().is_some() {
            tracing::debug!(phase = ?self.state.phase, "animation cancelled");
        }
        self.state = AnimationState::default();
    }

    /// Advance the running animation by `delta` and hand the resulting frame to the sink.
    ///
    /// Does nothing unless running. Returns the phase after the tick.
    pub fn tick(&mut self, delta: Duration) -> Phase {
        if self.state.phase != Phase::Running {
            return self.state.phase;
        }
        let Some(run) = self.run.as_mut() else {
            return self.state.phase;
        };

        self.state.elapsed = self.state.elapsed.saturating_add(delta);
        let progress = run.progress_at(self.state.elapsed);
        self.state.stroke_index = progress.stroke_index;
        self.state.fraction = progress.fraction;

        let geometry = VisibleGeometry::at_progress(&run.strokes, progress);
        if let Some(sink) = run.sink.as_mut() {
            sink.frame(&geometry);
        }

        if progress.stroke_index >= run.strokes.len() {
            self.state.phase = Phase::Finished;
            if let Some(mut sink) = run.sink.take() {
                sink.complete();
            }
            tracing::debug!(
                elapsed_ms = self.state.elapsed.as_millis(),
                "animation finished"
            );
        } else {
            tracing::trace!(
                stroke = progress.stroke_index,
                fraction = progress.fraction,
                "animation tick"
            );
        }
        self.state.phase
    }

    /// Geometry for the current state; `None` when idle.
    ///
    /// After completion this keeps returning every stroke in full.
    pub fn current_frame(&self) -> Option<VisibleGeometry> {
        let run = self.run.as_ref()?;
        Some(VisibleGeometry::at_progress(
            &run.strokes,
            self.state.progress(),
        ))
    }

    /// Geometry of the current run at `elapsed` since its start, without advancing it.
    pub fn frame_at(&self, elapsed: Duration) -> Option<VisibleGeometry> {
        let run = self.run.as_ref()?;
        Some(VisibleGeometry::at_progress(
            &run.strokes,
            run.progress_at(elapsed),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
