use std::{cell::RefCell, rc::Rc};

use crate::animation::frame::VisibleGeometry;

/// Receiver of an animation run's output.
///
/// Ordering contract: `frame` is called once per host tick while the run is active, in tick
/// order; the last `frame` of a completed run shows every stroke, and `complete` follows it
/// exactly once. A cancelled run gets neither a final frame nor `complete`.
pub trait FrameSink {
    /// Draw one frame.
    fn frame(&mut self, geometry: &VisibleGeometry);

    /// The run finished on its own.
    fn complete(&mut self) {}
}

impl<S> FrameSink for Rc<RefCell<S>>
where
    S: FrameSink + ?Sized,
{
    fn frame(&mut self, geometry: &VisibleGeometry) {
        self.borrow_mut().frame(geometry);
    }

    fn complete(&mut self) {
        self.borrow_mut().complete();
    }
}

/// Sink built from two closures, see [`callbacks`].
pub struct Callbacks<F, C> {
    on_frame: F,
    on_complete: Option<C>,
}

/// Adapt an `on_frame` / `on_complete` closure pair into a [`FrameSink`].
pub fn callbacks<F, C>(on_frame: F, on_complete: C) -> Callbacks<F, C>
where
    F: FnMut(&VisibleGeometry),
    C: FnOnce(),
{
    Callbacks {
        on_frame,
        on_complete: Some(on_complete),
    }
}

impl<F, C> FrameSink for Callbacks<F, C>
where
    F: FnMut(&VisibleGeometry),
    C: FnOnce(),
{
    fn frame(&mut self, geometry: &VisibleGeometry) {
        (self.on_frame)(geometry);
    }

    fn complete(&mut self) {
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}

/// Sink that ignores everything; for hosts that poll the current frame instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn frame(&mut self, _geometry: &VisibleGeometry) {}
}

/// In-memory sink for tests and offline hosts.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Frames in tick order.
    pub frames: Vec<VisibleGeometry>,
    /// How many times `complete` was called.
    pub completions: usize,
}

impl RecordingSink {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder shared with the caller, so it can be inspected while a run owns a handle.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }
}

impl FrameSink for RecordingSink {
    fn frame(&mut self, geometry: &VisibleGeometry) {
        self.frames.push(geometry.clone());
    }

    fn complete(&mut self) {
        self.completions += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sink.rs"]
mod tests;
