use super::*;
use crate::animation::sink::{RecordingSink, callbacks};
use crate::animation::timing::DurationMode;
use crate::path::parser::parse_all;
use std::{cell::Cell, rc::Rc};

fn strokes() -> Arc<StrokeSet> {
    Arc::new(
        parse_all([
            "M37.25,38c10.25-1.5,27.25-3.75,36.25-4.5",
            "M37,58.25c8.75-1.12,27-3.5,36.25-4",
        ])
        .unwrap(),
    )
}

fn one_second() -> AnimatorConfig {
    AnimatorConfig {
        duration_mode: DurationMode::FixedTotal(Duration::from_secs(1)),
        start_delay: Duration::ZERO,
    }
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn runs_idle_to_running_to_finished() {
    let rec = RecordingSink::shared();
    let mut anim = StrokeAnimator::new();
    assert_eq!(anim.phase(), Phase::Idle);
    assert!(anim.current_frame().is_none());

    anim.start(strokes(), &one_second(), Box::new(Rc::clone(&rec)))
        .unwrap();
    assert!(anim.is_running());
    assert_eq!(anim.state().total, Duration::from_secs(1));

    let mut ticks = 0;
    while anim.tick(ms(16)) == Phase::Running {
        ticks += 1;
        assert!(ticks < 1000);
    }
    assert!(anim.is_finished());

    let rec = rec.borrow();
    assert_eq!(rec.completions, 1);
    assert_eq!(rec.frames.len(), ticks + 1);
    let last = rec.frames.last().unwrap();
    assert_eq!(last.strokes.len(), 2);
    assert!(last.strokes.iter().all(|s| s.is_complete()));

    let state = anim.state();
    assert_eq!(state.stroke_index, 2);
    assert_eq!(state.fraction, 1.0);
}

#[test]
fn frames_after_completion_stay_full_and_do_not_refire() {
    let rec = RecordingSink::shared();
    let mut anim = StrokeAnimator::new();
    anim.start(strokes(), &one_second(), Box::new(Rc::clone(&rec)))
        .unwrap();
    assert_eq!(anim.tick(ms(1500)), Phase::Finished);
    assert_eq!(anim.tick(ms(16)), Phase::Finished);
    assert_eq!(anim.tick(ms(16)), Phase::Finished);

    assert_eq!(rec.borrow().frames.len(), 1);
    assert_eq!(rec.borrow().completions, 1);
    let full = VisibleGeometry::full(&strokes());
    assert_eq!(anim.current_frame(), Some(full));
}

#[test]
fn cancel_stops_without_completion() {
    let done = Rc::new(Cell::new(false));
    let frames = Rc::new(Cell::new(0));
    let mut anim = StrokeAnimator::new();
    let sink = {
        let done = Rc::clone(&done);
        let frames = Rc::clone(&frames);
        callbacks(
            move |_: &VisibleGeometry| frames.set(frames.get() + 1),
            move || done.set(true),
        )
    };
    anim.start(strokes(), &one_second(), Box::new(sink)).unwrap();
    anim.tick(ms(300));
    anim.cancel();

    assert_eq!(anim.phase(), Phase::Idle);
    assert_eq!(anim.state(), AnimationState::default());
    assert_eq!(anim.tick(ms(5000)), Phase::Idle);
    assert_eq!(frames.get(), 1);
    assert!(!done.get());
    assert!(anim.current_frame().is_none());
}

#[test]
fn restart_resets_progress() {
    let mut anim = StrokeAnimator::new();
    anim.start(strokes(), &one_second(), Box::new(RecordingSink::new()))
        .unwrap();
    anim.tick(ms(700));
    assert_eq!(anim.state().stroke_index, 1);

    anim.cancel();
    anim.start(strokes(), &one_second(), Box::new(RecordingSink::new()))
        .unwrap();
    let state = anim.state();
    assert_eq!(state.stroke_index, 0);
    assert_eq!(state.fraction, 0.0);
    assert_eq!(state.elapsed, Duration::ZERO);

    anim.tick(ms(10));
    assert_eq!(anim.state().elapsed, ms(10));
    assert_eq!(anim.state().stroke_index, 0);
}

#[test]
fn starting_while_running_replaces_the_run() {
    let first = RecordingSink::shared();
    let second = RecordingSink::shared();
    let mut anim = StrokeAnimator::new();
    anim.start(strokes(), &one_second(), Box::new(Rc::clone(&first)))
        .unwrap();
    anim.tick(ms(400));
    anim.start(strokes(), &one_second(), Box::new(Rc::clone(&second)))
        .unwrap();
    anim.tick(ms(2000));

    assert_eq!(first.borrow().frames.len(), 1);
    assert_eq!(first.borrow().completions, 0);
    assert_eq!(second.borrow().completions, 1);
}

#[test]
fn empty_set_is_refused_without_side_effects() {
    let rec = RecordingSink::shared();
    let mut anim = StrokeAnimator::new();
    let err = anim
        .start(
            Arc::new(StrokeSet::default()),
            &one_second(),
            Box::new(Rc::clone(&rec)),
        )
        .unwrap_err();
    assert_eq!(err, AnimationError::NothingToAnimate);
    assert_eq!(anim.phase(), Phase::Idle);
    assert_eq!(anim.tick(ms(16)), Phase::Idle);
    assert!(rec.borrow().frames.is_empty());
    assert_eq!(rec.borrow().completions, 0);
}

#[test]
fn start_delay_holds_the_first_frame_empty() {
    let mut anim = StrokeAnimator::new();
    let config = AnimatorConfig {
        start_delay: ms(500),
        ..one_second()
    };
    anim.start(strokes(), &config, Box::new(RecordingSink::new()))
        .unwrap();
    assert_eq!(anim.state().total, ms(1500));

    anim.tick(ms(400));
    assert!(anim.current_frame().unwrap().is_empty());
    anim.tick(ms(200));
    assert!(!anim.current_frame().unwrap().is_empty());
    assert_eq!(anim.tick(ms(899)), Phase::Running);
    assert_eq!(anim.tick(ms(1)), Phase::Finished);
}

#[test]
fn frame_at_peeks_without_advancing() {
    let mut anim = StrokeAnimator::new();
    anim.start(strokes(), &one_second(), Box::new(RecordingSink::new()))
        .unwrap();
    let peek = anim.frame_at(ms(2000)).unwrap();
    assert_eq!(peek.strokes.len(), 2);
    assert_eq!(anim.state().elapsed, Duration::ZERO);
    assert!(anim.is_running());
}
