use super::*;
use std::cell::Cell;

#[test]
fn callbacks_fire_complete_at_most_once() {
    let frames = Rc::new(Cell::new(0));
    let done = Rc::new(Cell::new(0));
    let mut sink = {
        let frames = Rc::clone(&frames);
        let done = Rc::clone(&done);
        callbacks(
            move |_: &VisibleGeometry| frames.set(frames.get() + 1),
            move || done.set(done.get() + 1),
        )
    };

    sink.frame(&VisibleGeometry::default());
    sink.frame(&VisibleGeometry::default());
    sink.complete();
    sink.complete();
    assert_eq!(frames.get(), 2);
    assert_eq!(done.get(), 1);
}

#[test]
fn shared_recorder_sees_frames_through_its_handle() {
    let shared = RecordingSink::shared();
    let mut handle: Box<dyn FrameSink> = Box::new(Rc::clone(&shared));
    handle.frame(&VisibleGeometry::default());
    handle.complete();
    assert_eq!(shared.borrow().frames.len(), 1);
    assert_eq!(shared.borrow().completions, 1);
}
