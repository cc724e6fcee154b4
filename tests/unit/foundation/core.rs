use super::*;

fn assert_close(a: Point, b: Point) {
    assert!((a - b).hypot() < 1e-9, "{a:?} != {b:?}");
}

#[test]
fn kanjivg_viewport_maps_box_corners_to_canvas_corners() {
    let vp = Viewport::kanjivg(Canvas::square(327)).unwrap();
    let a = vp.to_affine();
    assert_close(a * Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    assert_close(a * Point::new(109.0, 109.0), Point::new(327.0, 327.0));
    assert_close(a * Point::new(54.5, 0.0), Point::new(163.5, 0.0));
}

#[test]
fn offset_source_is_translated_before_scaling() {
    let vp = Viewport::new(
        Rect::new(10.0, 20.0, 30.0, 60.0),
        Canvas {
            width: 40,
            height: 80,
        },
    )
    .unwrap();
    let a = vp.to_affine();
    assert_close(a * Point::new(10.0, 20.0), Point::ZERO);
    assert_close(a * Point::new(30.0, 60.0), Point::new(40.0, 80.0));
}

#[test]
fn degenerate_viewports_are_rejected() {
    assert!(Viewport::new(Rect::new(0.0, 0.0, 0.0, 10.0), Canvas::square(10)).is_err());
    assert!(Viewport::new(Rect::new(0.0, 0.0, f64::NAN, 10.0), Canvas::square(10)).is_err());
    assert!(Viewport::kanjivg(Canvas::square(0)).is_err());
}
