use super::*;

#[test]
fn partial_json_keeps_defaults() {
    let style = RenderStyle::from_json(r#"{ "stroke_width": 5.5, "ghost_color": null }"#).unwrap();
    assert_eq!(style.stroke_width, 5.5);
    assert_eq!(style.ghost_color, None);
    assert_eq!(style.background, Rgba8::WHITE);
    assert_eq!(style.pen_color, RenderStyle::default().pen_color);
}

#[test]
fn colors_are_channel_objects() {
    let style =
        RenderStyle::from_json(r#"{ "stroke_color": { "r": 200, "g": 0, "b": 0, "a": 255 } }"#)
            .unwrap();
    assert_eq!(style.stroke_color, Rgba8::rgb(200, 0, 0));
}

#[test]
fn bad_widths_are_rejected() {
    let err = RenderStyle::from_json(r#"{ "stroke_width": 0 }"#).unwrap_err();
    assert!(matches!(err, StrokeError::Validation(_)));
    let err = RenderStyle::from_json(r#"{ "pen_radius": -1 }"#).unwrap_err();
    assert!(matches!(err, StrokeError::Validation(_)));
    let err = RenderStyle::from_json("[1, 2]").unwrap_err();
    assert!(matches!(err, StrokeError::Serde(_)));
}
