//! Property sheets rendered to SVG

use bezarrow::{SheetError, render_svg};

fn paths(svg: &str) -> usize {
    svg.matches("<path").count()
}

#[test]
fn undecorated_sheet_renders_one_path() {
    let svg = render_svg("[curve]\nend_shape = 0\n", 100.0, 100.0).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 100 100""#), "{svg}");
    assert_eq!(paths(&svg), 1, "{svg}");
    assert!(svg.contains("stroke-width"), "{svg}");
    assert!(svg.contains("1.5"), "{svg}");
}

#[test]
fn styled_arrow_sheet() {
    let sheet = r##"
        # default corners, thicker and coloured
        [curve]
        line_width = 2
        color = "#336699"
        arrow_size = 10
    "##;
    let svg = render_svg(sheet, 100.0, 100.0).unwrap();
    // shaft stub, head, curve
    assert_eq!(paths(&svg), 3, "{svg}");
    assert_eq!(svg.matches("rgb(51,102,153)").count(), 3, "{svg}");
    assert!(!svg.contains("currentColor"), "{svg}");
}

#[test]
fn demo_sheet_with_hex_colour_renders() {
    let sheet = r##"[curve]
start_anchor = 2
end_anchor = 1
end_shape = 1
arrow_size = 10
line_width = 2
color = "#336699"
show_handles = true"##;
    let svg = render_svg(sheet, 100.0, 100.0).unwrap();
    assert!(svg.contains("rgb(51,102,153)"), "{svg}");
    // stub, head, curve, then two overlay lines and two markers
    assert_eq!(paths(&svg), 7, "{svg}");
}

#[test]
fn handle_sheet_with_overlay() {
    let sheet = "\
show_handles = true

[handle]
anchor = (10, 10)
control = (30, 0)

[handle]
anchor = (90, 10)
dx = -30
dy = 0
shape = 3
size = 4
";
    let svg = render_svg(sheet, 100.0, 20.0).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 100 20""#), "{svg}");
    // disc, curve, then a line and a marker per handle
    assert_eq!(paths(&svg), 6, "{svg}");
    assert_eq!(svg.matches("rgb(255,0,0)").count(), 4, "{svg}");
}

#[test]
fn syntax_errors_carry_a_span() {
    let err = render_svg("[curve\nline_width = 2", 100.0, 100.0).unwrap_err();
    match err.downcast_ref::<SheetError>() {
        Some(SheetError::Syntax { span, message, .. }) => {
            assert_eq!(span.offset(), 6);
            assert!(message.contains("header_close"), "{message}");
        }
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn type_mismatch_names_the_key() {
    let err = render_svg("[handle]\nanchor = 5", 100.0, 100.0).unwrap_err();
    let Some(SheetError::TypeMismatch { key, expected, got, .. }) = err.downcast_ref::<SheetError>() else {
        panic!("expected a type mismatch, got {err:?}");
    };
    assert_eq!(key, "anchor");
    assert_eq!(*expected, "a point");
    assert_eq!(*got, "number");
}

#[test]
fn negative_frame_is_rejected() {
    let err = render_svg("", -1.0, 100.0).unwrap_err();
    assert!(err.to_string().contains("invalid frame"), "{err}");
}
