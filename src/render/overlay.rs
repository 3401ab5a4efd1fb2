//! Diagnostic overlay: control handles drawn on top of a composed curve

use crate::types::{Color, Rect};

use super::compose::{ComposedCurve, ResolvedEnd};
use super::context::DrawingContext;
use super::defaults::{HANDLE_LINE_WIDTH, HANDLE_MARKER_RADIUS};

/// Draw the anchor -> control line and a marker dot for both ends.
///
/// Uses a fixed colour and width so it never blends in with the curve.
pub fn draw_handles(curve: &ComposedCurve, ctx: &mut dyn DrawingContext) {
    draw_handle(&curve.start, ctx);
    draw_handle(&curve.end, ctx);
}

fn draw_handle(end: &ResolvedEnd, ctx: &mut dyn DrawingContext) {
    ctx.begin_path();
    ctx.move_to(end.anchor);
    ctx.line_to(end.control);
    ctx.set_stroke_color(&Color::HANDLE);
    ctx.set_line_width(HANDLE_LINE_WIDTH);
    ctx.stroke_path();

    ctx.begin_path();
    ctx.add_ellipse(Rect::around(end.control, HANDLE_MARKER_RADIUS));
    ctx.set_fill_color(&Color::HANDLE);
    ctx.fill_path();
}
