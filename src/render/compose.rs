//! Curve composer: terminals first, then the shaft between the adjusted anchors

use crate::types::Point;

use super::context::DrawingContext;
use super::overlay::draw_handles;
use super::terminal::TerminalShape;
use super::types::{Endpoint, Handle, Style};

/// Where one end of the curve ended up after its terminal was drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedEnd {
    /// Anchor before retraction (an arrowhead's tip sits here)
    pub original_anchor: Point,
    /// Anchor the shaft actually connects to
    pub anchor: Point,
    /// Control point re-rooted at `anchor`
    pub control: Point,
}

/// Geometry of a drawn curve, returned for hosts and tests to inspect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposedCurve {
    pub start: ResolvedEnd,
    pub end: ResolvedEnd,
}

fn resolve_end(endpoint: &Endpoint, style: &Style, ctx: &mut dyn DrawingContext) -> ResolvedEnd {
    let original_control = endpoint.control_point();
    let anchor = endpoint
        .terminal()
        .render(endpoint.anchor, original_control, style, ctx);

    // The control offset is a fixed relative vector: it follows the anchor
    let control = endpoint.with_anchor(anchor).control_point();
    ResolvedEnd {
        original_anchor: endpoint.anchor,
        anchor,
        control,
    }
}

/// Draw both terminals, then stroke the cubic between the adjusted anchors.
///
/// The overlay, when enabled in `style`, goes on top.
pub fn compose(
    start: &Endpoint,
    end: &Endpoint,
    style: &Style,
    ctx: &mut dyn DrawingContext,
) -> ComposedCurve {
    let start = resolve_end(start, style, ctx);
    let end = resolve_end(end, style, ctx);

    ctx.begin_path();
    ctx.move_to(start.anchor);
    ctx.add_cubic_curve(end.anchor, start.control, end.control);
    ctx.set_stroke_color(&style.color);
    ctx.set_line_width(style.line_width);
    ctx.stroke_path();

    let curve = ComposedCurve { start, end };
    if style.show_handles {
        draw_handles(&curve, ctx);
    }
    curve
}

/// Compose from externally owned handles.
///
/// Exactly two handles make a curve; any other count is "not configured yet"
/// and draws nothing.
pub fn compose_handles(
    handles: &[&dyn Handle],
    style: &Style,
    ctx: &mut dyn DrawingContext,
) -> Option<ComposedCurve> {
    let &[first, second] = handles else {
        crate::log::debug!(count = handles.len(), "need exactly two handles, nothing to draw");
        return None;
    };
    Some(compose(
        &Endpoint::from(first),
        &Endpoint::from(second),
        style,
        ctx,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::context::Draw;
    use crate::render::terminal::ShapeKind;
    use glam::dvec2;

    fn pair() -> (Endpoint, Endpoint) {
        (
            Endpoint::new(dvec2(20.0, 80.0), dvec2(20.0, 0.0)),
            Endpoint::new(dvec2(80.0, 20.0), dvec2(0.0, 100.0)),
        )
    }

    #[test]
    fn undecorated_curve_is_one_stroked_cubic() {
        let (start, end) = pair();
        let mut cmds: Vec<Draw> = Vec::new();
        compose(&start, &end, &Style::default(), &mut cmds);

        assert_eq!(
            cmds,
            vec![
                Draw::BeginPath,
                Draw::MoveTo(dvec2(20.0, 80.0)),
                Draw::CubicTo {
                    to: dvec2(80.0, 20.0),
                    control1: dvec2(40.0, 80.0),
                    control2: dvec2(80.0, 120.0),
                },
                Draw::StrokeColor(Style::default().color),
                Draw::LineWidth(Style::default().line_width),
                Draw::Stroke,
            ]
        );
    }

    #[test]
    fn control_offsets_follow_adjusted_anchors() {
        let (start, end) = pair();
        let start = start.with_terminal(ShapeKind::Disc, 4.0);
        let end = end.with_terminal(ShapeKind::ArrowHead, 10.0);
        let mut cmds: Vec<Draw> = Vec::new();
        let curve = compose(&start, &end, &Style::default(), &mut cmds);

        assert_ne!(curve.start.anchor, start.anchor);
        assert_ne!(curve.end.anchor, end.anchor);
        assert_eq!(curve.start.control, curve.start.anchor + start.control_offset);
        assert_eq!(curve.end.control, curve.end.anchor + end.control_offset);
        assert_eq!(curve.start.original_anchor, start.anchor);

        let cubic = cmds
            .iter()
            .find(|d| matches!(d, Draw::CubicTo { .. }))
            .cloned();
        assert_eq!(
            cubic,
            Some(Draw::CubicTo {
                to: curve.end.anchor,
                control1: curve.start.control,
                control2: curve.end.control,
            })
        );
    }

    #[test]
    fn terminals_are_drawn_before_the_shaft() {
        let (start, end) = pair();
        let end = end.with_terminal(ShapeKind::Circle, 5.0);
        let mut cmds: Vec<Draw> = Vec::new();
        compose(&start, &end, &Style::default(), &mut cmds);

        let ellipse = cmds.iter().position(|d| matches!(d, Draw::Ellipse(_)));
        let cubic = cmds.iter().position(|d| matches!(d, Draw::CubicTo { .. }));
        assert!(ellipse < cubic);
    }

    #[test]
    fn wrong_handle_counts_draw_nothing() {
        let (a, b) = pair();
        let c = Endpoint::default();
        let style = Style::default();

        let none: Vec<&dyn Handle> = Vec::new();
        let one = vec![&a as &dyn Handle];
        let three = vec![&a as &dyn Handle, &b as &dyn Handle, &c as &dyn Handle];

        for handles in [none, one, three] {
            let mut cmds: Vec<Draw> = Vec::new();
            assert!(compose_handles(&handles, &style, &mut cmds).is_none());
            assert!(cmds.is_empty(), "{} handles emitted commands", handles.len());
        }
    }

    #[test]
    fn two_handles_match_direct_compose() {
        let (a, b) = pair();
        let style = Style::default();

        let mut direct: Vec<Draw> = Vec::new();
        compose(&a, &b, &style, &mut direct);

        let mut via_handles: Vec<Draw> = Vec::new();
        let curve = compose_handles(&[&a as &dyn Handle, &b], &style, &mut via_handles);
        assert!(curve.is_some());
        assert_eq!(direct, via_handles);
    }

    #[test]
    fn overlay_only_when_flag_set() {
        let (a, b) = pair();
        let mut style = Style::default();

        let mut plain: Vec<Draw> = Vec::new();
        compose(&a, &b, &style, &mut plain);

        style.show_handles = true;
        let mut with_overlay: Vec<Draw> = Vec::new();
        compose(&a, &b, &style, &mut with_overlay);

        assert_eq!(with_overlay[..plain.len()], plain[..]);
        assert!(with_overlay.len() > plain.len());
    }
}
