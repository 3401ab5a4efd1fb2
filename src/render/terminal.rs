//! Terminal shapes drawn at a curve endpoint
//!
//! Each shape knows how to:
//! - Emit its own path and paint commands
//! - Retract the curve endpoint so the shaft meets the back of the shape
//!
//! The returned point is where the curve must actually start or end.

use std::f64::consts::PI;

use enum_dispatch::enum_dispatch;

use crate::types::{Point, Rect};

use super::context::DrawingContext;
use super::defaults::{EAR_ANGLE, NECK_RATIO, SHAFT_RATIO};
use super::geometry::{angle_between, to_cartesian};
use super::types::Style;

/// Stored terminal shape selector (`none = 0, arrowHead, circle, disc`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    #[default]
    None = 0,
    ArrowHead = 1,
    Circle = 2,
    Disc = 3,
}

impl ShapeKind {
    /// Decode a stored shape value; anything out of range is `None`
    pub fn from_raw(raw: i64) -> ShapeKind {
        match raw {
            1 => ShapeKind::ArrowHead,
            2 => ShapeKind::Circle,
            3 => ShapeKind::Disc,
            _ => ShapeKind::None,
        }
    }

    pub fn raw(self) -> i64 {
        self as i64
    }

    /// The renderer for this shape at the given size
    pub fn terminal(self, size: f64) -> Terminal {
        match self {
            ShapeKind::None => NoTerminal.into(),
            ShapeKind::ArrowHead => Arrowhead { size }.into(),
            ShapeKind::Circle => Ring { size }.into(),
            ShapeKind::Disc => Disc { size }.into(),
        }
    }
}

/// Common behavior for all terminal shapes
#[enum_dispatch]
pub trait TerminalShape {
    /// Draw the terminal at `anchor`, oriented by the tangent toward `control`,
    /// and return the adjusted anchor the curve must connect to.
    fn render(
        &self,
        anchor: Point,
        control: Point,
        style: &Style,
        ctx: &mut dyn DrawingContext,
    ) -> Point;
}

/// A terminal renderer, dispatched statically over the shape types
#[enum_dispatch(TerminalShape)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Terminal {
    NoTerminal,
    Arrowhead,
    Ring,
    Disc,
}

/// Draw a terminal of `kind` and return the adjusted anchor.
pub fn render_terminal(
    kind: ShapeKind,
    size: f64,
    anchor: Point,
    control: Point,
    style: &Style,
    ctx: &mut dyn DrawingContext,
) -> Point {
    kind.terminal(size).render(anchor, control, style, ctx)
}

/// Move `anchor` by `size` along the tangent toward `control`.
///
/// Negative sizes move it the other way.
pub fn retract(anchor: Point, control: Point, size: f64) -> Point {
    let theta = angle_between(anchor, control);
    to_cartesian(anchor, -size, theta + PI)
}

// ============================================================================
// Shape Types
// ============================================================================

/// No decoration: nothing is drawn and the anchor is left where it is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoTerminal;

impl TerminalShape for NoTerminal {
    fn render(&self, anchor: Point, _: Point, _: &Style, _: &mut dyn DrawingContext) -> Point {
        anchor
    }
}

/// Filled arrowhead whose tip sits on the original anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrowhead {
    pub size: f64,
}

impl TerminalShape for Arrowhead {
    fn render(
        &self,
        anchor: Point,
        control: Point,
        style: &Style,
        ctx: &mut dyn DrawingContext,
    ) -> Point {
        let theta = angle_between(anchor, control);
        let back = theta + PI;
        let origin = to_cartesian(anchor, -self.size, back);

        // Stub joining the shaft to the rear of the head
        let shaft = to_cartesian(origin, self.size * SHAFT_RATIO, back);
        ctx.begin_path();
        ctx.move_to(origin);
        ctx.line_to(shaft);
        ctx.set_stroke_color(&style.color);
        ctx.set_line_width(style.line_width);
        ctx.stroke_path();

        // Tip, ears and neck
        let ear1 = to_cartesian(anchor, self.size, theta + EAR_ANGLE);
        let neck = to_cartesian(origin, self.size * NECK_RATIO, back);
        let ear2 = to_cartesian(anchor, self.size, theta - EAR_ANGLE);
        ctx.begin_path();
        ctx.move_to(anchor);
        ctx.line_to(ear1);
        ctx.line_to(neck);
        ctx.line_to(ear2);
        ctx.close_subpath();
        ctx.set_fill_color(&style.color);
        ctx.fill_path();

        crate::log::trace!(?anchor, ?origin, size = self.size, "arrowhead retracted anchor");
        origin
    }
}

/// Stroked circle outline centered on the original anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub size: f64,
}

impl TerminalShape for Ring {
    fn render(
        &self,
        anchor: Point,
        control: Point,
        style: &Style,
        ctx: &mut dyn DrawingContext,
    ) -> Point {
        let origin = retract(anchor, control, self.size);
        ctx.begin_path();
        ctx.add_ellipse(Rect::around(anchor, self.size));
        ctx.set_stroke_color(&style.color);
        ctx.set_line_width(style.line_width);
        ctx.stroke_path();
        origin
    }
}

/// Filled disc centered on the original anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub size: f64,
}

impl TerminalShape for Disc {
    fn render(
        &self,
        anchor: Point,
        control: Point,
        style: &Style,
        ctx: &mut dyn DrawingContext,
    ) -> Point {
        let origin = retract(anchor, control, self.size);
        ctx.begin_path();
        ctx.add_ellipse(Rect::around(anchor, self.size));
        ctx.set_fill_color(&style.color);
        ctx.fill_path();
        origin
    }
}
