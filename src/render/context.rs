//! Drawing context - the capability the renderer writes commands into

use std::fmt;

use crate::types::{Color, Point, Rect};

use super::svg::fmt_num;

/// Path construction and paint commands accepted by a host graphics context.
///
/// The renderer only ever calls these; it never reads context state back.
pub trait DrawingContext {
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn add_cubic_curve(&mut self, to: Point, control1: Point, control2: Point);
    fn add_ellipse(&mut self, bounds: Rect);
    fn close_subpath(&mut self);
    fn set_stroke_color(&mut self, color: &Color);
    fn set_fill_color(&mut self, color: &Color);
    fn set_line_width(&mut self, width: f64);
    fn stroke_path(&mut self);
    fn fill_path(&mut self);

    /// Replay a recorded command
    fn draw(&mut self, d: &Draw) {
        match d {
            Draw::BeginPath => self.begin_path(),
            Draw::MoveTo(p) => self.move_to(*p),
            Draw::LineTo(p) => self.line_to(*p),
            Draw::CubicTo { to, control1, control2 } => {
                self.add_cubic_curve(*to, *control1, *control2)
            }
            Draw::Ellipse(bounds) => self.add_ellipse(*bounds),
            Draw::ClosePath => self.close_subpath(),
            Draw::StrokeColor(c) => self.set_stroke_color(c),
            Draw::FillColor(c) => self.set_fill_color(c),
            Draw::LineWidth(w) => self.set_line_width(*w),
            Draw::Stroke => self.stroke_path(),
            Draw::Fill => self.fill_path(),
        }
    }

    /// Replay a list of recorded commands
    fn draw_list(&mut self, drawing: &[Draw]) {
        for d in drawing {
            self.draw(d);
        }
    }
}

/// One drawing command as a value
#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        to: Point,
        control1: Point,
        control2: Point,
    },
    Ellipse(Rect),
    ClosePath,
    StrokeColor(Color),
    FillColor(Color),
    LineWidth(f64),
    Stroke,
    Fill,
}

struct Pt(Point);

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", fmt_num(self.0.x), fmt_num(self.0.y))
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Draw::BeginPath => write!(f, "begin_path"),
            Draw::MoveTo(p) => write!(f, "move_to {}", Pt(*p)),
            Draw::LineTo(p) => write!(f, "line_to {}", Pt(*p)),
            Draw::CubicTo { to, control1, control2 } => write!(
                f,
                "cubic_to {} c1 {} c2 {}",
                Pt(*to),
                Pt(*control1),
                Pt(*control2)
            ),
            Draw::Ellipse(r) => write!(
                f,
                "ellipse {} size {} {}",
                Pt(r.origin),
                fmt_num(r.size.w),
                fmt_num(r.size.h)
            ),
            Draw::ClosePath => write!(f, "close_path"),
            Draw::StrokeColor(c) => write!(f, "stroke_color {}", c),
            Draw::FillColor(c) => write!(f, "fill_color {}", c),
            Draw::LineWidth(w) => write!(f, "line_width {}", fmt_num(*w)),
            Draw::Stroke => write!(f, "stroke"),
            Draw::Fill => write!(f, "fill"),
        }
    }
}

/// One command per line, no trailing newline
pub fn listing(drawing: &[Draw]) -> String {
    drawing
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A `Vec<Draw>` records every command it receives
#[rustfmt::skip]
impl DrawingContext for Vec<Draw> {
    #[inline] fn begin_path(&mut self)                  { self.push(Draw::BeginPath); }
    #[inline] fn move_to(&mut self, p: Point)           { self.push(Draw::MoveTo(p)); }
    #[inline] fn line_to(&mut self, p: Point)           { self.push(Draw::LineTo(p)); }
    #[inline] fn add_cubic_curve(&mut self, to: Point, control1: Point, control2: Point) {
        self.push(Draw::CubicTo { to, control1, control2 });
    }
    #[inline] fn add_ellipse(&mut self, bounds: Rect)   { self.push(Draw::Ellipse(bounds)); }
    #[inline] fn close_subpath(&mut self)               { self.push(Draw::ClosePath); }
    #[inline] fn set_stroke_color(&mut self, color: &Color) { self.push(Draw::StrokeColor(color.clone())); }
    #[inline] fn set_fill_color(&mut self, color: &Color)   { self.push(Draw::FillColor(color.clone())); }
    #[inline] fn set_line_width(&mut self, width: f64)  { self.push(Draw::LineWidth(width)); }
    #[inline] fn stroke_path(&mut self)                 { self.push(Draw::Stroke); }
    #[inline] fn fill_path(&mut self)                   { self.push(Draw::Fill); }
}
