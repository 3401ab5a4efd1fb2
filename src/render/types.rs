//! Core types for curve rendering

use glam::dvec2;

use crate::types::{Color, Point};

use super::defaults;
use super::geometry::{Corner, resolve_anchor};
use super::terminal::{ShapeKind, Terminal};
use crate::types::BoundingGeometry;

/// Paint settings shared by the shaft, the terminals and (for `show_handles`) the overlay
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Stroke width of the shaft and of terminal outlines
    pub line_width: f64,
    pub color: Color,
    /// Draw the diagnostic anchor -> control point overlay
    pub show_handles: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_width: defaults::LINE_WIDTH,
            color: Color::Tint,
            show_handles: false,
        }
    }
}

/// Anything that can stand in as one end of the curve.
///
/// Hosts usually back this with an on-screen object the user drags around.
/// The control offset is always relative to the anchor.
pub trait Handle {
    fn anchor(&self) -> Point;
    fn set_anchor(&mut self, anchor: Point);
    fn control_offset(&self) -> Point;
    fn set_control_offset(&mut self, offset: Point);
    fn terminal_shape(&self) -> ShapeKind;
    fn set_terminal_shape(&mut self, shape: ShapeKind);
    fn terminal_size(&self) -> f64;
    fn set_terminal_size(&mut self, size: f64);
}

/// One resolved end of the curve: absolute anchor, relative control offset
/// and terminal decoration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    pub anchor: Point,
    pub control_offset: Point,
    pub shape: ShapeKind,
    pub size: f64,
}

impl Default for Endpoint {
    /// A freshly placed handle: control 10 units above, undecorated, size 15
    fn default() -> Self {
        Self {
            anchor: Point::ZERO,
            control_offset: defaults::HANDLE_CONTROL,
            shape: ShapeKind::None,
            size: defaults::HANDLE_SIZE,
        }
    }
}

impl Endpoint {
    /// An undecorated endpoint
    pub fn new(anchor: Point, control_offset: Point) -> Self {
        Self {
            anchor,
            control_offset,
            shape: ShapeKind::None,
            size: 0.0,
        }
    }

    pub fn with_terminal(mut self, shape: ShapeKind, size: f64) -> Self {
        self.shape = shape;
        self.size = size;
        self
    }

    /// Absolute control point: anchor + control offset
    pub fn control_point(&self) -> Point {
        dvec2(
            self.anchor.x + self.control_offset.x,
            self.anchor.y + self.control_offset.y,
        )
    }

    /// Same control offset, re-rooted at another anchor
    pub fn with_anchor(&self, anchor: Point) -> Self {
        Self { anchor, ..*self }
    }

    pub fn terminal(&self) -> Terminal {
        self.shape.terminal(self.size)
    }
}

impl Handle for Endpoint {
    fn anchor(&self) -> Point {
        self.anchor
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    fn control_offset(&self) -> Point {
        self.control_offset
    }

    fn set_control_offset(&mut self, offset: Point) {
        self.control_offset = offset;
    }

    fn terminal_shape(&self) -> ShapeKind {
        self.shape
    }

    fn set_terminal_shape(&mut self, shape: ShapeKind) {
        self.shape = shape;
    }

    fn terminal_size(&self) -> f64 {
        self.size
    }

    fn set_terminal_size(&mut self, size: f64) {
        self.size = size;
    }
}

impl From<&dyn Handle> for Endpoint {
    fn from(handle: &dyn Handle) -> Self {
        Self {
            anchor: handle.anchor(),
            control_offset: handle.control_offset(),
            shape: handle.terminal_shape(),
            size: handle.terminal_size(),
        }
    }
}

/// A handle as stored by a host or property sheet: control offset split into
/// `dx`/`dy`, terminal shape kept as its raw stored integer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSpec {
    pub anchor: Point,
    pub dx: f64,
    pub dy: f64,
    pub shape: i64,
    pub size: f64,
}

impl Default for HandleSpec {
    fn default() -> Self {
        Self {
            anchor: Point::ZERO,
            dx: defaults::HANDLE_CONTROL.x,
            dy: defaults::HANDLE_CONTROL.y,
            shape: ShapeKind::None.raw(),
            size: defaults::HANDLE_SIZE,
        }
    }
}

impl HandleSpec {
    pub fn at(anchor: Point) -> Self {
        Self {
            anchor,
            ..Self::default()
        }
    }
}

impl Handle for HandleSpec {
    fn anchor(&self) -> Point {
        self.anchor
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    fn control_offset(&self) -> Point {
        dvec2(self.dx, self.dy)
    }

    fn set_control_offset(&mut self, offset: Point) {
        self.dx = offset.x;
        self.dy = offset.y;
    }

    /// Out-of-range stored values read back as `None`
    fn terminal_shape(&self) -> ShapeKind {
        ShapeKind::from_raw(self.shape)
    }

    fn set_terminal_shape(&mut self, shape: ShapeKind) {
        self.shape = shape.raw();
    }

    fn terminal_size(&self) -> f64 {
        self.size
    }

    fn set_terminal_size(&mut self, size: f64) {
        self.size = size;
    }
}

/// One end of a corner-anchored curve, before it is placed in a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerEnd {
    pub corner: Corner,
    pub offset: Point,
    pub control: Point,
    pub shape: ShapeKind,
    pub size: f64,
}

impl CornerEnd {
    /// Resolve against a frame into an endpoint descriptor
    pub fn resolve(&self, frame: &dyn BoundingGeometry) -> Endpoint {
        let anchor = resolve_anchor(self.corner, self.offset, frame.size(), frame.center());
        Endpoint::new(anchor, self.control).with_terminal(self.shape, self.size)
    }
}

/// A curve whose ends are given as corner + offset of the element's own frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerCurve {
    pub start: CornerEnd,
    pub end: CornerEnd,
}

impl Default for CornerCurve {
    /// Bottom-left to top-right, arrowhead on the end
    fn default() -> Self {
        Self {
            start: CornerEnd {
                corner: Corner::BottomLeft,
                offset: defaults::START_OFFSET,
                control: defaults::START_CONTROL,
                shape: ShapeKind::None,
                size: defaults::ARROW_SIZE,
            },
            end: CornerEnd {
                corner: Corner::TopRight,
                offset: defaults::END_OFFSET,
                control: defaults::END_CONTROL,
                shape: ShapeKind::ArrowHead,
                size: defaults::ARROW_SIZE,
            },
        }
    }
}

impl CornerCurve {
    /// Decode a stored start corner; out of range falls back to bottom-left
    pub fn set_raw_start_corner(&mut self, raw: i64) {
        self.start.corner = Corner::from_raw(raw, Corner::BottomLeft);
    }

    /// Decode a stored end corner; out of range falls back to top-right
    pub fn set_raw_end_corner(&mut self, raw: i64) {
        self.end.corner = Corner::from_raw(raw, Corner::TopRight);
    }

    pub fn endpoints(&self, frame: &dyn BoundingGeometry) -> (Endpoint, Endpoint) {
        (self.start.resolve(frame), self.end.resolve(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bounds;

    #[test]
    fn control_point_is_anchor_plus_offset() {
        let e = Endpoint::new(dvec2(20.0, 80.0), dvec2(20.0, 0.0));
        assert_eq!(e.control_point(), dvec2(40.0, 80.0));
        let moved = e.with_anchor(dvec2(0.0, 0.0));
        assert_eq!(moved.control_point(), dvec2(20.0, 0.0));
        assert_eq!(moved.control_offset, e.control_offset);
    }

    #[test]
    fn endpoint_handle_accessors_round_trip() {
        let mut e = Endpoint::default();
        assert_eq!(e.control_offset(), dvec2(0.0, -10.0));
        assert_eq!(e.terminal_size(), 15.0);
        e.set_anchor(dvec2(1.0, 2.0));
        e.set_control_offset(dvec2(3.0, 4.0));
        e.set_terminal_shape(ShapeKind::Disc);
        e.set_terminal_size(6.0);

        let copy = Endpoint::from(&e as &dyn Handle);
        assert_eq!(copy, e);
        assert_eq!(copy.shape, ShapeKind::Disc);
    }

    #[test]
    fn handle_spec_decodes_raw_shape() {
        let mut h = HandleSpec::at(dvec2(5.0, 5.0));
        assert_eq!(h.control_offset(), dvec2(0.0, -10.0));
        assert_eq!(h.terminal_shape(), ShapeKind::None);

        h.shape = 3;
        assert_eq!(h.terminal_shape(), ShapeKind::Disc);
        h.shape = 42;
        assert_eq!(h.terminal_shape(), ShapeKind::None);

        h.set_terminal_shape(ShapeKind::ArrowHead);
        assert_eq!(h.shape, 1);
        h.set_control_offset(dvec2(7.0, -2.0));
        assert_eq!((h.dx, h.dy), (7.0, -2.0));

        let e = Endpoint::from(&h as &dyn Handle);
        assert_eq!(e.control_point(), dvec2(12.0, 3.0));
        assert_eq!(e.size, 15.0);
    }

    #[test]
    fn corner_curve_defaults_resolve_in_square_frame() {
        let frame = Bounds::of_size(100.0, 100.0);
        let (start, end) = CornerCurve::default().endpoints(&frame);
        assert_eq!(start.anchor, dvec2(20.0, 80.0));
        assert_eq!(end.anchor, dvec2(80.0, 20.0));
        assert_eq!(start.shape, ShapeKind::None);
        assert_eq!(end.shape, ShapeKind::ArrowHead);
        assert_eq!(end.size, 10.0);
    }

    #[test]
    fn raw_corners_fall_back_per_end() {
        let mut curve = CornerCurve::default();
        curve.set_raw_start_corner(99);
        curve.set_raw_end_corner(-4);
        assert_eq!(curve.start.corner, Corner::BottomLeft);
        assert_eq!(curve.end.corner, Corner::TopRight);

        curve.set_raw_start_corner(4);
        curve.set_raw_end_corner(0);
        assert_eq!(curve.start.corner, Corner::Center);
        assert_eq!(curve.end.corner, Corner::TopLeft);
    }
}
