//! Geometry kernel: corner anchors, polar conversion and endpoint tangents.
//!
//! Pure functions only. Every function is total over its numeric domain:
//! degenerate inputs produce degenerate points, never a panic.

use glam::dvec2;

use crate::types::{Point, Size};

/// Symbolic position on an element's bounding rectangle.
///
/// Stored configurations keep corners as raw integers (`tl = 0, tr, bl, br,
/// center`); decode them with [`Corner::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
    Center = 4,
}

impl Corner {
    /// Decode a stored corner value, substituting `default` when it is out of range.
    pub fn from_raw(raw: i64, default: Corner) -> Corner {
        match raw {
            0 => Corner::TopLeft,
            1 => Corner::TopRight,
            2 => Corner::BottomLeft,
            3 => Corner::BottomRight,
            4 => Corner::Center,
            _ => default,
        }
    }

    /// The stored integer for this corner
    pub fn raw(self) -> i64 {
        self as i64
    }

    /// Base point of this corner on a rectangle rooted at the origin
    pub fn base_point(self, size: Size, center: Point) -> Point {
        match self {
            Corner::TopLeft => Point::ZERO,
            Corner::TopRight => dvec2(size.w, 0.0),
            Corner::BottomLeft => dvec2(0.0, size.h),
            Corner::BottomRight => dvec2(size.w, size.h),
            Corner::Center => center,
        }
    }
}

/// Resolve a corner + offset anchor specification to an absolute point.
pub fn resolve_anchor(corner: Corner, offset: Point, size: Size, center: Point) -> Point {
    let base = corner.base_point(size, center);
    dvec2(base.x + offset.x, base.y + offset.y)
}

/// `origin + (r cos θ, r sin θ)`.
///
/// A negative radius points the opposite way along `angle`; it is not clamped.
pub fn to_cartesian(origin: Point, radius: f64, angle: f64) -> Point {
    let m = dvec2(radius * angle.cos(), radius * angle.sin());
    dvec2(origin.x + m.x, origin.y + m.y)
}

/// Angle of the vector from `origin` toward `toward`, in (-π, π].
///
/// Used as the curve tangent at an endpoint: the derivative of a cubic at
/// t = 0 (t = 1) points exactly at its nearest control point.
/// A zero-length vector yields 0.
pub fn angle_between(origin: Point, toward: Point) -> f64 {
    let d = dvec2(toward.x - origin.x, toward.y - origin.y);
    d.y.atan2(d.x)
}
