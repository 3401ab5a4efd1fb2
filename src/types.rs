//! Geometry and paint primitives shared by every stage of the curve pipeline.
//!
//! Points are plain `glam::DVec2` values: copied by value, no identity.
//! Extents that come from a host (frame size, bounds) get validated
//! constructors so NaN never reaches the SVG writer.

use std::fmt;

use glam::{DVec2, dvec2};

/// A point (or a relative offset) in drawing coordinates, Y pointing down.
pub type Point = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_extent(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    /// Create a size (unchecked).
    pub const fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }

    /// Create a size with validation (rejects NaN, infinite and negative extents)
    pub fn try_new(w: f64, h: f64) -> Result<Self, NumericError> {
        Ok(Size {
            w: check_extent(w)?,
            h: check_extent(h)?,
        })
    }

    /// The size as a vector from the origin to the far corner
    #[inline]
    pub fn to_vec(self) -> Point {
        dvec2(self.w, self.h)
    }
}

/// Axis-aligned rectangle given by its top-left origin and size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Rect { origin, size }
    }

    /// The square bounding box of a circle. A negative radius yields a
    /// negative size, which is passed through untouched.
    pub fn around(center: Point, radius: f64) -> Self {
        Rect {
            origin: center - dvec2(radius, radius),
            size: Size::new(radius + radius, radius + radius),
        }
    }

    /// Get the center point
    pub fn center(&self) -> Point {
        self.origin + self.size.to_vec() / 2.0
    }
}

/// Bounding geometry consumed when endpoints are given as corner + offset.
///
/// The center is tracked separately from the size: a host may place the
/// element's geometric center anywhere, so it is not derived from `size`.
pub trait BoundingGeometry {
    /// Current size of the bounding rectangle (its origin is always 0,0)
    fn size(&self) -> Size;

    /// Current geometric center
    fn center(&self) -> Point;
}

/// A plain frame: size plus independently supplied center
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub size: Size,
    pub center: Point,
}

impl Bounds {
    pub fn new(size: Size, center: Point) -> Self {
        Bounds { size, center }
    }

    /// A frame whose center is the midpoint of its rectangle
    pub fn of_size(w: f64, h: f64) -> Self {
        let size = Size::new(w, h);
        Bounds {
            size,
            center: size.to_vec() / 2.0,
        }
    }

    /// Create bounds with validation; the center must be finite
    pub fn try_new(size: Size, center: Point) -> Result<Self, NumericError> {
        let size = Size::try_new(size.w, size.h)?;
        check_finite(center.x)?;
        check_finite(center.y)?;
        Ok(Bounds { size, center })
    }
}

impl BoundingGeometry for Bounds {
    fn size(&self) -> Size {
        self.size
    }

    fn center(&self) -> Point {
        self.center
    }
}

/// Opaque paint colour; no colour management beyond this.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Color {
    /// The host's theme / tint colour
    #[default]
    Tint,
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
    Named(String),
}

impl Color {
    /// Diagnostic colour used by the handle overlay
    pub const HANDLE: Color = Color::Rgb(255, 0, 0);

    /// Parse a colour as written in a property sheet.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)`, `tint`, or a bare
    /// CSS name. Returns `None` for malformed hex or `rgb()` forms.
    pub fn parse(s: &str) -> Option<Color> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("tint") {
            return Some(Color::Tint);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(body) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<u8> = body
                .split(',')
                .map(|p| p.trim().parse::<u8>())
                .collect::<Result<_, _>>()
                .ok()?;
            return match parts[..] {
                [r, g, b] => Some(Color::Rgb(r, g, b)),
                _ => None,
            };
        }
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Some(Color::Named(s.to_ascii_lowercase()));
        }
        None
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
    match hex.len() {
        3 => Some(Color::Rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Color::Rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::Rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Tint => write!(f, "currentColor"),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, *a as f64 / 255.0),
            Color::Named(s) => write!(f, "{}", s),
        }
    }
}
