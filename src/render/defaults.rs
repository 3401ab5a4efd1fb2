//! Default sizes and fixed shape constants

use glam::{DVec2, dvec2};

/// Stroke width of the curve and terminal outlines
pub const LINE_WIDTH: f64 = 1.5;

/// Half-angle between the arrowhead axis and each ear, in radians
pub const EAR_ANGLE: f64 = 0.3;
/// Distance of the arrowhead neck behind the retracted anchor, as a fraction of the terminal size
pub const NECK_RATIO: f64 = 0.25;
/// Length of the shaft stub joining the curve to the arrowhead, as a fraction of the terminal size
pub const SHAFT_RATIO: f64 = 0.5;

/// Handle overlay: line width and control point marker radius
pub const HANDLE_LINE_WIDTH: f64 = 1.0;
pub const HANDLE_MARKER_RADIUS: f64 = 2.0;

/// Corner-anchored curve defaults
pub const START_OFFSET: DVec2 = dvec2(20.0, -20.0);
pub const START_CONTROL: DVec2 = dvec2(20.0, 0.0);
pub const END_OFFSET: DVec2 = dvec2(-20.0, 20.0);
pub const END_CONTROL: DVec2 = dvec2(0.0, 100.0);
pub const ARROW_SIZE: f64 = 10.0;

/// Handle defaults
pub const HANDLE_CONTROL: DVec2 = dvec2(0.0, -10.0);
pub const HANDLE_SIZE: f64 = 15.0;
