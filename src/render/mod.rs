//! Rendering for Bézier arrows
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and fixed shape constants
//! - `geometry`: Corner resolution and polar helpers
//! - `context`: The drawing context capability and a command recorder
//! - `terminal`: Arrowhead, circle and disc end decorations
//! - `types`: Style, endpoints, handles and corner-anchored curves
//! - `compose`: Terminals plus the cubic shaft
//! - `overlay`: Diagnostic control handles
//! - `svg`: SVG generation

pub mod compose;
pub mod context;
pub mod defaults;
pub mod geometry;
pub mod overlay;
pub mod svg;
pub mod terminal;
pub mod types;

// Re-export commonly used items
pub use compose::{ComposedCurve, ResolvedEnd, compose, compose_handles};
pub use context::{Draw, DrawingContext, listing};
pub use geometry::{Corner, angle_between, resolve_anchor, to_cartesian};
pub use svg::SvgContext;
pub use terminal::{ShapeKind, Terminal, TerminalShape, render_terminal};
pub use types::*;

use crate::errors::RenderError;
use crate::types::{BoundingGeometry, Bounds};

/// Where a curve takes its two ends from
#[derive(Debug, Clone, PartialEq)]
pub enum CurveSource {
    /// Corner + offset of the element's own frame
    Corners(CornerCurve),
    /// Two externally owned handles; any other count draws nothing
    Handles(Vec<HandleSpec>),
}

impl Default for CurveSource {
    fn default() -> Self {
        CurveSource::Corners(CornerCurve::default())
    }
}

/// A drawable curve element: where its ends come from and how it is painted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    pub source: CurveSource,
    pub style: Style,
}

impl Curve {
    pub fn new(source: CurveSource, style: Style) -> Self {
        Self { source, style }
    }

    /// Draw into `ctx`, recomputing everything from the current configuration.
    ///
    /// Returns `None` without drawing when there is no context to draw into or
    /// the handle source is not configured with exactly two handles.
    pub fn draw<C: DrawingContext>(
        &self,
        frame: &dyn BoundingGeometry,
        ctx: Option<&mut C>,
    ) -> Option<ComposedCurve> {
        let Some(ctx) = ctx else {
            crate::log::debug!("no drawing context, skipping frame");
            return None;
        };

        match &self.source {
            CurveSource::Corners(corners) => {
                let (start, end) = corners.endpoints(frame);
                Some(compose(&start, &end, &self.style, ctx))
            }
            CurveSource::Handles(handles) => {
                let handles: Vec<&dyn Handle> = handles.iter().map(|h| h as &dyn Handle).collect();
                compose_handles(&handles, &self.style, ctx)
            }
        }
    }

    /// Record the commands for one frame
    pub fn commands(&self, frame: &dyn BoundingGeometry) -> Vec<Draw> {
        let mut cmds: Vec<Draw> = Vec::new();
        self.draw(frame, Some(&mut cmds));
        cmds
    }
}

/// Render a curve to an SVG document over `frame`
pub fn to_svg(curve: &Curve, frame: &Bounds) -> Result<String, RenderError> {
    let frame = Bounds::try_new(frame.size, frame.center)?;
    let mut svg = SvgContext::new();
    curve.draw(&frame, Some(&mut svg));
    svg.finish(&frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NumericError, Size};
    use glam::dvec2;

    #[test]
    fn missing_context_draws_nothing() {
        let curve = Curve::default();
        let frame = Bounds::of_size(100.0, 100.0);
        assert!(curve.draw::<Vec<Draw>>(&frame, None).is_none());
    }

    #[test]
    fn default_curve_points_bottom_left_to_top_right() {
        let frame = Bounds::of_size(100.0, 100.0);
        let mut cmds: Vec<Draw> = Vec::new();
        let curve = Curve::default().draw(&frame, Some(&mut cmds));

        let curve = curve.unwrap();
        assert_eq!(curve.start.anchor, dvec2(20.0, 80.0));
        assert_eq!(curve.end.original_anchor, dvec2(80.0, 20.0));
        assert!(cmds.contains(&Draw::Fill));
    }

    #[test]
    fn handle_source_needs_two_handles() {
        let frame = Bounds::of_size(100.0, 100.0);
        let mut curve = Curve::new(
            CurveSource::Handles(vec![HandleSpec::at(dvec2(10.0, 10.0))]),
            Style::default(),
        );
        assert!(curve.commands(&frame).is_empty());

        if let CurveSource::Handles(handles) = &mut curve.source {
            handles.push(HandleSpec::at(dvec2(90.0, 90.0)));
        }
        let cmds = curve.commands(&frame);
        assert_eq!(cmds.first(), Some(&Draw::BeginPath));
        assert_eq!(cmds.last(), Some(&Draw::Stroke));
    }

    #[test]
    fn to_svg_rejects_bad_frames() {
        let curve = Curve::default();
        let frame = Bounds::new(Size::new(f64::NAN, 10.0), dvec2(0.0, 5.0));
        assert!(matches!(
            to_svg(&curve, &frame),
            Err(RenderError::InvalidBounds(NumericError::NaN))
        ));

        let frame = Bounds::new(Size::new(-1.0, 10.0), dvec2(0.0, 5.0));
        assert!(matches!(
            to_svg(&curve, &frame),
            Err(RenderError::InvalidBounds(NumericError::Negative))
        ));
    }
}
