//! SVG backend: a drawing context that turns commands into `<path>` elements

use facet_svg::facet_xml::SerializeOptions;
use facet_svg::{Path, PathData, Svg, SvgNode, SvgStyle, facet_xml};

use crate::errors::RenderError;
use crate::types::{BoundingGeometry, Color, Point, Rect};

use super::context::DrawingContext;

/// Drawing context that builds an SVG tree.
///
/// Path commands accumulate into path data; every `stroke_path` or
/// `fill_path` emits one `<path>` node and consumes the current path,
/// like a CoreGraphics-style context does.
pub struct SvgContext {
    path: Option<PathData>,
    stroke: Color,
    fill: Color,
    line_width: f64,
    nodes: Vec<SvgNode>,
}

impl Default for SvgContext {
    fn default() -> Self {
        Self {
            path: None,
            stroke: Color::Tint,
            fill: Color::Tint,
            line_width: 1.0,
            nodes: Vec::new(),
        }
    }
}

impl SvgContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes emitted so far
    pub fn nodes(&self) -> &[SvgNode] {
        &self.nodes
    }

    fn extend(&mut self, f: impl FnOnce(PathData) -> PathData) {
        let data = self.path.take().unwrap_or_else(PathData::new);
        self.path = Some(f(data));
    }

    fn emit(&mut self, style: SvgStyle) {
        let Some(data) = self.path.take() else {
            return;
        };
        self.nodes.push(SvgNode::Path(Path {
            d: Some(data),
            fill: None,
            stroke: None,
            stroke_width: None,
            stroke_dasharray: None,
            style,
        }));
    }

    /// Wrap the emitted nodes in an `<svg>` document sized to `frame`
    pub fn finish(self, frame: &dyn BoundingGeometry) -> Result<String, RenderError> {
        let size = frame.size();
        let (w, h) = (fmt_num(size.w), fmt_num(size.h));
        let svg = Svg {
            width: Some(w.clone()),
            height: Some(h.clone()),
            view_box: Some(format!("0 0 {w} {h}")),
            children: self.nodes,
        };

        fn format_float(value: f64, writer: &mut dyn std::io::Write) -> Result<(), std::io::Error> {
            write!(writer, "{}", fmt_num(value))
        }

        let options = SerializeOptions {
            float_formatter: Some(format_float),
            ..Default::default()
        };
        facet_xml::to_string_with_options(&svg, &options)
            .map_err(|e| RenderError::Serialize(e.to_string()))
    }
}

impl DrawingContext for SvgContext {
    fn begin_path(&mut self) {
        self.path = None;
    }

    fn move_to(&mut self, p: Point) {
        self.extend(|d| d.m(p.x, p.y));
    }

    fn line_to(&mut self, p: Point) {
        self.extend(|d| d.l(p.x, p.y));
    }

    fn add_cubic_curve(&mut self, to: Point, control1: Point, control2: Point) {
        self.extend(|d| d.c(control1.x, control1.y, control2.x, control2.y, to.x, to.y));
    }

    /// Two half-arcs starting and ending at the rightmost point
    fn add_ellipse(&mut self, bounds: Rect) {
        let c = bounds.center();
        let (rx, ry) = ((bounds.size.w / 2.0).abs(), (bounds.size.h / 2.0).abs());
        let (right, left) = (c.x + rx, c.x - rx);
        self.extend(|d| {
            d.m(right, c.y)
                .a(rx, ry, 0.0, true, false, left, c.y)
                .a(rx, ry, 0.0, true, false, right, c.y)
                .z()
        });
    }

    fn close_subpath(&mut self) {
        self.extend(|d| d.z());
    }

    fn set_stroke_color(&mut self, color: &Color) {
        self.stroke = color.clone();
    }

    fn set_fill_color(&mut self, color: &Color) {
        self.fill = color.clone();
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn stroke_path(&mut self) {
        let style = SvgStyle::new()
            .add("fill", "none")
            .add("stroke", &self.stroke.to_string())
            .add("stroke-width", &fmt_num(self.line_width));
        self.emit(style);
    }

    fn fill_path(&mut self) {
        let style = SvgStyle::new()
            .add("fill", &self.fill.to_string())
            .add("stroke", "none");
        self.emit(style);
    }
}

/// Format a number like C's `%g` (6 significant figures, trailing zeros trimmed).
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    // Subnormals push the scale past f64::MAX; nothing that small is visible
    if !scale.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
