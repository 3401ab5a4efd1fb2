//! Cubic Bézier arrows with arrowhead, circle and disc terminals.
//!
//! The core turns endpoint, control and style parameters into an ordered
//! list of drawing commands (see [`render::DrawingContext`]). A small
//! property-sheet format and an SVG backend sit on top for hosts that only
//! want a picture.

use pest_derive::Parser;

pub mod ast;
pub mod errors;
pub mod log;
pub mod parse;
pub mod render;
pub mod types;

pub use errors::{RenderError, SheetError, SourceContext};
pub use render::{
    ComposedCurve, Curve, CurveSource, Draw, DrawingContext, Endpoint, Handle, HandleSpec,
    ShapeKind, Style, SvgContext,
};
pub use types::{BoundingGeometry, Bounds, Color, Point, Rect, Size};

#[derive(Parser)]
#[grammar = "sheet.pest"]
pub struct SheetParser;

/// Read a property sheet into a curve.
pub fn curve_from_sheet(name: &str, source: &str) -> Result<Curve, SheetError> {
    let src = SourceContext::new(name, source);
    let sheet = parse::parse(&src)?;
    parse::build_curve(&sheet, &src)
}

/// Render property-sheet source to SVG over a `width` x `height` frame.
///
/// Returns the SVG string on success, or an error with diagnostics.
pub fn render_svg(source: &str, width: f64, height: f64) -> Result<String, miette::Report> {
    let curve = curve_from_sheet("<sheet>", source)?;
    let svg = render::to_svg(&curve, &Bounds::of_size(width, height))?;
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    #[test]
    fn parse_empty() {
        let result = SheetParser::parse(Rule::sheet, "");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_entry() {
        let input = "line_width = 2";
        let result = SheetParser::parse(Rule::sheet, input);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_point_with_spaces() {
        let input = "start_offset = ( 20 ,-20 )";
        let result = SheetParser::parse(Rule::sheet, input);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_comments_and_blank_lines() {
        let input = r#"
            # a curve
            [curve]   # header comment

            color = "rgb(1, 2, 3)"
        "#;
        let result = SheetParser::parse(Rule::sheet, input);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_crlf() {
        let input = "[handle]\r\nanchor = (1, 2)\r\n";
        let result = SheetParser::parse(Rule::sheet, input);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn reject_two_entries_on_one_line() {
        let result = SheetParser::parse(Rule::sheet, "a = 1 b = 2");
        assert!(result.is_err());
    }

    #[test]
    fn reject_unterminated_string() {
        let result = SheetParser::parse(Rule::sheet, "color = \"red\nline_width = 1");
        assert!(result.is_err());
    }

    #[test]
    fn reject_bare_word_value() {
        let result = SheetParser::parse(Rule::sheet, "color = red");
        assert!(result.is_err());
    }

    #[test]
    fn unclosed_header_points_at_the_missing_bracket() {
        let err = SheetParser::parse(Rule::sheet, "[curve\nline_width = 2").unwrap_err();
        assert_eq!(err.location, pest::error::InputLocation::Pos(6));
    }

    #[test]
    fn render_svg_reports_diagnostics() {
        let err = render_svg("line_width = \"thick\"", 100.0, 100.0).unwrap_err();
        assert!(err.to_string().contains("line_width"), "{err}");
    }
}
