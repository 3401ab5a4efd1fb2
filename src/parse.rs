//! Parse pest pairs into sheet AST nodes, then decode the AST into a curve
//!
//! Decoding happens once here: raw corner and shape integers are mapped to
//! their enums (with fallback defaults) so the render path only sees typed
//! values.

use glam::dvec2;
use miette::SourceSpan;
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;

use crate::ast::*;
use crate::errors::{SheetError, SourceContext};
use crate::render::{CornerCurve, Curve, CurveSource, HandleSpec, ShapeKind, Style};
use crate::types::{Color, Point};
use crate::{Rule, SheetParser};

/// Parse property-sheet source into AST
pub fn parse(src: &SourceContext) -> Result<Sheet, SheetError> {
    let pairs = SheetParser::parse(Rule::sheet, &src.source).map_err(|e| {
        let span = match e.location {
            InputLocation::Pos(pos) => SourceSpan::from((pos, 0)),
            InputLocation::Span((start, end)) => SourceSpan::from((start, end - start)),
        };
        SheetError::Syntax {
            message: e.variant.message().into_owned(),
            src: src.named_source(),
            span,
        }
    })?;

    // Entries before the first header belong to the curve
    let mut sheet = Sheet::default();
    let mut current = Section {
        kind: SectionKind::Curve,
        span: SourceSpan::from((0, 0)),
        entries: Vec::new(),
    };

    for pair in pairs.flat_map(|p| p.into_inner()) {
        match pair.as_rule() {
            Rule::header => {
                let span = span_of(&pair);
                let name = first_child(pair, src)?;
                let next = Section {
                    kind: SectionKind::from_name(name.as_str()),
                    span,
                    entries: Vec::new(),
                };
                push_section(&mut sheet, std::mem::replace(&mut current, next));
            }
            Rule::entry => current.entries.push(parse_entry(pair, src)?),
            _ => {}
        }
    }
    push_section(&mut sheet, current);

    Ok(sheet)
}

fn push_section(sheet: &mut Sheet, section: Section) {
    // Drop the implicit leading section when nothing was written before the first header
    if section.span.len() == 0 && section.entries.is_empty() && sheet.sections.is_empty() {
        return;
    }
    sheet.sections.push(section);
}

fn span_of(pair: &Pair<Rule>) -> SourceSpan {
    let span = pair.as_span();
    SourceSpan::from((span.start(), span.end() - span.start()))
}

fn first_child<'i>(pair: Pair<'i, Rule>, src: &SourceContext) -> Result<Pair<'i, Rule>, SheetError> {
    let span = span_of(&pair);
    let rule = pair.as_rule();
    pair.into_inner().next().ok_or_else(|| SheetError::Syntax {
        message: format!("empty {:?}", rule),
        src: src.named_source(),
        span,
    })
}

fn parse_entry(pair: Pair<Rule>, src: &SourceContext) -> Result<Entry, SheetError> {
    let span = span_of(&pair);
    let mut inner = pair.into_inner();
    let (Some(key), Some(value)) = (inner.next(), inner.next()) else {
        return Err(SheetError::Syntax {
            message: "expected `key = value`".to_string(),
            src: src.named_source(),
            span,
        });
    };
    Ok(Entry {
        key: key.as_str().to_string(),
        key_span: span_of(&key),
        value_span: span_of(&value),
        value: parse_value(value, src)?,
    })
}

fn parse_value(pair: Pair<Rule>, src: &SourceContext) -> Result<Value, SheetError> {
    match pair.as_rule() {
        Rule::number => Ok(Value::Number(parse_number(&pair, src)?)),
        Rule::boolean => Ok(Value::Bool(pair.as_str() == "true")),
        Rule::point => {
            let span = span_of(&pair);
            let mut inner = pair.into_inner();
            match (inner.next(), inner.next()) {
                (Some(x), Some(y)) => Ok(Value::Point(dvec2(
                    parse_number(&x, src)?,
                    parse_number(&y, src)?,
                ))),
                _ => Err(SheetError::Syntax {
                    message: "expected `(x, y)`".to_string(),
                    src: src.named_source(),
                    span,
                }),
            }
        }
        Rule::string => Ok(Value::Str(first_child(pair, src)?.as_str().to_string())),
        rule => Err(SheetError::Syntax {
            message: format!("unexpected {:?}", rule),
            src: src.named_source(),
            span: span_of(&pair),
        }),
    }
}

fn parse_number(pair: &Pair<Rule>, src: &SourceContext) -> Result<f64, SheetError> {
    pair.as_str().parse::<f64>().map_err(|e| SheetError::Syntax {
        message: e.to_string(),
        src: src.named_source(),
        span: span_of(pair),
    })
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode a parsed sheet into a curve.
///
/// Any `[handle]` section switches the curve to handle mode; each one adds a
/// handle. Unknown keys and sections are logged and ignored.
pub fn build_curve(sheet: &Sheet, src: &SourceContext) -> Result<Curve, SheetError> {
    let mut corners = CornerCurve::default();
    let mut style = Style::default();
    let mut handles = Vec::new();

    for section in &sheet.sections {
        match &section.kind {
            SectionKind::Curve => {
                for entry in &section.entries {
                    apply_curve_entry(&mut corners, &mut style, entry, src)?;
                }
            }
            SectionKind::Handle => {
                let mut handle = HandleSpec::default();
                for entry in &section.entries {
                    apply_handle_entry(&mut handle, entry, src)?;
                }
                handles.push(handle);
            }
            SectionKind::Unknown(_) => {
                crate::log::warn!(section = ?section.kind, "unknown section, ignoring its entries");
            }
        }
    }

    let source = if sheet.has_handles() {
        CurveSource::Handles(handles)
    } else {
        CurveSource::Corners(corners)
    };
    Ok(Curve::new(source, style))
}

fn apply_curve_entry(
    curve: &mut CornerCurve,
    style: &mut Style,
    entry: &Entry,
    src: &SourceContext,
) -> Result<(), SheetError> {
    match entry.key.as_str() {
        "start_anchor" => curve.set_raw_start_corner(raw(entry, src)?),
        "end_anchor" => curve.set_raw_end_corner(raw(entry, src)?),
        "start_offset" => curve.start.offset = point(entry, src)?,
        "end_offset" => curve.end.offset = point(entry, src)?,
        "start_control" => curve.start.control = point(entry, src)?,
        "end_control" => curve.end.control = point(entry, src)?,
        "start_shape" => curve.start.shape = ShapeKind::from_raw(raw(entry, src)?),
        "end_shape" => curve.end.shape = ShapeKind::from_raw(raw(entry, src)?),
        "start_size" => curve.start.size = number(entry, src)?,
        "end_size" | "arrow_size" => curve.end.size = number(entry, src)?,
        "line_width" => style.line_width = number(entry, src)?,
        "show_handles" => style.show_handles = boolean(entry, src)?,
        "color" => style.color = color(entry, src)?,
        _ => {
            crate::log::warn!(key = %entry.key, "unknown curve key, ignoring");
        }
    }
    Ok(())
}

fn apply_handle_entry(
    handle: &mut HandleSpec,
    entry: &Entry,
    src: &SourceContext,
) -> Result<(), SheetError> {
    match entry.key.as_str() {
        "anchor" => handle.anchor = point(entry, src)?,
        "control" => {
            let offset = point(entry, src)?;
            handle.dx = offset.x;
            handle.dy = offset.y;
        }
        "dx" => handle.dx = number(entry, src)?,
        "dy" => handle.dy = number(entry, src)?,
        "shape" => handle.shape = raw(entry, src)?,
        "size" => handle.size = number(entry, src)?,
        _ => {
            crate::log::warn!(key = %entry.key, "unknown handle key, ignoring");
        }
    }
    Ok(())
}

fn mismatch(entry: &Entry, expected: &'static str, src: &SourceContext) -> SheetError {
    SheetError::TypeMismatch {
        key: entry.key.clone(),
        expected,
        got: entry.value.type_name(),
        src: src.named_source(),
        key_span: entry.key_span,
        span: entry.value_span,
    }
}

fn number(entry: &Entry, src: &SourceContext) -> Result<f64, SheetError> {
    match entry.value {
        Value::Number(n) => Ok(n),
        _ => Err(mismatch(entry, "a number", src)),
    }
}

/// A stored enum value; fractional parts are truncated
fn raw(entry: &Entry, src: &SourceContext) -> Result<i64, SheetError> {
    number(entry, src).map(|n| n as i64)
}

fn point(entry: &Entry, src: &SourceContext) -> Result<Point, SheetError> {
    match entry.value {
        Value::Point(p) => Ok(p),
        _ => Err(mismatch(entry, "a point", src)),
    }
}

fn boolean(entry: &Entry, src: &SourceContext) -> Result<bool, SheetError> {
    match entry.value {
        Value::Bool(b) => Ok(b),
        _ => Err(mismatch(entry, "a boolean", src)),
    }
}

fn color(entry: &Entry, src: &SourceContext) -> Result<Color, SheetError> {
    let Value::Str(s) = &entry.value else {
        return Err(mismatch(entry, "a string", src));
    };
    Color::parse(s).ok_or_else(|| SheetError::InvalidColor {
        value: s.clone(),
        src: src.named_source(),
        span: entry.value_span,
    })
}
