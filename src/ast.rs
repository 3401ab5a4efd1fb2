//! Abstract Syntax Tree types for property sheets
//!
//! These types represent the parsed structure of a sheet, before any key is
//! interpreted. Spans point back into the source for diagnostics.

use miette::SourceSpan;

use crate::types::Point;

/// A complete property sheet
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub sections: Vec<Section>,
}

impl Sheet {
    /// True when at least one `[handle]` section is present
    pub fn has_handles(&self) -> bool {
        self.sections.iter().any(|s| s.kind == SectionKind::Handle)
    }
}

/// Section header: [curve], [handle], or anything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    Curve,
    Handle,
    Unknown(String),
}

impl SectionKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "curve" => SectionKind::Curve,
            "handle" => SectionKind::Handle,
            other => SectionKind::Unknown(other.to_string()),
        }
    }
}

/// A section and its entries, in source order
#[derive(Debug, Clone)]
pub struct Section {
    pub kind: SectionKind,
    /// Span of the header; empty for the implicit leading section
    pub span: SourceSpan,
    pub entries: Vec<Entry>,
}

/// `key = value`
#[derive(Debug, Clone)]
pub struct Entry {
    pub key: String,
    pub key_span: SourceSpan,
    pub value: Value,
    pub value_span: SourceSpan,
}

/// A literal value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Point(Point),
    Str(String),
}

impl Value {
    /// Human-readable type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Point(_) => "point",
            Value::Str(_) => "string",
        }
    }
}
