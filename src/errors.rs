//! Error types with rich diagnostics using miette
//!
//! The drawing core never fails: a frame is either drawn or silently skipped.
//! Errors only exist at the edges, when a property sheet is decoded or a
//! finished drawing is exported as SVG.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<sheet>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Property Sheet Errors
// ============================================================================

/// Errors that occur while reading a property sheet
#[derive(Error, Diagnostic, Debug)]
pub enum SheetError {
    #[error("syntax error: {message}")]
    #[diagnostic(code(bezarrow::sheet::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("`{key}` expects {expected}, got {got}")]
    #[diagnostic(code(bezarrow::sheet::type_mismatch))]
    TypeMismatch {
        key: String,
        expected: &'static str,
        got: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("set here")]
        key_span: SourceSpan,
        #[label("this is a {got}")]
        span: SourceSpan,
    },

    #[error("invalid colour: {value}")]
    #[diagnostic(
        code(bezarrow::sheet::invalid_color),
        help("use #rgb, #rrggbb, #rrggbbaa, rgb(r, g, b), tint, or a colour name")
    )]
    InvalidColor {
        value: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a colour")]
        span: SourceSpan,
    },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while exporting a drawing
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("invalid frame: {0}")]
    #[diagnostic(
        code(bezarrow::render::invalid_bounds),
        help("frame sizes must be finite and non-negative, the center finite")
    )]
    InvalidBounds(#[from] NumericError),

    #[error("XML serialization error: {0}")]
    #[diagnostic(code(bezarrow::render::serialize))]
    Serialize(String),
}
