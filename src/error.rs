// src/error.rs
use thiserror::Error;

/// Errors from the rendering backend.
///
/// Layout itself is total: malformed inline markup degrades to literal
/// text and oversized tokens get their own line, so nothing before the
/// backend boundary can fail.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation failed: {0}")]
    PdfLibError(String),

    #[error("unsupported export format '{0}', only 'pdf' is available")]
    UnsupportedFormat(String),

    #[error("I/O error during rendering: {0}")]
    Io(#[from] std::io::Error),
}

impl From<lopdf::Error> for RenderError {
    fn from(e: lopdf::Error) -> Self {
        RenderError::PdfLibError(e.to_string())
    }
}

/// A comprehensive error type for the whole export pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Data parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
