// src/render/mod.rs
//! Output backends for a laid-out document.

use std::str::FromStr;

use crate::error::RenderError;

pub mod pdf;

pub use pdf::PdfRenderer;

/// Output formats the exporter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Pdf,
}

impl ExportFormat {
    /// File extension for the format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = RenderError;

    /// Rejects unknown formats up front so no layout work is spent on a
    /// document that cannot be written.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(RenderError::UnsupportedFormat(other.to_string())),
        }
    }
}
