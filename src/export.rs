// src/export.rs
//! The crate's front door: resume data in, finished artifact out.

use std::fs;
use std::path::Path;

use log::info;

use crate::compose;
use crate::error::PipelineError;
use crate::fonts::FontMetrics;
use crate::layout::LaidOutDocument;
use crate::model::Resume;
use crate::render::{ExportFormat, PdfRenderer};
use crate::style::Theme;

/// Turns resume data into finished documents under one theme.
pub struct ResumeExporter {
    theme: Theme,
    metrics: FontMetrics,
}

impl ResumeExporter {
    pub fn new() -> Self {
        ResumeExporter {
            theme: Theme::default(),
            metrics: FontMetrics,
        }
    }

    pub fn with_theme(theme: Theme) -> Self {
        ResumeExporter {
            theme,
            metrics: FontMetrics,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Runs layout only, for inspecting positions and pagination without
    /// producing an artifact.
    pub fn lay_out(&self, resume: &Resume) -> LaidOutDocument {
        compose::compose(resume, &self.theme, &self.metrics)
    }

    /// Lays out and renders the resume into PDF bytes.
    pub fn generate_pdf(&self, resume: &Resume) -> Result<Vec<u8>, PipelineError> {
        let laid_out = self.lay_out(resume);
        let renderer = PdfRenderer::with_title(format!("{} Resume", resume.name));
        let bytes = renderer.render(&laid_out)?;
        info!(
            "rendered {} page(s), {} bytes",
            laid_out.page_count(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Renders to `path`. The file is written only after the whole
    /// document has rendered, so a failed export leaves no artifact.
    pub fn generate_pdf_file(
        &self,
        resume: &Resume,
        path: impl AsRef<Path>,
    ) -> Result<(), PipelineError> {
        let bytes = self.generate_pdf(resume)?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for ResumeExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Conventional artifact name: the applicant's name words joined by
/// underscores, punctuation dropped, then a `_Resume` suffix and the
/// format's extension.
pub fn suggested_filename(resume: &Resume, format: ExportFormat) -> String {
    let cleaned: Vec<String> = resume
        .name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect();
    if cleaned.is_empty() {
        return format!("Resume.{}", format.extension());
    }
    format!("{}_Resume.{}", cleaned.join("_"), format.extension())
}
