pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use vitae::{Resume, ResumeExporter, Theme};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Export a resume with the default theme
pub fn export_resume(resume: &Resume) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    export_resume_with_theme(resume, Theme::default())
}

/// Export a resume with a custom theme
pub fn export_resume_with_theme(
    resume: &Resume,
    theme: Theme,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = ResumeExporter::with_theme(theme).generate_pdf(resume)?;
    GeneratedPdf::from_bytes(bytes)
}
