// src/lib.rs
//! Resume typesetting: measured rich text, justified columns and
//! deterministic A4 PDF export.
//!
//! The pipeline is deliberately linear. [`model::Resume`] deserializes
//! from JSON, [`compose`] lays it out into absolute draw commands, and
//! [`render`] serializes those commands into an artifact. The
//! [`export::ResumeExporter`] facade runs all three.

pub mod compose;
pub mod error;
pub mod export;
pub mod fonts;
pub mod layout;
pub mod model;
pub mod render;
pub mod style;

pub use error::{PipelineError, RenderError};
pub use export::{suggested_filename, ResumeExporter};
pub use fonts::{FontMetrics, FontVariant};
pub use layout::{DrawCommand, LaidOutDocument, Page};
pub use model::{
    BulletPoint, CertificationEntry, Contact, EducationEntry, ExperienceEntry, Resume, SkillGroup,
};
pub use render::{ExportFormat, PdfRenderer};
pub use style::{Color, Margins, PageSize, Theme};
