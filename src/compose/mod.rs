// src/compose/mod.rs
//! Assembles a resume into pages.
//!
//! [`compose`] walks the document top to bottom: headline block first,
//! then each non-empty section in a fixed order. All pagination happens
//! here through the cursor; the result is ready for any renderer.

pub mod blocks;

use log::debug;

use crate::fonts::FontMetrics;
use crate::layout::{LaidOutDocument, LayoutCursor};
use crate::model::{Contact, Resume};
use crate::style::Theme;

/// Lays out the whole resume. Empty sections are skipped entirely, so
/// they leave neither a header nor a gap behind.
pub fn compose(resume: &Resume, theme: &Theme, metrics: &FontMetrics) -> LaidOutDocument {
    let mut cursor = LayoutCursor::new(theme);

    blocks::title(&mut cursor, theme, metrics, &resume.name);
    blocks::contact_line(&mut cursor, theme, metrics, &contact_parts(&resume.contact));
    blocks::link_row(&mut cursor, theme, metrics, &link_parts(&resume.contact));

    if !resume.summary.is_empty() {
        blocks::section_header(&mut cursor, theme, "SUMMARY");
        blocks::flow_rich_text(
            &mut cursor,
            theme,
            metrics,
            &resume.summary,
            theme.margins.left,
            theme.font_size_body,
            theme.content_width(),
            0.0,
        );
        cursor.advance(theme.section_gap);
    }

    if !resume.experience.is_empty() {
        blocks::section_header(&mut cursor, theme, "PROFESSIONAL EXPERIENCE");
        for entry in &resume.experience {
            blocks::dated_entry(&mut cursor, theme, metrics, entry);
        }
        cursor.advance(theme.section_gap - theme.item_gap);
    }

    if !resume.research.is_empty() {
        blocks::section_header(&mut cursor, theme, "ACADEMIC RESEARCH & DEVELOPMENT");
        for entry in &resume.research {
            blocks::dated_entry(&mut cursor, theme, metrics, entry);
        }
        cursor.advance(theme.section_gap - theme.item_gap);
    }

    if !resume.education.is_empty() {
        blocks::section_header(&mut cursor, theme, "EDUCATION");
        for entry in &resume.education {
            blocks::education_entry(&mut cursor, theme, metrics, entry);
        }
        cursor.advance(theme.section_gap - theme.item_gap);
    }

    if !resume.certification.is_empty() {
        blocks::section_header(&mut cursor, theme, "CERTIFICATION");
        for entry in &resume.certification {
            blocks::certification_entry(&mut cursor, theme, metrics, entry);
        }
        cursor.advance(theme.section_gap - theme.item_gap);
    }

    if !resume.skills.is_empty() {
        blocks::section_header(&mut cursor, theme, "TECHNICAL SKILLS");
        for group in &resume.skills {
            blocks::skill_line(&mut cursor, theme, metrics, group);
        }
    }

    let document = cursor.finish();
    debug!(
        "laid out {} page(s) for '{}'",
        document.page_count(),
        resume.name
    );
    document
}

fn contact_parts(contact: &Contact) -> Vec<&str> {
    [&contact.location, &contact.phone, &contact.email]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .collect()
}

fn link_parts(contact: &Contact) -> Vec<(String, String)> {
    [&contact.github, &contact.linkedin]
        .into_iter()
        .filter_map(|value| value.as_deref())
        .filter(|value| !value.is_empty())
        .map(|value| (display_label(value), normalize_url(value)))
        .collect()
}

/// The scheme-less form of a profile URL, used as the visible label.
pub fn display_label(value: &str) -> String {
    value
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .to_string()
}

/// The clickable form of a profile URL. Bare domains get an `https://`
/// prefix; values that already carry a scheme pass through untouched.
pub fn normalize_url(value: &str) -> String {
    if value.starts_with("http") {
        value.to_string()
    } else {
        format!("https://{value}")
    }
}
