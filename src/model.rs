// src/model.rs
//! The resume document model.
//!
//! Every field defaults to empty so partial documents deserialize
//! cleanly; sections with no content are simply skipped at layout time.
//! Inline `**bold**` markup is allowed anywhere rich text flows: the
//! summary, bullet points, detail lines and skill values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub name: String,
    pub contact: Contact,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub research: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certification: Vec<CertificationEntry>,
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub location: String,
    pub date: String,
    pub points: Vec<BulletPoint>,
}

/// One bullet line. In JSON a point is either a bare string or an
/// object carrying a `pageBreakBefore` flag that pushes the point to
/// the top of a fresh page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BulletPointRepr", into = "BulletPointRepr")]
pub struct BulletPoint {
    pub text: String,
    pub page_break_before: bool,
}

impl BulletPoint {
    pub fn new(text: impl Into<String>) -> Self {
        BulletPoint {
            text: text.into(),
            page_break_before: false,
        }
    }

    pub fn with_page_break(text: impl Into<String>) -> Self {
        BulletPoint {
            text: text.into(),
            page_break_before: true,
        }
    }
}

impl From<&str> for BulletPoint {
    fn from(text: &str) -> Self {
        BulletPoint::new(text)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum BulletPointRepr {
    Plain(String),
    Flagged {
        text: String,
        #[serde(default, rename = "pageBreakBefore")]
        page_break_before: bool,
    },
}

impl From<BulletPointRepr> for BulletPoint {
    fn from(repr: BulletPointRepr) -> Self {
        match repr {
            BulletPointRepr::Plain(text) => BulletPoint::new(text),
            BulletPointRepr::Flagged {
                text,
                page_break_before,
            } => BulletPoint {
                text,
                page_break_before,
            },
        }
    }
}

impl From<BulletPoint> for BulletPointRepr {
    fn from(point: BulletPoint) -> Self {
        if point.page_break_before {
            BulletPointRepr::Flagged {
                text: point.text,
                page_break_before: true,
            }
        } else {
            BulletPointRepr::Plain(point.text)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub name: String,
    pub institution: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A labelled skills row. `items` is free text and may carry bold
/// markup; it is flowed as one rich-text paragraph next to the label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub category: String,
    pub items: String,
}
