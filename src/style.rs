// src/style.rs
//! Page geometry and the layout theme.
//!
//! `Theme::default()` carries the tuned constants of the standard resume
//! look; every value can be overridden from a JSON theme file.

use serde::{Deserialize, Serialize};

/// Supported page dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom {
        width: f32,
        height: f32,
    },
}

impl PageSize {
    /// Width and height in PostScript points.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Page margins in points. Defaults to half-inch sides with a one-inch
/// top and bottom.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            top: 72.0,
            right: 36.0,
            bottom: 72.0,
            left: 36.0,
        }
    }
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
}

/// Every tunable the layout consults.
///
/// Lengths are in points. The defaults reproduce the standard output: A4
/// portrait, half-inch side margins, one-inch top and bottom margins, a
/// 14 pt body baseline grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Theme {
    pub page_size: PageSize,
    pub margins: Margins,

    pub font_size_title: f32,
    pub font_size_header: f32,
    pub font_size_body: f32,
    pub font_size_meta: f32,

    /// Baseline-to-baseline distance for wrapped body text.
    pub line_height: f32,

    /// Vertical gap after a section's last content.
    pub section_gap: f32,
    /// Gap after each dated or listed entry.
    pub item_gap: f32,
    /// Gap after each bullet point.
    pub bullet_gap: f32,
    /// Advance between the two header rows of an entry.
    pub entry_row_advance: f32,

    /// Advance after the title line.
    pub title_gap: f32,
    /// Advance after the contact line.
    pub contact_gap: f32,
    /// Advance after the link row.
    pub link_row_gap: f32,

    /// Gap between a section label and its underline rule.
    pub header_label_gap: f32,
    /// Advance after the underline rule.
    pub header_rule_gap: f32,
    /// Stroke width of the underline rule.
    pub rule_width: f32,

    /// Bullet glyph offset from the left margin.
    pub bullet_glyph_inset: f32,
    /// Bullet text offset from the left margin.
    pub bullet_text_inset: f32,
    /// Offset of the skills value column from the left margin.
    pub skills_value_column: f32,
    /// Advance after each skills row.
    pub skills_row_gap: f32,

    /// Space a section header reserves so it is never orphaned.
    pub section_min_height: f32,
    /// Space an entry's header rows reserve.
    pub entry_min_height: f32,
    pub education_min_height: f32,
    pub certification_min_height: f32,
    pub skills_min_height: f32,

    pub text_color: Color,
    pub link_color: Color,

    /// Largest per-line slack that still gets distributed across word
    /// gaps; slacker lines render ragged instead of stretched.
    pub justify_slack_limit: f32,

    /// Substrings that force a page break before any bullet containing
    /// one. Empty by default; the explicit per-bullet flag is preferred.
    pub forced_break_markers: Vec<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            page_size: PageSize::A4,
            margins: Margins::default(),
            font_size_title: 24.0,
            font_size_header: 11.0,
            font_size_body: 10.0,
            font_size_meta: 10.0,
            line_height: 14.0,
            section_gap: 18.0,
            item_gap: 12.0,
            bullet_gap: 5.0,
            entry_row_advance: 13.0,
            title_gap: 20.0,
            contact_gap: 14.0,
            link_row_gap: 30.0,
            header_label_gap: 8.0,
            header_rule_gap: 12.0,
            rule_width: 1.5,
            bullet_glyph_inset: 6.0,
            bullet_text_inset: 14.0,
            skills_value_column: 155.0,
            skills_row_gap: 4.0,
            section_min_height: 60.0,
            entry_min_height: 30.0,
            education_min_height: 40.0,
            certification_min_height: 35.0,
            skills_min_height: 18.0,
            text_color: Color::BLACK,
            link_color: Color {
                r: 0x25,
                g: 0x63,
                b: 0xeb,
            },
            justify_slack_limit: 100.0,
            forced_break_markers: Vec::new(),
        }
    }
}

impl Theme {
    pub fn page_width(&self) -> f32 {
        self.page_size.dimensions_pt().0
    }

    pub fn page_height(&self) -> f32 {
        self.page_size.dimensions_pt().1
    }

    /// Width of the text column between the side margins.
    pub fn content_width(&self) -> f32 {
        self.page_width() - self.margins.left - self.margins.right
    }

    /// Lowest y a block may reach before pagination must intervene.
    pub fn content_bottom(&self) -> f32 {
        self.page_height() - self.margins.bottom
    }
}
