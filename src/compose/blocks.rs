// src/compose/blocks.rs
//! Block renderers. Each function draws one kind of resume block at the
//! cursor and leaves the cursor below it.
//!
//! Vertical rhythm follows a fixed scale from [`Theme`]: rows inside an
//! entry advance by `entry_row_advance`, bullets by `bullet_gap`,
//! entries by `item_gap` and sections by `section_gap`.

use crate::fonts::{FontMetrics, FontVariant};
use crate::layout::{break_lines, space_adjustment, tokenize, DrawCommand, LayoutCursor, Rect};
use crate::model::{BulletPoint, CertificationEntry, EducationEntry, ExperienceEntry, SkillGroup};
use crate::style::{Color, Theme};

/// Link hotspots sit above the baseline so they cover the glyph box.
const LINK_RECT_RISE: f32 = 10.0;
const LINK_RECT_HEIGHT: f32 = 12.0;
const DEGREE_LOCATION_GAP: f32 = 6.0;

fn push_text(
    cursor: &mut LayoutCursor,
    x: f32,
    y: f32,
    text: impl Into<String>,
    variant: FontVariant,
    size: f32,
    color: Color,
) {
    let text = text.into();
    if text.trim().is_empty() {
        return;
    }
    cursor.push(DrawCommand::Text {
        x,
        y,
        text,
        variant,
        size,
        color,
    });
}

fn right_aligned_x(theme: &Theme, width: f32) -> f32 {
    theme.page_width() - theme.margins.right - width
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Flows marked-up text from `x`, breaking at `max_width` and
/// justifying every line but the last. Words are positioned one by one
/// so the stretch lands in the gaps, never inside a word.
pub fn flow_rich_text(
    cursor: &mut LayoutCursor,
    theme: &Theme,
    metrics: &FontMetrics,
    text: &str,
    x: f32,
    size: f32,
    max_width: f32,
    first_indent: f32,
) {
    let tokens = tokenize(text, size, metrics);
    for line in break_lines(tokens, max_width, first_indent) {
        let adjustment = space_adjustment(&line, max_width, theme.justify_slack_limit);
        let mut pen_x = x + line.indent;
        let baseline = cursor.y();
        for token in &line.tokens {
            if token.is_space {
                pen_x += token.width + adjustment;
            } else {
                cursor.push(DrawCommand::Text {
                    x: pen_x,
                    y: baseline,
                    text: token.text.clone(),
                    variant: token.variant(),
                    size,
                    color: theme.text_color,
                });
                pen_x += token.width;
            }
        }
        cursor.advance(theme.line_height);
    }
}

/// The applicant's name, uppercased, centered and bold.
pub fn title(cursor: &mut LayoutCursor, theme: &Theme, metrics: &FontMetrics, name: &str) {
    let display = name.to_uppercase();
    let width = metrics.measure(&display, FontVariant::Bold, theme.font_size_title);
    let x = (theme.page_width() - width) / 2.0;
    let y = cursor.y();
    push_text(
        cursor,
        x,
        y,
        display,
        FontVariant::Bold,
        theme.font_size_title,
        theme.text_color,
    );
    cursor.advance(theme.title_gap);
}

/// Centered contact line. The row height is consumed even when every
/// part is absent so the blocks below keep their position.
pub fn contact_line(cursor: &mut LayoutCursor, theme: &Theme, metrics: &FontMetrics, parts: &[&str]) {
    if !parts.is_empty() {
        let text = parts.join("   ");
        let width = metrics.measure(&text, FontVariant::Regular, theme.font_size_meta);
        let x = (theme.page_width() - width) / 2.0;
        let y = cursor.y();
        push_text(
            cursor,
            x,
            y,
            text,
            FontVariant::Regular,
            theme.font_size_meta,
            theme.text_color,
        );
    }
    cursor.advance(theme.contact_gap);
}

/// Centered link labels, each paired with a clickable region. `links`
/// holds `(label, url)` pairs; the row height is consumed regardless.
pub fn link_row(
    cursor: &mut LayoutCursor,
    theme: &Theme,
    metrics: &FontMetrics,
    links: &[(String, String)],
) {
    if !links.is_empty() {
        let gap = metrics.measure("   ", FontVariant::Regular, theme.font_size_meta);
        let widths: Vec<f32> = links
            .iter()
            .map(|(label, _)| metrics.measure(label, FontVariant::Regular, theme.font_size_meta))
            .collect();
        let total: f32 = widths.iter().sum::<f32>() + gap * (links.len() - 1) as f32;
        let mut pen_x = (theme.page_width() - total) / 2.0;
        let baseline = cursor.y();
        for ((label, url), width) in links.iter().zip(&widths) {
            cursor.push(DrawCommand::Text {
                x: pen_x,
                y: baseline,
                text: label.clone(),
                variant: FontVariant::Regular,
                size: theme.font_size_meta,
                color: theme.link_color,
            });
            cursor.push(DrawCommand::Link {
                rect: Rect {
                    x: pen_x,
                    y: baseline - LINK_RECT_RISE,
                    width: *width,
                    height: LINK_RECT_HEIGHT,
                },
                url: url.clone(),
            });
            pen_x += width + gap;
        }
    }
    cursor.advance(theme.link_row_gap);
}

/// Uppercase section label over a full-width rule.
pub fn section_header(cursor: &mut LayoutCursor, theme: &Theme, label: &str) {
    cursor.ensure_space(theme.section_min_height);
    let y = cursor.y();
    push_text(
        cursor,
        theme.margins.left,
        y,
        label,
        FontVariant::Bold,
        theme.font_size_header,
        theme.text_color,
    );
    cursor.advance(theme.header_label_gap);
    let y = cursor.y();
    cursor.push(DrawCommand::Rule {
        x: theme.margins.left,
        y,
        length: theme.content_width(),
        width: theme.rule_width,
    });
    cursor.advance(theme.header_rule_gap);
}

/// Two header rows (role and date, then company and location) followed
/// by the entry's bullet list.
pub fn dated_entry(
    cursor: &mut LayoutCursor,
    theme: &Theme,
    metrics: &FontMetrics,
    entry: &ExperienceEntry,
) {
    cursor.ensure_space(theme.entry_min_height);
    let y = cursor.y();
    push_text(
        cursor,
        theme.margins.left,
        y,
        entry.role.as_str(),
        FontVariant::Bold,
        theme.font_size_header,
        theme.text_color,
    );
    let date_width = metrics.measure(&entry.date, FontVariant::Bold, theme.font_size_meta);
    push_text(
        cursor,
        right_aligned_x(theme, date_width),
        y,
        entry.date.as_str(),
        FontVariant::Bold,
        theme.font_size_meta,
        theme.text_color,
    );
    cursor.advance(theme.entry_row_advance);
    let y = cursor.y();
    push_text(
        cursor,
        theme.margins.left,
        y,
        entry.company.as_str(),
        FontVariant::Oblique,
        theme.font_size_meta,
        theme.text_color,
    );
    let location_width = metrics.measure(&entry.location, FontVariant::Oblique, theme.font_size_meta);
    push_text(
        cursor,
        right_aligned_x(theme, location_width),
        y,
        entry.location.as_str(),
        FontVariant::Oblique,
        theme.font_size_meta,
        theme.text_color,
    );
    cursor.advance(theme.entry_row_advance);
    bullet_list(cursor, theme, metrics, &entry.points);
    cursor.advance(theme.item_gap);
}

/// Bulleted rich-text points. A point flagged in the data or matching a
/// configured marker starts on a fresh page; otherwise a point only
/// breaks when fewer than two lines would fit below it.
pub fn bullet_list(
    cursor: &mut LayoutCursor,
    theme: &Theme,
    metrics: &FontMetrics,
    points: &[BulletPoint],
) {
    for point in points {
        if point.page_break_before || matches_forced_marker(theme, &point.text) {
            cursor.force_page_break();
        }
        cursor.ensure_space(theme.line_height * 2.0);
        let y = cursor.y();
        push_text(
            cursor,
            theme.margins.left + theme.bullet_glyph_inset,
            y,
            "•",
            FontVariant::Regular,
            theme.font_size_body,
            theme.text_color,
        );
        flow_rich_text(
            cursor,
            theme,
            metrics,
            &point.text,
            theme.margins.left + theme.bullet_text_inset,
            theme.font_size_body,
            theme.content_width() - theme.bullet_text_inset,
            0.0,
        );
        cursor.advance(theme.bullet_gap);
    }
}

fn matches_forced_marker(theme: &Theme, text: &str) -> bool {
    theme
        .forced_break_markers
        .iter()
        .any(|marker| text.contains(marker.as_str()))
}

/// School and date, degree with an optional `| location` suffix, then
/// optional detail lines.
pub fn education_entry(
    cursor: &mut LayoutCursor,
    theme: &Theme,
    metrics: &FontMetrics,
    entry: &EducationEntry,
) {
    cursor.ensure_space(theme.education_min_height);
    let y = cursor.y();
    push_text(
        cursor,
        theme.margins.left,
        y,
        entry.school.as_str(),
        FontVariant::Bold,
        theme.font_size_header,
        theme.text_color,
    );
    let date_width = metrics.measure(&entry.date, FontVariant::Bold, theme.font_size_meta);
    push_text(
        cursor,
        right_aligned_x(theme, date_width),
        y,
        entry.date.as_str(),
        FontVariant::Bold,
        theme.font_size_meta,
        theme.text_color,
    );
    cursor.advance(theme.entry_row_advance);
    let y = cursor.y();
    push_text(
        cursor,
        theme.margins.left,
        y,
        entry.degree.as_str(),
        FontVariant::Oblique,
        theme.font_size_meta,
        theme.text_color,
    );
    if let Some(location) = non_empty(&entry.location) {
        let degree_width = metrics.measure(&entry.degree, FontVariant::Oblique, theme.font_size_meta);
        push_text(
            cursor,
            theme.margins.left + degree_width + DEGREE_LOCATION_GAP,
            y,
            format!("| {location}"),
            FontVariant::Oblique,
            theme.font_size_meta,
            theme.text_color,
        );
    }
    cursor.advance(theme.entry_row_advance);
    if let Some(details) = non_empty(&entry.details) {
        flow_rich_text(
            cursor,
            theme,
            metrics,
            details,
            theme.margins.left,
            theme.font_size_body,
            theme.content_width(),
            0.0,
        );
    }
    cursor.advance(theme.item_gap);
}

/// Institution and date on one row, the certification name below, then
/// optional detail lines. The date keeps the header size.
pub fn certification_entry(
    cursor: &mut LayoutCursor,
    theme: &Theme,
    metrics: &FontMetrics,
    entry: &CertificationEntry,
) {
    cursor.ensure_space(theme.certification_min_height);
    let y = cursor.y();
    push_text(
        cursor,
        theme.margins.left,
        y,
        entry.institution.as_str(),
        FontVariant::Bold,
        theme.font_size_header,
        theme.text_color,
    );
    let date_width = metrics.measure(&entry.date, FontVariant::Bold, theme.font_size_header);
    push_text(
        cursor,
        right_aligned_x(theme, date_width),
        y,
        entry.date.as_str(),
        FontVariant::Bold,
        theme.font_size_header,
        theme.text_color,
    );
    cursor.advance(theme.entry_row_advance);
    let y = cursor.y();
    push_text(
        cursor,
        theme.margins.left,
        y,
        entry.name.as_str(),
        FontVariant::Oblique,
        theme.font_size_meta,
        theme.text_color,
    );
    cursor.advance(theme.entry_row_advance);
    if let Some(details) = non_empty(&entry.details) {
        flow_rich_text(
            cursor,
            theme,
            metrics,
            details,
            theme.margins.left,
            theme.font_size_body,
            theme.content_width(),
            0.0,
        );
    }
    cursor.advance(theme.item_gap);
}

/// A bold `Category:` label with the group's skills flowed in a column
/// to its right. The label renders even when the value is empty.
pub fn skill_line(
    cursor: &mut LayoutCursor,
    theme: &Theme,
    metrics: &FontMetrics,
    group: &SkillGroup,
) {
    cursor.ensure_space(theme.skills_min_height);
    let y = cursor.y();
    push_text(
        cursor,
        theme.margins.left,
        y,
        format!("{}:", group.category),
        FontVariant::Bold,
        theme.font_size_body,
        theme.text_color,
    );
    let value_x = theme.margins.left + theme.skills_value_column;
    let row_top = cursor.y();
    flow_rich_text(
        cursor,
        theme,
        metrics,
        &group.items,
        value_x,
        theme.font_size_body,
        theme.page_width() - value_x - theme.margins.right,
        0.0,
    );
    if cursor.y() == row_top {
        // An empty value still occupies its row.
        cursor.advance(theme.line_height);
    }
    cursor.advance(theme.skills_row_gap);
}
