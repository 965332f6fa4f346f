// src/layout/element.rs
//! The backend-neutral draw model layout produces.

use serde::Serialize;

use crate::fonts::FontVariant;
use crate::style::Color;

/// Axis-aligned rectangle in top-down page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A single mark on a page. For text, `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Text {
        x: f32,
        y: f32,
        text: String,
        variant: FontVariant,
        size: f32,
        color: Color,
    },
    /// Horizontal stroke of `length` starting at `(x, y)`.
    Rule {
        x: f32,
        y: f32,
        length: f32,
        width: f32,
    },
    /// Clickable region over already-drawn content.
    Link { rect: Rect, url: String },
}

/// One finished page. Command order is paint order.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub commands: Vec<DrawCommand>,
}

impl Page {
    /// Concatenated text content, in paint order.
    pub fn text_content(&self) -> String {
        let mut content = String::new();
        for command in &self.commands {
            if let DrawCommand::Text { text, .. } = command {
                if !content.is_empty() {
                    content.push(' ');
                }
                content.push_str(text);
            }
        }
        content
    }
}

/// The laid-out document a renderer consumes: fixed page dimensions plus
/// the pages in order. Serializes for layout dumps.
#[derive(Debug, Clone, Serialize)]
pub struct LaidOutDocument {
    pub width: f32,
    pub height: f32,
    pub pages: Vec<Page>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
