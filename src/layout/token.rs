// src/layout/token.rs
//! Inline markup scanning and token measurement.

use itertools::Itertools;

use crate::fonts::{FontMetrics, FontVariant};

const BOLD_MARKER: &str = "**";

/// One measured run of text, either a word or a whitespace run.
///
/// Whitespace runs keep their full text so a deliberate multi-space gap
/// survives with its measured width intact.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub bold: bool,
    pub width: f32,
    pub is_space: bool,
}

impl Token {
    pub fn variant(&self) -> FontVariant {
        if self.bold {
            FontVariant::Bold
        } else {
            FontVariant::Regular
        }
    }
}

/// Splits `text` on `**` bold markers and breaks each segment into word
/// and whitespace tokens measured at `size`.
///
/// Markers toggle between regular and bold. An opening marker with no
/// closing partner is not markup; the rest of the input, marker
/// included, stays literal in the current face.
pub fn tokenize(text: &str, size: f32, metrics: &FontMetrics) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut bold = false;
    let mut rest = text;

    loop {
        match rest.find(BOLD_MARKER) {
            Some(at) if !bold && !rest[at + BOLD_MARKER.len()..].contains(BOLD_MARKER) => {
                push_segment(rest, bold, size, metrics, &mut tokens);
                break;
            }
            Some(at) => {
                push_segment(&rest[..at], bold, size, metrics, &mut tokens);
                bold = !bold;
                rest = &rest[at + BOLD_MARKER.len()..];
            }
            None => {
                push_segment(rest, bold, size, metrics, &mut tokens);
                break;
            }
        }
    }

    tokens
}

fn push_segment(
    segment: &str,
    bold: bool,
    size: f32,
    metrics: &FontMetrics,
    tokens: &mut Vec<Token>,
) {
    let variant = if bold {
        FontVariant::Bold
    } else {
        FontVariant::Regular
    };
    for (is_space, run) in &segment.chars().chunk_by(|c| c.is_whitespace()) {
        let text: String = run.collect();
        let width = metrics.measure(&text, variant, size);
        tokens.push(Token {
            text,
            bold,
            width,
            is_space,
        });
    }
}
