// src/layout/line.rs
//! Greedy line breaking and word-spacing justification.

use log::warn;

use crate::layout::token::Token;

/// A run of tokens committed to one baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub tokens: Vec<Token>,
    /// Horizontal offset consumed before the first token. Only the first
    /// line of a flow can carry one.
    pub indent: f32,
    pub is_last: bool,
    /// Natural width of the line, indent included.
    pub width: f32,
}

impl Line {
    pub fn space_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_space).count()
    }
}

/// Packs tokens into lines no wider than `max_width`.
///
/// A token that would overflow closes the current line; trailing space
/// tokens are stripped before the line is committed and a space token is
/// never carried to the start of the next line. A word wider than the
/// whole column gets a line of its own rather than being split.
pub fn break_lines(tokens: Vec<Token>, max_width: f32, first_indent: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut indent = first_indent;
    let mut width = first_indent;

    for token in tokens {
        if width + token.width > max_width {
            strip_trailing_spaces(&mut current, &mut width);
            if !current.is_empty() {
                lines.push(Line {
                    tokens: std::mem::take(&mut current),
                    indent,
                    is_last: false,
                    width,
                });
            } else if token.width > max_width {
                warn!(
                    "token {:?} is wider than the {:.1}pt column",
                    token.text, max_width
                );
            }
            indent = 0.0;
            width = 0.0;
            if token.is_space {
                continue;
            }
        }
        width += token.width;
        current.push(token);
    }

    strip_trailing_spaces(&mut current, &mut width);
    if !current.is_empty() {
        lines.push(Line {
            tokens: current,
            indent,
            is_last: true,
            width,
        });
    }

    lines
}

fn strip_trailing_spaces(tokens: &mut Vec<Token>, width: &mut f32) {
    while tokens.last().map_or(false, |t| t.is_space) {
        if let Some(removed) = tokens.pop() {
            *width -= removed.width;
        }
    }
}

/// Extra width added to every space gap so the line fills `max_width`.
///
/// Returns zero for the last line of a flow, for lines without gaps, and
/// when the slack is negative or at least `slack_limit` (a nearly empty
/// line stretched to the margin reads worse than a ragged one).
pub fn space_adjustment(line: &Line, max_width: f32, slack_limit: f32) -> f32 {
    if line.is_last {
        return 0.0;
    }
    let gaps = line.space_count();
    if gaps == 0 {
        return 0.0;
    }
    let slack = max_width - line.width;
    if slack <= 0.0 || slack >= slack_limit {
        return 0.0;
    }
    slack / gaps as f32
}
