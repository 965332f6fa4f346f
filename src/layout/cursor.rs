// src/layout/cursor.rs
//! Pagination state for one export pass.

use log::debug;

use crate::layout::element::{DrawCommand, LaidOutDocument, Page};
use crate::style::Theme;

/// The vertical cursor plus the pages laid out so far.
///
/// Exactly one cursor exists per export. Blocks pre-check their height
/// with [`ensure_space`](Self::ensure_space), push draw commands at the
/// current position and then [`advance`](Self::advance); page creation
/// only ever moves forward and the cursor resets to the top margin each
/// time a page opens.
pub struct LayoutCursor {
    pages: Vec<Page>,
    y: f32,
    page_width: f32,
    page_height: f32,
    top_margin: f32,
    bottom_margin: f32,
}

impl LayoutCursor {
    pub fn new(theme: &Theme) -> Self {
        let mut cursor = LayoutCursor {
            pages: Vec::new(),
            y: theme.margins.top,
            page_width: theme.page_width(),
            page_height: theme.page_height(),
            top_margin: theme.margins.top,
            bottom_margin: theme.margins.bottom,
        };
        cursor.open_page();
        cursor
    }

    fn open_page(&mut self) {
        let number = self.pages.len() + 1;
        debug!("starting page {}", number);
        self.pages.push(Page {
            number,
            commands: Vec::new(),
        });
        self.y = self.top_margin;
    }

    /// Baseline position for the next mark, in top-down coordinates.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Zero-based index of the page currently receiving commands.
    pub fn page_index(&self) -> usize {
        self.pages.len() - 1
    }

    /// Starts a new page if `height` does not fit above the bottom
    /// margin. Returns true when a page break happened.
    pub fn ensure_space(&mut self, height: f32) -> bool {
        if self.y + height > self.page_height - self.bottom_margin {
            self.open_page();
            true
        } else {
            false
        }
    }

    /// Moves the cursor down without consulting the page boundary.
    pub fn advance(&mut self, height: f32) {
        self.y += height;
        let bottom = self.page_height - self.bottom_margin;
        if self.y > bottom {
            debug!(
                "cursor is {:.1}pt past the bottom margin on page {}",
                self.y - bottom,
                self.pages.len()
            );
        }
    }

    /// Starts a new page unless the current one is still untouched at the
    /// top margin, which keeps repeated forced breaks idempotent.
    pub fn force_page_break(&mut self) {
        let pristine = self
            .pages
            .last()
            .map_or(false, |page| page.commands.is_empty())
            && self.y <= self.top_margin;
        if !pristine {
            self.open_page();
        }
    }

    /// Appends a command to the current page.
    pub fn push(&mut self, command: DrawCommand) {
        if let Some(page) = self.pages.last_mut() {
            page.commands.push(command);
        }
    }

    pub fn finish(self) -> LaidOutDocument {
        LaidOutDocument {
            width: self.page_width,
            height: self.page_height,
            pages: self.pages,
        }
    }
}
