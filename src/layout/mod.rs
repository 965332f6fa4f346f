// src/layout/mod.rs
//! Text measurement turned into positioned draw commands.
//!
//! Layout is a pure pass over the resume data. It produces a
//! [`LaidOutDocument`] of absolute positions and never touches a PDF
//! library, so the same output can be rendered, inspected or serialized.

pub mod cursor;
pub mod element;
pub mod line;
pub mod token;

pub use cursor::LayoutCursor;
pub use element::{DrawCommand, LaidOutDocument, Page, Rect};
pub use line::{break_lines, space_adjustment, Line};
pub use token::{tokenize, Token};
