// src/render/pdf.rs
//! PDF backend built on `lopdf` object-graph assembly.
//!
//! Text uses the built-in Helvetica family with WinAnsi encoding, so no
//! font programs are embedded. Nothing time- or environment-dependent is
//! written, which keeps the bytes identical across runs of the same
//! laid-out document.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::error::RenderError;
use crate::fonts::{to_win_ansi, FontVariant};
use crate::layout::{DrawCommand, LaidOutDocument, Rect};
use crate::style::Color;

/// Serializes a laid-out document into a PDF byte vector.
pub struct PdfRenderer {
    title: Option<String>,
}

impl PdfRenderer {
    pub fn new() -> Self {
        PdfRenderer { title: None }
    }

    /// A renderer that stamps `title` into the document info dictionary.
    pub fn with_title(title: impl Into<String>) -> Self {
        PdfRenderer {
            title: Some(title.into()),
        }
    }

    pub fn render(&self, laid_out: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut fonts = lopdf::Dictionary::new();
        for variant in [FontVariant::Regular, FontVariant::Bold, FontVariant::Oblique] {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => variant.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(resource_name(variant), font_id);
        }
        let resources_id = document.add_object(dictionary! { "Font" => fonts });

        let mut page_ids = Vec::with_capacity(laid_out.page_count());
        for page in &laid_out.pages {
            let mut ctx = PageContext::new(laid_out.height);
            for command in &page.commands {
                ctx.draw(command);
            }
            let (content, links) = ctx.finish();
            let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));

            let mut annot_ids = Vec::new();
            for (rect, url) in links {
                let action_id = document.add_object(dictionary! {
                    "Type" => "Action",
                    "S" => "URI",
                    "URI" => Object::string_literal(url),
                });
                let rect = vec![
                    rect.x.into(),
                    (laid_out.height - (rect.y + rect.height)).into(),
                    (rect.x + rect.width).into(),
                    (laid_out.height - rect.y).into(),
                ];
                annot_ids.push(document.add_object(dictionary! {
                    "Type" => "Annot",
                    "Subtype" => "Link",
                    "Rect" => rect,
                    "Border" => vec![0.into(), 0.into(), 0.into()],
                    "A" => action_id,
                }));
            }

            let mut page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0.0.into(),
                    0.0.into(),
                    laid_out.width.into(),
                    laid_out.height.into(),
                ],
                "Contents" => content_id,
                "Resources" => resources_id,
            };
            if !annot_ids.is_empty() {
                page_dict.set(
                    "Annots",
                    annot_ids
                        .iter()
                        .map(|id| Object::Reference(*id))
                        .collect::<Vec<Object>>(),
                );
            }
            page_ids.push(document.add_object(page_dict));
        }

        let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_ids.len() as i32,
        };
        document
            .objects
            .insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        let mut info = dictionary! { "Producer" => Object::string_literal("vitae") };
        if let Some(title) = &self.title {
            info.set(
                "Title",
                Object::String(to_win_ansi(title), StringFormat::Literal),
            );
        }
        let info_id = document.add_object(info);
        document.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        document.save_to(&mut bytes)?;
        Ok(bytes)
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn resource_name(variant: FontVariant) -> &'static str {
    match variant {
        FontVariant::Regular => "F1",
        FontVariant::Bold => "F2",
        FontVariant::Oblique => "F3",
    }
}

/// Builds one page's content stream and collects its link regions.
struct PageContext {
    page_height: f32,
    content: Content,
    links: Vec<(Rect, String)>,
    state: PageRenderState,
}

/// Tracked graphics state, used to skip redundant operators.
#[derive(Default)]
struct PageRenderState {
    font: Option<(FontVariant, f32)>,
    fill_color: Option<Color>,
}

impl PageContext {
    fn new(page_height: f32) -> Self {
        PageContext {
            page_height,
            content: Content { operations: vec![] },
            links: Vec::new(),
            state: PageRenderState::default(),
        }
    }

    fn finish(self) -> (Content, Vec<(Rect, String)>) {
        (self.content, self.links)
    }

    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Text {
                x,
                y,
                text,
                variant,
                size,
                color,
            } => self.draw_text(*x, *y, text, *variant, *size, *color),
            DrawCommand::Rule {
                x,
                y,
                length,
                width,
            } => self.draw_rule(*x, *y, *length, *width),
            DrawCommand::Link { rect, url } => self.links.push((*rect, url.clone())),
        }
    }

    fn set_font(&mut self, variant: FontVariant, size: f32) {
        if self.state.font != Some((variant, size)) {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![resource_name(variant).into(), size.into()],
            ));
            self.state.font = Some((variant, size));
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.content.operations.push(Operation::new(
                "rg",
                vec![
                    (color.r as f32 / 255.0).into(),
                    (color.g as f32 / 255.0).into(),
                    (color.b as f32 / 255.0).into(),
                ],
            ));
            self.state.fill_color = Some(color);
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, variant: FontVariant, size: f32, color: Color) {
        if text.trim().is_empty() {
            return;
        }
        self.content.operations.push(Operation::new("BT", vec![]));
        self.set_font(variant, size);
        self.set_fill_color(color);
        // Layout already hands over the baseline, so the flip is direct.
        let pdf_y = self.page_height - y;
        self.content
            .operations
            .push(Operation::new("Td", vec![x.into(), pdf_y.into()]));
        self.content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        self.content.operations.push(Operation::new("ET", vec![]));
    }

    fn draw_rule(&mut self, x: f32, y: f32, length: f32, width: f32) {
        let pdf_y = self.page_height - y;
        self.content
            .operations
            .push(Operation::new("w", vec![width.into()]));
        self.content.operations.push(Operation::new(
            "RG",
            vec![0.0.into(), 0.0.into(), 0.0.into()],
        ));
        self.content
            .operations
            .push(Operation::new("m", vec![x.into(), pdf_y.into()]));
        self.content
            .operations
            .push(Operation::new("l", vec![(x + length).into(), pdf_y.into()]));
        self.content.operations.push(Operation::new("S", vec![]));
    }
}
