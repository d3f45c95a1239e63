//! Paints [`markdown::Block`] trees into chat bubbles.

use std::collections::{HashMap, HashSet};
use std::slice;
use std::sync::Arc;

use eframe::egui;
use egui::text::{LayoutJob, TextFormat};

use crate::common::ChatMessage;
use crate::markdown::highlight::{Token, highlight};
use crate::markdown::{self, Block, CodeBlock, Inline};

const CODE_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(30, 30, 30);
const CODE_LABEL: egui::Color32 = egui::Color32::from_rgb(139, 148, 158);
const PLAIN_CODE_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(245, 245, 245);
const INLINE_CODE: egui::Color32 = egui::Color32::from_rgb(214, 51, 132);
const QUOTE_BORDER: egui::Color32 = egui::Color32::from_rgb(221, 221, 221);
const QUOTE_TEXT: egui::Color32 = egui::Color32::from_rgb(102, 102, 102);

/// What the user asked for while the markdown was on screen.
#[derive(Default)]
pub struct MarkdownActions {
    pub copy: Option<String>,
}

/// Parsed blocks of one message plus the tokens of each highlighted code
/// block, in the order the painter meets them.
#[derive(Debug)]
pub struct Document {
    blocks: Vec<Block>,
    highlights: Vec<Vec<Token>>,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        let blocks = markdown::render(text);
        let mut highlights = Vec::new();
        collect_highlights(&blocks, &mut highlights);
        Self { blocks, highlights }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

fn collect_highlights(blocks: &[Block], highlights: &mut Vec<Vec<Token>>) {
    for block in blocks {
        match block {
            Block::Code(code) if code.has_copy_action() => {
                let language = code.language.as_deref().unwrap_or_default();
                highlights.push(highlight(&code.code, language));
            }
            Block::List { items, .. } => {
                for item in items {
                    collect_highlights(item, highlights);
                }
            }
            Block::BlockQuote(inner) => collect_highlights(inner, highlights),
            _ => {}
        }
    }
}

/// Parsed messages keyed by message id. Messages never change once created,
/// so an entry stays valid until its message leaves the conversation.
#[derive(Default)]
pub struct MarkdownCache {
    documents: HashMap<String, Arc<Document>>,
}

impl MarkdownCache {
    pub fn document(&mut self, message: &ChatMessage) -> Arc<Document> {
        if let Some(document) = self.documents.get(&message.id) {
            return Arc::clone(document);
        }
        let document = Arc::new(Document::parse(&message.text));
        self.documents
            .insert(message.id.clone(), Arc::clone(&document));
        document
    }

    /// Forget messages no longer in `live`, e.g. after a clear.
    pub fn retain(&mut self, live: &[ChatMessage]) {
        if self.documents.len() <= live.len() {
            return;
        }
        let ids: HashSet<&str> = live.iter().map(|message| message.id.as_str()).collect();
        self.documents.retain(|id, _| ids.contains(id.as_str()));
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }
}

pub fn render(ui: &mut egui::Ui, document: &Document, actions: &mut MarkdownActions) {
    let mut painter = Painter {
        highlights: document.highlights.iter(),
        actions,
    };
    painter.blocks(ui, &document.blocks);
}

fn heading_size(level: u8) -> f32 {
    match level {
        1 => 16.0,
        2 => 15.0,
        _ => 14.0,
    }
}

fn token_format(token: &Token) -> TextFormat {
    let [r, g, b] = token.style.color;
    TextFormat {
        font_id: egui::FontId::monospace(12.0),
        color: egui::Color32::from_rgb(r, g, b),
        italics: token.style.italic,
        ..Default::default()
    }
}

struct Painter<'a, 'b> {
    highlights: slice::Iter<'a, Vec<Token>>,
    actions: &'b mut MarkdownActions,
}

impl Painter<'_, '_> {
    fn blocks(&mut self, ui: &mut egui::Ui, blocks: &[Block]) {
        for block in blocks {
            self.block(ui, block);
        }
    }

    fn block(&mut self, ui: &mut egui::Ui, block: &Block) {
        match block {
            Block::Paragraph(content) => {
                render_inlines(ui, content, None, false);
                ui.add_space(4.0);
            }
            Block::Heading { level, content } => {
                ui.add_space(6.0);
                render_inlines(ui, content, Some(heading_size(*level)), true);
                ui.add_space(2.0);
            }
            Block::List { start, items } => {
                for (index, item) in items.iter().enumerate() {
                    let marker = match start {
                        Some(first) => format!("{}.", first + index as u64),
                        None => "•".to_string(),
                    };
                    ui.horizontal_top(|ui| {
                        ui.add_space(8.0);
                        ui.label(marker);
                        ui.vertical(|ui| self.blocks(ui, item));
                    });
                }
            }
            Block::BlockQuote(blocks) => {
                let response = egui::Frame::new()
                    .inner_margin(egui::Margin {
                        left: 10,
                        right: 0,
                        top: 2,
                        bottom: 2,
                    })
                    .show(ui, |ui| {
                        ui.visuals_mut().override_text_color = Some(QUOTE_TEXT);
                        self.blocks(ui, blocks);
                    })
                    .response;
                ui.painter().vline(
                    response.rect.left() + 1.5,
                    response.rect.y_range(),
                    egui::Stroke::new(3.0, QUOTE_BORDER),
                );
            }
            Block::Code(code) => match code.language.as_deref() {
                Some(language) if code.has_copy_action() => {
                    self.highlighted_code(ui, language, code)
                }
                _ => plain_code(ui, code),
            },
            Block::Table { header, rows } => {
                egui::Grid::new(ui.next_auto_id())
                    .striped(true)
                    .show(ui, |ui| {
                        for cell in header {
                            render_inlines(ui, cell, None, true);
                        }
                        ui.end_row();
                        for row in rows {
                            for cell in row {
                                render_inlines(ui, cell, None, false);
                            }
                            ui.end_row();
                        }
                    });
                ui.add_space(4.0);
            }
            Block::Rule => {
                ui.separator();
            }
        }
    }

    fn highlighted_code(&mut self, ui: &mut egui::Ui, language: &str, code: &CodeBlock) {
        let fallback;
        let tokens: &[Token] = match self.highlights.next() {
            Some(tokens) => tokens,
            None => {
                fallback = highlight(&code.code, language);
                &fallback
            }
        };

        egui::Frame::new()
            .fill(CODE_BACKGROUND)
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(language.to_uppercase())
                            .size(11.0)
                            .color(CODE_LABEL),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let copy = egui::Button::new(
                            egui::RichText::new("📋").size(11.0).color(CODE_LABEL),
                        )
                        .frame(false);
                        if ui.add(copy).on_hover_text("Copy code").clicked() {
                            self.actions.copy = Some(code.code.clone());
                        }
                    });
                });

                let mut job = LayoutJob::default();
                for token in tokens {
                    job.append(&token.text, 0.0, token_format(token));
                }
                ui.add(egui::Label::new(job).wrap());
            });
        ui.add_space(4.0);
    }
}

fn inline_text(inline: &Inline, size: Option<f32>, strong: bool) -> egui::RichText {
    let mut text = egui::RichText::new(&inline.text);
    if let Some(size) = size {
        text = text.size(size);
    }
    if strong || inline.style.strong {
        text = text.strong();
    }
    if inline.style.emphasis {
        text = text.italics();
    }
    if inline.style.strikethrough {
        text = text.strikethrough();
    }
    if inline.style.code {
        text = text.code().color(INLINE_CODE);
    }
    text
}

fn render_inlines(ui: &mut egui::Ui, content: &[Inline], size: Option<f32>, strong: bool) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for inline in content {
            let text = inline_text(inline, size, strong);
            match &inline.link {
                Some(url) => {
                    ui.hyperlink_to(text, url);
                }
                None => {
                    ui.label(text);
                }
            }
        }
    });
}

fn plain_code(ui: &mut egui::Ui, code: &CodeBlock) {
    egui::Frame::new()
        .fill(PLAIN_CODE_BACKGROUND)
        .corner_radius(egui::CornerRadius::same(3))
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(&code.code)
                    .monospace()
                    .size(13.0)
                    .color(INLINE_CODE),
            );
        });
    ui.add_space(4.0);
}
