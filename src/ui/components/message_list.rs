use chrono::Local;
use eframe::egui;

use crate::common::ChatMessage;

use super::markdown_view::{self, MarkdownActions, MarkdownCache};

const BUBBLE_RADIUS: u8 = 12;

fn timestamp(ui: &mut egui::Ui, message: &ChatMessage) {
    let local = message.created_at.with_timezone(&Local);
    ui.label(
        egui::RichText::new(local.format("%H:%M").to_string())
            .size(11.0)
            .weak(),
    );
}

fn avatar(ui: &mut egui::Ui, symbol: &str, fill: egui::Color32) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(16))
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(symbol).size(16.0));
        });
}

/// Conversation bubbles, oldest first. Visitor text is shown as typed;
/// assistant text goes through the markdown renderer.
pub fn render(
    ui: &mut egui::Ui,
    messages: &[ChatMessage],
    scroll_to_bottom: bool,
    max_height: f32,
    cache: &mut MarkdownCache,
) -> MarkdownActions {
    let mut actions = MarkdownActions::default();

    egui::ScrollArea::vertical()
        .id_salt("chat_messages")
        .auto_shrink([false, false])
        .max_height(max_height)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 12.0;
            let bubble_width = ui.available_width() * 0.7;

            for message in messages {
                if message.is_from_visitor() {
                    visitor_bubble(ui, message, bubble_width);
                } else {
                    assistant_bubble(ui, message, bubble_width, cache, &mut actions);
                }
            }

            if scroll_to_bottom {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });

    actions
}

fn visitor_bubble(ui: &mut egui::Ui, message: &ChatMessage, max_width: f32) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
        avatar(ui, "👤", super::ACCENT);
        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            egui::Frame::new()
                .fill(super::ACCENT)
                .corner_radius(egui::CornerRadius::same(BUBBLE_RADIUS))
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.set_max_width(max_width);
                    ui.label(
                        egui::RichText::new(&message.text)
                            .size(14.0)
                            .color(egui::Color32::WHITE),
                    );
                });
            timestamp(ui, message);
        });
    });
}

fn assistant_bubble(
    ui: &mut egui::Ui,
    message: &ChatMessage,
    max_width: f32,
    cache: &mut MarkdownCache,
    actions: &mut MarkdownActions,
) {
    let document = cache.document(message);
    ui.horizontal_top(|ui| {
        let symbol = message.author.avatar.as_deref().unwrap_or("👤");
        avatar(ui, symbol, egui::Color32::from_gray(240));
        ui.vertical(|ui| {
            egui::Frame::new()
                .fill(egui::Color32::WHITE)
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(240)))
                .corner_radius(egui::CornerRadius::same(BUBBLE_RADIUS))
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.set_max_width(max_width);
                    ui.visuals_mut().override_text_color = Some(egui::Color32::BLACK);
                    markdown_view::render(ui, &document, actions);
                });
            timestamp(ui, message);
        });
    });
}
