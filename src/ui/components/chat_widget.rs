use eframe::egui;

use crate::chat::ChatController;

use super::markdown_view::{MarkdownActions, MarkdownCache};
use super::{input_bar, message_list};

const WIDGET_SIZE: egui::Vec2 = egui::vec2(500.0, 700.0);
const SCREEN_MARGIN: f32 = 24.0;
const HEADER_HEIGHT: f32 = 44.0;
const INPUT_HEIGHT: f32 = 64.0;

/// Floating chat: a launcher button when closed, a docked window when open.
pub fn render(
    ctx: &egui::Context,
    chat: &mut ChatController,
    cache: &mut MarkdownCache,
) -> MarkdownActions {
    let offset = [-SCREEN_MARGIN, -SCREEN_MARGIN];

    if !chat.is_open() {
        egui::Area::new(egui::Id::new("chat_launcher"))
            .anchor(egui::Align2::RIGHT_BOTTOM, offset)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let launcher =
                    egui::Button::new(egui::RichText::new("💬").size(26.0).color(egui::Color32::WHITE))
                        .fill(super::ACCENT)
                        .corner_radius(egui::CornerRadius::same(30))
                        .min_size(egui::vec2(60.0, 60.0));
                if ui.add(launcher).on_hover_text("Chat with me").clicked() {
                    chat.open();
                }
            });
        return MarkdownActions::default();
    }

    let screen = ctx.screen_rect();
    let size = egui::vec2(
        WIDGET_SIZE.x.min(screen.width() - 2.0 * SCREEN_MARGIN),
        WIDGET_SIZE.y.min(screen.height() - 2.0 * SCREEN_MARGIN),
    )
    .max(egui::vec2(240.0, 240.0));

    let mut actions = MarkdownActions::default();
    egui::Window::new("chat_widget")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, offset)
        .fixed_size(size)
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(egui::Color32::from_gray(250))
                .inner_margin(egui::Margin::ZERO),
        )
        .show(ctx, |ui| {
            header(ui, chat);

            let scroll = chat.take_scroll_request();
            let conversation = chat.conversation();
            let list_height = (ui.available_height() - INPUT_HEIGHT).max(120.0);
            egui::Frame::new()
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    actions =
                        message_list::render(ui, &conversation, scroll, list_height, cache);
                });

            ui.separator();
            egui::Frame::new()
                .fill(egui::Color32::WHITE)
                .inner_margin(egui::Margin::symmetric(16, 12))
                .show(ui, |ui| {
                    if input_bar::render(ui, chat.input_mut()) {
                        chat.submit_input();
                    }
                });
        });

    actions
}

fn header(ui: &mut egui::Ui, chat: &mut ChatController) {
    egui::Frame::new()
        .fill(super::ACCENT)
        .inner_margin(egui::Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_height(HEADER_HEIGHT - 24.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("💬 AI Tien-Wei Hsu")
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close = egui::Button::new(egui::RichText::new("✖").color(egui::Color32::WHITE))
                        .frame(false);
                    if ui.add(close).clicked() {
                        chat.close();
                    }
                    let clear = egui::Button::new(egui::RichText::new("🗑").color(egui::Color32::WHITE))
                        .frame(false);
                    if ui.add(clear).on_hover_text("Clear conversation").clicked() {
                        chat.clear();
                    }
                });
            });
        });
}
