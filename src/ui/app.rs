use std::time::Instant;

use eframe::egui;
use tokio::runtime::Handle;

use crate::chat::{CannedResponses, ChatController, RandomSelector, ReplyScheduler};
use crate::config::AppConfig;
use crate::site::pages;

use super::clipboard::{self, SystemClipboard};
use super::components::markdown_view::MarkdownCache;
use super::components::{breadcrumb, chat_widget, nav_bar, page_view};
use super::state::AppState;
use super::toast::Toasts;

pub struct PortfolioApp {
    state: AppState,
    chat: ChatController,
    clipboard: SystemClipboard,
    toasts: Toasts,
    markdown: MarkdownCache,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig, runtime: Handle) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let responses = CannedResponses::or_default(config.canned_responses.clone());
        let selector = Box::new(RandomSelector::new(config.reply_seed));
        let scheduler = ReplyScheduler::new(runtime, config.reply_delay());
        let mut chat = ChatController::new(responses, selector, scheduler)
            .with_cancel_on_clear(config.cancel_replies_on_clear);
        chat.attach_repaint(cc.egui_ctx.clone());

        Self {
            state: AppState::new(&config.start_path),
            chat,
            clipboard: SystemClipboard::open(),
            toasts: Toasts::new(config.notification_ttl()),
            markdown: MarkdownCache::default(),
        }
    }

    fn copy_code(&mut self, code: &str) {
        let notice = clipboard::copy_code(&mut self.clipboard, code);
        self.toasts.push(notice, Instant::now());
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.chat.poll();
        self.markdown.retain(self.chat.messages());
        self.toasts.prune(now);

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            if let Some(route) = nav_bar::render(ui, &self.state.location) {
                self.state.navigate(route.path());
            }
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(pages::FOOTER).weak());
            });
        });

        let mut open_chat = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            let crumbs = self.state.breadcrumbs();
            if let Some(path) = breadcrumb::render(ui, &crumbs, &mut self.state.path_input) {
                self.state.navigate(&path);
            }
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    open_chat = page_view::render(ui, &mut self.state, now).open_chat;
                });
        });
        if open_chat {
            self.chat.open();
        }

        let actions = chat_widget::render(ctx, &mut self.chat, &mut self.markdown);
        if let Some(code) = actions.copy {
            self.copy_code(&code);
        }

        self.toasts.render(ctx);

        if self.state.transition.is_running(now) {
            ctx.request_repaint();
        } else if let Some(remaining) = self.toasts.next_expiry(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}
