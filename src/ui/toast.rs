use std::time::{Duration, Instant};

use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A short message shown briefly at the top of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: text.into(),
        }
    }
}

pub struct Toasts {
    ttl: Duration,
    active: Vec<(Notice, Instant)>,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            active: Vec::new(),
        }
    }

    pub fn push(&mut self, notice: Notice, now: Instant) {
        self.active.push((notice, now + self.ttl));
    }

    pub fn prune(&mut self, now: Instant) {
        self.active.retain(|(_, expires_at)| *expires_at > now);
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.active.iter().map(|(notice, _)| notice)
    }

    /// Time until the next notice disappears.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.active
            .iter()
            .map(|(_, expires_at)| expires_at.saturating_duration_since(now))
            .min()
    }

    pub fn render(&self, ctx: &egui::Context) {
        if self.active.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::CENTER_TOP, [0.0, 16.0])
            .order(egui::Order::Tooltip)
            .interactable(false)
            .show(ctx, |ui| {
                for notice in self.notices() {
                    let (icon, color) = match notice.kind {
                        NoticeKind::Success => ("✔", egui::Color32::from_rgb(82, 196, 26)),
                        NoticeKind::Failure => ("✖", egui::Color32::from_rgb(255, 77, 79)),
                    };
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.colored_label(color, icon);
                            ui.label(&notice.text);
                        });
                    });
                    ui.add_space(6.0);
                }
            });
    }
}
