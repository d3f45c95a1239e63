use std::time::Instant;

use eframe::egui;

use crate::site::Route;
use crate::site::pages::{self, PROFILE};
use crate::ui::state::AppState;

#[derive(Default)]
pub struct PageActions {
    pub open_chat: bool,
}

fn card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).strong().size(15.0));
            ui.separator();
            add_contents(ui);
        });
}

/// Content of the current page, faded in after navigation.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, now: Instant) -> PageActions {
    let mut actions = PageActions::default();
    let transition = state.transition;

    ui.add_space(transition.offset(now));
    ui.multiply_opacity(transition.opacity(now));

    match state.route() {
        Some(Route::Home) => home(ui, &mut state.intro_expanded),
        Some(Route::About) => about(ui),
        Some(Route::Skills) => skills(ui),
        Some(Route::Contact) => contact(ui, &mut actions),
        None => {
            ui.label(pages::UNKNOWN_PAGE);
        }
    }

    actions
}

fn home(ui: &mut egui::Ui, intro_expanded: &mut bool) {
    ui.columns(2, |columns| {
        columns[0].vertical_centered(|ui| {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(24))
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.set_min_width(300.0_f32.min(ui.available_width()));
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new("👤").size(120.0));
                        ui.add_space(12.0);
                        ui.label(egui::RichText::new(PROFILE.name).strong().size(18.0));
                    });
                });
        });

        let ui = &mut columns[1];
        ui.label(egui::RichText::new(PROFILE.greeting).strong().size(64.0));
        ui.label(egui::RichText::new(PROFILE.headline).strong().size(32.0));
        ui.add_space(12.0);

        if *intro_expanded {
            ui.label(egui::RichText::new(PROFILE.intro).size(20.0));
        } else {
            let (preview, truncated) = PROFILE.intro_preview(pages::INTRO_PREVIEW_CHARS);
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(preview).size(20.0));
                if truncated && ui.link("more...").clicked() {
                    *intro_expanded = true;
                }
            });
        }
    });
}

fn about(ui: &mut egui::Ui) {
    ui.heading(pages::ABOUT_TITLE);
    ui.label(pages::ABOUT_LEAD);
    ui.add_space(20.0);

    ui.columns(pages::ABOUT_CARDS.len(), |columns| {
        for (column, info) in columns.iter_mut().zip(pages::ABOUT_CARDS.iter()) {
            card(column, info.title, |ui| {
                ui.label(info.body);
            });
        }
    });
}

fn skills(ui: &mut egui::Ui) {
    ui.label(egui::RichText::new(pages::SKILLS_TITLE).strong().size(28.0));
    ui.label(
        egui::RichText::new(pages::SKILLS_LEAD)
            .size(16.0)
            .color(egui::Color32::from_gray(85)),
    );

    for row in pages::SKILL_GROUPS.chunks(3) {
        ui.add_space(20.0);
        ui.columns(3, |columns| {
            for (column, group) in columns.iter_mut().zip(row) {
                card(column, group.title, |ui| {
                    for item in group.items {
                        ui.label(format!("• {item}"));
                    }
                });
            }
        });
    }
}

fn contact(ui: &mut egui::Ui, actions: &mut PageActions) {
    ui.heading(pages::CONTACT_TITLE);
    ui.label(pages::CONTACT_LEAD);

    for section in &pages::CONTACT_SECTIONS {
        ui.add_space(16.0);
        ui.label(egui::RichText::new(section.heading).strong().size(16.0));
        for line in section.lines {
            ui.label(line);
        }
    }

    ui.add_space(16.0);
    let label = egui::RichText::new(pages::CONTACT_ACTION)
        .size(16.0)
        .color(egui::Color32::WHITE);
    let button = egui::Button::new(label)
        .fill(super::ACCENT)
        .min_size(egui::vec2(140.0, 40.0));
    if ui.add(button).clicked() {
        log::debug!("Contact button opened the chat widget");
        actions.open_chat = true;
    }
}
