use eframe::egui;

use crate::site::{self, Route};

/// Header menu. Returns the route the user clicked, if any.
pub fn render(ui: &mut egui::Ui, location: &str) -> Option<Route> {
    let selected = site::selected_nav(location);
    let mut clicked = None;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Tien-Wei Hsu").strong().size(16.0));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left layout, so walk the menu backwards.
            for route in Route::ALL.into_iter().rev() {
                let text = format!("{} {}", route.icon(), route.label());
                if ui.selectable_label(selected == Some(route), text).clicked() {
                    clicked = Some(route);
                }
            }
        });
    });

    clicked
}
