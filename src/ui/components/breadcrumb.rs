use eframe::egui;

use crate::site::Crumb;

/// Breadcrumb trail plus a location field. Returns a path to navigate to.
pub fn render(ui: &mut egui::Ui, crumbs: &[Crumb], path_input: &mut String) -> Option<String> {
    let mut target = None;

    ui.horizontal(|ui| {
        for (index, crumb) in crumbs.iter().enumerate() {
            if index > 0 {
                ui.label(egui::RichText::new("/").weak());
            }
            match crumb.href {
                Some(href) => {
                    if ui.link(crumb.label).clicked() {
                        target = Some(href.to_string());
                    }
                }
                None => {
                    ui.label(crumb.label);
                }
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let go = ui.button("Go").clicked();
            let response = ui.add(
                egui::TextEdit::singleline(path_input)
                    .hint_text("/path")
                    .desired_width(160.0),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let path = path_input.trim();
            if (go || entered) && !path.is_empty() {
                target = Some(path.to_string());
            }
        });
    });

    target
}
