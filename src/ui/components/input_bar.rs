use eframe::egui;

const SEND_BUTTON_WIDTH: f32 = 40.0;

/// Multi-line chat input. Enter sends, Shift+Enter inserts a newline.
/// Returns true when the user asked to send non-blank text.
pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> bool {
    let mut send = false;
    let input_id = ui.make_persistent_id("chat_input");

    // Take Enter before the text edit turns it into a newline.
    if ui.memory(|memory| memory.has_focus(input_id)) {
        send = ui.input_mut(|input| {
            !input.modifiers.shift && input.consume_key(egui::Modifiers::NONE, egui::Key::Enter)
        });
    }

    ui.horizontal(|ui| {
        let text_width =
            (ui.available_width() - SEND_BUTTON_WIDTH - ui.spacing().item_spacing.x).max(120.0);
        ui.add(
            egui::TextEdit::multiline(input_text)
                .id(input_id)
                .desired_rows(1)
                .desired_width(text_width)
                .hint_text(
                    "Type a message... (Markdown supported, Enter to send, Shift+Enter for a new line)",
                ),
        );

        let can_send = !input_text.trim().is_empty();
        let button = egui::Button::new(egui::RichText::new("➤").color(egui::Color32::WHITE))
            .fill(super::ACCENT)
            .min_size(egui::vec2(SEND_BUTTON_WIDTH, 32.0));
        if ui.add_enabled(can_send, button).clicked() {
            send = true;
        }
    });

    send && !input_text.trim().is_empty()
}
