pub mod breadcrumb;
pub mod chat_widget;
pub mod input_bar;
pub mod markdown_view;
pub mod message_list;
pub mod nav_bar;
pub mod page_view;

use eframe::egui::Color32;

/// Primary accent shared by buttons and the visitor's bubbles.
pub const ACCENT: Color32 = Color32::from_rgb(22, 119, 255);
