pub mod app;
pub mod clipboard;
pub mod components;
pub mod state;
pub mod toast;

pub use app::PortfolioApp;
