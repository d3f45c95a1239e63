mod chat;
mod common;
mod config;
mod error;
mod markdown;
mod site;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use tokio::runtime::Handle;
use ui::PortfolioApp;

#[derive(Parser)]
#[command(
    name = "portfolio_chat",
    version,
    about = "Personal portfolio with a simulated AI chat assistant"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Page to open on startup, e.g. /skills
    #[arg(long, value_name = "PATH")]
    route: Option<String>,
    /// Seed for reply selection, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    if let Some(route) = cli.route {
        app_config.start_path = route;
    }
    if cli.seed.is_some() {
        app_config.reply_seed = cli.seed;
    }

    log::info!(
        "Starting at {} with a {:?} reply delay",
        app_config.start_path,
        app_config.reply_delay()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_title(app_config.window_title.clone()),
        ..Default::default()
    };
    let runtime = Handle::current();
    let title = app_config.window_title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(cc, &app_config, runtime)))),
    )
}
