mod app;
mod config;
mod dork;
mod error;
mod input;
mod io;
mod model;
mod state;
mod style;
mod view;

use app::FindMeThis;
use config::Config;
use eframe::egui;
use env_logger::{Builder, Env, Target};
use log::{info, warn};

fn setup_logging() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });
    builder.target(Target::Stderr);

    if let Err(e) = builder.try_init() {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

fn main() -> eframe::Result<()> {
    setup_logging();

    if let Err(e) = Config::create_default() {
        warn!("Could not write default config: {}", e);
    }
    let config = Config::load();
    info!(
        "Starting with engine {} and {} theme",
        config.search.default_engine,
        config.theme.mode
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([360.0, 420.0])
            .with_title("Find Me This"),
        ..Default::default()
    };

    eframe::run_native(
        "Find Me This",
        options,
        Box::new(move |cc| Ok(Box::new(FindMeThis::new(cc, &config)))),
    )
}
