//! Gomoku GUI
//!
//! Play five in a row with pair captures against the computer.

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;

use gomoku::ui::GomokuApp;
use gomoku::Stone;

mod cli;

use crate::cli::Config;

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config.log_level);

    let human: Stone = config.human_color.into();
    let search = config.search_config();
    info!(
        depth = search.depth,
        branching = search.branching_limit,
        seed = ?search.seed,
        "starting"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([640.0, 520.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, human, search)))),
    )
    .map_err(|e| anyhow!("window failed: {e}"))
}
