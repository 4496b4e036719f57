//! Desktop viewer for the options scatter
//!
//! Run with: cargo run --features native -- [--data trades.json]
//! The data file can also be set with OPTIONS_SCATTER_DATA.

use std::path::PathBuf;

use eframe::egui;
use options_scatter::app::ScatterApp;
use options_scatter::core::{demo_trades, load_trades_file, TradeRecord};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const DATA_ENV: &str = "OPTIONS_SCATTER_DATA";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,options_scatter=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let trades = load_trades(data_path())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Options scatter")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Options scatter",
        options,
        Box::new(move |cc| Ok(Box::new(ScatterApp::new(cc, &trades)))),
    )?;
    Ok(())
}

/// `--data <path>` wins over the environment variable
fn data_path() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--data" {
            return args.next().map(PathBuf::from);
        }
    }
    std::env::var_os(DATA_ENV).map(PathBuf::from)
}

fn load_trades(path: Option<PathBuf>) -> Result<Vec<TradeRecord>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        match load_trades_file(&path) {
            Ok(trades) => return Ok(trades),
            Err(e) => warn!(error = %e, "Falling back to demo trades"),
        }
    }
    let trades = demo_trades()?;
    info!(count = trades.len(), "Using demo trades");
    Ok(trades)
}
