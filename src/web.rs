//! Browser entry point
//!
//! Mounts the app on `<canvas id="canvas">`. A page may provide its own
//! trades as a JSON string in `window.__options_scatter_data`; otherwise the
//! bundled demo dataset is shown.

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::ScatterApp;
use crate::core::{demo_trades, load_trades_json, TradeRecord};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();
    let trades = page_trades();

    wasm_bindgen_futures::spawn_local(async move {
        let canvas = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
            .get_element_by_id("canvas")
            .expect("no canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("not a canvas element");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(ScatterApp::new(cc, &trades)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}

fn page_trades() -> Vec<TradeRecord> {
    let page_json = js_sys::eval("window.__options_scatter_data")
        .ok()
        .and_then(|v| v.as_string());

    if let Some(json) = page_json {
        match load_trades_json(&json) {
            Ok(trades) => return trades,
            Err(e) => warn!(error = %e, "Page trades rejected, using demo data"),
        }
    }

    demo_trades().unwrap_or_else(|e| {
        warn!(error = %e, "Demo trades unreadable");
        Vec::new()
    })
}
