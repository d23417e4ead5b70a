//! docchat — WASM entry point.
//!
//! Composition root: initializes logging, finds the host canvas, and
//! starts the eframe runner with the assembled application.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Called from index.html once the module is instantiated
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("docchat WASM starting...");

    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id("docchat_canvas")
        .expect("No canvas element with id 'docchat_canvas'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(app::DocChatApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
