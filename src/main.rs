#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use canvas_annotate::{AnnotateApp, AnnotatorConfig};

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // Optional first argument: path to a JSON config file
    let config = match std::env::args().nth(1) {
        Some(path) => match AnnotatorConfig::load(std::path::Path::new(&path)) {
            Ok(config) => Some(config),
            Err(err) => {
                log::error!("{}", err);
                return Ok(());
            }
        },
        None => None,
    };

    let size = config
        .as_ref()
        .map(|config| [config.surface_width, config.surface_height])
        .unwrap_or([800.0, 600.0]);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([size[0] + 16.0, size[1] + 16.0])
            .with_min_inner_size([200.0, 150.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Canvas Annotate",
        native_options,
        Box::new(|cc| Ok(Box::new(AnnotateApp::new(cc, config)))),
    )
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            log::error!("No document available");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas element 'the_canvas_id' is missing or not a canvas");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(AnnotateApp::new(cc, None)))),
            )
            .await;

        if let Err(err) = start_result {
            log::error!("Failed to start eframe: {:?}", err);
        }
    });
}
