#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use coin_tracker::{Cli, run_app};

#[cfg(not(target_arch = "wasm32"))]
use {clap::Parser, eframe::NativeOptions, std::panic};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, prelude::*};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
pub fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let _ = fern::Dispatch::new()
        .level(global_level)
        .level_for("coin_tracker", my_code_level)
        .chain(fern::Output::call(|record| {
            let msg = format!("[{}] {}", record.target(), record.args());
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&msg.into()),
                log::Level::Warn => web_sys::console::warn_1(&msg.into()),
                log::Level::Info => web_sys::console::info_1(&msg.into()),
                log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&msg.into()),
            }
        }))
        .apply();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    init_log();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document on the global window")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // The route comes from the URL hash, the rest uses defaults.
    let args = Cli::default();

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(run_app(cc, args)?))),
        )
        .await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("coin_tracker"), my_code_level)
        .init();

    let args = Cli::parse();
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([520.0, 860.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Coin Tracker"),
        ..Default::default()
    };

    eframe::run_native(
        "Coin Tracker",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)?))),
    )
}
