//! WebGPU client for the Pong pages
//!
//! `start_endless` runs the single-screen endless game; `start_match` wires the
//! match page (difficulty, player name, timer, history). Both expect the page
//! to provide a `#pong` canvas and the scoreboard elements.

#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod camera;
mod input;
mod mesh;
mod renderer;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod clock;
#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    console_error_panic_hook::set_once();
    // Already installed when both entry points are called on one page
    let _ = console_log::init_with_level(log::Level::Info);
}

#[cfg(target_arch = "wasm32")]
fn launch(mode: game_core::GameMode) -> js_sys::Promise {
    init_logging();
    wasm_bindgen_futures::future_to_promise(async move {
        match app::launch(mode).await {
            Ok(()) => Ok(JsValue::UNDEFINED),
            Err(e) => {
                log::error!("Failed to start {:?} game: {e}", mode);
                Err(JsValue::from_str(&e))
            }
        }
    })
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start_endless() -> js_sys::Promise {
    launch(game_core::GameMode::Endless)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start_match() -> js_sys::Promise {
    launch(game_core::GameMode::Match)
}
