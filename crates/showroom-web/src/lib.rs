//! Showroom Web - Bevy-powered 3D product showcase
//!
//! A rotating car model on a dark stage, an ambient audio toggle, a timed
//! loading screen and a row of vehicle statistics. Runs in the browser via
//! WASM and natively through the `showroom` binary.

mod app;
mod audio;
mod loading;
mod ui;

pub use app::run;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging with filtering to reduce wgpu noise
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::WARN)
            .build()
    );

    // The web build has no config file; everything uses defaults
    app::run(showroom_core::ShowroomConfig::default());
}
