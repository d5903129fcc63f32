#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod behaviors;
pub mod bootstrap;
pub mod config;
pub mod dom;
pub mod logging;
pub mod paths;
pub mod storage;
pub mod timers;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(false);
    bootstrap::boot();
}
