//! Workout Assessment Web App (Leptos + WASM)

mod api;
mod app;
mod components;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    gloo::console::log!(format!(
        "workout assessment client; service at {}",
        api::client_config().endpoint
    ));
    leptos::mount::mount_to_body(app::App);
}
