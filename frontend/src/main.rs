//! Entry point for the WASM application

use leptos::*;
use linreg_frontend::App;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Linreg - Starting Leptos App");

    mount_to_body(|| view! { <App/> })
}
