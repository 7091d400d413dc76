//! Linreg - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget that uploads a dataset file to a linear-regression
//! service and shows the returned plot, slope, intercept and r².
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App                                                         │
//! │  └── FileUploader (file picker, UploadState signal)         │
//! │      └── FitResultView (when a fit is held)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Service URL defaults
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use components::*;
pub use services::*;

pub use linreg_core::{ApplyPolicy, FitError, FitResult, RequestStatus, UploadState};

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Linreg - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="container">
            <FileUploader base_url=BACKEND_URL/>
        </main>
    }
}
