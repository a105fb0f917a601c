//! PaperCheck - Frontend Rust/Leptos Application
//!
//! A WebAssembly site for staging exam papers, simulating their checking
//! and browsing the grading result.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  context: Toaster, AppConfig, Rc<SampleGrading>              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar (links, theme, mobile menu)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /         Landing                                      │
//! │  ├── /upload   UploadPage (Dropzone, FileList, Progress)    │
//! │  ├── /results  ResultsPage                                  │
//! │  ├── /signup   SignupPage                                   │
//! │  └── *         NotFound                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer, ToastStack                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`components`] - UI components (Navbar, Dropzone, Toaster, etc.)
//! - [`pages`] - Routed pages
//! - [`services`] - Browser bindings (files, previews, report download)

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use papercheck::site::{HOME_PATH, RESULTS_PATH, SIGNUP_PATH, UPLOAD_PATH};
use papercheck::{AppConfig, SampleGrading};
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod pages;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Components
pub use components::*;

// Pages
pub use pages::*;

// Services
pub use services::*;

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

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Toaster::new());
    provide_context(AppConfig::default());
    provide_context(Rc::new(SampleGrading::new()));

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Navbar/>
            <main>
                <Routes>
                    <Route path=HOME_PATH view=Landing/>
                    <Route path=UPLOAD_PATH view=UploadPage/>
                    <Route path=RESULTS_PATH view=ResultsPage/>
                    <Route path=SIGNUP_PATH view=SignupPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
        <ToastStack/>
    }
}
