//! ScanView - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that previews an image locally, sends it to a
//! prediction service and shows the returned class and confidence.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (backend status)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadView                                             │
//! │      ├── picker + preview + Remove / Upload buttons         │
//! │      ├── ErrorBanner (after a failed upload)                │
//! │      └── ResultCard (after a successful upload)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - API and error types
//! - [`state`] - Upload view state and workflow
//! - [`components`] - UI components
//! - [`services`] - Prediction service communication and file preview

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    PredictionResult, ErrorBody, HealthStatus, BackendState,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{UploadBlocked, UploadState, UploadStore};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <UploadView/>
        </div>

        <Footer/>
    }
}
