//! E-consultation Comment Analyzer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a CSV file of consultation
//! comments to the analysis service and browsing the sentiment, keyword
//! and word cloud results it returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Dashboard (holds the current AnalysisResult)                │
//! │  ├── Hero (title)                                            │
//! │  ├── UploadForm (file, comment column, submit)               │
//! │  └── ResultsSection (when a result is present)               │
//! │      ├── SentimentChart + sentiment list                     │
//! │      ├── statistics, keywords, data quality                  │
//! │      └── word cloud image                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Wire types (AnalysisResult, ...) and errors
//! - [`render`] - Projection of a result into display values
//! - [`components`] - UI components
//! - [`services`] - Analysis endpoint communication and form state

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod render;
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
    AnalysisResult, DataQualityMetrics, KeywordCount, OrderedMap,
    // Errors
    AppError, AppResult,
};

// Rendering
pub use render::{project, ResultsView};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Comment Analyzer - Starting Leptos App (endpoint {})", ANALYZE_URL);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Dashboard/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    // Current result, replaced wholesale by each successful analysis
    let (analysis, set_analysis) = create_signal(None::<AnalysisResult>);

    let on_complete = move |result: AnalysisResult| set_analysis.set(Some(result));

    view! {
        <div class="dashboard-container">
            <Hero/>

            <div class="App-main-content">
                <UploadForm on_complete=on_complete/>

                {move || {
                    analysis
                        .with(|result| project(result.as_ref()))
                        .map(|results| view! { <ResultsSection results=results/> })
                }}
            </div>
        </div>
    }
}
