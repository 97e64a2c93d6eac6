//! Hello GUI - Main Entry Point
//!
//! A minimal native greeting app: one window, one static view.

use hello_gui::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Hello GUI...");

    // Run the GPUI application
    run_app();
}
