//! Skyfare Desktop — Dioxus-powered flight search.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod form;
mod results;

use app::App;
use skyfare_core::{ApiConfig, FlightApi};

/// Pre-runtime storage — built before Dioxus launches, consumed on first render.
pub static INITIAL_API: Mutex<Option<FlightApi>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("skyfare_core=info".parse().unwrap())
                .add_directive("skyfare_desktop=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Read the API key before the UI comes up — store in Mutex, NOT in a signal
    let api = FlightApi::new(ApiConfig::from_env());
    *INITIAL_API.lock().unwrap() = Some(api);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Skyfare")
                            .with_inner_size(LogicalSize::new(1280.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(720.0, 520.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
