mod app;
mod components;
mod config;
mod dialog;
mod state;
mod team;

use config::{AppConfig, load_config};
use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use state::Services;
use std::sync::Arc;
use team::RestTeamResource;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const WINDOW_WIDTH: f64 = 640.0;
const WINDOW_HEIGHT: f64 = 520.0;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("teamdesk=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to load config, using defaults: {}", e);
            AppConfig::new()
        }
    };

    let teams = match RestTeamResource::new(&config.api) {
        Ok(resource) => resource,
        Err(e) => {
            error!("Cannot create team API client: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting teamdesk (server={}, on_delete_failure={:?})",
        config.api.base_url, config.dialog.on_delete_failure
    );

    let services = Services {
        teams: Arc::new(teams),
        failure_policy: config.dialog.on_delete_failure,
        api_url: config.api.base_url.clone(),
    };

    let window_builder = WindowBuilder::new()
        .with_title("Teamdesk")
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::new()
                .with_menu(None)
                .with_window(window_builder),
        )
        .with_context(services)
        .launch(app::App);
}
