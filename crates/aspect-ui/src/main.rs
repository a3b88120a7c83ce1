//! aspect-ui: frameless window for switching the primary display resolution
//!
//! GPUI front end over `aspect-core`.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use aspect_core::{AspectConfig, CoreStore, init_logging};
use gpui::{
    App, AppContext, Application, Bounds, WindowBounds, WindowDecorations, WindowOptions, px,
    size,
};
use tracing::{error, info, warn};

mod native_window;
mod state;
mod theme;
mod views;

use state::AppState;
use views::MainView;

fn main() {
    // Loaded before the subscriber exists; the outcome is logged below.
    let loaded = AspectConfig::load_with_source();
    let quiet = loaded
        .as_ref()
        .map(|(config, _)| config.logging.quiet)
        .unwrap_or(false);

    init_logging(quiet);

    let config = match loaded {
        Ok((config, source)) => {
            info!(
                event = "ui.config.loaded",
                source = %source,
                presets = config.presets.len(),
                quiet = config.logging.quiet
            );
            config
        }
        Err(e) => {
            warn!(
                event = "ui.config.load_failed",
                error = %e,
                "Using default configuration"
            );
            AspectConfig::default()
        }
    };

    let backend = match aspect_core::display::primary_backend() {
        Ok(backend) => backend,
        Err(e) => {
            error!(event = "ui.startup.backend_unavailable", error = %e);
            std::process::exit(1);
        }
    };

    let store = match CoreStore::new(backend, &config) {
        Ok(store) => store,
        Err(e) => {
            error!(event = "ui.startup.native_query_failed", error = %e);
            std::process::exit(1);
        }
    };
    info!(event = "ui.startup.completed", native = %store.native());

    let chrome = match aspect_core::window::platform_chrome() {
        Ok(chrome) => Some(chrome),
        Err(e) => {
            warn!(event = "ui.startup.chrome_unavailable", error = %e);
            None
        }
    };

    let window_config = config.window.clone();
    let app_state = AppState::new(store);

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(
            None,
            size(px(theme::WINDOW_WIDTH), px(theme::WINDOW_HEIGHT)),
            cx,
        );

        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: None,
                window_decorations: Some(WindowDecorations::Client),
                is_movable: true,
                is_resizable: false,
                focus: true,
                show: true,
                ..Default::default()
            },
            move |window, cx| {
                cx.new(|cx| MainView::new(app_state, chrome, &window_config, window, cx))
            },
        );

        if let Err(e) = opened {
            error!(event = "ui.window.open_failed", error = %e);
            cx.quit();
            return;
        }

        cx.on_window_closed(|cx| cx.quit()).detach();
    });
}
