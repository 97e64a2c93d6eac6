//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};
use gpui_component::{Root, Theme};
use tracing::error;

use crate::assets::Assets;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::states::{AppState, save_app_state};
use crate::views::GreetingView;

actions!(hello_gui, [Quit]);

/// Run the Hello GUI application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Restore the persisted window state; a broken config file must not
        // keep the app from starting.
        let state = AppState::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load window state, using defaults");
            AppState::default()
        });

        Theme::sync_system_appearance(None, cx);
        if let Some(mode) = state.theme() {
            Theme::change(mode, None, cx);
        }

        // Create main window
        let bounds = state.bounds().copied().unwrap_or_else(|| {
            Bounds::centered(
                None,
                gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Hello")),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |window, cx| {
            // Persist window placement when the window goes away
            window.on_window_should_close(cx, {
                let persisted = state.clone();
                move |window, _cx| {
                    let mut next = persisted.clone();
                    if let WindowBounds::Windowed(bounds) = window.window_bounds() {
                        next.set_bounds(bounds);
                    }
                    if let Err(e) = save_app_state(&next) {
                        error!(error = %e, "Failed to save window state");
                    }
                    true
                }
            });

            let view = cx.new(|cx| GreetingView::new(window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        })
        .expect("failed to open the main window");

        cx.activate(true);
    });
}
