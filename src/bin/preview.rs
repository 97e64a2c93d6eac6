//! Preview Harness
//!
//! Authoring-time renderer for the greeting view: opens a bare window with
//! one preview instance and nothing else. No window state is loaded or
//! saved here; the shipped app lives in the main binary.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px,
};
use gpui_component::{Root, Theme};

use hello_gui::assets::Assets;
use hello_gui::constants::{PREVIEW_WINDOW_HEIGHT, PREVIEW_WINDOW_WIDTH};
use hello_gui::views::GreetingView;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);
        Theme::sync_system_appearance(None, cx);

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(
            None,
            gpui::size(px(PREVIEW_WINDOW_WIDTH), px(PREVIEW_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Greeting Preview")),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |window, cx| {
            let view = GreetingView::preview(window, cx);
            cx.new(|cx| Root::new(view, window, cx))
        })
        .expect("failed to open the preview window");

        cx.activate(true);
    });
}
