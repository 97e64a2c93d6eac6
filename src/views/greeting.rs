//! Greeting View
//!
//! The single static view of the application: a globe glyph above a fixed
//! greeting, stacked vertically and centered in the window. The view takes
//! no inputs, holds no state, and renders the same tree every time.

use gpui::{App, Context, Entity, Window, prelude::*};
use gpui_component::{ActiveTheme, Icon, Sizable, label::Label, v_flex};

use crate::assets::AppIconName;

/// The greeting shown by the view
pub const GREETING: &str = "Hello, world!";

/// Static greeting view: one icon node and one text node, in that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreetingView;

impl GreetingView {
    /// Create the view
    ///
    /// Takes no configuration; every instance renders the same tree.
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// One instance of the view for an authoring-time preview renderer
    pub fn preview(window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(window, cx))
    }
}

impl Render for GreetingView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .gap_2()
            .bg(cx.theme().background)
            .child(
                Icon::from(AppIconName::Globe)
                    .large()
                    .text_color(cx.theme().primary),
            )
            .child(Label::new(GREETING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_text_is_fixed() {
        assert_eq!(GREETING, "Hello, world!");
    }

    #[test]
    fn globe_icon_path() {
        assert_eq!(AppIconName::Globe.path().as_ref(), "icons/globe.svg");
    }

    #[test]
    fn view_construction_is_idempotent() {
        // No fields, no inputs: every instance is content-equal
        assert_eq!(GreetingView::default(), GreetingView::default());
    }
}
