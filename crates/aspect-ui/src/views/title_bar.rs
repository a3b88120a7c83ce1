//! Custom title bar: drag handle, title and close button.

use gpui::{Context, FontWeight, IntoElement, MouseButton, div, prelude::*, px};

use crate::theme;
use crate::views::MainView;

pub const TITLE: &str = "ASPECT CHANGER";

/// Render the title bar.
///
/// Pressing anywhere on the bar (except the close button) starts a window
/// drag; the drag itself is tracked by the root view.
pub fn render_title_bar(cx: &mut Context<MainView>) -> impl IntoElement {
    div()
        .id("title-bar")
        .w_full()
        .h(px(theme::TITLE_BAR_HEIGHT))
        .flex_none()
        .flex()
        .items_center()
        .justify_between()
        .px(px(theme::SPACE_3))
        .bg(theme::title_bar())
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(|view, _, _, cx| {
                view.on_title_bar_mouse_down(cx);
            }),
        )
        .child(
            div()
                .text_size(px(theme::TEXT_LG))
                .font_weight(FontWeight::BOLD)
                .text_color(theme::text())
                .child(TITLE),
        )
        // Close button
        .child(
            div()
                .id("close-btn")
                .px(px(theme::SPACE_2))
                .py(px(theme::SPACE_1))
                .rounded_md()
                .cursor_pointer()
                .text_size(px(theme::TEXT_LG))
                .text_color(theme::text_muted())
                .hover(|style| style.text_color(theme::danger()))
                .on_mouse_down(MouseButton::Left, |_, _, cx| {
                    cx.stop_propagation();
                })
                .on_mouse_up(
                    MouseButton::Left,
                    cx.listener(|view, _, _, cx| {
                        view.on_close_click(cx);
                    }),
                )
                .child("✕"),
        )
}
