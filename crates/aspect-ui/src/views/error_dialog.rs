//! Modal error dialog.

use gpui::{Context, FontWeight, IntoElement, MouseButton, div, prelude::*, px};

use crate::theme;
use crate::views::MainView;

/// Render the error dialog over the whole window.
///
/// The overlay swallows mouse presses so nothing underneath reacts until
/// OK is clicked (or Enter/Escape pressed).
pub fn render_error_dialog(
    title: &str,
    message: &str,
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    div()
        .id("error-dialog-overlay")
        .absolute()
        .inset_0()
        .occlude()
        .bg(theme::overlay())
        .flex()
        .justify_center()
        .items_center()
        .on_mouse_down(MouseButton::Left, |_, _, cx| {
            cx.stop_propagation();
        })
        .child(
            div()
                .id("error-dialog-box")
                .w(px(theme::BUTTON_WIDTH + 2.0 * theme::SPACE_4))
                .bg(theme::title_bar())
                .rounded_lg()
                .border_1()
                .border_color(theme::button())
                .flex()
                .flex_col()
                .child(
                    div()
                        .px(px(theme::SPACE_4))
                        .py(px(theme::SPACE_3))
                        .border_b_1()
                        .border_color(theme::button())
                        .text_size(px(theme::TEXT_LG))
                        .font_weight(FontWeight::BOLD)
                        .text_color(theme::text_white())
                        .child(title.to_string()),
                )
                .child(
                    div()
                        .px(px(theme::SPACE_4))
                        .py(px(theme::SPACE_4))
                        .text_size(px(theme::TEXT_MD))
                        .text_color(theme::danger())
                        .child(message.to_string()),
                )
                .child(
                    div()
                        .px(px(theme::SPACE_4))
                        .pb(px(theme::SPACE_3))
                        .flex()
                        .justify_end()
                        .child(
                            div()
                                .id("error-dialog-ok-btn")
                                .px(px(theme::SPACE_4))
                                .py(px(theme::SPACE_1))
                                .bg(theme::accent())
                                .rounded_md()
                                .cursor_pointer()
                                .text_size(px(theme::TEXT_MD))
                                .text_color(theme::text_white())
                                .on_mouse_up(
                                    MouseButton::Left,
                                    cx.listener(|view, _, _, cx| {
                                        view.on_dialog_dismiss(cx);
                                    }),
                                )
                                .child("OK"),
                        ),
                ),
        )
}
