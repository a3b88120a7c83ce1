//! Content region: native label, preset buttons and the custom form.

use aspect_core::display::native_label;
use gpui::{
    Context, ElementId, IntoElement, MouseButton, SharedString, div, prelude::*, px,
};

use crate::state::{AppState, CustomField};
use crate::theme;
use crate::views::MainView;

/// Full-width button that runs `on_click` on left mouse up.
fn action_button<I, L, F>(
    id: I,
    label: L,
    cx: &mut Context<MainView>,
    on_click: F,
) -> impl IntoElement + use<I, L, F>
where
    I: Into<ElementId>,
    L: Into<SharedString>,
    F: Fn(&mut MainView, &mut Context<MainView>) + 'static,
{
    div()
        .id(id)
        .w(px(theme::BUTTON_WIDTH))
        .py(px(theme::SPACE_3))
        .flex()
        .justify_center()
        .bg(theme::button())
        .hover(|style| style.bg(theme::accent()))
        .rounded_md()
        .cursor_pointer()
        .on_mouse_up(
            MouseButton::Left,
            cx.listener(move |view, _, _, cx| {
                on_click(view, cx);
            }),
        )
        .child(
            div()
                .text_size(px(theme::TEXT_MD))
                .text_color(theme::text())
                .child(label.into()),
        )
}

/// One of the two custom resolution text fields.
fn custom_field(
    field: CustomField,
    text: &str,
    is_focused: bool,
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    let (id, placeholder) = match field {
        CustomField::Width => ("custom-width", "width"),
        CustomField::Height => ("custom-height", "height"),
    };

    div()
        .id(id)
        .w(px(theme::FIELD_WIDTH))
        .px(px(theme::SPACE_2))
        .py(px(theme::SPACE_2))
        .bg(theme::button())
        .rounded_md()
        .border_1()
        .border_color(if is_focused {
            theme::accent()
        } else {
            theme::button()
        })
        .cursor_text()
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |view, _, _, cx| {
                view.on_custom_field_click(field, cx);
            }),
        )
        .child(
            div()
                .text_size(px(theme::TEXT_MD))
                .text_color(if text.is_empty() {
                    theme::text_muted()
                } else {
                    theme::text()
                })
                .child(if text.is_empty() && !is_focused {
                    placeholder.to_string()
                } else if is_focused {
                    format!("{text}|")
                } else {
                    text.to_string()
                }),
        )
}

/// Render the content region below the title bar.
pub fn render_resolution_panel(state: &AppState, cx: &mut Context<MainView>) -> impl IntoElement {
    let form = state.form();
    let presets: Vec<(usize, String)> = state
        .presets()
        .iter()
        .enumerate()
        .map(|(index, preset)| (index, preset.label()))
        .collect();

    div()
        .flex_1()
        .flex()
        .flex_col()
        .items_center()
        .gap(px(theme::SPACE_2))
        .pt(px(theme::SPACE_4))
        .child(
            div()
                .text_size(px(theme::TEXT_SM))
                .text_color(theme::text_muted())
                .child(native_label(state.native())),
        )
        .child(action_button("native-btn", "NATIVE", cx, |view, cx| {
            view.on_native_click(cx);
        }))
        .children(presets.into_iter().map(|(index, label)| {
            action_button(("preset-btn", index), label, cx, move |view, cx| {
                view.on_preset_click(index, cx);
            })
        }))
        .child(
            div()
                .pt(px(theme::SPACE_3))
                .text_size(px(theme::TEXT_SM))
                .text_color(theme::text_muted())
                .child("CUSTOM RESOLUTION"),
        )
        .child(
            div()
                .flex()
                .gap(px(theme::SPACE_4))
                .child(custom_field(
                    CustomField::Width,
                    &form.width,
                    form.focused_field == CustomField::Width,
                    cx,
                ))
                .child(custom_field(
                    CustomField::Height,
                    &form.height,
                    form.focused_field == CustomField::Height,
                    cx,
                )),
        )
        .child(div().pt(px(theme::SPACE_2)).child(action_button(
            "apply-custom-btn",
            "APPLY CUSTOM",
            cx,
            |view, cx| {
                view.on_apply_custom_click(cx);
            },
        )))
}
