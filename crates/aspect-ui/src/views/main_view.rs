//! Main view for aspect-ui.
//!
//! Root view that composes the title bar, the resolution panel and the error
//! dialog. Owns the window drag and routes keyboard input to the custom form.

use aspect_core::config::WindowConfig;
use aspect_core::{NativeWindowId, WindowChrome, WindowDrag, window_ops};
use gpui::{
    Context, DispatchPhase, FocusHandle, Focusable, IntoElement, KeyDownEvent, Keystroke,
    MouseButton, MouseMoveEvent, MouseUpEvent, Render, Window, canvas, div, prelude::*, px,
};
use tracing::{debug, info, warn};

use crate::native_window::native_window_id;
use crate::state::{AppState, CustomField, DialogState};
use crate::theme;
use crate::views::{error_dialog, resolution_panel, title_bar};

const FOOTER: &str = "devs: lemmy, glock";

/// The character a keystroke types into a field, if any.
///
/// Shortcuts (Ctrl, Alt or the platform key held) type nothing.
fn typed_char(keystroke: &Keystroke) -> Option<char> {
    let modifiers = &keystroke.modifiers;
    if modifiers.control || modifiers.alt || modifiers.platform {
        return None;
    }
    let mut chars = keystroke.key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Window-level pointer listeners for an active drag.
///
/// Element listeners only fire while the pointer is over the element; once a
/// fast drag outruns the window they would stop. These are registered on the
/// window itself, so they keep receiving events until the button is released.
fn render_drag_tracker(cx: &mut Context<MainView>) -> impl IntoElement {
    let view = cx.entity();
    canvas(
        |_, _, _| {},
        move |_, _, window, _| {
            let move_view = view.clone();
            window.on_mouse_event(move |event: &MouseMoveEvent, phase, window, cx| {
                if phase == DispatchPhase::Bubble {
                    move_view.update(cx, |view, cx| view.on_drag_move(event, window, cx));
                }
            });
            window.on_mouse_event(move |event: &MouseUpEvent, phase, _, cx| {
                if phase == DispatchPhase::Bubble && event.button == MouseButton::Left {
                    view.update(cx, |view, cx| view.on_drag_end(cx));
                }
            });
        },
    )
    .absolute()
    .inset_0()
}

pub struct MainView {
    state: AppState,
    focus_handle: FocusHandle,
    chrome: Option<Box<dyn WindowChrome>>,
    window_id: Option<NativeWindowId>,
    drag: WindowDrag,
}

impl MainView {
    pub fn new(
        state: AppState,
        chrome: Option<Box<dyn WindowChrome>>,
        window_config: &WindowConfig,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        let window_id = native_window_id(window);
        match (chrome.as_deref(), window_id) {
            (Some(chrome), Some(id)) => window_ops::apply_chrome(chrome, id, window_config),
            _ => debug!(
                event = "ui.main_view.chrome_skipped",
                has_chrome = chrome.is_some(),
                has_window_id = window_id.is_some()
            ),
        }

        Self {
            state,
            focus_handle,
            chrome,
            window_id,
            drag: WindowDrag::default(),
        }
    }

    pub fn on_title_bar_mouse_down(&mut self, cx: &mut Context<Self>) {
        let (Some(chrome), Some(window)) = (self.chrome.as_deref(), self.window_id) else {
            return;
        };
        match window_ops::begin_drag(chrome, window, &mut self.drag) {
            // Re-render so the drag tracker is installed
            Ok(()) => cx.notify(),
            Err(e) => warn!(event = "ui.drag.begin_failed", error = %e),
        }
    }

    fn on_drag_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.drag.is_active() {
            return;
        }
        // Button released without a mouse-up reaching us.
        if event.pressed_button != Some(MouseButton::Left) {
            self.on_drag_end(cx);
            return;
        }
        let (Some(chrome), Some(window)) = (self.chrome.as_deref(), self.window_id) else {
            return;
        };
        if let Err(e) = window_ops::drag_to_cursor(chrome, window, &self.drag) {
            warn!(event = "ui.drag.move_failed", error = %e);
            self.on_drag_end(cx);
        }
    }

    fn on_drag_end(&mut self, cx: &mut Context<Self>) {
        if self.drag.is_active() {
            self.drag.end();
            debug!(event = "ui.drag.ended");
            cx.notify();
        }
    }

    pub fn on_close_click(&mut self, cx: &mut Context<Self>) {
        info!(event = "ui.window.close_clicked");
        cx.quit();
    }

    pub fn on_native_click(&mut self, cx: &mut Context<Self>) {
        if self.state.restore_native().is_some() {
            info!(event = "ui.native.restored", resolution = %self.state.native());
        }
        cx.notify();
    }

    pub fn on_preset_click(&mut self, index: usize, cx: &mut Context<Self>) {
        if let Some(events) = self.state.apply_preset(index) {
            info!(event = "ui.preset.applied", index = index, events = ?events);
        }
        cx.notify();
    }

    pub fn on_custom_field_click(&mut self, field: CustomField, cx: &mut Context<Self>) {
        self.state.focus_field(field);
        cx.notify();
    }

    pub fn on_apply_custom_click(&mut self, cx: &mut Context<Self>) {
        if let Some(events) = self.state.apply_custom() {
            info!(event = "ui.custom.applied", events = ?events);
        }
        cx.notify();
    }

    pub fn on_dialog_dismiss(&mut self, cx: &mut Context<Self>) {
        self.state.dismiss_dialog();
        cx.notify();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let key_str = event.keystroke.key.to_string();

        if self.state.dialog().is_open() {
            // The dialog only responds to its acknowledge keys
            if key_str == "enter" || key_str == "escape" {
                self.on_dialog_dismiss(cx);
            }
            return;
        }

        match key_str.as_str() {
            "backspace" => {
                self.state.backspace();
                cx.notify();
            }
            "tab" => {
                self.state.cycle_field_focus();
                cx.notify();
            }
            "enter" => {
                self.on_apply_custom_click(cx);
            }
            _ => {
                if let Some(c) = typed_char(&event.keystroke) {
                    if self.state.type_char(c) {
                        cx.notify();
                    }
                }
            }
        }
    }
}

impl Focusable for MainView {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MainView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let dialog = match self.state.dialog() {
            DialogState::None => None,
            DialogState::Error { title, message } => Some((title.clone(), message.clone())),
        };

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(theme::background())
            .rounded_lg()
            .child(title_bar::render_title_bar(cx))
            .child(resolution_panel::render_resolution_panel(&self.state, cx))
            // Footer
            .child(
                div()
                    .flex_none()
                    .py(px(theme::SPACE_2))
                    .flex()
                    .justify_center()
                    .text_size(px(theme::TEXT_XS))
                    .text_color(theme::text_muted())
                    .child(FOOTER),
            )
            .when(self.drag.is_active(), |this| {
                this.child(render_drag_tracker(cx))
            })
            .when_some(dialog, |this, (title, message)| {
                this.child(error_dialog::render_error_dialog(&title, &message, cx))
            })
    }
}
