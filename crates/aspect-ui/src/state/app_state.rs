use aspect_core::{Command, CoreStore, Event, Resolution, ResolutionPreset, Store};

use crate::state::dialog::DialogState;
use crate::state::form::{CustomField, CustomFormState};

/// Main application state.
///
/// Owns the command store (and through it the display controller), the
/// custom field text and the currently open dialog.
pub struct AppState {
    store: CoreStore,
    form: CustomFormState,
    dialog: DialogState,
}

impl AppState {
    pub fn new(store: CoreStore) -> Self {
        Self {
            store,
            form: CustomFormState::default(),
            dialog: DialogState::None,
        }
    }

    pub fn native(&self) -> Resolution {
        self.store.native()
    }

    pub fn presets(&self) -> &[ResolutionPreset] {
        self.store.presets()
    }

    pub fn form(&self) -> &CustomFormState {
        &self.form
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// "NATIVE" button.
    pub fn restore_native(&mut self) -> Option<Vec<Event>> {
        self.dispatch(Command::RestoreNative)
    }

    /// One of the aspect-ratio buttons. Unknown indices are ignored.
    pub fn apply_preset(&mut self, index: usize) -> Option<Vec<Event>> {
        let Some(preset) = self.store.presets().get(index) else {
            tracing::warn!(
                event = "ui.preset.index_out_of_bounds",
                index = index,
                preset_count = self.store.presets().len()
            );
            return None;
        };
        let resolution = preset.resolution();
        self.dispatch(Command::ApplyResolution { resolution })
    }

    /// "APPLY CUSTOM" button. Reads the current field text.
    pub fn apply_custom(&mut self) -> Option<Vec<Event>> {
        let cmd = Command::ApplyCustom {
            width: self.form.width.clone(),
            height: self.form.height.clone(),
        };
        self.dispatch(cmd)
    }

    /// Acknowledge the open dialog.
    pub fn dismiss_dialog(&mut self) {
        self.dialog = DialogState::None;
    }

    pub fn focus_field(&mut self, field: CustomField) {
        if !self.dialog.is_open() {
            self.form.focus(field);
        }
    }

    pub fn cycle_field_focus(&mut self) {
        if !self.dialog.is_open() {
            self.form.cycle_focus();
        }
    }

    pub fn type_char(&mut self, c: char) -> bool {
        !self.dialog.is_open() && self.form.push_char(c)
    }

    pub fn backspace(&mut self) {
        if !self.dialog.is_open() {
            self.form.backspace();
        }
    }

    /// Run a command, turning failures into an error dialog.
    ///
    /// Returns the events on success, `None` on failure or while a dialog is
    /// open.
    fn dispatch(&mut self, cmd: Command) -> Option<Vec<Event>> {
        if self.dialog.is_open() {
            tracing::debug!(
                event = "ui.dispatch.blocked_by_dialog",
                command = ?cmd
            );
            return None;
        }

        match self.store.dispatch(cmd) {
            Ok(events) => Some(events),
            Err(e) => {
                tracing::warn!(
                    event = "ui.dispatch.error_displayed",
                    error = %e,
                    code = aspect_core::AspectError::error_code(&e)
                );
                self.dialog = DialogState::error(e.dialog_title(), e.to_string());
                None
            }
        }
    }
}
