/// Which custom resolution field has keyboard focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CustomField {
    #[default]
    Width,
    Height,
}

impl CustomField {
    pub fn next(self) -> Self {
        match self {
            CustomField::Width => CustomField::Height,
            CustomField::Height => CustomField::Width,
        }
    }
}

/// Text of the two custom resolution fields.
///
/// The text is kept verbatim; it is parsed only when "APPLY CUSTOM" is
/// pressed.
#[derive(Clone, Debug, Default)]
pub struct CustomFormState {
    pub width: String,
    pub height: String,
    pub focused_field: CustomField,
}

impl CustomFormState {
    fn focused_text(&mut self) -> &mut String {
        match self.focused_field {
            CustomField::Width => &mut self.width,
            CustomField::Height => &mut self.height,
        }
    }

    /// Append a typed character to the focused field.
    ///
    /// Control characters and whitespace are dropped. Returns whether the
    /// field changed.
    pub fn push_char(&mut self, c: char) -> bool {
        if c.is_control() || c.is_whitespace() {
            return false;
        }
        self.focused_text().push(c);
        true
    }

    pub fn backspace(&mut self) {
        self.focused_text().pop();
    }

    pub fn focus(&mut self, field: CustomField) {
        self.focused_field = field;
    }

    pub fn cycle_focus(&mut self) {
        self.focused_field = self.focused_field.next();
    }
}
