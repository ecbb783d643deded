//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Index into the option list, `None` while nothing is picked
    Selection(Option<usize>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    /// Shown in place of the value while the field is empty
    pub placeholder: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(label: &str, placeholder: &str) -> Self {
        Self {
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new selection field with nothing picked
    pub fn selection(label: &str, placeholder: &str) -> Self {
        Self {
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Selection(None),
        }
    }

    pub fn is_selection(&self) -> bool {
        matches!(self.value, FieldValue::Selection(_))
    }

    /// Get the text value (returns empty string for selection fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Selection(_) => "",
        }
    }

    /// Get the selected option index (always `None` for text fields)
    pub fn selected(&self) -> Option<usize> {
        match self.value {
            FieldValue::Selection(idx) => idx,
            FieldValue::Text(_) => None,
        }
    }

    /// True when the field holds no text or no selection
    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Selection(idx) => idx.is_none(),
        }
    }

    /// Set the text value
    #[cfg(test)]
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Pick an option by index
    pub fn select(&mut self, index: Option<usize>) {
        self.value = FieldValue::Selection(index);
    }

    /// Step through `option_count` options.
    ///
    /// The unpicked position sits between the last and the first option, so
    /// stepping wraps through "nothing selected" like a dropdown's placeholder.
    pub fn cycle(&mut self, option_count: usize, forward: bool) {
        let FieldValue::Selection(current) = self.value else {
            return;
        };
        if option_count == 0 {
            self.select(None);
            return;
        }
        let next = match (current, forward) {
            (None, true) => Some(0),
            (None, false) => Some(option_count - 1),
            (Some(i), true) if i + 1 < option_count => Some(i + 1),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some((i - 1).min(option_count - 1)),
        };
        self.select(next);
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Get the display value for rendering, given the option labels
    pub fn display_value(&self, options: &[String]) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Selection(idx) => idx
                .and_then(|i| options.get(i))
                .cloned()
                .unwrap_or_default(),
        }
    }
}
