use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// Notification queued on a field for outside listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The field value changed programmatically, as if the user had typed it
    Input { value: String },
}

/// A single-line text input with an optional id and a form name
pub struct InputField {
    id: Option<String>,
    name: String,
    label: String,
    pub textarea: TextArea<'static>,
    focused: bool,
    events: Vec<FieldEvent>,
}

fn create_field_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default());
    textarea
}

impl InputField {
    pub fn new(id: Option<&str>, name: &str, label: &str) -> Self {
        Self {
            id: id.map(str::to_string),
            name: name.to_string(),
            label: label.to_string(),
            textarea: create_field_textarea(),
            focused: false,
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Replace the whole value and move the cursor to the end
    pub fn set_value(&mut self, value: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(value);
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        let cursor_style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor_style);
    }

    /// Feed a key to the text editor
    ///
    /// Returns true if the value changed. The field stays on one line, so
    /// keys the editor maps to a newline are dropped.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if inserts_newline(&key) {
            return false;
        }
        let before = self.value().to_string();
        self.textarea.input(key);
        self.value() != before
    }

    pub fn emit(&mut self, event: FieldEvent) {
        self.events.push(event);
    }

    /// Drain queued notifications
    pub fn take_events(&mut self) -> Vec<FieldEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Enter, Ctrl+M and Ctrl+J all split the line in the editor
fn inserts_newline(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
