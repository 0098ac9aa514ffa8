use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

/// Static description of one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Maximum length in chars; further insertions are dropped
    pub max_len: usize,
}

impl FieldSpec {
    pub const fn new(label: &'static str, placeholder: &'static str, max_len: usize) -> Self {
        Self {
            label,
            placeholder,
            max_len,
        }
    }
}

/// Single-line text buffer with a length limit
#[derive(Debug, Clone)]
pub struct TextField {
    spec: FieldSpec,
    input: Input,
}

impl TextField {
    pub fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            input: Input::default(),
        }
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Apply an editing key (insert, delete, cursor movement)
    pub fn handle_key(&mut self, key: KeyEvent) {
        let inserts_char = matches!(key.code, KeyCode::Char(_))
            && !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if inserts_char && self.input.value().chars().count() >= self.spec.max_len {
            return;
        }
        self.input.handle_event(&Event::Key(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(field: &mut TextField, code: KeyCode) {
        field.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::new(FieldSpec::new("notes", "", 32));
        for c in "tacos".chars() {
            press(&mut field, KeyCode::Char(c));
        }
        assert_eq!(field.value(), "tacos");

        press(&mut field, KeyCode::Backspace);
        assert_eq!(field.value(), "taco");
    }

    #[test]
    fn test_cursor_movement_edits_in_place() {
        let mut field = TextField::new(FieldSpec::new("notes", "", 32));
        for c in "ac".chars() {
            press(&mut field, KeyCode::Char(c));
        }
        press(&mut field, KeyCode::Left);
        press(&mut field, KeyCode::Char('b'));
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_max_len_drops_extra_chars() {
        let mut field = TextField::new(FieldSpec::new("tally", "", 3));
        for c in "12345".chars() {
            press(&mut field, KeyCode::Char(c));
        }
        assert_eq!(field.value(), "123");

        // Deleting still works at the limit
        press(&mut field, KeyCode::Backspace);
        press(&mut field, KeyCode::Char('9'));
        assert_eq!(field.value(), "129");
    }
}
