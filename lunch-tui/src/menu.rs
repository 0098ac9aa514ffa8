use crate::app::View;
use crate::keymap::Command;

/// Home menu entries and the view each one opens
pub const MENU_ENTRIES: [(&str, View); 2] = [
    ("Post your own lunch order", View::LunchOrder),
    ("Post the office tally", View::OfficeTally),
];

/// Home screen selection list
#[derive(Debug, Default, Clone)]
pub struct HomeMenu {
    selected: usize,
}

impl HomeMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the highlight or pick an entry. Returns the view to open when
    /// an entry is chosen.
    pub fn handle(&mut self, command: Command) -> Option<View> {
        match command {
            Command::FocusNext => {
                if self.selected + 1 < MENU_ENTRIES.len() {
                    self.selected += 1;
                }
                None
            }
            Command::FocusPrev => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            Command::Confirm => Some(MENU_ENTRIES[self.selected].1),
            _ => None,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = 0;
    }
}
