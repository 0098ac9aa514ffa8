//! Form sessions
//!
//! Every form asks for a restaurant first and then walks a fixed list of
//! detail fields. [`FormSession`] drives that sequence; a [`FormKind`] only
//! supplies the fields and turns the final values into a record.
//!
//! ```text
//! CollectingRestaurant ──Enter (non-blank)──▶ CollectingDetails ──Enter on last field──▶ submitted
//!                                             ▲ Up/Down/Tab/Shift+Tab (clamped)
//! ```
//!
//! Invalid input never produces an error: the transition is just refused.

mod field;
mod lunch_order;
mod office_tally;

pub use field::{FieldSpec, TextField};
pub use lunch_order::LunchOrderForm;
pub use office_tally::OfficeTallyForm;

use crate::keymap::Command;

/// Per-kind fields, validation and extraction
pub trait FormKind {
    type Output: Clone + std::fmt::Debug;

    /// Heading shown above the form
    const TITLE: &'static str;

    const RESTAURANT: FieldSpec;

    /// Detail fields, in focus order. Must not be empty.
    const FIELDS: &'static [FieldSpec];

    /// Build the record from the captured restaurant and the raw detail
    /// values, or `None` to refuse the submission.
    fn finalize(restaurant: &str, values: &[&str]) -> Option<Self::Output>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    CollectingRestaurant,
    CollectingDetails,
}

/// Input currently holding the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Restaurant,
    Field(usize),
}

pub struct FormSession<K: FormKind> {
    phase: Phase,
    restaurant_input: TextField,
    restaurant: String,
    fields: Vec<TextField>,
    focus_index: usize,
    has_focus: bool,
    submission: Option<K::Output>,
}

impl<K: FormKind> FormSession<K> {
    pub fn new() -> Self {
        debug_assert!(!K::FIELDS.is_empty(), "{} has no detail fields", K::TITLE);
        Self {
            phase: Phase::CollectingRestaurant,
            restaurant_input: TextField::new(K::RESTAURANT),
            restaurant: String::new(),
            fields: K::FIELDS.iter().copied().map(TextField::new).collect(),
            focus_index: 0,
            has_focus: false,
            submission: None,
        }
    }

    /// Feed one command into the session.
    ///
    /// Quit and Cancel belong to the navigation layer and are ignored here,
    /// as is everything once the session has been submitted.
    pub fn handle(&mut self, command: Command) {
        if self.submission.is_some() {
            return;
        }

        match self.phase {
            Phase::CollectingRestaurant => match command {
                Command::Confirm => self.capture_restaurant(),
                Command::Edit(key) => self.restaurant_input.handle_key(key),
                _ => {}
            },
            Phase::CollectingDetails => match command {
                Command::FocusNext => self.focus_next(),
                Command::FocusPrev => self.focus_prev(),
                Command::Confirm if self.focus_index + 1 < self.fields.len() => self.focus_next(),
                Command::Confirm => self.try_submit(),
                Command::Edit(key) => self.fields[self.focus_index].handle_key(key),
                Command::Quit | Command::Cancel => {}
            },
        }
    }

    fn capture_restaurant(&mut self) {
        let restaurant = self.restaurant_input.value().trim();
        if restaurant.is_empty() {
            return;
        }
        self.restaurant = restaurant.to_string();
        self.phase = Phase::CollectingDetails;
        self.focus_index = 0;
    }

    fn focus_next(&mut self) {
        if self.focus_index + 1 < self.fields.len() {
            self.focus_index += 1;
        }
    }

    fn focus_prev(&mut self) {
        self.focus_index = self.focus_index.saturating_sub(1);
    }

    fn try_submit(&mut self) {
        let values: Vec<&str> = self.fields.iter().map(TextField::value).collect();
        if let Some(output) = K::finalize(&self.restaurant, &values) {
            self.submission = Some(output);
        }
    }

    /// Give the session the cursor
    pub fn focus(&mut self) {
        self.has_focus = true;
    }

    pub fn blur(&mut self) {
        self.has_focus = false;
    }

    /// Throw away everything typed so far. The fresh session is blurred.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn focused(&self) -> Option<Focus> {
        if !self.has_focus {
            return None;
        }
        Some(match self.phase {
            Phase::CollectingRestaurant => Focus::Restaurant,
            Phase::CollectingDetails => Focus::Field(self.focus_index),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Restaurant captured when the details phase began; empty before that
    pub fn restaurant(&self) -> &str {
        &self.restaurant
    }

    pub fn restaurant_input(&self) -> &TextField {
        &self.restaurant_input
    }

    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    pub fn is_submitted(&self) -> bool {
        self.submission.is_some()
    }

    /// The finalized record, once submitted
    pub fn submission(&self) -> Option<&K::Output> {
        self.submission.as_ref()
    }
}

impl<K: FormKind> Default for FormSession<K> {
    fn default() -> Self {
        Self::new()
    }
}
