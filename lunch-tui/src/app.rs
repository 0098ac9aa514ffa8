//! Navigation between the home menu and the two forms
//!
//! `App` owns every session and the store handle. A submitted session is
//! handed to the store, reset, and navigation continues: back to the menu
//! after a lunch order, straight into the next entry after a tally.

use crossterm::event::KeyEvent;
use lunch_store::{RecordStore, StoreError};

use crate::form::{FormSession, LunchOrderForm, OfficeTallyForm};
use crate::keymap::Command;
use crate::menu::HomeMenu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    LunchOrder,
    OfficeTally,
}

pub struct App<S: RecordStore> {
    store: S,
    view: View,
    menu: HomeMenu,
    lunch_order: FormSession<LunchOrderForm>,
    office_tally: FormSession<OfficeTallyForm>,
    /// Last failed insert, kept until the next successful one
    last_error: Option<StoreError>,
    /// Confirmation of the last successful insert
    notice: Option<String>,
    should_quit: bool,
}

impl<S: RecordStore> App<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            view: View::Home,
            menu: HomeMenu::new(),
            lunch_order: FormSession::new(),
            office_tally: FormSession::new(),
            last_error: None,
            notice: None,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle(Command::from(key));
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Quit => {
                self.should_quit = true;
                return;
            }
            Command::Cancel => {
                if self.view != View::Home {
                    self.go_home();
                }
                return;
            }
            _ => {}
        }

        match self.view {
            View::Home => {
                if let Some(target) = self.menu.handle(command) {
                    self.open(target);
                }
            }
            View::LunchOrder => {
                self.lunch_order.handle(command);
                self.flush_lunch_order();
            }
            View::OfficeTally => {
                self.office_tally.handle(command);
                self.flush_office_tally();
            }
        }
    }

    fn open(&mut self, target: View) {
        self.menu.clear();
        self.view = target;
        match target {
            View::LunchOrder => self.lunch_order.focus(),
            View::OfficeTally => self.office_tally.focus(),
            View::Home => {}
        }
        tracing::debug!(view = ?target, "Opened view");
    }

    fn go_home(&mut self) {
        match self.view {
            View::LunchOrder => self.lunch_order.reset(),
            View::OfficeTally => self.office_tally.reset(),
            View::Home => {}
        }
        self.view = View::Home;
        self.menu.clear();
    }

    fn flush_lunch_order(&mut self) {
        let Some(order) = self.lunch_order.submission().cloned() else {
            return;
        };

        match self.store.insert_lunch_order(&order) {
            Ok(id) => {
                tracing::info!(id, restaurant = %order.restaurant, "Lunch order saved");
                self.record_success(format!("Saved lunch order #{id}"));
            }
            Err(e) => {
                tracing::error!(restaurant = %order.restaurant, "Failed to save lunch order: {}", e);
                self.last_error = Some(e);
            }
        }

        self.lunch_order.reset();
        self.view = View::Home;
        self.menu.clear();
    }

    fn flush_office_tally(&mut self) {
        let Some(tally) = self.office_tally.submission().cloned() else {
            return;
        };

        match self.store.insert_office_tally(&tally) {
            Ok(id) => {
                tracing::info!(id, restaurant = %tally.restaurant, tally = tally.tally, "Office tally saved");
                self.record_success(format!("Saved tally #{id}"));
            }
            Err(e) => {
                tracing::error!(restaurant = %tally.restaurant, "Failed to save office tally: {}", e);
                self.last_error = Some(e);
            }
        }

        // Tallies come in batches: stay here, ready for the next restaurant
        self.office_tally.reset();
        self.office_tally.focus();
    }

    fn record_success(&mut self, notice: String) {
        self.last_error = None;
        self.notice = Some(notice);
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn menu(&self) -> &HomeMenu {
        &self.menu
    }

    pub fn lunch_order(&self) -> &FormSession<LunchOrderForm> {
        &self.lunch_order
    }

    pub fn office_tally(&self) -> &FormSession<OfficeTallyForm> {
        &self.office_tally
    }

    pub fn last_error(&self) -> Option<&StoreError> {
        self.last_error.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
