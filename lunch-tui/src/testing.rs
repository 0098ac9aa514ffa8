//! Test doubles shared by the unit tests

use std::cell::{Cell, RefCell};

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lunch_store::{RecordStore, StoreError, StoreResult};
use shared::models::{LunchOrder, LunchOrderCreate, OfficeTally, OfficeTallyCreate};

use crate::app::App;

/// In-memory store that can be switched into failing mode
#[derive(Default)]
pub struct MemoryStore {
    pub lunch_orders: RefCell<Vec<LunchOrder>>,
    pub office_tallies: RefCell<Vec<OfficeTally>>,
    pub fail: Cell<bool>,
}

impl MemoryStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.fail.set(true);
        store
    }

    fn check(&self) -> StoreResult<()> {
        if self.fail.get() {
            return Err(StoreError::InvalidRecord("store unavailable"));
        }
        Ok(())
    }
}

impl RecordStore for MemoryStore {
    fn insert_lunch_order(&self, order: &LunchOrderCreate) -> StoreResult<i64> {
        self.check()?;
        let mut orders = self.lunch_orders.borrow_mut();
        let id = orders.len() as i64 + 1;
        orders.push(LunchOrder {
            id,
            restaurant: order.restaurant.clone(),
            metadata: order.metadata.clone(),
            created_at: Utc::now(),
            is_deleted: false,
        });
        Ok(id)
    }

    fn insert_office_tally(&self, tally: &OfficeTallyCreate) -> StoreResult<i64> {
        self.check()?;
        let mut tallies = self.office_tallies.borrow_mut();
        let id = tallies.len() as i64 + 1;
        tallies.push(OfficeTally {
            id,
            restaurant: tally.restaurant.clone(),
            tally: tally.tally,
            created_at: Utc::now(),
            is_deleted: false,
        });
        Ok(id)
    }
}

/// Type `text` one key at a time
pub fn type_keys<S: RecordStore>(app: &mut App<S>, text: &str) {
    for c in text.chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}
