use shared::models::{LunchOrderCreate, OfficeTallyCreate};

use crate::StoreResult;

/// Append-only sink for finalized submissions.
///
/// Implementations stamp the creation time and the soft-delete flag
/// themselves and return the id of the new row.
pub trait RecordStore {
    fn insert_lunch_order(&self, order: &LunchOrderCreate) -> StoreResult<i64>;

    fn insert_office_tally(&self, tally: &OfficeTallyCreate) -> StoreResult<i64>;
}
