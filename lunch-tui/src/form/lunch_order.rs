use shared::models::{LUNCH_ORDER_QUESTIONS, LunchOrderCreate};

use super::{FieldSpec, FormKind};

const ANSWER_MAX_LEN: usize = 256;

/// "Post your own lunch order": restaurant, then one optional answer per
/// question in [`LUNCH_ORDER_QUESTIONS`]
pub struct LunchOrderForm;

impl FormKind for LunchOrderForm {
    type Output = LunchOrderCreate;

    const TITLE: &'static str = "What restaurant made your lunch?";

    const RESTAURANT: FieldSpec = FieldSpec::new("Restaurant", "Torched Hop", 156);

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new(LUNCH_ORDER_QUESTIONS[0], "", ANSWER_MAX_LEN),
        FieldSpec::new(LUNCH_ORDER_QUESTIONS[1], "", ANSWER_MAX_LEN),
        FieldSpec::new(LUNCH_ORDER_QUESTIONS[2], "", ANSWER_MAX_LEN),
        FieldSpec::new(LUNCH_ORDER_QUESTIONS[3], "", ANSWER_MAX_LEN),
        FieldSpec::new(LUNCH_ORDER_QUESTIONS[4], "", ANSWER_MAX_LEN),
    ];

    /// Always accepted; blank answers are simply left out.
    fn finalize(restaurant: &str, values: &[&str]) -> Option<LunchOrderCreate> {
        Some(LunchOrderCreate::from_answers(restaurant, values))
    }
}
