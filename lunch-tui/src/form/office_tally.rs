use shared::models::OfficeTallyCreate;

use super::{FieldSpec, FormKind};

/// "Post the office tally": restaurant, then how many people ordered
pub struct OfficeTallyForm;

impl FormKind for OfficeTallyForm {
    type Output = OfficeTallyCreate;

    const TITLE: &'static str = "Post the office tally";

    const RESTAURANT: FieldSpec = FieldSpec::new("Restaurant", "e.g., Torched Hop", 256);

    const FIELDS: &'static [FieldSpec] = &[FieldSpec::new("Tally count", "e.g., 5", 10)];

    /// The count must be a base-10 integer once trimmed.
    fn finalize(restaurant: &str, values: &[&str]) -> Option<OfficeTallyCreate> {
        let raw = values.first()?.trim();
        if raw.is_empty() {
            return None;
        }
        let tally = raw.parse::<i64>().ok()?;
        Some(OfficeTallyCreate {
            restaurant: restaurant.to_string(),
            tally,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::tests::{edit, type_text};
    use crate::form::{Focus, FormSession, Phase};
    use crate::keymap::Command;
    use crossterm::event::KeyCode;

    fn submit_count(count: &str) -> FormSession<OfficeTallyForm> {
        let mut session = FormSession::new();
        session.focus();
        type_text(&mut session, "Deli");
        session.handle(Command::Confirm);
        type_text(&mut session, count);
        session.handle(Command::Confirm);
        session
    }

    #[test]
    fn test_valid_count_submits() {
        let session = submit_count("12");
        assert_eq!(
            session.submission(),
            Some(&OfficeTallyCreate {
                restaurant: "Deli".to_string(),
                tally: 12,
            })
        );

        assert_eq!(submit_count("5").submission().map(|t| t.tally), Some(5));
        assert_eq!(submit_count(" -3 ").submission().map(|t| t.tally), Some(-3));
        assert_eq!(submit_count("+7").submission().map(|t| t.tally), Some(7));
    }

    #[test]
    fn test_invalid_count_is_ignored() {
        for count in ["", "  ", "abc", "1.5", "12x", "--1"] {
            let session = submit_count(count);
            assert!(!session.is_submitted(), "{count:?} was accepted");
            assert_eq!(session.phase(), Phase::CollectingDetails);
            assert_eq!(session.focused(), Some(Focus::Field(0)));
        }
    }

    #[test]
    fn test_count_can_be_fixed_after_refusal() {
        let mut session = submit_count("abc");
        for _ in 0..3 {
            session.handle(edit(KeyCode::Backspace));
        }
        type_text(&mut session, "4");
        session.handle(Command::Confirm);
        assert_eq!(session.submission().map(|t| t.tally), Some(4));
    }

    #[test]
    fn test_single_field_navigation_is_a_no_op() {
        let mut session = submit_count("");
        session.handle(Command::FocusNext);
        session.handle(Command::FocusPrev);
        assert_eq!(session.focus_index(), 0);
    }
}
