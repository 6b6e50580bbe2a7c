//! Declarative validation rules for the post form.
//!
//! Rules are evaluated independently per field; the one cross-field
//! behaviour (slug auto-fill on title blur) lives in the form controller,
//! not here. Category and status membership in the offered option lists is
//! likewise a controller concern; the schema only checks presence.

use std::collections::BTreeMap;

use crate::domain::posts::PostDraft;
use crate::domain::types::Field;

/// Violation messages keyed by field, in stable field order.
pub type FieldViolations = BTreeMap<Field, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid(FieldViolations),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }
}

const REQUIRED_TEXT: &[(Field, fn(&PostDraft) -> &str)] = &[
    (Field::Title, |draft| draft.title.as_str()),
    (Field::Slug, |draft| draft.slug.as_str()),
    (Field::Content, |draft| draft.content.as_str()),
    (Field::ImageUrl, |draft| draft.image_url.as_str()),
];

/// Evaluate the whole draft against the schema.
pub fn validate(draft: &PostDraft) -> Validity {
    let mut violations = FieldViolations::new();

    for (field, value_of) in REQUIRED_TEXT {
        if value_of(draft).trim().is_empty() {
            violations.insert(*field, required_message(*field));
        }
    }

    if draft.category_id.is_none() {
        violations.insert(Field::CategoryId, required_message(Field::CategoryId));
    }
    if draft.status.is_none() {
        violations.insert(Field::Status, required_message(Field::Status));
    }
    // Tags are constrained structurally by their type; the empty set is fine.

    if violations.is_empty() {
        Validity::Valid
    } else {
        Validity::Invalid(violations)
    }
}

fn required_message(field: Field) -> String {
    format!("{} is required", field.label())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::types::PostStatus;

    fn complete_draft() -> PostDraft {
        PostDraft {
            id: None,
            title: "Hello".into(),
            slug: "hello".into(),
            content: "Body".into(),
            image_url: "https://cdn.example.com/hello.png".into(),
            category_id: Some(Uuid::new_v4()),
            tags: Vec::new(),
            status: Some(PostStatus::Draft),
        }
    }

    #[test]
    fn complete_draft_is_valid() {
        assert!(validate(&complete_draft()).is_valid());
    }

    #[test]
    fn each_missing_required_text_field_is_flagged() {
        for (field, clear) in [
            (Field::Title, (|d| d.title.clear()) as fn(&mut PostDraft)),
            (Field::Slug, |d| d.slug.clear()),
            (Field::Content, |d| d.content.clear()),
            (Field::ImageUrl, |d| d.image_url.clear()),
        ] {
            let mut draft = complete_draft();
            clear(&mut draft);

            match validate(&draft) {
                Validity::Invalid(violations) => {
                    assert_eq!(violations.len(), 1, "field: {field:?}");
                    assert_eq!(
                        violations.get(&field),
                        Some(&format!("{} is required", field.label()))
                    );
                }
                Validity::Valid => panic!("draft missing {field:?} passed validation"),
            }
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut draft = complete_draft();
        draft.title = "   ".into();
        assert!(!validate(&draft).is_valid());
    }

    #[test]
    fn category_and_status_must_be_selected() {
        let mut draft = complete_draft();
        draft.category_id = None;
        draft.status = None;

        match validate(&draft) {
            Validity::Invalid(violations) => {
                assert!(violations.contains_key(&Field::CategoryId));
                assert!(violations.contains_key(&Field::Status));
            }
            Validity::Valid => panic!("draft without selections passed validation"),
        }
    }

    #[test]
    fn empty_tag_set_is_permitted() {
        let mut draft = complete_draft();
        draft.tags.clear();
        assert!(validate(&draft).is_valid());
    }
}
