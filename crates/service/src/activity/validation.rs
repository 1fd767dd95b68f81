use configs::ValidationMode;
use models::{Category, NewActivity};

use super::domain::ActivityInput;
use crate::errors::ServiceError;

/// Turns a raw payload into a [`NewActivity`] according to the configured mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    mode: ValidationMode,
}

impl Validator {
    pub fn new(mode: ValidationMode) -> Self { Self { mode } }
    pub fn strict() -> Self { Self::new(ValidationMode::Strict) }
    pub fn permissive() -> Self { Self::new(ValidationMode::Permissive) }

    pub fn validate(&self, input: ActivityInput) -> Result<NewActivity, ServiceError> {
        match self.mode {
            ValidationMode::Strict => strict(input),
            ValidationMode::Permissive => permissive(input),
        }
    }
}

impl Default for Validator {
    fn default() -> Self { Self::strict() }
}

fn strict(input: ActivityInput) -> Result<NewActivity, ServiceError> {
    let mut problems = Vec::new();
    if input.title.is_empty() {
        problems.push("title is required".to_string());
    }
    if let Err(e) = input.category.parse::<Category>() {
        problems.push(ServiceError::from(e).to_string());
    }
    if input.description.is_empty() {
        problems.push("description is required".to_string());
    }
    if input.activity_date.is_none() {
        problems.push("activity_date is required".to_string());
    }

    match (problems.is_empty(), input.activity_date) {
        (true, Some(activity_date)) => Ok(NewActivity {
            title: input.title,
            category: input.category,
            description: input.description,
            activity_date,
        }),
        _ => Err(ServiceError::Validation(problems.join("; "))),
    }
}

// The date column is non-null, so even this mode needs a date.
fn permissive(input: ActivityInput) -> Result<NewActivity, ServiceError> {
    let activity_date = input
        .activity_date
        .ok_or_else(|| ServiceError::Validation("activity_date is required".into()))?;
    Ok(NewActivity {
        title: input.title,
        category: input.category,
        description: input.description,
        activity_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn input(title: &str, category: &str, description: &str) -> ActivityInput {
        ActivityInput {
            title: title.into(),
            category: category.into(),
            description: description.into(),
            activity_date: Some(DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z").unwrap()),
        }
    }

    #[test]
    fn strict_accepts_complete_payload() {
        let new = Validator::strict().validate(input("Write report", "TASK", "Q2 numbers")).unwrap();
        assert_eq!(new.title, "Write report");
        assert_eq!(new.category, "TASK");
    }

    #[test]
    fn strict_rejects_unknown_category() {
        let err = Validator::strict().validate(input("Party", "PARTY", "cake")).unwrap_err();
        match err {
            ServiceError::Validation(msg) => assert!(msg.contains("category")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn strict_rejects_empty_title() {
        let err = Validator::strict().validate(input("", "EVENT", "x")).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m.contains("title is required")));
    }

    #[test]
    fn strict_keeps_whitespace_only_text() {
        let new = Validator::strict().validate(input("   ", "EVENT", " ")).unwrap();
        assert_eq!(new.title, "   ");
        assert_eq!(new.description, " ");
    }

    #[test]
    fn strict_reports_every_problem() {
        let err = Validator::strict().validate(ActivityInput::default()).unwrap_err();
        let msg = err.to_string();
        for field in ["title", "category", "description", "activity_date"] {
            assert!(msg.contains(field), "{msg} should mention {field}");
        }
    }

    #[test]
    fn permissive_accepts_empty_strings() {
        let new = Validator::permissive().validate(input("", "anything", "")).unwrap();
        assert_eq!(new.title, "");
        assert_eq!(new.category, "anything");
    }

    #[test]
    fn permissive_still_needs_a_date() {
        let mut i = input("a", "b", "c");
        i.activity_date = None;
        assert!(Validator::permissive().validate(i).is_err());
    }
}
