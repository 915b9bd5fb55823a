//! Field checks for the contact form

use crate::email::is_valid_email;
use crate::field::{ContactFields, FieldName};
use crate::report::ValidationReport;

pub const MSG_FIRST_NAME_REQUIRED: &str = "Please enter your first name.";
pub const MSG_LAST_NAME_REQUIRED: &str = "Please enter your last name.";
pub const MSG_EMAIL_REQUIRED: &str = "Please enter your email.";
pub const MSG_EMAIL_INVALID: &str = "Email address is not valid.";
pub const MSG_COMMENTS_REQUIRED: &str = "Please enter your message.";

/// Validate every field of the contact form.
///
/// Fields are checked in a fixed order and the run never short-circuits,
/// so the user sees every outstanding problem at once. An empty email gets
/// the "required" message only; the shape check applies to non-empty
/// values.
pub fn evaluate(fields: &ContactFields) -> ValidationReport {
    let mut report = ValidationReport::success();

    // first name
    if fields.first_name.is_empty() {
        report.record(FieldName::FirstName, MSG_FIRST_NAME_REQUIRED);
    }

    // last name
    if fields.last_name.is_empty() {
        report.record(FieldName::LastName, MSG_LAST_NAME_REQUIRED);
    }

    // email: required first, shape second
    if fields.email.is_empty() {
        report.record(FieldName::Email, MSG_EMAIL_REQUIRED);
    } else if !is_valid_email(&fields.email) {
        report.record(FieldName::Email, MSG_EMAIL_INVALID);
    }

    // comments
    if fields.comments.is_empty() {
        report.record(FieldName::Comments, MSG_COMMENTS_REQUIRED);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@doe.com".to_string(),
            comments: "hello".to_string(),
        }
    }

    #[test]
    fn test_all_fields_valid() {
        let report = evaluate(&filled());
        assert!(report.is_valid);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_missing_first_name_only() {
        let fields = ContactFields {
            first_name: String::new(),
            last_name: "Doe".to_string(),
            email: "a@b.com".to_string(),
            comments: "hi".to_string(),
        };

        let report = evaluate(&fields);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.message(FieldName::FirstName),
            Some(MSG_FIRST_NAME_REQUIRED)
        );
    }

    #[test]
    fn test_missing_last_name_only() {
        let mut fields = filled();
        fields.last_name.clear();

        let report = evaluate(&fields);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.message(FieldName::LastName),
            Some(MSG_LAST_NAME_REQUIRED)
        );
    }

    #[test]
    fn test_missing_comments_only() {
        let mut fields = filled();
        fields.comments.clear();

        let report = evaluate(&fields);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.message(FieldName::Comments),
            Some(MSG_COMMENTS_REQUIRED)
        );
    }

    #[test]
    fn test_malformed_email_gets_shape_message() {
        let mut fields = filled();
        fields.email = "not-an-email".to_string();

        let report = evaluate(&fields);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.message(FieldName::Email), Some(MSG_EMAIL_INVALID));
    }

    #[test]
    fn test_empty_email_gets_required_message_not_shape_message() {
        let mut fields = filled();
        fields.email.clear();

        let report = evaluate(&fields);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.message(FieldName::Email), Some(MSG_EMAIL_REQUIRED));
    }

    #[test]
    fn test_all_empty_reports_every_field() {
        let report = evaluate(&ContactFields::default());

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 4);
        assert_eq!(
            report.message(FieldName::FirstName),
            Some(MSG_FIRST_NAME_REQUIRED)
        );
        assert_eq!(
            report.message(FieldName::LastName),
            Some(MSG_LAST_NAME_REQUIRED)
        );
        assert_eq!(report.message(FieldName::Email), Some(MSG_EMAIL_REQUIRED));
        assert_eq!(
            report.message(FieldName::Comments),
            Some(MSG_COMMENTS_REQUIRED)
        );
    }

    #[test]
    fn test_whitespace_counts_as_filled_in() {
        let mut fields = filled();
        fields.first_name = " ".to_string();

        let report = evaluate(&fields);
        assert!(report.is_valid);
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let mut fields = filled();
        fields.email = "bad".to_string();

        let first = evaluate(&fields);
        let second = evaluate(&fields);
        assert_eq!(first, second);
    }
}
