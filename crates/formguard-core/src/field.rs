//! Field names and field value snapshots for the contact form

use std::fmt;

/// The four fields of the contact form, in validation order.
///
/// The string form of each variant matches the `name` attribute of the
/// corresponding form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Comments,
}

impl FieldName {
    /// All fields in the fixed order they are validated
    pub const ALL: [FieldName; 4] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Comments,
    ];

    /// The field's `name` attribute in the form markup
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Comments => "comments",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the current field values, taken once per validation run.
///
/// Values are stored exactly as entered. Emptiness checks compare against
/// the empty string without trimming, so a whitespace-only value counts as
/// filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub comments: String,
}

impl ContactFields {
    /// Get the value for a field by name
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Comments => &self.comments,
        }
    }
}
