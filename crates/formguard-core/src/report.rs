//! Validation report produced by a single validation run

use crate::field::FieldName;
use std::collections::HashMap;

/// Result of validating the contact form once.
///
/// A field with no entry in `errors` is valid. The report is rebuilt from
/// scratch on every run, so stale messages never accumulate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: HashMap<FieldName, String>,
}

impl ValidationReport {
    /// Create a report with no errors
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: HashMap::new(),
        }
    }

    /// Record an error for a field, marking the report invalid
    pub fn record(&mut self, field: FieldName, message: &str) {
        self.is_valid = false;
        self.errors.insert(field, message.to_string());
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the error message for a field, if it failed
    pub fn message(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(|s| s.as_str())
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::success()
    }
}
