// File: src/error.rs
// Purpose: Wiring errors raised while attaching the guard to a host form

use thiserror::Error;

/// Failure to wire the guard to a form.
///
/// Validation failures are never errors; they are messages in the report.
/// These errors cover the one genuinely broken condition: a form that is
/// present but missing one of its expected controls or message slots.
/// Hosts fail fast on them instead of installing a partial guard.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuardError {
    #[error("form control '[name={name}]' not found in the contact form")]
    MissingField { name: String },

    #[error("message slot '#{id}' not found in the contact form")]
    MissingSlot { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_name_the_element() {
        let err = GuardError::MissingField {
            name: "firstName".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "form control '[name=firstName]' not found in the contact form"
        );

        let err = GuardError::MissingSlot {
            id: "vEmail".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "message slot '#vEmail' not found in the contact form"
        );
    }
}
