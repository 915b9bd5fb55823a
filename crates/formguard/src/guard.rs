// File: src/guard.rs
// Purpose: Submit-time decision flow over host-provided fields and slots

use formguard_core::{evaluate, ContactFields, FieldName};

/// Host-provided view of the current field values
pub trait FieldSource {
    /// Current value of the named field
    fn value(&self, field: FieldName) -> String;
}

/// Host-provided error-display slots
pub trait MessageSink {
    /// Clear every element carrying the validation-message marker
    fn clear_all(&mut self);

    /// Render one message into the slot for a field
    fn render(&mut self, field: FieldName, message: &str);
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Validation passed; the host lets the native submit action proceed
    Proceed,
    /// Validation failed; the host cancels the native submit action
    Block,
}

impl SubmitDecision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitDecision::Block)
    }
}

/// Run one validation pass and render the outcome.
///
/// Snapshots the field values, clears all slots, evaluates every field in
/// order, and renders one message per failing field. Strictly synchronous:
/// the whole pass runs inside the host's submit callback.
pub fn run_submit_check<S, M>(source: &S, sink: &mut M) -> SubmitDecision
where
    S: FieldSource + ?Sized,
    M: MessageSink + ?Sized,
{
    let fields = ContactFields {
        first_name: source.value(FieldName::FirstName),
        last_name: source.value(FieldName::LastName),
        email: source.value(FieldName::Email),
        comments: source.value(FieldName::Comments),
    };

    // clearing first keeps repeat runs from accumulating stale messages
    sink.clear_all();

    let report = evaluate(&fields);
    for field in FieldName::ALL {
        if let Some(message) = report.message(field) {
            sink.render(field, message);
        }
    }

    if report.is_valid {
        tracing::debug!("contact form valid, allowing native submit");
        SubmitDecision::Proceed
    } else {
        tracing::debug!(
            errors = report.errors.len(),
            "contact form invalid, blocking submit"
        );
        SubmitDecision::Block
    }
}
